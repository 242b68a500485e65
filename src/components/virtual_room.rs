// ============================================================================
// VIRTUAL ROOM - Overlay de prueba virtual
// ============================================================================
// Lee foto y producto de la sesión, permite cambiarlos y envía la prueba.
// ============================================================================

use yew::prelude::*;
use crate::components::ImageFileInput;
use crate::config::CONFIG;
use crate::hooks::{use_image_intake, use_session_context, use_try_on};

#[derive(Properties, PartialEq)]
pub struct VirtualRoomProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub initial_product_image: Option<String>,
}

#[function_component(VirtualRoom)]
pub fn virtual_room(props: &VirtualRoomProps) -> Html {
    let session = use_session_context();
    let intake = use_image_intake();
    let try_on = use_try_on(props.initial_product_image.clone());

    let user_photo = session.state.current_user_photo.clone();
    let state = try_on.state.borrow();
    let busy = state.is_busy();
    let can_submit = state.can_submit(user_photo.as_deref());
    let product_image = state.product_image().map(str::to_string);
    let result_url = state.result().map(|url| url.as_str().to_string());
    let error = state.error().map(str::to_string);
    drop(state);

    let close = props.on_close.reform(|_: MouseEvent| ());
    let submit = try_on.submit.reform(|_: MouseEvent| ());

    let suggestions = session
        .state
        .suggestions(CONFIG.suggestion_limit)
        .iter()
        .enumerate()
        .map(|(i, url)| {
            let onclick = {
                let select = try_on.select_product_image.clone();
                let url = url.clone();
                Callback::from(move |_: MouseEvent| select.emit(url.clone()))
            };
            html! {
                <div key={i} class="suggestion" {onclick}>
                    <img src={url.clone()} alt={format!("Suggestion {}", i + 1)} />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="modal active virtual-room">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Virtual Try-On"}</h2>
                    <button class="btn-close" onclick={close}>{"✕"}</button>
                </div>

                <div class="modal-body try-on-grid">
                    <div class="try-on-inputs">
                        <div class="image-panel">
                            <p class="panel-label">{"Product Image"}</p>
                            <div class="panel-frame">
                                {match product_image {
                                    Some(url) => html! { <img src={url} alt="Product" /> },
                                    None => html! { <p class="empty-value">{"No image selected"}</p> },
                                }}
                            </div>
                        </div>

                        <div class="image-panel">
                            <p class="panel-label">{"Your Image"}</p>
                            <div class="panel-frame">
                                {match intake.photo.clone() {
                                    Some(url) => html! { <img src={url} alt="You" /> },
                                    None => html! { <p class="empty-value">{"Upload your image"}</p> },
                                }}
                                <ImageFileInput on_file={intake.on_file.clone()} class="btn-upload" disabled={busy}>
                                    {"⬆"}
                                </ImageFileInput>
                            </div>
                            {if let Some(ref message) = intake.error {
                                html! { <p class="intake-error">{message.clone()}</p> }
                            } else {
                                html! {}
                            }}
                        </div>

                        <button
                            class={classes!("btn-primary", (!can_submit).then_some("disabled"))}
                            disabled={!can_submit}
                            onclick={submit}
                        >
                            {if busy {
                                html! { <span class="busy"><span class="spinner"></span>{"Processing..."}</span> }
                            } else {
                                html! { {"Try It On"} }
                            }}
                        </button>
                    </div>

                    <div class="try-on-output">
                        <div class="result-panel">
                            {match result_url {
                                Some(ref url) => html! { <img class="result-image" src={url.clone()} alt="Result" /> },
                                None => html! {
                                    <p class="empty-value">
                                        {if busy { "Processing..." } else { "Result will appear here" }}
                                    </p>
                                },
                            }}
                        </div>

                        {if let Some(message) = error {
                            html! { <p class="try-on-error">{message}</p> }
                        } else {
                            html! {}
                        }}

                        {if result_url.is_some() {
                            html! {
                                <div class="suggestions">
                                    <p class="panel-label">{"You may also like"}</p>
                                    <div class="suggestion-grid">{suggestions}</div>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
