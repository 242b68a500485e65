// ============================================================================
// TRY OUT - Selección de selfie y apertura del probador virtual
// ============================================================================

use yew::prelude::*;
use crate::components::{ImageFileInput, VirtualRoom};
use crate::hooks::{use_image_intake, use_session_context};

#[function_component(TryOut)]
pub fn try_out() -> Html {
    let session = use_session_context();
    let intake = use_image_intake();
    let show_room = use_state(|| false);

    let has_photo = session.state.has_user_photo() || intake.photo.is_some();

    let open_room = {
        let show_room = show_room.clone();
        let ready = session.state.has_user_photo();
        Callback::from(move |_: MouseEvent| {
            if ready {
                show_room.set(true);
            } else {
                log::info!("📷 Falta la foto del usuario");
            }
        })
    };
    let close_room = {
        let show_room = show_room.clone();
        Callback::from(move |_| show_room.set(false))
    };

    html! {
        <>
            if *show_room {
                <VirtualRoom
                    on_close={close_room}
                    initial_product_image={session.state.current_product_image.clone()}
                />
            }
            <div class="try-out">
                <button
                    class={classes!("btn-try-out", session.state.has_user_photo().then_some("ready"))}
                    onclick={open_room}
                >
                    {"Try it Out"}
                </button>
                <ImageFileInput
                    on_file={intake.on_file.clone()}
                    class={classes!("btn-photo", has_photo.then_some("has-photo"))}
                >
                    {if has_photo { "✓" } else { "📷" }}
                </ImageFileInput>
            </div>
            {if let Some(ref photo) = intake.photo {
                html! { <img class="selfie-preview" src={photo.clone()} alt="Your photo" /> }
            } else {
                html! {}
            }}
            {if intake.reading {
                html! { <p class="intake-status">{"Reading photo..."}</p> }
            } else {
                html! {}
            }}
            {if let Some(ref error) = intake.error {
                html! { <p class="intake-error">{error.clone()}</p> }
            } else {
                html! {}
            }}
        </>
    }
}
