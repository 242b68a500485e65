// ============================================================================
// USE TRY-ON HOOK - Envío de la prueba virtual desde el overlay
// ============================================================================
// El estado vive en un RefCell: `begin` se comprueba de forma síncrona en el
// único punto de envío, así que dos envíos solapados son imposibles.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use crate::hooks::session_context::use_session_context;
use crate::models::{Completion, TryOnState};
use crate::services::{run_try_on, ObjectUrl, TryOnClient};

pub type OverlayState = TryOnState<ObjectUrl>;

#[derive(Clone)]
pub struct UseTryOnHandle {
    pub state: Rc<RefCell<OverlayState>>,
    pub submit: Callback<()>,
    pub select_product_image: Callback<String>,
}

#[hook]
pub fn use_try_on(initial_product_image: Option<String>) -> UseTryOnHandle {
    let session = use_session_context();
    let update = use_force_update();

    let state = {
        let fallback = session.state.current_product_image.clone();
        use_mut_ref(move || OverlayState::new(initial_product_image.or(fallback)))
    };

    // La página puede registrar el producto después de abrir el overlay
    state
        .borrow_mut()
        .adopt_product_image(session.state.current_product_image.clone());

    // Al desmontar: soltar el resultado e ignorar respuestas pendientes
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            move || {
                log::debug!("🧹 Overlay cerrado");
                state.borrow_mut().invalidate();
            }
        });
    }

    let submit = {
        let state = state.clone();
        let update = update.clone();
        let user_photo = session.state.current_user_photo.clone();

        Callback::from(move |_| {
            let begun = state.borrow_mut().begin(user_photo.as_deref());
            let ticket = match begun {
                Ok(ticket) => ticket,
                Err(e) => {
                    log::warn!("⚠️ Envío ignorado: {}", e);
                    return;
                }
            };
            update.force_update();

            let state = state.clone();
            let update = update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = TryOnClient::new();
                let completion = run_try_on(&state, ticket, &client, |image| {
                    ObjectUrl::from_bytes(&image.bytes, &image.mime_type)
                })
                .await;

                // Incluso una respuesta descartada puede liberar el botón
                match completion {
                    Completion::Stale => {}
                    Completion::Succeeded => log::info!("✅ Resultado listo"),
                    Completion::Failed(message) => {
                        alert(&format!("Could not apply design: {}", message));
                    }
                }
                update.force_update();
            });
        })
    };

    let select_product_image = {
        let state = state.clone();
        Callback::from(move |url: String| {
            log::info!("🔁 Producto alternativo: {}", url);
            state.borrow_mut().select_product_image(url);
            update.force_update();
        })
    };

    UseTryOnHandle {
        state,
        submit,
        select_product_image,
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
