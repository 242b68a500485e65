// ============================================================================
// USE IMAGE INTAKE HOOK - Selección de foto del usuario
// ============================================================================
// 1. Vista previa inmediata con una URL blob:
// 2. Lectura asíncrona a data URL
// 3. El resultado va al store de sesión: foto nueva o mensaje de error
// ============================================================================

use std::rc::Rc;
use web_sys::File;
use yew::prelude::*;
use crate::hooks::session_context::use_session_context;
use crate::services::{read_as_data_url, ObjectUrl};

#[derive(Clone, PartialEq)]
pub struct UseImageIntakeHandle {
    /// Foto a mostrar: la vista previa mientras se lee, después la de la sesión
    pub photo: Option<String>,
    pub reading: bool,
    pub error: Option<String>,
    pub on_file: Callback<File>,
}

#[hook]
pub fn use_image_intake() -> UseImageIntakeHandle {
    let session = use_session_context();
    let preview = use_state(|| None::<Rc<ObjectUrl>>);
    let reading = use_state(|| false);

    let on_file = {
        let preview = preview.clone();
        let reading = reading.clone();
        let accept_photo_read = session.accept_photo_read.clone();

        Callback::from(move |file: File| {
            log::info!("📷 Archivo seleccionado: {} ({} bytes)", file.name(), file.size());

            match ObjectUrl::from_blob(&file) {
                Ok(url) => preview.set(Some(Rc::new(url))),
                Err(e) => log::warn!("⚠️ Sin vista previa: {}", e),
            }
            reading.set(true);

            let reading = reading.clone();
            let accept_photo_read = accept_photo_read.clone();
            wasm_bindgen_futures::spawn_local(async move {
                accept_photo_read.emit(read_as_data_url(&file).await);
                reading.set(false);
            });
        })
    };

    let preview_url = (*preview).as_ref().map(|url| url.as_str().to_string());
    let stored = session.state.current_user_photo.clone();
    let photo = if *reading {
        preview_url.or(stored)
    } else {
        stored.or(preview_url)
    };

    UseImageIntakeHandle {
        photo,
        reading: *reading,
        error: session.state.photo_error.clone(),
        on_file,
    }
}
