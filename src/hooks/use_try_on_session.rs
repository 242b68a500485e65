// ============================================================================
// USE TRY-ON SESSION HOOK - Reducer sobre TryOnSessionStore
// ============================================================================
// Cada acción actualiza el store tipado y lo refleja en sessionStorage
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::error::TryOnError;
use crate::models::{DataUrl, ProductImage};
use crate::stores::TryOnSessionStore;
use crate::utils::storage::BrowserSession;

pub enum TryOnSessionAction {
    /// Resultado de leer la foto elegida (válida o no)
    PhotoRead(Result<DataUrl, TryOnError>),
    SetProductImage(String),
    RegisterProductImages(Vec<ProductImage>),
}

impl Reducible for TryOnSessionStore {
    type Action = TryOnSessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let backend = BrowserSession;
        let mut next = (*self).clone();

        let persisted = match action {
            TryOnSessionAction::PhotoRead(read) => {
                if let Ok(ref photo) = read {
                    log::info!("📷 Foto de usuario actualizada ({})", photo.mime_type());
                }
                next.accept_photo_read(&backend, read)
            }
            TryOnSessionAction::SetProductImage(url) => next.set_current_product_image(&backend, url),
            TryOnSessionAction::RegisterProductImages(items) => {
                log::info!("🛍️ {} imágenes de producto registradas", items.len());
                next.register_product_images(&backend, &items)
            }
        };
        if let Err(e) = persisted {
            // El estado en memoria sigue siendo válido para esta vista
            log::error!("❌ No se pudo guardar en sessionStorage: {}", e);
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseTryOnSessionHandle {
    pub state: UseReducerHandle<TryOnSessionStore>,
    pub accept_photo_read: Callback<Result<DataUrl, TryOnError>>,
    pub select_product_image: Callback<String>,
    pub register_product_images: Callback<Vec<ProductImage>>,
}

#[hook]
pub fn use_try_on_session() -> UseTryOnSessionHandle {
    let state = use_reducer(|| TryOnSessionStore::load(&BrowserSession));

    let accept_photo_read = {
        let state = state.clone();
        Callback::from(move |read: Result<DataUrl, TryOnError>| {
            state.dispatch(TryOnSessionAction::PhotoRead(read))
        })
    };

    let select_product_image = {
        let state = state.clone();
        Callback::from(move |url: String| state.dispatch(TryOnSessionAction::SetProductImage(url)))
    };

    let register_product_images = {
        let state = state.clone();
        Callback::from(move |items: Vec<ProductImage>| {
            state.dispatch(TryOnSessionAction::RegisterProductImages(items))
        })
    };

    UseTryOnSessionHandle {
        state,
        accept_photo_read,
        select_product_image,
        register_product_images,
    }
}
