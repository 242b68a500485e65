// ============================================================================
// TRY-ON SESSION STORE - Fuente única de verdad de la sesión de prueba
// ============================================================================
// Reemplaza las cadenas sueltas en sessionStorage por un estado tipado.
// Cada cambio se refleja en el backend de sesión para sobrevivir a la
// navegación dentro de la pestaña. Foto e imagen actual se guardan como
// texto plano; la lista de imágenes como array JSON.
// ============================================================================

use crate::error::TryOnError;
use crate::models::{image_urls, DataUrl, ProductImage};
use crate::utils::constants::{ALL_PRODUCT_IMAGES_KEY, PRODUCT_IMAGE_KEY, USER_PHOTO_KEY};
use crate::utils::storage::SessionBackend;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TryOnSessionStore {
    /// Foto del usuario (data URL)
    pub current_user_photo: Option<String>,
    /// Imagen principal del producto que se está viendo
    pub current_product_image: Option<String>,
    /// Todas las imágenes del producto, en orden
    pub known_product_images: Vec<String>,
    /// Último fallo al leer una foto (no se persiste)
    pub photo_error: Option<String>,
}

impl TryOnSessionStore {
    /// Restaura el estado guardado en la sesión
    pub fn load(backend: &impl SessionBackend) -> Self {
        let current_user_photo = backend
            .load_text(USER_PHOTO_KEY)
            .and_then(|raw| DataUrl::parse(&raw).ok())
            .map(DataUrl::into_string);
        let current_product_image = backend
            .load_text(PRODUCT_IMAGE_KEY)
            .filter(|url| !url.is_empty());
        let known_product_images = backend
            .load::<Vec<String>>(ALL_PRODUCT_IMAGES_KEY)
            .unwrap_or_default();

        Self {
            current_user_photo,
            current_product_image,
            known_product_images,
            photo_error: None,
        }
    }

    pub fn has_user_photo(&self) -> bool {
        self.current_user_photo.is_some()
    }

    pub fn set_user_photo(
        &mut self,
        backend: &impl SessionBackend,
        photo: DataUrl,
    ) -> Result<(), TryOnError> {
        // Primero en memoria: si sessionStorage está lleno la foto sigue usable
        self.current_user_photo = Some(photo.as_str().to_string());
        self.photo_error = None;
        backend.save_text(USER_PHOTO_KEY, photo.as_str())
    }

    /// Resultado de leer una foto elegida por el usuario.
    /// Si la lectura falló, la foto anterior (y su clave) se mantiene.
    pub fn accept_photo_read(
        &mut self,
        backend: &impl SessionBackend,
        read: Result<DataUrl, TryOnError>,
    ) -> Result<(), TryOnError> {
        match read {
            Ok(photo) => self.set_user_photo(backend, photo),
            Err(e) => {
                log::error!("❌ Error leyendo la foto: {}", e);
                self.photo_error = Some(e.to_string());
                Ok(())
            }
        }
    }

    pub fn set_current_product_image(
        &mut self,
        backend: &impl SessionBackend,
        url: String,
    ) -> Result<(), TryOnError> {
        if url.is_empty() {
            return Ok(());
        }
        self.current_product_image = Some(url.clone());
        backend.save_text(PRODUCT_IMAGE_KEY, &url)
    }

    /// Registra la galería de un producto: la primera imagen pasa a ser la actual
    pub fn register_product_images(
        &mut self,
        backend: &impl SessionBackend,
        items: &[ProductImage],
    ) -> Result<(), TryOnError> {
        let urls = image_urls(items);
        let Some(first) = items.first().and_then(|item| item.url()) else {
            return Ok(());
        };

        self.current_product_image = Some(first.to_string());
        self.known_product_images = urls;
        backend.save_text(PRODUCT_IMAGE_KEY, first)?;
        backend.save(ALL_PRODUCT_IMAGES_KEY, &self.known_product_images)
    }

    /// Sugerencias para "You may also like"
    pub fn suggestions(&self, limit: usize) -> &[String] {
        let end = limit.min(self.known_product_images.len());
        &self.known_product_images[..end]
    }
}
