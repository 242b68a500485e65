// ============================================================================
// IMAGE INTAKE - Lectura de archivos del usuario y URLs de objeto
// ============================================================================
// SOLO interacción con APIs del navegador (FileReader, Blob, URL)
// ============================================================================

use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FileReader, Url};
use crate::error::TryOnError;
use crate::models::DataUrl;
use crate::utils::constants::is_accepted_image;

/// Solo .jpg / .jpeg / .png
pub fn check_image_name(name: &str) -> Result<(), TryOnError> {
    if is_accepted_image(name) {
        Ok(())
    } else {
        Err(TryOnError::UnsupportedImage(name.to_string()))
    }
}

/// Lee un archivo de imagen como data URL validada
pub async fn read_as_data_url(file: &File) -> Result<DataUrl, TryOnError> {
    let name = file.name();
    check_image_name(&name)?;

    let reader = FileReader::new().map_err(TryOnError::from_js)?;
    let loaded = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(TryOnError::from_js)?;

    let settled = JsFuture::from(loaded).await;
    reader.set_onload(None);
    reader.set_onerror(None);
    settled.map_err(|_| TryOnError::FileRead(name.clone()))?;

    let text = reader
        .result()
        .map_err(TryOnError::from_js)?
        .as_string()
        .ok_or_else(|| TryOnError::FileRead(name.clone()))?;

    log::debug!("📷 {} leído ({} caracteres)", name, text.len());
    DataUrl::parse(&text)
}

/// URL blob: que se revoca al soltarse
#[derive(Debug, PartialEq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn from_blob(blob: &Blob) -> Result<Self, TryOnError> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(TryOnError::from_js)
    }

    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, TryOnError> {
        Self::from_blob(&blob_from_bytes(bytes, mime_type)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if Url::revoke_object_url(&self.0).is_err() {
            log::warn!("⚠️ No se pudo revocar {}", self.0);
        }
    }
}

pub fn blob_from_bytes(bytes: &[u8], mime_type: &str) -> Result<Blob, TryOnError> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(TryOnError::from_js)
}
