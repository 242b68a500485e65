// ============================================================================
// ERRORES DEL FLUJO DE PRUEBA VIRTUAL
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TryOnError {
    #[error("Could not read file: {0}")]
    FileRead(String),

    #[error("Unsupported image file: {0}")]
    UnsupportedImage(String),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not fetch {url}: HTTP {status}")]
    SourceImage { url: String, status: u16 },

    #[error("Server {status}: {body}")]
    Server { status: u16, body: String },

    #[error("No user photo selected")]
    MissingUserPhoto,

    #[error("No product image selected")]
    MissingProductImage,

    #[error("A try-on request is already in progress")]
    RequestInFlight,

    #[error("Browser error: {0}")]
    Browser(String),
}

impl TryOnError {
    /// Convierte un JsValue de web_sys en error legible
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        TryOnError::Browser(text)
    }
}

impl From<gloo_net::Error> for TryOnError {
    fn from(e: gloo_net::Error) -> Self {
        TryOnError::Network(e.to_string())
    }
}

impl From<gloo_storage::errors::StorageError> for TryOnError {
    fn from(e: gloo_storage::errors::StorageError) -> Self {
        TryOnError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_carries_body_text() {
        let err = TryOnError::Server { status: 500, body: "model crashed".to_string() };
        assert_eq!(err.to_string(), "Server 500: model crashed");
    }
}
