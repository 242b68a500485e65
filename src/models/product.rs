use serde::{Deserialize, Serialize};

/// Imagen de un producto tal como llega del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            image: Some(ImageRef { url: url.into() }),
        }
    }

    /// URL de la imagen, si existe y no está vacía
    pub fn url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// URLs de todas las imágenes (en orden, sin huecos)
pub fn image_urls(items: &[ProductImage]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.url())
        .map(str::to_string)
        .collect()
}
