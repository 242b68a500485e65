/// Claves de sessionStorage (una pestaña = una sesión)
pub const USER_PHOTO_KEY: &str = "userTryOnImage";
pub const PRODUCT_IMAGE_KEY: &str = "productTryOnImage";
pub const ALL_PRODUCT_IMAGES_KEY: &str = "allProductImages";

/// Partes del formulario multipart que espera /api/apply-design/
pub const PERSON_IMAGE_PART: &str = "person_image";
pub const DESIGN_IMAGE_PART: &str = "design_image";
pub const PERSON_IMAGE_FILENAME: &str = "person.png";
pub const DESIGN_IMAGE_FILENAME: &str = "design.png";

/// Filtro del selector de archivos
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
pub const IMAGE_INPUT_ACCEPT: &str = ".jpg,.jpeg,.png";

/// Tipo MIME cuando el servidor no devuelve Content-Type
pub const FALLBACK_IMAGE_MIME: &str = "image/png";

/// ¿El nombre de archivo tiene una extensión aceptada?
pub fn is_accepted_image(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_raster_extensions() {
        assert!(is_accepted_image("selfie.jpg"));
        assert!(is_accepted_image("selfie.JPEG"));
        assert!(is_accepted_image("my.photo.png"));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_accepted_image("selfie.gif"));
        assert!(!is_accepted_image("notes.txt"));
        assert!(!is_accepted_image("png"));
    }
}
