// ============================================================================
// DATA URL - Foto del usuario codificada (data:image/...;base64,...)
// ============================================================================

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::TryOnError;

/// Data URL de imagen ya validada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataUrl(String);

impl DataUrl {
    pub fn parse(raw: &str) -> Result<Self, TryOnError> {
        let rest = raw
            .strip_prefix("data:")
            .ok_or_else(|| TryOnError::InvalidDataUrl("missing data: prefix".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| TryOnError::InvalidDataUrl("missing payload separator".to_string()))?;

        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| TryOnError::InvalidDataUrl("payload is not base64".to_string()))?;
        if !mime.starts_with("image/") {
            return Err(TryOnError::InvalidDataUrl(format!("not an image: {}", mime)));
        }
        if payload.is_empty() {
            return Err(TryOnError::InvalidDataUrl("empty payload".to_string()));
        }
        if !is_base64(payload) {
            return Err(TryOnError::InvalidDataUrl("malformed base64 payload".to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn mime_type(&self) -> &str {
        let header = self.0["data:".len()..].split(',').next().unwrap_or_default();
        header.trim_end_matches(";base64")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Alfabeto estándar con relleno, longitud múltiplo de 4
fn is_base64(payload: &str) -> bool {
    if payload.len() % 4 != 0 {
        return false;
    }
    let body = payload.trim_end_matches('=');
    payload.len() - body.len() <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

impl TryFrom<String> for DataUrl {
    type Error = TryOnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DataUrl::parse(&value)
    }
}

impl From<DataUrl> for String {
    fn from(value: DataUrl) -> Self {
        value.0
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn parses_png_data_url() {
        let url = DataUrl::parse(PNG_DATA_URL).unwrap();
        assert_eq!(url.mime_type(), "image/png");
        assert_eq!(url.as_str(), PNG_DATA_URL);
    }

    #[test]
    fn rejects_remote_urls() {
        let err = DataUrl::parse("https://cdn.example.com/shirt.png").unwrap_err();
        assert!(matches!(err, TryOnError::InvalidDataUrl(_)));
    }

    #[test]
    fn rejects_non_image_payloads() {
        assert!(DataUrl::parse("data:text/plain;base64,aGVsbG8=").is_err());
        assert!(DataUrl::parse("data:image/png,rawbytes").is_err());
        assert!(DataUrl::parse("data:image/png;base64,").is_err());
        assert!(DataUrl::parse("data:image/png;base64,abc").is_err());
        assert!(DataUrl::parse("data:image/png;base64,ab$d").is_err());
    }

    #[test]
    fn deserializing_validates() {
        let ok: Result<DataUrl, _> = serde_json::from_str(&format!("\"{}\"", PNG_DATA_URL));
        assert!(ok.is_ok());
        let bad: Result<DataUrl, _> = serde_json::from_str("\"not a data url\"");
        assert!(bad.is_err());
    }
}
