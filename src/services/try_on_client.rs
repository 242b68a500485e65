// ============================================================================
// TRY-ON CLIENT - SOLO COMUNICACIÓN HTTP con el servicio de composición
// ============================================================================
// POST multipart a /api/apply-design/ con person_image + design_image.
// El transporte es un trait para poder probar el flujo sin navegador.
// ============================================================================

use std::cell::RefCell;
use gloo_net::http::Request;
use web_sys::FormData;
use crate::config::CONFIG;
use crate::error::TryOnError;
use crate::models::{Completion, TryOnState, TryOnTicket};
use crate::services::image_intake::blob_from_bytes;
use crate::utils::constants::{
    DESIGN_IMAGE_FILENAME, DESIGN_IMAGE_PART, FALLBACK_IMAGE_MIME, PERSON_IMAGE_FILENAME,
    PERSON_IMAGE_PART,
};

/// Bytes de una imagen con su tipo MIME
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Una parte de archivo del formulario multipart
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: &'static str,
    pub file_name: &'static str,
    pub payload: ImagePayload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignForm {
    pub person_image: FilePart,
    pub design_image: FilePart,
}

impl DesignForm {
    /// Ambas partes se nombran .png sea cual sea el formato original
    pub fn new(person: ImagePayload, design: ImagePayload) -> Self {
        Self {
            person_image: FilePart {
                field: PERSON_IMAGE_PART,
                file_name: PERSON_IMAGE_FILENAME,
                payload: person,
            },
            design_image: FilePart {
                field: DESIGN_IMAGE_PART,
                file_name: DESIGN_IMAGE_FILENAME,
                payload: design,
            },
        }
    }

    pub fn parts(&self) -> [&FilePart; 2] {
        [&self.person_image, &self.design_image]
    }
}

#[allow(async_fn_in_trait)]
pub trait DesignTransport {
    /// Descarga una imagen (data URL o URL remota)
    async fn fetch_image(&self, url: &str) -> Result<ImagePayload, TryOnError>;
    /// Envía el formulario y devuelve la imagen compuesta
    async fn post_design(&self, form: DesignForm) -> Result<ImagePayload, TryOnError>;
}

/// url → archivo para las dos imágenes, y un único POST
pub async fn submit_try_on(
    transport: &impl DesignTransport,
    ticket: &TryOnTicket,
) -> Result<ImagePayload, TryOnError> {
    let person = transport.fetch_image(&ticket.person_image).await?;
    let design = transport.fetch_image(&ticket.design_image).await?;

    log::info!(
        "🧵 Enviando prueba #{} ({} + {} bytes)",
        ticket.generation(),
        person.bytes.len(),
        design.bytes.len()
    );
    transport.post_design(DesignForm::new(person, design)).await
}

/// Ejecuta el envío de un ticket ya emitido y aplica el resultado al estado.
/// No se mantiene ningún préstamo del estado durante el await.
pub async fn run_try_on<R, F>(
    state: &RefCell<TryOnState<R>>,
    ticket: TryOnTicket,
    transport: &impl DesignTransport,
    into_result: F,
) -> Completion
where
    F: FnOnce(ImagePayload) -> Result<R, TryOnError>,
{
    let outcome = submit_try_on(transport, &ticket).await.and_then(into_result);
    if let Err(ref e) = outcome {
        log::error!("❌ Try-on #{} falló: {}", ticket.generation(), e);
    }

    let completion = state.borrow_mut().complete(&ticket, outcome);
    if completion == Completion::Stale {
        log::warn!("⚠️ Respuesta #{} descartada (overlay cambió)", ticket.generation());
    }
    completion
}

/// Cliente real sobre gloo-net (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct TryOnClient {
    endpoint: String,
}

impl TryOnClient {
    pub fn new() -> Self {
        Self::with_endpoint(CONFIG.apply_design_url())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for TryOnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignTransport for TryOnClient {
    async fn fetch_image(&self, url: &str) -> Result<ImagePayload, TryOnError> {
        let response = Request::get(url).send().await?;
        if !response.ok() {
            return Err(TryOnError::SourceImage {
                url: url.to_string(),
                status: response.status(),
            });
        }
        let mime_type = response
            .headers()
            .get("content-type")
            .unwrap_or_else(|| FALLBACK_IMAGE_MIME.to_string());
        let bytes = response.binary().await?;
        Ok(ImagePayload { bytes, mime_type })
    }

    async fn post_design(&self, form: DesignForm) -> Result<ImagePayload, TryOnError> {
        let body = form_data(&form)?;
        let response = Request::post(&self.endpoint).body(body)?.send().await?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TryOnError::Server { status, body });
        }

        let mime_type = response
            .headers()
            .get("content-type")
            .unwrap_or_else(|| FALLBACK_IMAGE_MIME.to_string());
        let bytes = response.binary().await?;
        log::info!("✅ Imagen compuesta recibida: {} bytes ({})", bytes.len(), mime_type);
        Ok(ImagePayload { bytes, mime_type })
    }
}

fn form_data(form: &DesignForm) -> Result<FormData, TryOnError> {
    let data = FormData::new().map_err(TryOnError::from_js)?;
    for part in form.parts() {
        let blob = blob_from_bytes(&part.payload.bytes, &part.payload.mime_type)?;
        data.append_with_blob_and_filename(part.field, &blob, part.file_name)
            .map_err(TryOnError::from_js)?;
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const PHOTO: &str = "data:image/jpeg;base64,/9j/4AAQ";
    const SHIRT: &str = "https://cdn.example.com/shirt.png";
    const DRESS: &str = "https://cdn.example.com/dress.png";

    /// Transporte en memoria que registra cada llamada
    struct FakeTransport {
        images: HashMap<String, ImagePayload>,
        response: Result<ImagePayload, TryOnError>,
        fetched: RefCell<Vec<String>>,
        posted: RefCell<Vec<DesignForm>>,
    }

    impl FakeTransport {
        fn new(response: Result<ImagePayload, TryOnError>) -> Self {
            let mut images = HashMap::new();
            images.insert(PHOTO.to_string(), payload(&[1, 2, 3], "image/jpeg"));
            images.insert(SHIRT.to_string(), payload(&[4, 5], "image/png"));
            images.insert(DRESS.to_string(), payload(&[6], "image/webp"));
            Self {
                images,
                response,
                fetched: RefCell::new(Vec::new()),
                posted: RefCell::new(Vec::new()),
            }
        }
    }

    impl DesignTransport for FakeTransport {
        async fn fetch_image(&self, url: &str) -> Result<ImagePayload, TryOnError> {
            self.fetched.borrow_mut().push(url.to_string());
            self.images
                .get(url)
                .cloned()
                .ok_or_else(|| TryOnError::SourceImage { url: url.to_string(), status: 404 })
        }

        async fn post_design(&self, form: DesignForm) -> Result<ImagePayload, TryOnError> {
            self.posted.borrow_mut().push(form);
            self.response.clone()
        }
    }

    fn payload(bytes: &[u8], mime: &str) -> ImagePayload {
        ImagePayload {
            bytes: bytes.to_vec(),
            mime_type: mime.to_string(),
        }
    }

    fn as_text(image: ImagePayload) -> Result<String, TryOnError> {
        Ok(format!("result:{}", image.bytes.len()))
    }

    #[test]
    fn both_images_produce_exactly_one_post() {
        let transport = FakeTransport::new(Ok(payload(&[9, 9, 9, 9], "image/png")));
        let state = RefCell::new(TryOnState::<String>::new(Some(SHIRT.to_string())));

        let ticket = state.borrow_mut().begin(Some(PHOTO)).unwrap();
        let completion = pollster::block_on(run_try_on(&state, ticket, &transport, as_text));

        assert_eq!(completion, Completion::Succeeded);
        assert_eq!(*transport.fetched.borrow(), vec![PHOTO.to_string(), SHIRT.to_string()]);

        let posted = transport.posted.borrow();
        assert_eq!(posted.len(), 1);
        let form = &posted[0];
        assert_eq!(form.person_image.field, "person_image");
        assert_eq!(form.person_image.file_name, "person.png");
        assert_eq!(form.person_image.payload.bytes, vec![1, 2, 3]);
        assert_eq!(form.design_image.field, "design_image");
        assert_eq!(form.design_image.file_name, "design.png");
        assert_eq!(form.design_image.payload.bytes, vec![4, 5]);

        assert_eq!(state.borrow().result().map(String::as_str), Some("result:4"));
        assert!(!state.borrow().is_busy());
    }

    #[test]
    fn missing_image_sends_nothing() {
        let transport = FakeTransport::new(Ok(payload(&[1], "image/png")));
        let state = RefCell::new(TryOnState::<String>::new(None));

        assert!(state.borrow_mut().begin(Some(PHOTO)).is_err());
        assert!(state.borrow_mut().begin(None).is_err());
        assert!(transport.fetched.borrow().is_empty());
        assert!(transport.posted.borrow().is_empty());
    }

    #[test]
    fn server_error_text_reaches_state() {
        let transport = FakeTransport::new(Err(TryOnError::Server {
            status: 500,
            body: "CUDA out of memory".to_string(),
        }));
        let state = RefCell::new(TryOnState::<String>::new(Some(SHIRT.to_string())));

        let ticket = state.borrow_mut().begin(Some(PHOTO)).unwrap();
        let completion = pollster::block_on(run_try_on(&state, ticket, &transport, as_text));

        assert_eq!(completion, Completion::Failed("Server 500: CUDA out of memory".to_string()));
        assert_eq!(state.borrow().error(), Some("Server 500: CUDA out of memory"));
        assert!(!state.borrow().is_busy());
        assert!(state.borrow().result().is_none());
    }

    #[test]
    fn unreachable_source_image_skips_post() {
        let transport = FakeTransport::new(Ok(payload(&[1], "image/png")));
        let state = RefCell::new(TryOnState::<String>::new(Some(
            "https://cdn.example.com/gone.png".to_string(),
        )));

        let ticket = state.borrow_mut().begin(Some(PHOTO)).unwrap();
        let completion = pollster::block_on(run_try_on(&state, ticket, &transport, as_text));

        assert!(matches!(completion, Completion::Failed(_)));
        assert!(transport.posted.borrow().is_empty());
    }

    #[test]
    fn alternate_product_is_used_by_next_submission() {
        let transport = FakeTransport::new(Ok(payload(&[7, 7], "image/png")));
        let state = RefCell::new(TryOnState::<String>::new(Some(SHIRT.to_string())));

        let ticket = state.borrow_mut().begin(Some(PHOTO)).unwrap();
        pollster::block_on(run_try_on(&state, ticket, &transport, as_text));
        assert!(state.borrow().result().is_some());

        state.borrow_mut().select_product_image(DRESS.to_string());
        assert!(state.borrow().result().is_none());

        let ticket = state.borrow_mut().begin(Some(PHOTO)).unwrap();
        pollster::block_on(run_try_on(&state, ticket, &transport, as_text));

        let posted = transport.posted.borrow();
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[1].design_image.payload.bytes, vec![6]);
        assert_eq!(posted[1].design_image.payload.mime_type, "image/webp");
    }

    #[test]
    fn stale_response_does_not_overwrite_state() {
        let transport = FakeTransport::new(Ok(payload(&[1], "image/png")));
        let state = RefCell::new(TryOnState::<String>::new(Some(SHIRT.to_string())));

        let ticket = state.borrow_mut().begin(Some(PHOTO)).unwrap();
        state.borrow_mut().invalidate();
        let completion = pollster::block_on(run_try_on(&state, ticket, &transport, as_text));

        assert_eq!(completion, Completion::Stale);
        assert!(state.borrow().result().is_none());
    }

    #[test]
    fn client_targets_configured_endpoint() {
        let client = TryOnClient::with_endpoint("http://localhost:9000/api/apply-design/");
        assert_eq!(client.endpoint(), "http://localhost:9000/api/apply-design/");
        assert!(TryOnClient::new().endpoint().ends_with("/api/apply-design/"));
    }
}
