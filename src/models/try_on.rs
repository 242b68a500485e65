// ============================================================================
// TRY-ON STATE - idle → busy → idle con resultado | idle con error
// ============================================================================
// Cada envío recibe un número de generación. Solo la respuesta de la
// generación aceptada puede modificar el estado. Cambiar de producto descarta
// el resultado de la petición en curso pero no libera el botón hasta que esa
// petición termina; cerrar el overlay lo descarta todo.
// ============================================================================

use crate::error::TryOnError;

/// Comprobante de un envío en curso
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOnTicket {
    generation: u64,
    pub person_image: String,
    pub design_image: String,
}

impl TryOnTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Resultado de aplicar una respuesta al estado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed(String),
    /// La respuesta llegó para una generación ya descartada
    Stale,
}

/// Estado del overlay. `R` es la referencia al resultado (ObjectUrl en el navegador)
#[derive(Debug)]
pub struct TryOnState<R> {
    /// Última generación cuya respuesta se aceptará
    generation: u64,
    /// Generación de la petición que sigue abierta en la red
    in_flight: Option<u64>,
    product_image: Option<String>,
    result: Option<R>,
    error: Option<String>,
}

impl<R> TryOnState<R> {
    pub fn new(initial_product_image: Option<String>) -> Self {
        Self {
            generation: 0,
            in_flight: None,
            product_image: initial_product_image.filter(|url| !url.is_empty()),
            result: None,
            error: None,
        }
    }

    pub fn product_image(&self) -> Option<&str> {
        self.product_image.as_deref()
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Habilita el botón "Try It On"
    pub fn can_submit(&self, user_photo: Option<&str>) -> bool {
        !self.is_busy() && has_value(user_photo) && self.product_image.is_some()
    }

    /// Fija la imagen de producto solo si todavía no hay ninguna
    pub fn adopt_product_image(&mut self, url: Option<String>) {
        if self.product_image.is_none() {
            self.product_image = url.filter(|url| !url.is_empty());
        }
    }

    /// Inicia un envío. Falla si ya hay uno en curso o falta alguna imagen.
    pub fn begin(&mut self, user_photo: Option<&str>) -> Result<TryOnTicket, TryOnError> {
        if self.is_busy() {
            return Err(TryOnError::RequestInFlight);
        }
        let person_image = user_photo
            .filter(|photo| !photo.is_empty())
            .ok_or(TryOnError::MissingUserPhoto)?
            .to_string();
        let design_image = self
            .product_image
            .clone()
            .ok_or(TryOnError::MissingProductImage)?;

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.error = None;

        Ok(TryOnTicket {
            generation: self.generation,
            person_image,
            design_image,
        })
    }

    /// Aplica la respuesta del servidor si el ticket sigue vigente
    pub fn complete(&mut self, ticket: &TryOnTicket, outcome: Result<R, TryOnError>) -> Completion {
        if self.in_flight == Some(ticket.generation) {
            self.in_flight = None;
        }
        if ticket.generation != self.generation {
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                // El resultado anterior se suelta aquí
                self.result = Some(result);
                Completion::Succeeded
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                Completion::Failed(message)
            }
        }
    }

    /// "You may also like": cambia el producto y descarta el resultado.
    /// Una petición abierta sigue bloqueando nuevos envíos hasta que responda.
    pub fn select_product_image(&mut self, url: String) {
        self.product_image = Some(url);
        self.generation += 1;
        self.result = None;
        self.error = None;
    }

    /// Descarta el resultado y cualquier respuesta pendiente
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.result = None;
        self.error = None;
    }
}

fn has_value(value: Option<&str>) -> bool {
    value.map(|v| !v.is_empty()).unwrap_or(false)
}
