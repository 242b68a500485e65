// ============================================================================
// CONFIGURACIÓN - Valores en tiempo de compilación (option_env! / .env)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_APPLY_DESIGN_PATH: &str = "/api/apply-design/";
const DEFAULT_SUGGESTION_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub apply_design_path: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Cuántas imágenes del producto se ofrecen en "You may also like"
    pub suggestion_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            apply_design_path: DEFAULT_APPLY_DESIGN_PATH.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL).to_string(),
            apply_design_path: option_env!("APPLY_DESIGN_PATH")
                .unwrap_or(DEFAULT_APPLY_DESIGN_PATH).to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            suggestion_limit: option_env!("SUGGESTION_LIMIT")
                .unwrap_or("3").parse().unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }
    }

    /// URL completa del endpoint de composición
    pub fn apply_design_url(&self) -> String {
        let base = self.backend_url.trim_end_matches('/');
        let path = self.apply_design_path.trim_start_matches('/');
        if base.is_empty() {
            // Sin backend configurado: ruta relativa al origen de la página
            format!("/{}", path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_points_to_apply_design() {
        let config = AppConfig::default();
        assert_eq!(config.apply_design_url(), "http://127.0.0.1:8000/api/apply-design/");
    }

    #[test]
    fn endpoint_join_tolerates_slashes() {
        let config = AppConfig {
            backend_url: "https://tryon.example.com/".to_string(),
            apply_design_path: "api/apply-design/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.apply_design_url(), "https://tryon.example.com/api/apply-design/");
    }

    #[test]
    fn empty_backend_gives_relative_path() {
        let config = AppConfig {
            backend_url: String::new(),
            ..AppConfig::default()
        };
        assert_eq!(config.apply_design_url(), "/api/apply-design/");
    }

    #[test]
    fn logging_disabled_only_reports_errors() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);
        assert_eq!(AppConfig::default().log_level(), log::Level::Debug);
    }
}
