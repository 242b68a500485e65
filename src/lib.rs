// ============================================================================
// VIRTUAL TRY-ON - FRONTEND YEW (RUST + WASM)
// ============================================================================
// - Components: vistas (galería de producto, selfie, overlay de prueba)
// - Hooks: estado de UI + callbacks
// - Stores: sesión de prueba tipada (espejo en sessionStorage)
// - Services: SOLO navegador / HTTP
// - Models: datos y máquina de estados del envío
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

pub use error::TryOnError;
