// ============================================================================
// SESSION STORAGE - Espejo del estado de prueba virtual en sessionStorage
// ============================================================================

use gloo_storage::{SessionStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use crate::error::TryOnError;

/// Almacén clave/valor con alcance de sesión
pub trait SessionBackend {
    /// Valor JSON
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), TryOnError>;
    /// Cadena tal cual, sin comillas JSON (legible con sessionStorage.getItem)
    fn load_text(&self, key: &str) -> Option<String>;
    fn save_text(&self, key: &str, value: &str) -> Result<(), TryOnError>;
    fn remove(&self, key: &str);
}

/// sessionStorage del navegador (una pestaña = una sesión)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserSession;

impl SessionBackend for BrowserSession {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match SessionStorage::get::<T>(key) {
            Ok(value) => Some(value),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("⚠️ Valor ilegible en sessionStorage[{}]: {}", key, e);
                None
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), TryOnError> {
        SessionStorage::set(key, value)?;
        Ok(())
    }

    fn load_text(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn save_text(&self, key: &str, value: &str) -> Result<(), TryOnError> {
        SessionStorage::raw()
            .set_item(key, value)
            .map_err(TryOnError::from_js)
    }

    fn remove(&self, key: &str) {
        SessionStorage::delete(key);
    }
}

#[cfg(test)]
pub use memory::MemorySession;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Backend en memoria para tests nativos
    #[derive(Default)]
    pub struct MemorySession {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemorySession {
        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub fn insert_raw(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl SessionBackend for MemorySession {
        fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
            let json = self.raw(key)?;
            serde_json::from_str(&json).ok()
        }

        fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), TryOnError> {
            let json = serde_json::to_string(value)
                .map_err(|e| TryOnError::Storage(e.to_string()))?;
            self.entries.borrow_mut().insert(key.to_string(), json);
            Ok(())
        }

        fn load_text(&self, key: &str) -> Option<String> {
            self.raw(key)
        }

        fn save_text(&self, key: &str, value: &str) -> Result<(), TryOnError> {
            self.insert_raw(key, value);
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}
