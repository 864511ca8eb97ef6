//! Browser Bindings
//!
//! `localStorage` as the store's key-value storage, and blocking alerts.

use todo_board_store::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;

use crate::models::Notice;

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(js_error(&e)))
    }
}

/// Show a notice with `window.alert`
pub fn alert(notice: &Notice) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&notice.to_string());
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
