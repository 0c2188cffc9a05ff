//! Web-specific booking engine implementation
//!
//! This module provides the browser implementations of the strike-core traits
//! and re-exports the core booking types.

use crate::api::FetchBookingApi;
use crate::dom;

// Re-export all types from strike-core
pub use strike_core::*;

/// Confirmation storage backed by `window.sessionStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfirmationStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn storage_error(value: &wasm_bindgen::JsValue) -> WebStorageError {
    WebStorageError::Storage(dom::js_error_message(value))
}

/// Decode a raw slot value; unreadable data counts as an empty slot.
fn decode_slot(raw: Option<String>) -> Option<Confirmation> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(confirmation) => Some(confirmation),
        Err(err) => {
            log::warn!("ignoring unreadable {CONFIRMATION_KEY} slot: {err}");
            None
        }
    }
}

impl ConfirmationStorage for SessionConfirmationStorage {
    type Error = WebStorageError;

    fn save(&self, confirmation: &Confirmation) -> Result<(), Self::Error> {
        let json = serde_json::to_string(confirmation)?;
        dom::session_storage()
            .and_then(|storage| storage.set_item(CONFIRMATION_KEY, &json))
            .map_err(|e| storage_error(&e))
    }

    fn load(&self) -> Result<Option<Confirmation>, Self::Error> {
        let raw = dom::session_storage()
            .and_then(|storage| storage.get_item(CONFIRMATION_KEY))
            .map_err(|e| storage_error(&e))?;
        Ok(decode_slot(raw))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        dom::session_storage()
            .and_then(|storage| storage.remove_item(CONFIRMATION_KEY))
            .map_err(|e| storage_error(&e))
    }
}

pub type WebBookingEngine = BookingEngine<FetchBookingApi, SessionConfirmationStorage>;

/// Create a browser booking engine with `FetchBookingApi` and `SessionConfirmationStorage`
#[must_use]
pub fn create_web_booking_engine() -> WebBookingEngine {
    BookingEngine::new(FetchBookingApi::from_config(), SessionConfirmationStorage)
}

/// Screen for the confirmation view, falling back to the empty state when the
/// session slot cannot be read.
#[must_use]
pub fn load_confirmation_screen<S: ConfirmationStorage>(storage: &S) -> ConfirmationScreen {
    match storage.load() {
        Ok(stored) => ConfirmationScreen::from_stored(stored),
        Err(err) => {
            log::warn!("could not read saved confirmation: {err}");
            ConfirmationScreen::NoBooking
        }
    }
}
