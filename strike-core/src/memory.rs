//! In-process collaborators for tests and offline runs.
//!
//! [`InMemoryBookingApi`] answers like the hosted booking endpoint (price is
//! computed on the "server" side) and [`MemoryConfirmationStorage`] stands in
//! for `sessionStorage`, keeping values as JSON text.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::confirmation::{BookingRequest, CONFIRMATION_KEY, Confirmation};
use crate::error::ApiError;
use crate::pricing;
use crate::{BookingApi, ConfirmationStorage};

/// Booking number handed out when no seed is configured.
pub const DEFAULT_BOOKING_ID: &str = "12345";

const ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const ID_LEN: usize = 6;

enum IdSource {
    Fixed(String),
    Seeded(ChaCha20Rng),
}

impl IdSource {
    fn next_id(&mut self) -> String {
        match self {
            Self::Fixed(id) => id.clone(),
            Self::Seeded(rng) => {
                let suffix: String = (0..ID_LEN)
                    .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
                    .collect();
                format!("BK-{suffix}")
            }
        }
    }
}

#[derive(Default)]
struct BackendState {
    latest: Option<Confirmation>,
    submissions: usize,
}

/// Booking backend living in the current process.
#[derive(Clone)]
pub struct InMemoryBookingApi {
    ids: Rc<RefCell<IdSource>>,
    state: Rc<RefCell<BackendState>>,
    failing: Rc<Cell<bool>>,
}

impl Default for InMemoryBookingApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookingApi {
    /// Backend that issues [`DEFAULT_BOOKING_ID`] for every booking.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_source(IdSource::Fixed(DEFAULT_BOOKING_ID.to_string()))
    }

    /// Backend issuing reproducible `BK-XXXXXX` booking numbers.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_id_source(IdSource::Seeded(ChaCha20Rng::seed_from_u64(seed)))
    }

    fn with_id_source(source: IdSource) -> Self {
        Self {
            ids: Rc::new(RefCell::new(source)),
            state: Rc::new(RefCell::new(BackendState::default())),
            failing: Rc::new(Cell::new(false)),
        }
    }

    /// Make every following call fail as if the network were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of bookings accepted so far.
    #[must_use]
    pub fn submissions(&self) -> usize {
        self.state.borrow().submissions
    }

    fn ensure_reachable(&self) -> Result<(), ApiError> {
        if self.failing.get() {
            Err(ApiError::Network(String::from("booking backend unreachable")))
        } else {
            Ok(())
        }
    }
}

impl BookingApi for InMemoryBookingApi {
    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, ApiError> {
        self.ensure_reachable()?;
        let price = pricing::price(&request.lanes, &request.people);
        let confirmation = Confirmation {
            id: self.ids.borrow_mut().next_id(),
            price: price.to_string(),
            active: true,
            when: request.when.clone(),
            lanes: request.lanes.clone(),
            people: request.people.clone(),
            shoes: request.shoes.clone(),
        };
        let mut state = self.state.borrow_mut();
        state.latest = Some(confirmation.clone());
        state.submissions += 1;
        Ok(confirmation)
    }

    async fn fetch_existing(&self) -> Result<Option<Confirmation>, ApiError> {
        self.ensure_reachable()?;
        Ok(self.state.borrow().latest.clone())
    }
}

/// `sessionStorage` stand-in keyed by slot name.
#[derive(Clone, Default)]
pub struct MemoryConfirmationStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryConfirmationStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a slot, as a browser would expose it.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Write a raw slot value, bypassing serialization.
    pub fn set_raw(&self, key: &str, value: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_string(), value.into());
    }
}

impl ConfirmationStorage for MemoryConfirmationStorage {
    type Error = serde_json::Error;

    fn save(&self, confirmation: &Confirmation) -> Result<(), Self::Error> {
        let json = serde_json::to_string(confirmation)?;
        self.set_raw(CONFIRMATION_KEY, json);
        Ok(())
    }

    fn load(&self) -> Result<Option<Confirmation>, Self::Error> {
        self.raw(CONFIRMATION_KEY)
            .map(|json| serde_json::from_str(&json))
            .transpose()
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.slots.borrow_mut().remove(CONFIRMATION_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn request() -> BookingRequest {
        BookingRequest {
            when: String::from("2024-12-13 11:00"),
            lanes: String::from("1"),
            people: String::from("2"),
            shoes: vec![String::from("42"), String::from("43")],
        }
    }

    #[test]
    fn backend_prices_and_remembers_latest() {
        let api = InMemoryBookingApi::new();
        assert!(block_on(api.fetch_existing()).unwrap().is_none());

        let confirmation = block_on(api.submit(&request())).unwrap();
        assert_eq!(confirmation.id, DEFAULT_BOOKING_ID);
        assert_eq!(confirmation.price, "340");
        assert!(confirmation.active);
        assert_eq!(api.submissions(), 1);
        assert_eq!(block_on(api.fetch_existing()).unwrap(), Some(confirmation));
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let first = InMemoryBookingApi::with_seed(1337);
        let second = InMemoryBookingApi::with_seed(1337);
        let a = block_on(first.submit(&request())).unwrap().id;
        let b = block_on(second.submit(&request())).unwrap().id;
        assert_eq!(a, b);
        assert!(a.starts_with("BK-"));
        assert_eq!(a.len(), 3 + ID_LEN);

        let next = block_on(first.submit(&request())).unwrap().id;
        assert_ne!(a, next);
    }

    #[test]
    fn failing_backend_reports_network_error() {
        let api = InMemoryBookingApi::new();
        api.set_failing(true);
        assert!(matches!(
            block_on(api.submit(&request())),
            Err(ApiError::Network(_))
        ));
        assert_eq!(api.submissions(), 0);
    }

    #[test]
    fn storage_round_trips_and_clears() {
        let storage = MemoryConfirmationStorage::new();
        assert!(storage.load().unwrap().is_none());

        let api = InMemoryBookingApi::new();
        let confirmation = block_on(api.submit(&request())).unwrap();
        storage.save(&confirmation).unwrap();
        assert_eq!(storage.load().unwrap(), Some(confirmation));
        assert!(storage.raw(CONFIRMATION_KEY).unwrap().contains("\"price\":\"340\""));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_slot_surfaces_as_error() {
        let storage = MemoryConfirmationStorage::new();
        storage.set_raw(CONFIRMATION_KEY, "{not json");
        assert!(storage.load().is_err());
    }
}
