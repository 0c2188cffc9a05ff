//! Booking payloads exchanged with the booking endpoint.
use serde::{Deserialize, Serialize};

use crate::draft::BookingDraft;

/// Session storage slot that holds the latest confirmation.
pub const CONFIRMATION_KEY: &str = "confirmation";

/// Body of a booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub when: String,
    pub lanes: String,
    pub people: String,
    pub shoes: Vec<String>,
}

impl BookingRequest {
    #[must_use]
    pub fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            when: draft.when(),
            lanes: draft.lanes.clone(),
            people: draft.people.clone(),
            shoes: draft.shoes.values(),
        }
    }
}

impl From<&BookingDraft> for BookingRequest {
    fn from(draft: &BookingDraft) -> Self {
        Self::from_draft(draft)
    }
}

/// Server-issued record of a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub id: String,
    /// Decimal total without currency symbol.
    pub price: String,
    #[serde(default)]
    pub active: bool,
    pub when: String,
    pub lanes: String,
    pub people: String,
    pub shoes: Vec<String>,
}

impl Confirmation {
    /// Total as rendered on the confirmation view.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{} sek", self.price)
    }
}

/// Response of the lookup endpoint: either a confirmation or an error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Found(Confirmation),
    Missing { error: String },
}

impl LookupResponse {
    pub const NOT_FOUND: &'static str = "No confirmation found";

    #[must_use]
    pub fn missing() -> Self {
        Self::Missing {
            error: Self::NOT_FOUND.to_string(),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<Confirmation> {
        match self {
            Self::Found(confirmation) => Some(confirmation),
            Self::Missing { .. } => None,
        }
    }
}

impl From<Option<Confirmation>> for LookupResponse {
    fn from(value: Option<Confirmation>) -> Self {
        value.map_or_else(Self::missing, Self::Found)
    }
}
