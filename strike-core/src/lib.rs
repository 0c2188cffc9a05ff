//! Strike booking engine
//!
//! Platform-agnostic booking logic for the Strike bowling-lane booking form.
//! This crate covers pricing, validation, the shoe list and confirmation
//! handling without UI or browser dependencies.
#![forbid(unsafe_code)]

pub mod confirmation;
pub mod draft;
pub mod error;
pub mod memory;
pub mod pricing;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use confirmation::{BookingRequest, CONFIRMATION_KEY, Confirmation, LookupResponse};
pub use draft::{BookingDraft, ShoeSizes};
pub use error::{ApiError, BookingError, SUBMISSION_FAILED_MESSAGE};
pub use memory::{InMemoryBookingApi, MemoryConfirmationStorage};
pub use pricing::{LANE_PRICE, PERSON_PRICE, parse_or_zero, price, price_for};
pub use validation::{MAX_PLAYERS_PER_LANE, ValidationError, ValidationResult, validate};
pub use view::{ConfirmationScreen, NO_BOOKING_MESSAGE, NavEvent, View};

/// Trait for abstracting the remote booking endpoint
/// Platform-specific implementations should provide this
#[allow(async_fn_in_trait)] // Futures run on single-threaded executors; no `Send` bound wanted.
pub trait BookingApi {
    /// Submit a booking and receive the server-issued confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be read.
    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, ApiError>;

    /// Fetch the most recent confirmation known to the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be read.
    async fn fetch_existing(&self) -> Result<Option<Confirmation>, ApiError>;
}

/// Trait for abstracting the session-scoped confirmation slot
/// Platform-specific implementations should provide this
pub trait ConfirmationStorage {
    type Error: std::error::Error + 'static;

    /// Save a confirmation, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation cannot be saved.
    fn save(&self, confirmation: &Confirmation) -> Result<(), Self::Error>;

    /// Load the saved confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or decoded.
    fn load(&self) -> Result<Option<Confirmation>, Self::Error>;

    /// Forget the saved confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be cleared.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Drives a draft through validation, submission and local caching
pub struct BookingEngine<A, S>
where
    A: BookingApi,
    S: ConfirmationStorage,
{
    api: A,
    storage: S,
}

impl<A, S> BookingEngine<A, S>
where
    A: BookingApi,
    S: ConfirmationStorage,
{
    /// Create a new booking engine with the provided endpoint and storage
    pub const fn new(api: A, storage: S) -> Self {
        Self { api, storage }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate, submit and cache a booking
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] when the draft fails a rule,
    /// [`BookingError::SubmissionFailed`] when the endpoint cannot be reached
    /// and [`BookingError::Storage`] when the confirmation cannot be cached.
    pub async fn submit(
        &self,
        draft: &BookingDraft,
    ) -> Result<Confirmation, BookingError<S::Error>> {
        draft.validate().into_result()?;

        log::debug!(
            "booking {} lanes for {} players, quoted {}",
            draft.lane_count(),
            draft.player_count(),
            draft.price()
        );

        let request = BookingRequest::from_draft(draft);
        let confirmation = self.api.submit(&request).await.map_err(|err| {
            log::error!("booking submission failed: {err}");
            BookingError::SubmissionFailed(err)
        })?;

        self.storage
            .save(&confirmation)
            .map_err(BookingError::Storage)?;
        log::info!("saved confirmation {}", confirmation.id);
        Ok(confirmation)
    }

    /// Load the cached confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn confirmation(&self) -> Result<Option<Confirmation>, S::Error> {
        self.storage.load()
    }

    /// Compute what the confirmation view shows when it is entered
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn enter_confirmation(&self) -> Result<ConfirmationScreen, S::Error> {
        self.confirmation().map(ConfirmationScreen::from_stored)
    }

    /// Pull the backend's latest confirmation into local storage
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::SubmissionFailed`] if the lookup fails and
    /// [`BookingError::Storage`] if the result cannot be cached.
    pub async fn sync_from_remote(&self) -> Result<Option<Confirmation>, BookingError<S::Error>> {
        let existing = self
            .api
            .fetch_existing()
            .await
            .map_err(BookingError::SubmissionFailed)?;
        if let Some(confirmation) = &existing {
            self.storage
                .save(confirmation)
                .map_err(BookingError::Storage)?;
        }
        Ok(existing)
    }

    /// Drop the cached confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be cleared.
    pub fn reset(&self) -> Result<(), S::Error> {
        self.storage.clear()
    }
}
