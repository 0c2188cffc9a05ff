use strike_core::{BookingDraft, ConfirmationScreen, View};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub view: UseStateHandle<View>,
    pub draft: UseStateHandle<BookingDraft>,
    pub error: UseStateHandle<Option<AttrValue>>,
    pub submitting: UseStateHandle<bool>,
    pub confirmation: UseStateHandle<ConfirmationScreen>,
    pub menu_open: UseStateHandle<bool>,
}

/// `initial_view` only applies on the first render.
#[hook]
pub fn use_app_state(initial_view: View) -> AppState {
    AppState {
        view: use_state(|| initial_view),
        draft: use_state(BookingDraft::new),
        error: use_state(|| None::<AttrValue>),
        submitting: use_state(|| false),
        confirmation: use_state(|| ConfirmationScreen::NoBooking),
        menu_open: use_state(|| false),
    }
}

impl AppState {
    /// Draft and error are discarded; the stored confirmation is kept.
    pub fn start_fresh_draft(&self) {
        self.draft.set(BookingDraft::new());
        self.error.set(None);
    }
}
