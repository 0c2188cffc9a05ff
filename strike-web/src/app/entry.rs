#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::booking::{SessionConfirmationStorage, load_confirmation_screen};
use strike_core::View;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Work performed when a view becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEntry {
    FreshDraft,
    LoadConfirmation,
}

#[must_use]
pub const fn entry_for(view: View) -> ViewEntry {
    match view {
        View::Booking => ViewEntry::FreshDraft,
        View::Confirmation => ViewEntry::LoadConfirmation,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_view_entry(state: &AppState) {
    let state = state.clone();
    use_effect_with(*state.view, move |view| {
        log::debug!("entering {view:?} view");
        match entry_for(*view) {
            ViewEntry::FreshDraft => state.start_fresh_draft(),
            ViewEntry::LoadConfirmation => {
                let screen = load_confirmation_screen(&SessionConfirmationStorage);
                state.confirmation.set(screen);
            }
        }
    });
}
