use crate::app::state::AppState;
use crate::booking::create_web_booking_engine;
use crate::components::ui::booking_form::{SubmitGate, submit_gate};
use strike_core::{BookingDraft, ConfirmationScreen, NavEvent, View};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<NavEvent>,
    pub toggle_menu: Callback<()>,
    pub draft_change: Callback<BookingDraft>,
    pub submit: Callback<()>,
    pub back_to_booking: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        let navigate = build_navigate(state);
        Self {
            back_to_booking: navigate.reform(|()| NavEvent::ToBooking),
            navigate,
            toggle_menu: build_toggle_menu(state),
            draft_change: build_draft_change(state),
            submit: build_submit(state),
        }
    }
}

fn build_navigate(state: &AppState) -> Callback<NavEvent> {
    let view = state.view.clone();
    let menu_open = state.menu_open.clone();
    Callback::from(move |event: NavEvent| {
        let next = (*view).apply(event);
        log::debug!("navigation {event:?}: {:?} -> {next:?}", *view);
        menu_open.set(false);
        view.set(next);
    })
}

fn build_toggle_menu(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| menu_open.set(!*menu_open))
}

fn build_draft_change(state: &AppState) -> Callback<BookingDraft> {
    let draft = state.draft.clone();
    Callback::from(move |next: BookingDraft| draft.set(next))
}

fn build_submit(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        match submit_gate(&state.draft, *state.submitting) {
            SubmitGate::Busy => return,
            SubmitGate::Rejected(message) => {
                state.error.set(Some(AttrValue::from(message)));
                return;
            }
            SubmitGate::Proceed => {}
        }

        state.error.set(None);
        state.submitting.set(true);
        let draft = (*state.draft).clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let engine = create_web_booking_engine();
            match engine.submit(&draft).await {
                Ok(confirmation) => {
                    state
                        .confirmation
                        .set(ConfirmationScreen::Details(confirmation));
                    state.view.set(View::Confirmation);
                }
                Err(err) => state.error.set(Some(AttrValue::from(err.user_message()))),
            }
            state.submitting.set(false);
        });
    })
}
