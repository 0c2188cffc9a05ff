use strike_core::{BookingDraft, ValidationResult};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Text fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Date,
    Time,
    People,
    Lanes,
}

impl BookingField {
    pub const ALL: [Self; 4] = [Self::Date, Self::Time, Self::People, Self::Lanes];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::People => "Number of awesome bowlers",
            Self::Lanes => "Number of lanes",
        }
    }

    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::People | Self::Lanes => "number",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Date => "booking-date",
            Self::Time => "booking-time",
            Self::People => "booking-people",
            Self::Lanes => "booking-lanes",
        }
    }

    #[must_use]
    pub fn value(self, draft: &BookingDraft) -> &str {
        match self {
            Self::Date => &draft.date,
            Self::Time => &draft.time,
            Self::People => &draft.people,
            Self::Lanes => &draft.lanes,
        }
    }

    /// Draft with this field replaced by `value`.
    #[must_use]
    pub fn apply(self, draft: &BookingDraft, value: String) -> BookingDraft {
        let mut next = draft.clone();
        match self {
            Self::Date => next.date = value,
            Self::Time => next.time = value,
            Self::People => next.people = value,
            Self::Lanes => next.lanes = value,
        }
        next
    }
}

/// Edits to the shoe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoeAction {
    Add,
    Remove(usize),
    Update(usize, String),
}

#[must_use]
pub fn apply_shoe_action(draft: &BookingDraft, action: ShoeAction) -> BookingDraft {
    let mut next = draft.clone();
    match action {
        ShoeAction::Add => {
            next.shoes.add();
        }
        ShoeAction::Remove(position) => {
            next.shoes.remove(position);
        }
        ShoeAction::Update(position, value) => {
            next.shoes.update(position, value);
        }
    }
    next
}

/// What pressing the submit button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    /// A submission is already in flight.
    Busy,
    /// The draft fails validation; show the message.
    Rejected(&'static str),
    Proceed,
}

#[must_use]
pub fn submit_gate(draft: &BookingDraft, submitting: bool) -> SubmitGate {
    if submitting {
        return SubmitGate::Busy;
    }
    match draft.validate() {
        ValidationResult::Ok => SubmitGate::Proceed,
        rejected => rejected
            .message()
            .map_or(SubmitGate::Proceed, SubmitGate::Rejected),
    }
}

pub fn field_handler(
    field: BookingField,
    draft: BookingDraft,
    on_change: Callback<BookingDraft>,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(field.apply(&draft, input.value()));
    })
}

pub fn shoe_input_handler(
    position: usize,
    draft: BookingDraft,
    on_change: Callback<BookingDraft>,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(apply_shoe_action(
            &draft,
            ShoeAction::Update(position, input.value()),
        ));
    })
}

pub fn shoe_click_handler(
    action: ShoeAction,
    draft: BookingDraft,
    on_change: Callback<BookingDraft>,
) -> Callback<MouseEvent> {
    Callback::from(move |_| on_change.emit(apply_shoe_action(&draft, action.clone())))
}
