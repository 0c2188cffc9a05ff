//! Two-view navigation model shared by every front end.
use crate::confirmation::Confirmation;

pub const NO_BOOKING_MESSAGE: &str = "Inga bokning gjord!";

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Booking,
    Confirmation,
}

/// User-initiated navigation between the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    ToBooking,
    ToConfirmation,
}

impl View {
    /// View reached after `event`; every event is valid from either view.
    #[must_use]
    pub const fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::ToBooking => Self::Booking,
            NavEvent::ToConfirmation => Self::Confirmation,
        }
    }

    /// CSS class carried by the view's root element.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Confirmation => "confirmation",
        }
    }

    /// Navigation menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Booking => "Booking",
            Self::Confirmation => "Confirmation",
        }
    }
}

/// What the confirmation view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationScreen {
    Details(Confirmation),
    NoBooking,
}

impl ConfirmationScreen {
    #[must_use]
    pub fn from_stored(stored: Option<Confirmation>) -> Self {
        stored.map_or(Self::NoBooking, Self::Details)
    }

    #[must_use]
    pub const fn confirmation(&self) -> Option<&Confirmation> {
        match self {
            Self::Details(confirmation) => Some(confirmation),
            Self::NoBooking => None,
        }
    }
}

impl From<Option<Confirmation>> for ConfirmationScreen {
    fn from(stored: Option<Confirmation>) -> Self {
        Self::from_stored(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_works_in_both_directions() {
        let view = View::default();
        assert_eq!(view, View::Booking);
        let view = view.apply(NavEvent::ToConfirmation);
        assert_eq!(view, View::Confirmation);
        assert_eq!(view.apply(NavEvent::ToConfirmation), View::Confirmation);
        assert_eq!(view.apply(NavEvent::ToBooking), View::Booking);
    }

    #[test]
    fn classes_and_labels() {
        assert_eq!(View::Booking.class(), "booking");
        assert_eq!(View::Confirmation.class(), "confirmation");
        assert_eq!(View::Confirmation.label(), "Confirmation");
    }

    #[test]
    fn missing_confirmation_maps_to_no_booking() {
        assert_eq!(ConfirmationScreen::from(None), ConfirmationScreen::NoBooking);
        assert!(ConfirmationScreen::NoBooking.confirmation().is_none());
    }
}
