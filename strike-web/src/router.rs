use strike_core::View;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Booking,
    #[at("/confirmation")]
    Confirmation,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: View) -> Self {
        match view {
            View::Booking => Self::Booking,
            View::Confirmation => Self::Confirmation,
        }
    }

    #[must_use]
    pub const fn to_view(&self) -> Option<View> {
        match self {
            Self::Booking => Some(View::Booking),
            Self::Confirmation => Some(View::Confirmation),
            Self::NotFound => None, // Keep the current view on unknown URLs.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_round_trip_through_routes() {
        for view in [View::Booking, View::Confirmation] {
            assert_eq!(Route::from_view(view).to_view(), Some(view));
        }
        assert_eq!(Route::NotFound.to_view(), None);
    }

    #[test]
    fn paths_match_views() {
        assert_eq!(Route::Booking.to_path(), "/");
        assert_eq!(Route::Confirmation.to_path(), "/confirmation");
        assert_eq!(Route::recognize("/confirmation"), Some(Route::Confirmation));
    }
}
