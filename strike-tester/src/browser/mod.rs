pub mod form;
pub mod session;

pub use form::BookingForm;
pub use session::{BrowserConfig, BrowserKind, new_session};
