pub mod plan;
pub mod reports;
pub mod runner;
pub mod tester;

pub use plan::{BookingOutcome, BookingPlan};
pub use tester::*;
