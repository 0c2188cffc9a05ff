use anyhow::Result;
use thirtyfour::prelude::*;

use crate::logic::BookingPlan;
use crate::logic::plan::{
    blank_shoe_draft, incomplete_draft, overbooked_draft, shoe_mismatch_draft, valid_draft,
};
use booking::{BookingScenario, BrowserCheck};

pub mod booking;
pub mod expectations;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub seed: u64,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: BookingPlan,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, plan: BookingPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", "Form renders and a valid booking is accepted"),
    ("happy-path", "Valid booking is priced, confirmed and saved to the session"),
    ("incomplete", "Blank date, time, players or lanes is rejected"),
    ("too-many-players", "More than four players per lane is rejected"),
    ("shoe-mismatch", "Shoe count different from player count is rejected"),
    ("blank-shoe", "Unfilled shoe size is rejected"),
    ("navigation", "Confirmation is still shown after visiting Booking"),
    ("no-booking", "Confirmation view without a booking shows the empty state"),
    ("outage", "Unreachable backend shows the retry message (logic only)"),
];

pub const fn list_scenarios() -> &'static [(&'static str, &'static str)] {
    SCENARIOS
}

pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|(key, _)| (*key).to_string()).collect()
}

fn happy_path() -> BookingScenario {
    BookingScenario::new(
        "Happy Path",
        BookingPlan::new(valid_draft)
            .with_expectation(expectations::booking_accepted)
            .with_expectation(expectations::price_matches_formula)
            .with_expectation(expectations::confirmation_persisted),
        BrowserCheck::Books,
    )
}

fn rejection(
    name: &'static str,
    plan: BookingPlan,
    expectation: crate::logic::plan::Expectation,
) -> BookingScenario {
    BookingScenario::new(name, plan.with_expectation(expectation), BrowserCheck::Rejects)
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "happy-path" | "happy" => Some(Box::new(happy_path())),
        "incomplete" => Some(Box::new(rejection(
            "Incomplete Form",
            BookingPlan::new(incomplete_draft),
            expectations::rejected_incomplete,
        ))),
        "too-many-players" | "overbooked" => Some(Box::new(rejection(
            "Too Many Players Per Lane",
            BookingPlan::new(overbooked_draft),
            expectations::rejected_too_many_players,
        ))),
        "shoe-mismatch" => Some(Box::new(rejection(
            "Shoe Count Mismatch",
            BookingPlan::new(shoe_mismatch_draft),
            expectations::rejected_shoe_count,
        ))),
        "blank-shoe" => Some(Box::new(rejection(
            "Blank Shoe Size",
            BookingPlan::new(blank_shoe_draft),
            expectations::rejected_blank_shoe,
        ))),
        "navigation" => Some(Box::new(BookingScenario::new(
            "Navigation Keeps Confirmation",
            BookingPlan::new(valid_draft)
                .with_expectation(expectations::booking_accepted)
                .with_expectation(expectations::survives_navigation),
            BrowserCheck::Revisits,
        ))),
        "no-booking" => Some(Box::new(BookingScenario::new(
            "No Booking Yet",
            BookingPlan::new(incomplete_draft).with_expectation(expectations::rejected_incomplete),
            BrowserCheck::EmptyConfirmation,
        ))),
        "outage" | "backend-outage" => Some(Box::new(BookingScenario::new(
            "Backend Outage",
            BookingPlan::new(valid_draft)
                .with_failing_backend()
                .with_expectation(expectations::outage_reported),
            BrowserCheck::Unsupported(
                "the deployed backend cannot be taken offline from a browser",
            ),
        ))),
        _ => None,
    }
}
