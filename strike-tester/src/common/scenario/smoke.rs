use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, expectations};
use crate::browser::BookingForm;
use crate::logic::BookingPlan;
use crate::logic::plan::valid_draft;

const FORM_LABELS: [&str; 5] = [
    "Date",
    "Time",
    "Number of awesome bowlers",
    "Number of lanes",
    "Shoes",
];

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> BookingPlan {
        BookingPlan::new(valid_draft).with_expectation(expectations::booking_accepted)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        let form = BookingForm::new(driver);
        form.open(&ctx.base_url).await?;

        let text = form.page_text().await?;
        for label in FORM_LABELS {
            ensure!(text.contains(label), "booking form is missing {label:?}");
        }
        ensure!(text.contains("strIIIIIike!"), "submit button missing");

        if ctx.verbose {
            println!("  🌐 Booking form loaded from {}", ctx.base_url);
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", Self::plan()))
    }
}
