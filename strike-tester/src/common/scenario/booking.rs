use anyhow::{Context, Result, ensure};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use strike_core::{BookingDraft, NO_BOOKING_MESSAGE, View};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::BookingForm;
use crate::logic::BookingPlan;

/// What the browser run checks after submitting the seeded draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCheck {
    /// Confirmation view appears with the formula price.
    Books,
    /// The form stays put and shows the validation message.
    Rejects,
    /// Like `Books`, then Booking and back to Confirmation.
    Revisits,
    /// Nothing is submitted; the confirmation view shows the empty state.
    EmptyConfirmation,
    Unsupported(&'static str),
}

pub struct BookingScenario {
    name: &'static str,
    plan: BookingPlan,
    check: BrowserCheck,
}

impl BookingScenario {
    pub const fn new(name: &'static str, plan: BookingPlan, check: BrowserCheck) -> Self {
        Self { name, plan, check }
    }

    fn draft_for(&self, seed: u64) -> BookingDraft {
        (self.plan.build)(&mut ChaCha20Rng::seed_from_u64(seed))
    }
}

async fn expect_total(form: &BookingForm<'_>, draft: &BookingDraft) -> Result<()> {
    let total = form.total_price().await?;
    ensure!(
        total == draft.price(),
        "confirmation total {total} sek, expected {} sek",
        draft.price()
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for BookingScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        if let BrowserCheck::Unsupported(reason) = self.check {
            anyhow::bail!("{} has no browser run: {reason}", self.name);
        }

        let form = BookingForm::new(driver);
        form.open(&ctx.base_url).await?;

        if self.check == BrowserCheck::EmptyConfirmation {
            form.navigate(View::Confirmation).await?;
            let text = form.page_text().await?;
            ensure!(
                text.contains(NO_BOOKING_MESSAGE),
                "empty confirmation view shows {text:?}"
            );
            return Ok(());
        }

        let draft = self.draft_for(ctx.seed);
        if ctx.verbose {
            println!(
                "  🎳 {} lanes / {} players on {}",
                draft.lanes,
                draft.people,
                draft.when()
            );
        }
        form.fill(&draft).await?;
        form.submit().await?;

        match self.check {
            BrowserCheck::Rejects => {
                let expected = draft
                    .validate()
                    .message()
                    .context("seeded draft passed validation")?;
                let shown = form.error_message().await?;
                ensure!(shown == expected, "form showed {shown:?}, expected {expected:?}");
            }
            BrowserCheck::Books | BrowserCheck::Revisits => {
                form.wait_for_view(View::Confirmation).await?;
                expect_total(&form, &draft).await?;
                if self.check == BrowserCheck::Revisits {
                    form.navigate(View::Booking).await?;
                    form.navigate(View::Confirmation).await?;
                    expect_total(&form, &draft).await?;
                }
            }
            BrowserCheck::EmptyConfirmation | BrowserCheck::Unsupported(_) => {}
        }
        Ok(())
    }
}

impl CombinedScenario for BookingScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.plan.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::plan::valid_draft;

    #[test]
    fn browser_and_logic_runs_share_the_seeded_draft() {
        let scenario = BookingScenario::new(
            "Happy Path",
            BookingPlan::new(valid_draft),
            BrowserCheck::Books,
        );
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        assert_eq!(scenario.draft_for(99), valid_draft(&mut rng));
        let logic = scenario.as_logic_scenario().expect("logic scenario");
        assert_eq!(logic.name, "Happy Path");
    }
}
