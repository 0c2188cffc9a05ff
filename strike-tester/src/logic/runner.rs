use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use strike_core::{
    BookingEngine, ConfirmationScreen, InMemoryBookingApi, MemoryConfirmationStorage, NavEvent,
    View,
};

use super::plan::{BookingOutcome, BookingPlan};

type LogicEngine = BookingEngine<InMemoryBookingApi, MemoryConfirmationStorage>;

/// Drives plans through a booking engine backed by in-memory collaborators.
#[derive(Debug, Clone, Copy)]
pub struct BookingRunner {
    verbose: bool,
}

impl BookingRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn engine(seed: u64, failing: bool) -> LogicEngine {
        let api = InMemoryBookingApi::with_seed(seed);
        api.set_failing(failing);
        BookingEngine::new(api, MemoryConfirmationStorage::new())
    }

    pub async fn run_plan(&self, plan: &BookingPlan, seed: u64) -> Result<BookingOutcome> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let draft = (plan.build)(&mut rng);
        let engine = Self::engine(seed, plan.backend_failing);

        let submitted = engine.submit(&draft).await;
        let retriable = submitted.as_ref().err().is_some_and(|err| err.is_retriable());
        let submission = submitted.map_err(|err| err.user_message());

        let stored = engine.confirmation().context("reading stored confirmation")?;
        let revisited = Self::revisit(&engine)?;

        engine.reset().context("clearing stored confirmation")?;
        let synced = engine.sync_from_remote().await.ok().flatten();

        if self.verbose {
            println!(
                "     ↳ seed {seed}: {} lanes / {} players -> {:?}",
                draft.lanes, draft.people, submission
            );
        }

        Ok(BookingOutcome {
            seed,
            validation: draft.validate(),
            draft,
            submission,
            retriable,
            submissions_sent: engine.api().submissions(),
            stored,
            revisited,
            synced,
        })
    }

    /// Leave for Booking and come back, as the navigation menu does.
    fn revisit(engine: &LogicEngine) -> Result<ConfirmationScreen> {
        let view = View::Confirmation
            .apply(NavEvent::ToBooking)
            .apply(NavEvent::ToConfirmation);
        anyhow::ensure!(
            view == View::Confirmation,
            "navigation round trip ended on {view:?}"
        );
        engine
            .enter_confirmation()
            .context("loading confirmation screen")
    }
}
