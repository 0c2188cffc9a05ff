use anyhow::Result;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use strike_core::{BookingDraft, Confirmation, ConfirmationScreen, ShoeSizes, ValidationResult};

/// Produces the draft a plan submits, varied by the iteration seed.
pub type DraftBuilder = fn(&mut ChaCha20Rng) -> BookingDraft;
pub type Expectation = fn(&BookingOutcome) -> Result<()>;

/// What happened when one draft went through the booking engine.
#[derive(Debug, Clone)]
pub struct BookingOutcome {
    pub seed: u64,
    pub draft: BookingDraft,
    pub validation: ValidationResult,
    /// The confirmation, or the message the form would show.
    pub submission: Result<Confirmation, String>,
    pub retriable: bool,
    pub submissions_sent: usize,
    pub stored: Option<Confirmation>,
    /// Confirmation screen after leaving for Booking and coming back.
    pub revisited: ConfirmationScreen,
    /// Backend lookup after the session slot was cleared.
    pub synced: Option<Confirmation>,
}

#[derive(Clone)]
pub struct BookingPlan {
    pub build: DraftBuilder,
    pub backend_failing: bool,
    pub expectations: Vec<Expectation>,
}

impl BookingPlan {
    pub fn new(build: DraftBuilder) -> Self {
        Self {
            build,
            backend_failing: false,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_failing_backend(mut self) -> Self {
        self.backend_failing = true;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

impl std::fmt::Debug for BookingPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingPlan")
            .field("backend_failing", &self.backend_failing)
            .field("expectations", &self.expectations.len())
            .finish_non_exhaustive()
    }
}

fn shoe_sizes(rng: &mut ChaCha20Rng, count: usize) -> ShoeSizes {
    (0..count)
        .map(|_| rng.gen_range(35..=46).to_string())
        .collect::<Vec<_>>()
        .into()
}

/// A draft every rule accepts: up to three lanes, a legal party, one shoe each.
pub fn valid_draft(rng: &mut ChaCha20Rng) -> BookingDraft {
    let lanes = rng.gen_range(1..=3_usize);
    let people = rng.gen_range(1..=lanes * 4);
    BookingDraft {
        date: format!("2024-12-{:02}", rng.gen_range(10..=28)),
        time: format!("{:02}:00", rng.gen_range(10..=21)),
        people: people.to_string(),
        lanes: lanes.to_string(),
        shoes: shoe_sizes(rng, people),
    }
}

/// A valid draft with one of date, time, people or lanes left blank.
pub fn incomplete_draft(rng: &mut ChaCha20Rng) -> BookingDraft {
    let mut draft = valid_draft(rng);
    match rng.gen_range(0..4) {
        0 => draft.date.clear(),
        1 => draft.time.clear(),
        2 => draft.people.clear(),
        _ => draft.lanes.clear(),
    }
    draft
}

/// More than four players per lane, all shoes filled in.
pub fn overbooked_draft(rng: &mut ChaCha20Rng) -> BookingDraft {
    let lanes = rng.gen_range(1..=2_usize);
    let people = lanes * 4 + rng.gen_range(1..=4);
    BookingDraft {
        people: people.to_string(),
        lanes: lanes.to_string(),
        shoes: shoe_sizes(rng, people),
        ..valid_draft(rng)
    }
}

/// Party of at least two with one shoe too few or too many.
pub fn shoe_mismatch_draft(rng: &mut ChaCha20Rng) -> BookingDraft {
    let people = rng.gen_range(2..=4_usize);
    let shoes = if rng.gen_bool(0.5) { people - 1 } else { people + 1 };
    BookingDraft {
        people: people.to_string(),
        lanes: String::from("1"),
        shoes: shoe_sizes(rng, shoes),
        ..valid_draft(rng)
    }
}

/// Counts match but one shoe entry was added and never filled in.
pub fn blank_shoe_draft(rng: &mut ChaCha20Rng) -> BookingDraft {
    let mut draft = valid_draft(rng);
    let blank = rng.gen_range(0..draft.shoes.len());
    draft.shoes.update(blank, "");
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(seed)
    }

    #[test]
    fn builders_hit_their_validation_rule() {
        for seed in 0..50 {
            assert_eq!(valid_draft(&mut rng(seed)).validate(), ValidationResult::Ok);
            assert_eq!(
                incomplete_draft(&mut rng(seed)).validate(),
                ValidationResult::Incomplete
            );
            assert_eq!(
                overbooked_draft(&mut rng(seed)).validate(),
                ValidationResult::TooManyPlayersPerLane
            );
            assert_eq!(
                shoe_mismatch_draft(&mut rng(seed)).validate(),
                ValidationResult::ShoeCountMismatch
            );
            assert_eq!(
                blank_shoe_draft(&mut rng(seed)).validate(),
                ValidationResult::ShoeEntriesIncomplete
            );
        }
    }

    #[test]
    fn same_seed_builds_same_draft() {
        assert_eq!(valid_draft(&mut rng(7)), valid_draft(&mut rng(7)));
    }

    #[test]
    fn plan_builder_collects_expectations() {
        fn ok(_: &BookingOutcome) -> Result<()> {
            Ok(())
        }
        let plan = BookingPlan::new(valid_draft)
            .with_failing_backend()
            .with_expectation(ok);
        assert!(plan.backend_failing);
        assert_eq!(plan.expectations.len(), 1);
    }
}
