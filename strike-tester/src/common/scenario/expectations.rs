use anyhow::{Result, ensure};
use strike_core::{ConfirmationScreen, SUBMISSION_FAILED_MESSAGE, ValidationResult, price};

use crate::logic::BookingOutcome;

pub fn booking_accepted(outcome: &BookingOutcome) -> Result<()> {
    let Ok(confirmation) = &outcome.submission else {
        anyhow::bail!("booking was rejected: {:?}", outcome.submission);
    };
    ensure!(confirmation.active, "confirmation {} is not active", confirmation.id);
    ensure!(
        confirmation.when == outcome.draft.when(),
        "when {:?} does not match draft {:?}",
        confirmation.when,
        outcome.draft.when()
    );
    ensure!(
        outcome.submissions_sent == 1,
        "expected one submission, backend saw {}",
        outcome.submissions_sent
    );
    Ok(())
}

pub fn price_matches_formula(outcome: &BookingOutcome) -> Result<()> {
    let Ok(confirmation) = &outcome.submission else {
        anyhow::bail!("no confirmation to price");
    };
    let expected = price(&outcome.draft.lanes, &outcome.draft.people).to_string();
    ensure!(
        confirmation.price == expected,
        "price {} != {expected} for {} lanes and {} players",
        confirmation.price,
        outcome.draft.lanes,
        outcome.draft.people
    );
    Ok(())
}

pub fn confirmation_persisted(outcome: &BookingOutcome) -> Result<()> {
    let Ok(confirmation) = &outcome.submission else {
        anyhow::bail!("nothing was booked");
    };
    ensure!(
        outcome.stored.as_ref() == Some(confirmation),
        "session slot holds {:?}",
        outcome.stored
    );
    Ok(())
}

pub fn survives_navigation(outcome: &BookingOutcome) -> Result<()> {
    let Ok(confirmation) = &outcome.submission else {
        anyhow::bail!("nothing was booked");
    };
    ensure!(
        outcome.revisited.confirmation() == Some(confirmation),
        "confirmation view after navigating back shows {:?}",
        outcome.revisited
    );
    ensure!(
        outcome.synced.as_ref() == Some(confirmation),
        "backend lookup returned {:?}",
        outcome.synced
    );
    Ok(())
}

fn rejected_with(outcome: &BookingOutcome, expected: ValidationResult) -> Result<()> {
    ensure!(
        outcome.validation == expected,
        "expected {expected:?}, validator said {:?}",
        outcome.validation
    );
    let message = expected.message().unwrap_or_default();
    ensure!(
        outcome.submission.as_ref().err().map(String::as_str) == Some(message),
        "form message was {:?}",
        outcome.submission
    );
    ensure!(
        outcome.submissions_sent == 0,
        "rejected draft reached the backend"
    );
    ensure!(
        outcome.revisited == ConfirmationScreen::NoBooking,
        "rejected draft produced a confirmation"
    );
    Ok(())
}

pub fn rejected_incomplete(outcome: &BookingOutcome) -> Result<()> {
    rejected_with(outcome, ValidationResult::Incomplete)
}

pub fn rejected_too_many_players(outcome: &BookingOutcome) -> Result<()> {
    rejected_with(outcome, ValidationResult::TooManyPlayersPerLane)
}

pub fn rejected_shoe_count(outcome: &BookingOutcome) -> Result<()> {
    rejected_with(outcome, ValidationResult::ShoeCountMismatch)
}

pub fn rejected_blank_shoe(outcome: &BookingOutcome) -> Result<()> {
    rejected_with(outcome, ValidationResult::ShoeEntriesIncomplete)
}

pub fn outage_reported(outcome: &BookingOutcome) -> Result<()> {
    ensure!(
        outcome.validation == ValidationResult::Ok,
        "outage plan needs a valid draft"
    );
    ensure!(
        outcome.submission.as_ref().err().map(String::as_str) == Some(SUBMISSION_FAILED_MESSAGE),
        "form message was {:?}",
        outcome.submission
    );
    ensure!(outcome.retriable, "outage should be retriable");
    ensure!(outcome.stored.is_none(), "outage left {:?} in the session", outcome.stored);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strike_core::{BookingDraft, Confirmation, ShoeSizes};

    fn draft() -> BookingDraft {
        BookingDraft {
            date: "2024-12-13".to_string(),
            time: "11:00".to_string(),
            people: "2".to_string(),
            lanes: "1".to_string(),
            shoes: ShoeSizes::from(vec!["42".to_string(), "43".to_string()]),
        }
    }

    fn confirmation() -> Confirmation {
        Confirmation {
            id: "12345".to_string(),
            price: "340".to_string(),
            active: true,
            when: "2024-12-13 11:00".to_string(),
            lanes: "1".to_string(),
            people: "2".to_string(),
            shoes: vec!["42".to_string(), "43".to_string()],
        }
    }

    fn booked() -> BookingOutcome {
        BookingOutcome {
            seed: 1,
            draft: draft(),
            validation: ValidationResult::Ok,
            submission: Ok(confirmation()),
            retriable: false,
            submissions_sent: 1,
            stored: Some(confirmation()),
            revisited: ConfirmationScreen::Details(confirmation()),
            synced: Some(confirmation()),
        }
    }

    #[test]
    fn accepted_booking_meets_every_success_check() {
        let outcome = booked();
        booking_accepted(&outcome).expect("accepted");
        price_matches_formula(&outcome).expect("price");
        confirmation_persisted(&outcome).expect("persisted");
        survives_navigation(&outcome).expect("navigation");
    }

    #[test]
    fn wrong_price_is_reported() {
        let mut outcome = booked();
        if let Ok(confirmation) = &mut outcome.submission {
            confirmation.price = "460".to_string();
        }
        let err = price_matches_formula(&outcome).expect_err("price mismatch");
        assert!(err.to_string().contains("460 != 340"));
    }

    #[test]
    fn lost_confirmation_fails_navigation_check() {
        let outcome = BookingOutcome {
            revisited: ConfirmationScreen::NoBooking,
            ..booked()
        };
        assert!(survives_navigation(&outcome).is_err());
    }

    #[test]
    fn rejections_must_match_rule_and_message() {
        let outcome = BookingOutcome {
            validation: ValidationResult::ShoeCountMismatch,
            submission: Err("Antalet skor måste stämma överens med antal spelare".to_string()),
            submissions_sent: 0,
            stored: None,
            revisited: ConfirmationScreen::NoBooking,
            synced: None,
            ..booked()
        };
        rejected_shoe_count(&outcome).expect("shoe mismatch");
        assert!(rejected_incomplete(&outcome).is_err());
        assert!(outage_reported(&outcome).is_err());
    }
}
