//! Submission gate for booking drafts.
//!
//! Rules are checked in a fixed order and the first failure wins, so a
//! partially filled form always reports the same message:
//!
//! 1. every one of date, time, players and lanes is filled in
//! 2. at most [`MAX_PLAYERS_PER_LANE`] players per lane
//! 3. one shoe entry per player
//! 4. every shoe entry has a size
use thiserror::Error;

use crate::draft::BookingDraft;

pub const MAX_PLAYERS_PER_LANE: i64 = 4;

pub const INCOMPLETE_MESSAGE: &str = "Alla fälten måste vara ifyllda";
pub const TOO_MANY_PLAYERS_MESSAGE: &str = "Det får max vara 4 spelare per bana";
pub const SHOE_COUNT_MESSAGE: &str = "Antalet skor måste stämma överens med antal spelare";
pub const SHOE_ENTRIES_MESSAGE: &str = "Alla skor måste vara ifyllda";

/// Outcome of checking a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Ok,
    Incomplete,
    TooManyPlayersPerLane,
    ShoeCountMismatch,
    ShoeEntriesIncomplete,
}

/// A failed [`ValidationResult`]; `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", INCOMPLETE_MESSAGE)]
    Incomplete,
    #[error("{}", TOO_MANY_PLAYERS_MESSAGE)]
    TooManyPlayersPerLane,
    #[error("{}", SHOE_COUNT_MESSAGE)]
    ShoeCountMismatch,
    #[error("{}", SHOE_ENTRIES_MESSAGE)]
    ShoeEntriesIncomplete,
}

impl ValidationResult {
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// User-facing message, `None` for [`ValidationResult::Ok`].
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Ok => None,
            Self::Incomplete => Some(INCOMPLETE_MESSAGE),
            Self::TooManyPlayersPerLane => Some(TOO_MANY_PLAYERS_MESSAGE),
            Self::ShoeCountMismatch => Some(SHOE_COUNT_MESSAGE),
            Self::ShoeEntriesIncomplete => Some(SHOE_ENTRIES_MESSAGE),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the matching [`ValidationError`] for every variant except `Ok`.
    pub const fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Ok => Ok(()),
            Self::Incomplete => Err(ValidationError::Incomplete),
            Self::TooManyPlayersPerLane => Err(ValidationError::TooManyPlayersPerLane),
            Self::ShoeCountMismatch => Err(ValidationError::ShoeCountMismatch),
            Self::ShoeEntriesIncomplete => Err(ValidationError::ShoeEntriesIncomplete),
        }
    }
}

fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

/// Check `draft` against the booking rules.
#[must_use]
pub fn validate(draft: &BookingDraft) -> ValidationResult {
    if [&draft.date, &draft.time, &draft.people, &draft.lanes]
        .into_iter()
        .any(|field| is_blank(field))
    {
        return ValidationResult::Incomplete;
    }

    let people = draft.player_count();
    let lanes = draft.lane_count();
    if people > lanes.saturating_mul(MAX_PLAYERS_PER_LANE) {
        return ValidationResult::TooManyPlayersPerLane;
    }

    let shoe_count = i64::try_from(draft.shoes.len()).unwrap_or(i64::MAX);
    if shoe_count != people {
        return ValidationResult::ShoeCountMismatch;
    }

    if draft.shoes.has_blank() {
        return ValidationResult::ShoeEntriesIncomplete;
    }

    ValidationResult::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ShoeSizes;

    fn draft(people: &str, lanes: &str, shoes: &[&str]) -> BookingDraft {
        BookingDraft {
            date: String::from("2024-12-13"),
            time: String::from("11:00"),
            people: people.to_string(),
            lanes: lanes.to_string(),
            shoes: shoes.iter().copied().collect::<ShoeSizes>(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&draft("2", "1", &["42", "43"])), ValidationResult::Ok);
    }

    #[test]
    fn each_missing_field_is_incomplete() {
        let full = draft("2", "1", &["42", "43"]);
        let blanks: [fn(&mut BookingDraft); 4] = [
            |d| d.date.clear(),
            |d| d.time.clear(),
            |d| d.people.clear(),
            |d| d.lanes = String::from("   "),
        ];
        for blank in blanks {
            let mut candidate = full.clone();
            blank(&mut candidate);
            assert_eq!(validate(&candidate), ValidationResult::Incomplete);
        }
    }

    #[test]
    fn incomplete_wins_over_every_other_rule() {
        let mut candidate = draft("9", "1", &[""]);
        candidate.time.clear();
        assert_eq!(validate(&candidate), ValidationResult::Incomplete);
    }

    #[test]
    fn too_many_players_checked_before_shoes() {
        let shoes = ["42"; 8];
        assert_eq!(
            validate(&draft("8", "1", &shoes)),
            ValidationResult::TooManyPlayersPerLane
        );
        assert_eq!(
            validate(&draft("5", "1", &[])),
            ValidationResult::TooManyPlayersPerLane
        );
        assert_eq!(
            validate(&draft("8", "2", &shoes)),
            ValidationResult::Ok,
            "four players per lane is allowed"
        );
    }

    #[test]
    fn shoe_count_must_match_players() {
        assert_eq!(
            validate(&draft("2", "1", &["42"])),
            ValidationResult::ShoeCountMismatch
        );
        assert_eq!(
            validate(&draft("4", "3", &[])),
            ValidationResult::ShoeCountMismatch
        );
        assert_eq!(
            validate(&draft("1", "1", &["42", "43"])),
            ValidationResult::ShoeCountMismatch
        );
    }

    #[test]
    fn blank_shoe_entry_is_reported_after_count_matches() {
        assert_eq!(
            validate(&draft("2", "1", &["42", ""])),
            ValidationResult::ShoeEntriesIncomplete
        );
        assert_eq!(
            validate(&draft("2", "1", &["  ", "42"])),
            ValidationResult::ShoeEntriesIncomplete
        );
    }

    #[test]
    fn messages_follow_variants() {
        assert_eq!(ValidationResult::Ok.message(), None);
        assert_eq!(
            ValidationResult::Incomplete.message(),
            Some("Alla fälten måste vara ifyllda")
        );
        assert_eq!(
            ValidationResult::ShoeEntriesIncomplete
                .into_result()
                .unwrap_err()
                .to_string(),
            "Alla skor måste vara ifyllda"
        );
        assert!(ValidationResult::Ok.into_result().is_ok());
    }
}
