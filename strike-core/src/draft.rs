//! In-progress booking form state and the per-player shoe list.
use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::validation::{self, ValidationResult};

/// Ordered list of shoe sizes, one entry per player.
///
/// Entries are addressed by position only. Removing an entry shifts every
/// later entry down by one, which also changes its display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeSizes(Vec<String>);

impl ShoeSizes {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an empty entry and return its position.
    pub fn add(&mut self) -> usize {
        self.0.push(String::new());
        self.0.len() - 1
    }

    /// Remove the entry at `position`, returning its value.
    ///
    /// Out-of-range positions leave the list untouched.
    pub fn remove(&mut self, position: usize) -> Option<String> {
        (position < self.0.len()).then(|| self.0.remove(position))
    }

    /// Set the size at `position`. Returns `false` when there is no such entry.
    pub fn update(&mut self, position: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(position) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether any entry is still blank.
    #[must_use]
    pub fn has_blank(&self) -> bool {
        self.0.iter().any(|size| size.trim().is_empty())
    }

    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.0.clone()
    }

    /// Display label for the entry at `position` (labels are 1-based).
    #[must_use]
    pub fn label(position: usize) -> String {
        format!("Shoe size / person {}", position + 1)
    }
}

impl From<Vec<String>> for ShoeSizes {
    fn from(sizes: Vec<String>) -> Self {
        Self(sizes)
    }
}

impl<'a> FromIterator<&'a str> for ShoeSizes {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Booking form contents as typed by the user.
///
/// Counts are kept as the raw field text so an untouched field stays
/// distinguishable from an explicit `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub date: String,
    pub time: String,
    pub people: String,
    pub lanes: String,
    pub shoes: ShoeSizes,
}

impl BookingDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Combined `"date time"` value sent to the backend.
    #[must_use]
    pub fn when(&self) -> String {
        format!("{} {}", self.date, self.time)
    }

    #[must_use]
    pub fn player_count(&self) -> i64 {
        pricing::parse_or_zero(&self.people)
    }

    #[must_use]
    pub fn lane_count(&self) -> i64 {
        pricing::parse_or_zero(&self.lanes)
    }

    /// Price the current draft would be charged.
    #[must_use]
    pub fn price(&self) -> i64 {
        pricing::price(&self.lanes, &self.people)
    }

    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        validation::validate(self)
    }
}
