//! The canonical catalog of bookable time-of-day slots.

use serde::{Deserialize, Serialize};

/// The portal's standard booking grid: half-hour slots from 09:00 with a
/// midday break before 13:00.
pub const STANDARD_TIMES: [&str; 12] = [
    "09:00:00", "09:30:00", "10:00:00", "10:30:00", "11:00:00", "11:30:00", "13:00:00",
    "13:30:00", "14:00:00", "14:30:00", "15:00:00", "15:30:00",
];

/// An ordered, fixed sequence of canonical bookable times. Its length is
/// the denominator when deciding a date is fully booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeCatalog(Vec<String>);

impl TimeCatalog {
    pub fn new(times: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(times.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, time: &str) -> bool {
        self.0.iter().any(|t| t == time)
    }
}

impl Default for TimeCatalog {
    fn default() -> Self {
        Self::new(STANDARD_TIMES)
    }
}
