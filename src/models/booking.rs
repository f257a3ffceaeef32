//! Booked appointment slots, as `/api/booked-timeslots` serializes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time already reserved for a (physician, clinic) pair.
///
/// The backend emits dates as `YYYY-MM-DD` and times as `HH:MM:SS`; the
/// time stays an opaque token so it compares exactly against the catalog.
/// No two booked slots share all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlot {
    #[serde(rename = "PhysicianID")]
    pub physician_id: i64,
    #[serde(rename = "ClinicID")]
    pub clinic_id: i64,
    #[serde(rename = "AppointmentDate")]
    pub date: NaiveDate,
    #[serde(rename = "AppointmentTime")]
    pub time: String,
}

impl BookedSlot {
    pub fn new(
        physician_id: i64,
        clinic_id: i64,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Self {
        Self {
            physician_id,
            clinic_id,
            date,
            time: time.into(),
        }
    }

    /// Whether this slot belongs to the given pair on the given date.
    pub fn matches_day(&self, physician_id: i64, clinic_id: i64, date: NaiveDate) -> bool {
        self.physician_id == physician_id && self.clinic_id == clinic_id && self.date == date
    }
}
