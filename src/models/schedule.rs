//! Weekly recurring work schedules for a physician at a clinic.
//!
//! The backend stores one schedule row per work assignment, with one column
//! per weekday. MySQL serializes those columns as `0`/`1`; re-encoded rows
//! may carry real booleans instead, so decoding accepts both. A physician
//! and clinic pair has at most one active schedule at a time.

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dates::weekday_from_name;

/// Weekday availability flags for one (physician, clinic) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    #[serde(rename = "PhysicianID")]
    pub physician_id: i64,
    #[serde(rename = "ClinicID")]
    pub clinic_id: i64,
    #[serde(rename = "Monday", deserialize_with = "day_flag", default)]
    pub monday: bool,
    #[serde(rename = "Tuesday", deserialize_with = "day_flag", default)]
    pub tuesday: bool,
    #[serde(rename = "Wednesday", deserialize_with = "day_flag", default)]
    pub wednesday: bool,
    #[serde(rename = "Thursday", deserialize_with = "day_flag", default)]
    pub thursday: bool,
    #[serde(rename = "Friday", deserialize_with = "day_flag", default)]
    pub friday: bool,
    #[serde(rename = "Saturday", deserialize_with = "day_flag", default)]
    pub saturday: bool,
    #[serde(rename = "Sunday", deserialize_with = "day_flag", default)]
    pub sunday: bool,
}

impl WorkSchedule {
    /// A schedule with every day off.
    pub fn closed(physician_id: i64, clinic_id: i64) -> Self {
        Self {
            physician_id,
            clinic_id,
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
            saturday: false,
            sunday: false,
        }
    }

    /// Builds a schedule from the display form the work-assignment editor
    /// uses, e.g. `"Monday, Wednesday, Friday"`. Unrecognized day names are
    /// skipped; three-letter abbreviations are accepted.
    pub fn from_day_list(physician_id: i64, clinic_id: i64, days: &str) -> Self {
        let mut schedule = Self::closed(physician_id, clinic_id);
        for name in days.split(',') {
            if let Some(day) = weekday_from_name(name.trim()) {
                schedule.set_working(day, true);
            }
        }
        schedule
    }

    pub fn is_working(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn set_working(&mut self, day: Weekday, working: bool) {
        let flag = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *flag = working;
    }

    /// Working days in Monday-first order, for display.
    pub fn day_list(&self) -> String {
        const WEEK: [(Weekday, &str); 7] = [
            (Weekday::Mon, "Monday"),
            (Weekday::Tue, "Tuesday"),
            (Weekday::Wed, "Wednesday"),
            (Weekday::Thu, "Thursday"),
            (Weekday::Fri, "Friday"),
            (Weekday::Sat, "Saturday"),
            (Weekday::Sun, "Sunday"),
        ];
        WEEK.iter()
            .filter(|(day, _)| self.is_working(*day))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Accepts `0`/`1`, `true`/`false`, or `null` for a weekday column.
fn day_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected weekday flag, got {other}"
        ))),
    }
}
