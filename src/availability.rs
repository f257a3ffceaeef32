//! Appointment availability for the booking stepper.
//!
//! Given a physician+clinic pair's weekly schedule and the slots already
//! booked for that pair, decides which calendar dates are selectable and
//! which catalog times remain open on a selected date. Every check fails
//! closed: no schedule, or no physician/clinic selected yet, means "not
//! selectable", never an error.
//!
//! "Fully booked" is a cardinality heuristic: a date is full once the
//! number of booked slots for the pair reaches the catalog length, without
//! verifying the booked times are drawn from the catalog. A stray
//! off-catalog booking can therefore fill a date early. Accepted
//! approximation, kept as-is.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::models::{BookedSlot, TimeCatalog, WorkSchedule};

/// True iff the schedule marks the date's weekday as working. The weekday
/// comes from the calendar date alone, so no timezone shift can move a
/// booking to the neighbouring day. No schedule means not working.
pub fn is_working_day(date: NaiveDate, schedule: Option<&WorkSchedule>) -> bool {
    schedule.map_or(false, |s| s.is_working(date.weekday()))
}

/// True iff the pair already has at least as many bookings on the date as
/// the catalog has slots.
pub fn is_date_fully_booked(
    physician_id: i64,
    clinic_id: i64,
    date: NaiveDate,
    booked: &[BookedSlot],
    catalog: &TimeCatalog,
) -> bool {
    let taken = booked
        .iter()
        .filter(|slot| slot.matches_day(physician_id, clinic_id, date))
        .count();
    trace!(physician_id, clinic_id, %date, taken, capacity = catalog.len(), "booking load");
    taken >= catalog.len()
}

/// Whether the booking calendar should offer the date at all: a working
/// day for the pair that still has capacity.
pub fn is_date_selectable(
    date: NaiveDate,
    schedule: Option<&WorkSchedule>,
    booked: &[BookedSlot],
    catalog: &TimeCatalog,
) -> bool {
    let Some(schedule) = schedule else {
        return false;
    };
    is_working_day(date, Some(schedule))
        && !is_date_fully_booked(
            schedule.physician_id,
            schedule.clinic_id,
            date,
            booked,
            catalog,
        )
}

/// Exact-match check for one time slot on one date.
pub fn is_time_slot_booked(
    time: &str,
    physician_id: i64,
    clinic_id: i64,
    date: NaiveDate,
    booked: &[BookedSlot],
) -> bool {
    booked
        .iter()
        .any(|slot| slot.matches_day(physician_id, clinic_id, date) && slot.time == time)
}

/// Catalog times still open on the date, in catalog order.
pub fn open_time_slots<'a>(
    catalog: &'a TimeCatalog,
    physician_id: i64,
    clinic_id: i64,
    date: NaiveDate,
    booked: &[BookedSlot],
) -> Vec<&'a str> {
    catalog
        .iter()
        .filter(|time| !is_time_slot_booked(time, physician_id, clinic_id, date, booked))
        .collect()
}
