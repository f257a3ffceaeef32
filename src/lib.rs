//! Core domain logic for the Life Path healthcare portal.
//!
//! The browser UI and the REST backend own all I/O. This crate only derives
//! views over data those collaborators have already fetched: filtering
//! heterogeneous entity records, resolving appointment availability against
//! a physician's weekly schedule, and computing pagination strips.
//!
//! Every predicate here is pure and fail-closed: malformed filter queries
//! match nothing, missing schedules render dates unavailable, and absent
//! record fields never match. Only response-envelope decoding returns typed
//! errors, because there the caller must tell a backend-reported failure
//! apart from a shape bug.

pub mod availability;
pub mod config;
pub mod dates;
pub mod envelope;
pub mod filter;
pub mod models;
pub mod pagination;

pub use availability::{
    is_date_fully_booked, is_date_selectable, is_time_slot_booked, is_working_day, open_time_slots,
};
pub use envelope::{decode_list, decode_page, decode_records, EnvelopeError, Page};
pub use filter::filter_records;
pub use models::{BookedSlot, Category, Record, Role, SessionContext, TimeCatalog, WorkSchedule};
pub use pagination::{page_window, total_pages, PageToken};
