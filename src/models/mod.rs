pub mod booking;
pub mod catalog;
pub mod category;
pub mod record;
pub mod schedule;
pub mod session;

pub use booking::BookedSlot;
pub use catalog::TimeCatalog;
pub use category::Category;
pub use record::Record;
pub use schedule::WorkSchedule;
pub use session::{Role, SessionContext};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
