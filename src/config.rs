//! Application-level constants shared with the UI shell.

pub const APP_NAME: &str = "Life Path";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default rows per page on entity list screens. The backend honours a
/// `page_size` query parameter; this is the value the UI sends when the
/// URL does not override it.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
