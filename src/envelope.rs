//! Decoding of the backend's JSON response envelopes.
//!
//! Every list endpoint wraps its payload as `{ success, data, error? }`;
//! paginated endpoints add `page`, `page_size`, `total` and `total_pages`.
//! The HTTP fetch itself belongs to the UI layer; this module only turns an
//! already-fetched body into typed rows, and is the one place in the crate
//! that surfaces errors, since a backend-reported failure and a shape bug
//! need different handling upstream.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::Record;
use crate::pagination;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("backend reported failure: {0}")]
    Backend(String),

    #[error("response is missing the data payload")]
    MissingData,

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl RawEnvelope {
    /// Applies the success/error contract and hands back the data payload.
    fn into_data(self) -> Result<Value, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Backend(
                self.error.unwrap_or_else(|| "no error message".into()),
            ));
        }
        match self.data {
            Some(Value::Null) | None => Err(EnvelopeError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

/// Decodes a list envelope into typed rows.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, EnvelopeError> {
    let raw: RawEnvelope = serde_json::from_str(body)?;
    let items: Vec<T> = serde_json::from_value(raw.into_data()?)?;
    debug!(rows = items.len(), "decoded list envelope");
    Ok(items)
}

/// Decodes a list envelope into schemaless records for the filter screens.
pub fn decode_records(body: &str) -> Result<Vec<Record>, EnvelopeError> {
    decode_list(body)
}

/// Decodes a paginated envelope. Missing pagination fields fall back to
/// page 1 at the default page size, with totals derived from the rows.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, EnvelopeError> {
    let raw: RawEnvelope = serde_json::from_str(body)?;
    let page = raw.page.unwrap_or(1);
    let page_size = raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let (total, total_pages) = (raw.total, raw.total_pages);

    let items: Vec<T> = serde_json::from_value(raw.into_data()?)?;
    let total = total.unwrap_or(items.len() as u64);
    let total_pages = total_pages.unwrap_or_else(|| pagination::total_pages(total, page_size));

    debug!(rows = items.len(), page, total_pages, "decoded paged envelope");
    Ok(Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    })
}
