//! Pagination strip math for the entity list screens.

use serde::{Serialize, Serializer};

/// One entry in a pagination strip: a clickable page number or the
/// ellipsis stand-in for a run of hidden pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

// The UI strip expects a number for a page and the literal "..." for a
// hidden run, so the token serializes as one or the other.
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Computes the truncated strip for `current` of `total` pages.
///
/// Strips shorter than 8 pages are shown in full. Longer strips keep pages
/// 1 and 2, a window around the current page, and the last two pages. An
/// ellipsis only ever stands in for at least 2 hidden pages; a single
/// hidden page is shown as itself instead of being collapsed.
pub fn page_window(current: u32, total: u32) -> Vec<PageToken> {
    use PageToken::*;

    if total < 8 {
        return (1..=total).map(Page).collect();
    }

    let mut tokens = vec![Page(1), Page(2)];

    let start = (current.saturating_sub(1)).max(3);
    let end = (current + 1).min(total - 2);

    if current > 4 {
        // Pages 3..start-1 are hidden. Collapse only a real run.
        match start - 3 {
            0 => {}
            1 => tokens.push(Page(3)),
            _ => tokens.push(Ellipsis),
        }
    }

    for page in start..=end {
        tokens.push(Page(page));
    }

    tokens.push(Page(total - 1));
    tokens.push(Page(total));
    tokens
}

/// Pages needed for `total_rows` rows at `page_size` rows per page
/// (ceiling division, as the backend computes it).
pub fn total_pages(total_rows: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    ((total_rows + u64::from(page_size) - 1) / u64::from(page_size)) as u32
}
