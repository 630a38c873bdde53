//! Range query parameter for link listing.

use serde::Deserialize;
use serde_with::{json::JsonString, serde_as};

use crate::domain::pagination::PageRange;

/// Query parameters for `GET /links`.
///
/// `range` is a JSON pair of 1-based inclusive bounds, e.g. `range=[11,20]`.
/// Any other shape fails query extraction.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    #[serde_as(as = "Option<JsonString>")]
    #[serde(default)]
    pub range: Option<(i64, i64)>,
}

impl RangeParams {
    /// Requested range, `[1,10]` when absent. Bounds are checked by
    /// [`PageRange::resolve`].
    pub fn page_range(&self) -> PageRange {
        match self.range {
            Some((from, to)) => PageRange::new(from, to),
            None => PageRange::DEFAULT,
        }
    }
}
