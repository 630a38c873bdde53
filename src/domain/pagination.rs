//! Range pagination: 1-based inclusive `[from, to]` to `limit`/`offset`.

use serde_json::json;

use crate::error::AppError;

/// Caller-facing inclusive range, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub from: i64,
    pub to: i64,
}

/// Store-facing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageRange {
    /// Default range used when a caller supplies none.
    pub const DEFAULT: PageRange = PageRange { from: 1, to: 10 };

    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Validates the range and converts it to a store window.
    ///
    /// # Validation
    ///
    /// - `from` must be > 0
    /// - `to` must be > 0
    /// - `from` must be < `to`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any rule is violated.
    pub fn resolve(self) -> Result<PageWindow, AppError> {
        if self.from <= 0 || self.to <= 0 {
            return Err(AppError::bad_request(
                "Range bounds must be positive",
                json!({ "from": self.from, "to": self.to }),
            ));
        }

        if self.from >= self.to {
            return Err(AppError::bad_request(
                "Range start must be less than range end",
                json!({ "from": self.from, "to": self.to }),
            ));
        }

        Ok(PageWindow {
            limit: self.to - self.from + 1,
            offset: self.from - 1,
        })
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
