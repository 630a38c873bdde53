//! Translation of sqlx errors into [`StoreError`] outcomes.

use crate::domain::repositories::StoreError;

/// Name of the unique constraint on `links.short_name`.
pub const SHORT_NAME_CONSTRAINT: &str = "links_short_name_key";

pub fn is_unique_violation_on_short_name(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_NAME_CONSTRAINT))
}

/// Classifies a sqlx error by kind.
pub fn classify(e: sqlx::Error) -> StoreError {
    if matches!(e, sqlx::Error::RowNotFound) {
        return StoreError::NotFound;
    }

    if is_unique_violation_on_short_name(&e) {
        return StoreError::UniqueViolation;
    }

    StoreError::Unknown(e.to_string())
}
