//! Short name generation and validation utilities.
//!
//! Generated names are 8 ASCII letters drawn uniformly from `[a-zA-Z]`.
//! Caller-supplied names are validated separately and may use a wider
//! character set.

use std::sync::LazyLock;

use rand::{Rng, SeedableRng, rngs::StdRng};
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Length of every generated short name.
pub const SHORT_NAME_LENGTH: usize = 8;

/// Maximum length of a caller-supplied short name.
pub const MAX_SHORT_NAME_LENGTH: usize = 64;

const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Names that would shadow top-level routes.
const RESERVED_NAMES: &[&str] = &["links", "health", "ping"];

/// Compiled regex for caller-supplied short names.
pub static SHORT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("short name regex is valid"));

/// Source of short names for links created without one.
#[cfg_attr(test, mockall::automock)]
pub trait ShortCodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production generator backed by [`generate_short_name`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShortCode;

impl ShortCodeGenerator for RandomShortCode {
    fn generate(&self) -> String {
        generate_short_name()
    }
}

/// Generates a random short name.
///
/// Every call seeds its own `StdRng` from the operating system, so concurrent
/// callers never share generator state.
///
/// # Examples
///
/// ```ignore
/// let name = generate_short_name();
/// assert_eq!(name.len(), 8);
/// assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
/// ```
pub fn generate_short_name() -> String {
    let mut rng = StdRng::from_os_rng();

    (0..SHORT_NAME_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-supplied short name.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_short_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.len() > MAX_SHORT_NAME_LENGTH {
        return Err(AppError::bad_request(
            "Short name must be 1-64 characters",
            json!({ "provided_length": name.len() }),
        ));
    }

    if !SHORT_NAME_REGEX.is_match(name) {
        return Err(AppError::bad_request(
            "Short name can only contain letters, digits, hyphens and underscores",
            json!({ "short_name": name }),
        ));
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(AppError::bad_request(
            "This short name is reserved",
            json!({ "short_name": name }),
        ));
    }

    Ok(())
}
