//! Link entity representing a shortened URL mapping.

/// A persisted short link.
///
/// `short_url` is always `base_path + "/" + short_name`. Stores persist the
/// value they are handed and never derive it themselves.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, original_url: String, short_name: String, short_url: String) -> Self {
        Self {
            id,
            original_url,
            short_name,
            short_url,
        }
    }
}

/// Input data for creating a new link. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}

/// Full replacement of a link's mutable fields.
///
/// Unlike a patch, every field is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}
