//! # Category Model
//!
//! Categories group servers by topic. Names are unique within the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier, assigned by the store
    pub id: u64,

    /// Category name (unique)
    pub name: String,

    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with the given id and name
    pub fn new(id: u64, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
            created_at: Utc::now(),
        }
    }
}
