//! # Server Record Model
//!
//! A server is a community space owned by a member, filed under a category,
//! with a set of member associations.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted community server record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Unique server identifier, assigned by the store
    pub id: u64,

    /// Display name
    pub name: String,

    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Member who owns the server
    pub owner_id: Uuid,

    /// Category this server is filed under
    pub category_id: u64,

    /// Member associations (includes the owner)
    pub members: BTreeSet<Uuid>,

    /// When the server was created
    pub created_at: DateTime<Utc>,
}

impl ServerRecord {
    /// Create a new server record
    ///
    /// # Invariant
    /// CAT-3: The owner is inserted into the member set at creation.
    pub fn new(
        id: u64,
        name: String,
        description: Option<String>,
        owner_id: Uuid,
        category_id: u64,
    ) -> Self {
        let mut members = BTreeSet::new();
        members.insert(owner_id);

        Self {
            id,
            name,
            description,
            owner_id,
            category_id,
            members,
            created_at: Utc::now(),
        }
    }

    /// Whether the given member belongs to this server
    pub fn has_member(&self, member_id: Uuid) -> bool {
        self.members.contains(&member_id)
    }

    /// Number of members, including the owner
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_member_at_creation() {
        let owner = Uuid::new_v4();
        let server = ServerRecord::new(1, "rustaceans".to_string(), None, owner, 1);

        assert!(server.has_member(owner));
        assert_eq!(server.member_count(), 1);
    }

    #[test]
    fn test_member_count_tracks_set() {
        let owner = Uuid::new_v4();
        let mut server = ServerRecord::new(1, "rustaceans".to_string(), None, owner, 1);

        server.members.insert(Uuid::new_v4());
        server.members.insert(Uuid::new_v4());

        assert_eq!(server.member_count(), 3);
    }
}
