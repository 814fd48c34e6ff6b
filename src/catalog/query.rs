//! # Server Listing Query
//!
//! The filter chain behind `GET /api/servers`. A `ServerQuery` collects the
//! requested refinements and applies them in a fixed order:
//!
//! 1. category name filter
//! 2. membership filter
//! 3. member-count annotation
//! 4. truncation to the first N records
//! 5. single-id lookup, checked against the already-refined set
//!
//! The id lookup runs last on purpose: a record excluded by an earlier step
//! (including truncation) is reported as unknown.

use std::collections::HashMap;

use uuid::Uuid;

use super::category::Category;
use super::errors::{CatalogError, CatalogResult};
use super::server::ServerRecord;

/// A server record paired with listing-time context
#[derive(Debug, Clone)]
pub struct ServerListing {
    /// The underlying record
    pub server: ServerRecord,

    /// Resolved category name
    pub category_name: String,

    /// Member count, present only when the query asked for it
    pub num_members: Option<usize>,
}

/// A declarative refinement of the full server set
#[derive(Debug, Clone, Default)]
pub struct ServerQuery {
    category: Option<String>,
    member_of: Option<Uuid>,
    with_member_count: bool,
    limit: Option<usize>,
    id: Option<u64>,
}

impl ServerQuery {
    /// Query matching every server
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only servers filed under the category with this exact name
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    /// Keep only servers the given member belongs to
    pub fn member_of(mut self, member_id: Uuid) -> Self {
        self.member_of = Some(member_id);
        self
    }

    /// Annotate each result with its member count
    pub fn with_member_count(mut self) -> Self {
        self.with_member_count = true;
        self
    }

    /// Truncate the result set to the first `n` records
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Keep only the server with this id; fails if the refined set is empty
    pub fn id(mut self, server_id: u64) -> Self {
        self.id = Some(server_id);
        self
    }

    /// Apply the refinements to `servers` in the fixed order above.
    ///
    /// `servers` must already be in stable listing order (CAT-4); the
    /// truncation step relies on it.
    pub fn apply(
        &self,
        servers: Vec<ServerRecord>,
        categories: &[Category],
    ) -> CatalogResult<Vec<ServerListing>> {
        let names: HashMap<u64, &str> = categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let mut result = servers;

        if let Some(category) = &self.category {
            // Exact name match; a name no category has yields an empty set,
            // not an error.
            let wanted: Option<u64> = categories
                .iter()
                .find(|c| &c.name == category)
                .map(|c| c.id);
            result.retain(|s| Some(s.category_id) == wanted);
        }

        if let Some(member_id) = self.member_of {
            result.retain(|s| s.has_member(member_id));
        }

        if let Some(n) = self.limit {
            result.truncate(n);
        }

        if let Some(server_id) = self.id {
            result.retain(|s| s.id == server_id);
            if result.is_empty() {
                return Err(CatalogError::UnknownServer(server_id));
            }
        }

        result
            .into_iter()
            .map(|server| {
                let category_name = names
                    .get(&server.category_id)
                    .map(|n| n.to_string())
                    .ok_or_else(|| {
                        CatalogError::Storage(format!(
                            "server {} references missing category {}",
                            server.id, server.category_id
                        ))
                    })?;

                let num_members = self.with_member_count.then(|| server.member_count());

                Ok(ServerListing {
                    server,
                    category_name,
                    num_members,
                })
            })
            .collect()
    }
}
