//! # Catalog Store
//!
//! Repository abstraction over the persisted catalog, with an in-memory
//! implementation. Handlers only see the trait; a SQL-backed store would
//! slot in behind it.

use std::sync::RwLock;

use uuid::Uuid;

use super::category::Category;
use super::errors::{CatalogError, CatalogResult};
use super::query::{ServerListing, ServerQuery};
use super::server::ServerRecord;

/// Storage operations for categories, servers, and memberships
pub trait CatalogStore: Send + Sync {
    /// Register a new category; the name must be unused
    fn create_category(&self, name: &str, description: Option<String>) -> CatalogResult<Category>;

    /// All categories in insertion order
    fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    /// Create a server filed under the named category, owned by `owner_id`
    fn create_server(
        &self,
        name: &str,
        description: Option<String>,
        category: &str,
        owner_id: Uuid,
    ) -> CatalogResult<ServerRecord>;

    /// Add `member_id` to the server's member set
    fn join_server(&self, server_id: u64, member_id: Uuid) -> CatalogResult<ServerRecord>;

    /// Run a listing query against the full server set
    fn list_servers(&self, query: &ServerQuery) -> CatalogResult<Vec<ServerListing>>;
}

/// In-memory catalog store
///
/// # Invariants
/// - CAT-1: ids come from monotonic counters and are never reused
/// - CAT-4: vectors preserve insertion order
#[derive(Debug)]
pub struct InMemoryCatalog {
    categories: RwLock<Vec<Category>>,
    servers: RwLock<Vec<ServerRecord>>,
    next_category_id: RwLock<u64>,
    next_server_id: RwLock<u64>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
            servers: RwLock::new(Vec::new()),
            next_category_id: RwLock::new(1),
            next_server_id: RwLock::new(1),
        }
    }
}

fn poisoned(_: impl std::fmt::Debug) -> CatalogError {
    CatalogError::Storage("Lock poisoned".to_string())
}

impl CatalogStore for InMemoryCatalog {
    fn create_category(&self, name: &str, description: Option<String>) -> CatalogResult<Category> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidName(
                "category name must not be empty".to_string(),
            ));
        }

        let mut categories = self.categories.write().map_err(poisoned)?;
        if categories.iter().any(|c| c.name == name) {
            return Err(CatalogError::DuplicateCategory(name.to_string()));
        }

        let mut next_id = self.next_category_id.write().map_err(poisoned)?;
        let category = Category::new(*next_id, name.to_string(), description);
        *next_id += 1;

        categories.push(category.clone());
        Ok(category)
    }

    fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.clone())
    }

    fn create_server(
        &self,
        name: &str,
        description: Option<String>,
        category: &str,
        owner_id: Uuid,
    ) -> CatalogResult<ServerRecord> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidName(
                "server name must not be empty".to_string(),
            ));
        }

        // CAT-2: resolve the category before allocating an id
        let category_id = {
            let categories = self.categories.read().map_err(poisoned)?;
            categories
                .iter()
                .find(|c| c.name == category)
                .map(|c| c.id)
                .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?
        };

        let mut servers = self.servers.write().map_err(poisoned)?;
        let mut next_id = self.next_server_id.write().map_err(poisoned)?;
        let server = ServerRecord::new(*next_id, name.to_string(), description, owner_id, category_id);
        *next_id += 1;

        servers.push(server.clone());
        Ok(server)
    }

    fn join_server(&self, server_id: u64, member_id: Uuid) -> CatalogResult<ServerRecord> {
        let mut servers = self.servers.write().map_err(poisoned)?;
        let server = servers
            .iter_mut()
            .find(|s| s.id == server_id)
            .ok_or(CatalogError::UnknownServer(server_id))?;

        server.members.insert(member_id);
        Ok(server.clone())
    }

    fn list_servers(&self, query: &ServerQuery) -> CatalogResult<Vec<ServerListing>> {
        let servers = self.servers.read().map_err(poisoned)?.clone();
        let categories = self.categories.read().map_err(poisoned)?;
        query.apply(servers, categories.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_are_monotonic() {
        let store = InMemoryCatalog::new();
        let a = store.create_category("gaming", None).unwrap();
        let b = store.create_category("music", None).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let store = InMemoryCatalog::new();
        store.create_category("gaming", None).unwrap();
        let err = store.create_category("gaming", None).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn test_create_server_requires_existing_category() {
        let store = InMemoryCatalog::new();
        let err = store
            .create_server("alpha", None, "gaming", Uuid::new_v4())
            .unwrap_err();

        assert!(matches!(err, CatalogError::UnknownCategory(_)));
    }

    #[test]
    fn test_create_server_adds_owner_as_member() {
        let store = InMemoryCatalog::new();
        store.create_category("gaming", None).unwrap();

        let owner = Uuid::new_v4();
        let server = store.create_server("alpha", None, "gaming", owner).unwrap();

        assert!(server.has_member(owner));
        assert_eq!(server.owner_id, owner);
    }

    #[test]
    fn test_join_server_is_idempotent() {
        let store = InMemoryCatalog::new();
        store.create_category("gaming", None).unwrap();
        let server = store
            .create_server("alpha", None, "gaming", Uuid::new_v4())
            .unwrap();

        let joiner = Uuid::new_v4();
        let once = store.join_server(server.id, joiner).unwrap();
        let twice = store.join_server(server.id, joiner).unwrap();

        assert_eq!(once.member_count(), 2);
        assert_eq!(twice.member_count(), 2);
    }

    #[test]
    fn test_join_unknown_server_fails() {
        let store = InMemoryCatalog::new();
        let err = store.join_server(7, Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, CatalogError::UnknownServer(7)));
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let store = InMemoryCatalog::new();
        store.create_category("gaming", None).unwrap();
        for name in ["alpha", "beta", "gamma"] {
            store
                .create_server(name, None, "gaming", Uuid::new_v4())
                .unwrap();
        }

        let listed = store.list_servers(&ServerQuery::all()).unwrap();
        let names: Vec<&str> = listed.iter().map(|l| l.server.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }
}
