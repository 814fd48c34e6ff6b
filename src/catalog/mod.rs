//! # Server Catalog
//!
//! Data model and store for the community server directory:
//! categories, server records, and memberships.
//!
//! ## Invariants
//! - CAT-1: Server ids are unique and never reused
//! - CAT-2: Every server references an existing category
//! - CAT-3: The owner is a member from creation onward
//! - CAT-4: Listing order is insertion order (stable truncation)

pub mod category;
pub mod errors;
pub mod query;
pub mod server;
pub mod store;

pub use category::Category;
pub use errors::{CatalogError, CatalogResult};
pub use query::{ServerListing, ServerQuery};
pub use server::ServerRecord;
pub use store::{CatalogStore, InMemoryCatalog};
