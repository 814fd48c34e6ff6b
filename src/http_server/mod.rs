//! # chathub HTTP Server Module
//!
//! Axum-based API server for the community server directory.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/auth/*` - Signup, login, current member
//! - `/api/servers` - Server listing with filters (the directory's core)
//! - `/api/categories` - Category listing and creation

pub mod auth_routes;
pub mod config;
pub mod directory_routes;
pub mod errors;
pub mod extract;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use state::AppState;
