//! chathub - A self-hostable community server directory API
//!
//! Members sign up, create servers filed under categories, and join each
//! other's servers; `GET /api/servers` lists the directory with optional
//! filters and a member-count annotation.

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
