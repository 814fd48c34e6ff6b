//! Directory HTTP Routes
//!
//! The server listing endpoint and the catalog mutations that feed it.
//!
//! `GET /servers` accepts five optional query parameters, all strings on
//! the wire:
//!
//! - `category`: keep servers filed under this exact category name
//! - `by_user`: `"true"` keeps servers the caller is a member of; anonymous
//!   callers get the unfiltered set (no error)
//! - `with_num_members`: `"true"` adds a `num_members` field per server
//! - `qty`: truncate to the first N results
//! - `by_server_id`: authenticated callers only; narrow to a single id

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{auth_error, catalog_error, ApiError};
use super::extract::{authenticated_member, require_member};
use super::state::AppState;
use crate::catalog::{CatalogError, CatalogStore, Category, ServerListing, ServerQuery};
use crate::observability::Logger;

// ==================
// Request/Response Types
// ==================

/// Query parameters for the server listing endpoint
///
/// Everything arrives as a string; `by_user` and `with_num_members` are
/// compared against the literal `"true"`.
#[derive(Debug, Default, Deserialize)]
pub struct ServerListParams {
    pub category: Option<String>,
    pub qty: Option<String>,
    pub by_user: Option<String>,
    pub by_server_id: Option<String>,
    pub with_num_members: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServerResponse {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub owner_id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_members: Option<usize>,
}

impl From<ServerListing> for ServerResponse {
    fn from(listing: ServerListing) -> Self {
        Self {
            id: listing.server.id,
            name: listing.server.name,
            description: listing.server.description,
            category: listing.category_name,
            owner_id: listing.server.owner_id.to_string(),
            created_at: listing.server.created_at.to_rfc3339(),
            num_members: listing.num_members,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateServerRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ==================
// Directory Routes
// ==================

/// Create directory routes
pub fn directory_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/servers", get(list_servers_handler))
        .route("/servers", post(create_server_handler))
        .route("/servers/:id/join", post(join_server_handler))
        .route("/categories", get(list_categories_handler))
        .route("/categories", post(create_category_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Server listing handler
///
/// Builds the query refinements in the same order the filters apply:
/// category, membership, annotation, truncation, id lookup.
async fn list_servers_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<ServerListParams>,
) -> Result<Json<Vec<ServerResponse>>, ApiError> {
    let by_user = params.by_user.as_deref() == Some("true");
    let with_num_members = params.with_num_members.as_deref() == Some("true");

    let mut query = ServerQuery::all();

    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        query = query.category(category);
    }

    if by_user {
        // Anonymous callers get the unfiltered set; only by_server_id
        // demands authentication.
        if let Some(member_id) = authenticated_member(&state, &headers) {
            query = query.member_of(member_id);
        }
    }

    if with_num_members {
        query = query.with_member_count();
    }

    if let Some(qty) = params.qty.as_deref().filter(|q| !q.is_empty()) {
        let n: usize = qty
            .parse()
            .map_err(|_| catalog_error(CatalogError::MalformedQuantity(qty.to_string())))?;
        query = query.limit(n);
    }

    if let Some(raw_id) = params.by_server_id.as_deref().filter(|s| !s.is_empty()) {
        require_member(&state, &headers).map_err(auth_error)?;
        let server_id: u64 = raw_id
            .parse()
            .map_err(|_| catalog_error(CatalogError::MalformedServerId(raw_id.to_string())))?;
        query = query.id(server_id);
    }

    let listings = state.catalog.list_servers(&query).map_err(|e| {
        Logger::warn("SERVER_LIST_REJECTED", &[("reason", &e.to_string())]);
        catalog_error(e)
    })?;

    Logger::info("SERVER_LIST", &[("results", &listings.len().to_string())]);

    Ok(Json(listings.into_iter().map(ServerResponse::from).collect()))
}

/// Create server handler (authenticated)
async fn create_server_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateServerRequest>,
) -> Result<(StatusCode, Json<ServerResponse>), ApiError> {
    let owner_id = require_member(&state, &headers).map_err(auth_error)?;
    let CreateServerRequest {
        name,
        description,
        category,
    } = request;

    let server = state
        .catalog
        .create_server(&name, description, &category, owner_id)
        .map_err(catalog_error)?;

    Logger::info(
        "SERVER_CREATED",
        &[("name", &server.name), ("server_id", &server.id.to_string())],
    );

    let listing = ServerListing {
        category_name: category,
        num_members: None,
        server,
    };
    Ok((StatusCode::CREATED, Json(ServerResponse::from(listing))))
}

/// Join server handler (authenticated)
async fn join_server_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(server_id): Path<u64>,
) -> Result<Json<ServerResponse>, ApiError> {
    let member_id = require_member(&state, &headers).map_err(auth_error)?;

    let server = state
        .catalog
        .join_server(server_id, member_id)
        .map_err(catalog_error)?;

    // Resolve the category name for the response
    let category_name = state
        .catalog
        .list_categories()
        .map_err(catalog_error)?
        .into_iter()
        .find(|c| c.id == server.category_id)
        .map(|c| c.name)
        .unwrap_or_default();

    Logger::info(
        "SERVER_JOINED",
        &[
            ("member_id", &member_id.to_string()),
            ("server_id", &server.id.to_string()),
        ],
    );

    Ok(Json(ServerResponse::from(ServerListing {
        server,
        category_name,
        num_members: None,
    })))
}

/// Category listing handler
async fn list_categories_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state.catalog.list_categories().map_err(catalog_error)?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Category creation handler
async fn create_category_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let category = state
        .catalog
        .create_category(&request.name, request.description)
        .map_err(catalog_error)?;

    Logger::info("CATEGORY_CREATED", &[("name", &category.name)]);

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}
