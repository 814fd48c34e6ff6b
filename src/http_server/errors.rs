//! HTTP Error Payloads
//!
//! Uniform `{ "error": ..., "code": ... }` body for every failed request,
//! with the status taken from the domain error's `status_code()`.

use axum::http::StatusCode;
use axum::Json;

use crate::auth::AuthError;
use crate::catalog::CatalogError;

/// Error body returned by all endpoints
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// A failed request: status plus JSON body
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn to_api_error(message: String, code: u16) -> ApiError {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse { error: message, code }))
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

impl From<CatalogError> for ErrorResponse {
    fn from(err: CatalogError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

/// Map an auth error to a response
pub fn auth_error(err: AuthError) -> ApiError {
    to_api_error(err.to_string(), err.status_code())
}

/// Map a catalog error to a response
pub fn catalog_error(err: CatalogError) -> ApiError {
    to_api_error(err.to_string(), err.status_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_maps_status() {
        let (status, Json(body)) = auth_error(AuthError::AuthenticationRequired);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.code, 401);
    }

    #[test]
    fn test_catalog_error_maps_status() {
        let (status, Json(body)) = catalog_error(CatalogError::UnknownServer(9));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Server: 9 is unknown.");
    }
}
