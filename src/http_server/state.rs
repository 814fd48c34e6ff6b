//! Shared Application State
//!
//! One state struct shared by all route modules: the auth service and the
//! catalog store, both behind the same `Arc`.

use crate::auth::{AuthService, InMemoryMemberRepository, JwtConfig, PasswordPolicy};
use crate::catalog::InMemoryCatalog;

/// State shared across handlers
pub struct AppState {
    pub auth: AuthService<InMemoryMemberRepository>,
    pub catalog: InMemoryCatalog,
}

impl AppState {
    /// Create app state with the given auth configuration
    pub fn new(jwt_config: JwtConfig, policy: PasswordPolicy) -> Self {
        Self {
            auth: AuthService::new(InMemoryMemberRepository::new(), jwt_config, policy),
            catalog: InMemoryCatalog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(JwtConfig::default(), PasswordPolicy::default())
    }
}
