//! # Auth Service
//!
//! Composes the member repository, password policy, and JWT manager into
//! the signup/login/authenticate operations the HTTP layer calls.

use std::sync::Arc;

use uuid::Uuid;

use super::crypto::PasswordPolicy;
use super::errors::{AuthError, AuthResult};
use super::jwt::{JwtConfig, JwtManager};
use super::member::{LoginRequest, Member, MemberRepository, SignupRequest};

/// Auth service combining all auth components
pub struct AuthService<R: MemberRepository> {
    repo: Arc<R>,
    jwt: JwtManager,
    policy: PasswordPolicy,
}

impl<R: MemberRepository> AuthService<R> {
    pub fn new(repo: R, jwt_config: JwtConfig, policy: PasswordPolicy) -> Self {
        Self {
            repo: Arc::new(repo),
            jwt: JwtManager::new(jwt_config),
            policy,
        }
    }

    /// Register a new member and issue an access token
    pub fn signup(&self, request: SignupRequest) -> AuthResult<(Member, String)> {
        if request.username.trim().is_empty() {
            return Err(AuthError::InvalidUsername);
        }
        if self.repo.username_exists(&request.username)? {
            return Err(AuthError::UsernameTaken);
        }

        let member = Member::new(request.username, &request.password, &self.policy)?;
        self.repo.create(&member)?;

        let token = self.jwt.generate_access_token(&member)?;
        Ok((member, token))
    }

    /// Verify credentials and issue an access token
    pub fn login(&self, request: LoginRequest) -> AuthResult<(Member, String)> {
        // Same error whether the username or the password is wrong
        let member = self
            .repo
            .find_by_username(&request.username)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !member.verify_password(&request.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt.generate_access_token(&member)?;
        Ok((member, token))
    }

    /// Map a bearer token to the calling member's id
    pub fn authenticate(&self, token: &str) -> AuthResult<Uuid> {
        let claims = self.jwt.validate_token(token)?;
        JwtManager::member_id(&claims)
    }

    /// Look up a member by id
    pub fn member(&self, id: Uuid) -> AuthResult<Option<Member>> {
        self.repo.find_by_id(id)
    }

    /// Access token lifetime in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.jwt.expires_in()
    }
}
