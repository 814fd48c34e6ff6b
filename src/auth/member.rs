//! # Member Accounts
//!
//! Member model and repository. Members own servers and appear in server
//! member sets; the catalog references them by id only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::crypto::{hash_password, verify_password, PasswordPolicy};
use super::errors::{AuthError, AuthResult};

/// Member account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    pub id: Uuid,

    /// Login name (unique)
    pub username: String,

    /// Argon2id password hash (never plaintext)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with the given username and password
    pub fn new(username: String, password: &str, policy: &PasswordPolicy) -> AuthResult<Self> {
        policy.validate(password)?;
        let password_hash = hash_password(password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Verify a password against this member's stored hash
    pub fn verify_password(&self, password: &str) -> AuthResult<bool> {
        verify_password(password, &self.password_hash)
    }
}

/// Account creation request
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Member repository trait
///
/// Abstracts storage operations for member accounts.
pub trait MemberRepository: Send + Sync {
    /// Find a member by their ID
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<Member>>;

    /// Find a member by their username
    fn find_by_username(&self, username: &str) -> AuthResult<Option<Member>>;

    /// Check if a username is already registered
    fn username_exists(&self, username: &str) -> AuthResult<bool>;

    /// Create a new member
    fn create(&self, member: &Member) -> AuthResult<()>;
}

/// In-memory member repository
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: std::sync::RwLock<Vec<Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberRepository for InMemoryMemberRepository {
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<Member>> {
        let members = self
            .members
            .read()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;
        Ok(members.iter().find(|m| m.id == id).cloned())
    }

    fn find_by_username(&self, username: &str) -> AuthResult<Option<Member>> {
        let members = self
            .members
            .read()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;
        Ok(members.iter().find(|m| m.username == username).cloned())
    }

    fn username_exists(&self, username: &str) -> AuthResult<bool> {
        let members = self
            .members
            .read()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;
        Ok(members.iter().any(|m| m.username == username))
    }

    fn create(&self, member: &Member) -> AuthResult<()> {
        let mut members = self
            .members
            .write()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;
        members.push(member.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation_hashes_password() {
        let member = Member::new(
            "alice".to_string(),
            "long enough password",
            &PasswordPolicy::default(),
        )
        .unwrap();

        assert_ne!(member.password_hash, "long enough password");
        assert!(member.verify_password("long enough password").unwrap());
    }

    #[test]
    fn test_weak_password_rejected() {
        let err = Member::new("bob".to_string(), "short", &PasswordPolicy::default()).unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[test]
    fn test_repository_find_by_username() {
        let repo = InMemoryMemberRepository::new();
        let member = Member::new(
            "carol".to_string(),
            "long enough password",
            &PasswordPolicy::default(),
        )
        .unwrap();
        repo.create(&member).unwrap();

        assert!(repo.username_exists("carol").unwrap());
        let found = repo.find_by_username("carol").unwrap().unwrap();
        assert_eq!(found.id, member.id);
        assert!(repo.find_by_username("dave").unwrap().is_none());
    }
}
