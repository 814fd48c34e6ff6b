//! # JWT Token Management
//!
//! JSON Web Token generation and validation for directory access tokens.
//!
//! ## Invariants
//! - AUTH-JWT1: Stateless validation (no store lookup)
//! - AUTH-JWT2: Short expiration (15 minutes by default)
//! - AUTH-JWT3: No secrets in token

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};
use super::member::Member;

/// JWT claims for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (member ID)
    pub sub: String,

    /// Member's username
    pub username: String,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing (256-bit minimum recommended)
    pub secret: String,

    /// Access token lifetime
    pub access_token_ttl: Duration,

    /// Issuer identifier
    pub issuer: String,

    /// Audience identifier
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            access_token_ttl: Duration::minutes(15),
            issuer: "chathub".to_string(),
            audience: "chathub".to_string(),
        }
    }
}

/// JWT manager for token generation and validation
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// Create a new JWT manager with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate an access token for a member
    ///
    /// # Invariants
    /// - AUTH-JWT2: Token expires after the configured TTL
    /// - AUTH-JWT3: Claims carry only id and username
    pub fn generate_access_token(&self, member: &Member) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + self.config.access_token_ttl;

        let claims = JwtClaims {
            sub: member.id.to_string(),
            username: member.username.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Validate an access token and extract claims
    ///
    /// # Invariant
    /// AUTH-JWT1: Validation is stateless (no store lookup required)
    pub fn validate_token(&self, token: &str) -> AuthResult<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract the member ID from validated claims
    pub fn member_id(claims: &JwtClaims) -> AuthResult<Uuid> {
        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::MalformedToken)
    }

    /// Access token lifetime in seconds (for response payloads)
    pub fn expires_in(&self) -> i64 {
        self.config.access_token_ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_member() -> Member {
        Member {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: "unused".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_and_validate_round_trip() {
        let manager = JwtManager::new(JwtConfig::default());
        let member = test_member();

        let token = manager.generate_access_token(&member).unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.sub, member.id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(JwtManager::member_id(&claims).unwrap(), member.id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = JwtManager::new(JwtConfig::default());
        let token = manager.generate_access_token(&test_member()).unwrap();

        let other = JwtManager::new(JwtConfig {
            secret: "a completely different secret".to_string(),
            ..JwtConfig::default()
        });

        assert!(matches!(
            other.validate_token(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = JwtManager::new(JwtConfig {
            access_token_ttl: Duration::minutes(-5),
            ..JwtConfig::default()
        });
        let token = manager.generate_access_token(&test_member()).unwrap();

        let validator = JwtManager::new(JwtConfig::default());
        assert!(matches!(
            validator.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let manager = JwtManager::new(JwtConfig::default());
        assert!(matches!(
            manager.validate_token("not.a.jwt"),
            Err(AuthError::MalformedToken)
        ));
    }
}
