//! # Authentication
//!
//! Member accounts and JWT access tokens for the directory API.
//!
//! The listing endpoint's `by_user` and `by_server_id` filters need to know
//! who the caller is; this module issues and validates the bearer tokens
//! that carry that identity. Access tokens only, no refresh tokens or
//! server-side sessions.

pub mod crypto;
pub mod errors;
pub mod jwt;
pub mod member;
pub mod service;

pub use crypto::PasswordPolicy;
pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtClaims, JwtConfig, JwtManager};
pub use member::{InMemoryMemberRepository, LoginRequest, Member, MemberRepository, SignupRequest};
pub use service::AuthService;
