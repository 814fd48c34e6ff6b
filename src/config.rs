//! # Configuration
//!
//! Top-level JSON configuration for the directory service. Every field has
//! a default; a missing config file means "run with defaults".

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{JwtConfig, PasswordPolicy};
use crate::http_server::HttpServerConfig;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHubConfig {
    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Authentication settings
    #[serde(default)]
    pub auth: AuthSettings,
}

/// Authentication configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// JWT signing secret
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    /// JWT issuer identifier
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience identifier
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Minimum password length for signups
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_secret() -> String {
    "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string()
}

fn default_token_ttl_minutes() -> i64 {
    15
}

fn default_issuer() -> String {
    "chathub".to_string()
}

fn default_audience() -> String {
    "chathub".to_string()
}

fn default_min_password_length() -> usize {
    8
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_ttl_minutes: default_token_ttl_minutes(),
            issuer: default_issuer(),
            audience: default_audience(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl AuthSettings {
    /// JWT configuration derived from this section
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.secret.clone(),
            access_token_ttl: Duration::minutes(self.token_ttl_minutes),
            issuer: self.issuer.clone(),
            audience: self.audience.clone(),
        }
    }

    /// Password policy derived from this section
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length,
            ..PasswordPolicy::default()
        }
    }
}

impl ChatHubConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing file yields the default configuration; a present but
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ChatHubConfig::load(Path::new("/nonexistent/chathub.json")).unwrap();
        assert_eq!(config.http.port, 8700);
        assert_eq!(config.auth.token_ttl_minutes, 15);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chathub.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"http": {{"port": 9000}}, "auth": {{"secret": "s3cret"}}}}"#
        )
        .unwrap();

        let config = ChatHubConfig::load(&path).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.auth.secret, "s3cret");
        assert_eq!(config.auth.issuer, "chathub");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chathub.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ChatHubConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
