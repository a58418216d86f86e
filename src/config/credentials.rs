//! Credential resolution from configuration.
//!
//! The catalog key comes either from the config file or from the
//! environment variable named by `catalog.api_key_env`.

use super::types::CatalogConfig;

/// Authentication type for catalog requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// TMDB v3 style `api_key` query parameter.
    ApiKey,
    /// `Authorization: Bearer` header (TMDB v4 read token).
    Bearer,
    /// No authentication required.
    None,
}

impl AuthType {
    /// Parse auth type from string.
    /// Defaults to `ApiKey` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bearer" => AuthType::Bearer,
            "none" => AuthType::None,
            _ => AuthType::ApiKey,
        }
    }
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of credential resolution for the catalog.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Key resolved successfully.
    Configured(SecureString),
    /// Key is missing or empty.
    Unconfigured { reason: String },
    /// No authentication required.
    NoAuth,
}

impl CatalogConfig {
    pub fn auth_type(&self) -> AuthType {
        AuthType::from_str(&self.auth_type_str)
    }

    /// Resolve the key from config, falling back to the process environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the key using `lookup` for environment access.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.auth_type() == AuthType::None {
            return CredentialStatus::NoAuth;
        }

        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return CredentialStatus::Configured(SecureString::new(key.trim().to_string()));
        }

        match lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()) {
            Some(key) => CredentialStatus::Configured(SecureString::new(key.trim().to_string())),
            None => CredentialStatus::Unconfigured {
                reason: format!(
                    "catalog.api_key is not set and ${} is empty",
                    self.api_key_env
                ),
            },
        }
    }
}
