mod credentials;
mod loader;
mod types;

pub use credentials::{AuthType, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, UiConfig};
