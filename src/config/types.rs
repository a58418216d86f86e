use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the remote movie catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Authentication type: "api_key" (query parameter) or "bearer".
    #[serde(rename = "auth_type", default = "default_auth_type")]
    pub auth_type_str: String,
    /// Direct API key or bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Time window for the trending list: "day" or "week".
    #[serde(default = "default_trending_window")]
    pub trending_window: String,
    /// Optional ISO 639-1 language passed through to the catalog.
    #[serde(default)]
    pub language: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// View behaviour shared by the listing and search views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Cards per grid page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Quiet interval before a typed search is sent, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Reserve the first trending result as a spotlight item outside the grid.
    #[serde(default)]
    pub spotlight: bool,
    /// Start the listing view in dark mode.
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_auth_type() -> String {
    "api_key".to_string()
}

fn default_api_key_env() -> String {
    "TMDB_API_KEY".to_string()
}

fn default_trending_window() -> String {
    "week".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    8
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_type_str: default_auth_type(),
            api_key: None,
            api_key_env: default_api_key_env(),
            trending_window: default_trending_window(),
            language: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            spotlight: false,
            dark_mode: false,
        }
    }
}
