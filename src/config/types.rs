use serde::Deserialize;

/// Main configuration structure for Keyword-Ripple
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub popularity: PopularityConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// External suggestion and search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Autocomplete endpoint answering `?client=firefox&q=...` with JSON
    #[serde(rename = "suggest-url", default = "default_suggest_url")]
    pub suggest_url: String,

    /// Web-search endpoint answering `?q=...&hl=...` with HTML
    #[serde(rename = "search-url", default = "default_search_url")]
    pub search_url: String,

    /// Interface language passed to the search endpoint
    #[serde(default = "default_language")]
    pub language: String,

    /// User-Agent header sent on every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Popularity labelling
#[derive(Debug, Clone, Deserialize)]
pub struct PopularityConfig {
    /// Label reported for every suggestion
    #[serde(default = "default_popularity_label")]
    pub label: String,
}

/// HTTP API settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(rename = "bind-address", default = "default_bind_address")]
    pub bind_address: String,
}

/// CSV export settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory export files are written to
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name prefix, followed by a timestamp
    #[serde(rename = "file-prefix", default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_suggest_url() -> String {
    "http://suggestqueries.google.com/complete/search".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_language() -> String {
    "fa".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_popularity_label() -> String {
    "10K+".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_file_prefix() -> String {
    "google_suggestions".to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            suggest_url: default_suggest_url(),
            search_url: default_search_url(),
            language: default_language(),
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            label: default_popularity_label(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_prefix: default_file_prefix(),
        }
    }
}
