use crate::config::types::{Config, ExportConfig, PopularityConfig, ServerConfig, SourcesConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_sources_config(&config.sources)?;
    validate_popularity_config(&config.popularity)?;
    validate_server_config(&config.server)?;
    validate_export_config(&config.export)?;
    Ok(())
}

/// Validates source endpoints and request settings
fn validate_sources_config(config: &SourcesConfig) -> Result<(), ConfigError> {
    validate_endpoint("suggest-url", &config.suggest_url)?;
    validate_endpoint("search-url", &config.search_url)?;

    if config.language.is_empty()
        || !config
            .language
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "language must be a non-empty language tag, got '{}'",
            config.language
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout < 1 || config.request_timeout > 300 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be between 1 and 300 seconds, got {}",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates an endpoint URL: must parse and use HTTP(S)
fn validate_endpoint(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use HTTP or HTTPS, got '{}'",
            name, value
        )));
    }

    Ok(())
}

fn validate_popularity_config(config: &PopularityConfig) -> Result<(), ConfigError> {
    if config.label.trim().is_empty() {
        return Err(ConfigError::Validation(
            "popularity label cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind-address '{}' is not a socket address: {}",
            config.bind_address, e
        ))
    })?;
    Ok(())
}

/// Validates export settings; the prefix becomes part of a file name
fn validate_export_config(config: &ExportConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "export directory cannot be empty".to_string(),
        ));
    }

    if config.file_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "file-prefix cannot be empty".to_string(),
        ));
    }

    if !config
        .file_prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "file-prefix must contain only letters, digits, '-' and '_', got '{}'",
            config.file_prefix
        )));
    }

    Ok(())
}
