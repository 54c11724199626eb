use anyhow::{Context, Result};

use crate::keywords::highlight::DEFAULT_HIGHLIGHT_COLOR;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings live in memory when unset.
    pub redis_url: Option<String>,
    /// Redis hash that holds every settings field.
    pub settings_key: String,
    /// Highlight color used until the user picks one.
    pub default_highlight_color: String,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: None,
            settings_key: "resumax:settings".to_string(),
            default_highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let default_highlight_color = optional_env("DEFAULT_HIGHLIGHT_COLOR")
            .unwrap_or(defaults.default_highlight_color);
        if !crate::resume::service::is_valid_color(&default_highlight_color) {
            anyhow::bail!(
                "DEFAULT_HIGHLIGHT_COLOR must be a #rgb or #rrggbb color, got '{default_highlight_color}'"
            );
        }

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            settings_key: optional_env("SETTINGS_KEY").unwrap_or(defaults.settings_key),
            default_highlight_color,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.redis_url.is_none());
        assert_eq!(config.settings_key, "resumax:settings");
        assert_eq!(config.default_highlight_color, "#fff59d");
        assert_eq!(config.port, 8080);
    }
}
