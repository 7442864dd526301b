//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `EXTENSION_NAME` — URL path segment the extension endpoints live under
///   (default: `"jupyterlab-drawio-render-extension"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub extension_name: String,
}

const DEFAULT_EXTENSION_NAME: &str = "jupyterlab-drawio-render-extension";

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            extension_name: std::env::var("EXTENSION_NAME")
                .unwrap_or_else(|_| DEFAULT_EXTENSION_NAME.to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the `"/{extension-name}"` path the extension routes nest under.
    pub fn base_path(&self) -> String {
        format!("/{}", self.extension_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            extension_name: DEFAULT_EXTENSION_NAME.to_string(),
        }
    }
}
