//! Client configuration.
//!
//! The backend base URL is the only configurable surface. It is read
//! once at startup and injected into the session explicitly; nothing
//! else reads the environment.

/// Backend base URL used when `BACKEND_URL` is unset.
const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";

/// Startup configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the map backend, without a trailing slash.
    pub backend_url: String,
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// `BACKEND_URL` overrides the default local backend address.
    #[must_use]
    pub fn from_env() -> Self {
        let backend_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        Self { backend_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
