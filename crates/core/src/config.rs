//! Client configuration loaded from environment variables.
//!
//! Follows 12-factor style: both settings come from environment variables
//! (or a `.env` file via `dotenvy`). Configuration is read once at startup;
//! nothing re-reads the environment afterwards.

use tracing::warn;

/// Default search endpoint: the public GeoDB Cities instance on RapidAPI.
pub const DEFAULT_API_URL: &str = "https://wft-geo-db.p.rapidapi.com/v1/geo/cities";

/// Places API configuration.
///
/// Loaded once at startup via [`PlacesConfig::from_env`].
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Full URL of the search endpoint.
    pub api_url: String,

    /// RapidAPI key sent as the `x-rapidapi-key` header.
    pub api_key: String,
}

impl PlacesConfig {
    /// Loads configuration from the environment.
    ///
    /// `PLACESCOPE_API_URL` falls back to [`DEFAULT_API_URL`]. A missing
    /// `PLACESCOPE_API_KEY` falls back to the empty string with a warning:
    /// the UI still runs, and every search fails soft the same way any
    /// other fetch failure does.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = std::env::var("PLACESCOPE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_key = std::env::var("PLACESCOPE_API_KEY").unwrap_or_else(|_| {
            warn!("PLACESCOPE_API_KEY is not set; the API will reject searches");
            String::new()
        });

        Self { api_url, api_key }
    }

    /// Host portion of the configured endpoint, for display in the UI.
    pub fn api_host(&self) -> &str {
        let rest = self.api_url.splitn(2, "://").last().unwrap_or(&self.api_url);
        rest.splitn(2, '/').next().unwrap_or(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> PlacesConfig {
        PlacesConfig { api_url: url.to_string(), api_key: String::new() }
    }

    #[test]
    fn api_host_strips_scheme_and_path() {
        assert_eq!(
            config("https://wft-geo-db.p.rapidapi.com/v1/geo/cities").api_host(),
            "wft-geo-db.p.rapidapi.com"
        );
    }

    #[test]
    fn api_host_handles_bare_hosts() {
        assert_eq!(config("localhost:8080").api_host(), "localhost:8080");
        assert_eq!(config("http://localhost:8080").api_host(), "localhost:8080");
    }
}
