//! HTTP client for the places API.
//!
//! One outbound GET per search: `?namePrefix=<term>&limit=<n>` with the
//! RapidAPI key header. No retries and no request cancellation; callers
//! decide what to do with a failed or superseded fetch.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::types::PlacesResponse;

/// Header carrying the API key, as required by the RapidAPI gateway.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Searches are interactive; anything slower than this is as good as failed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around [`reqwest::Client`] bound to one endpoint and key.
///
/// Cloning is cheap (the inner client is reference-counted), so the UI can
/// hand copies to concurrently spawned fetch tasks.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: Client,
    config: PlacesConfig,
}

impl PlacesClient {
    /// Builds a client for the configured endpoint.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PlacesError::Build)?;

        info!(url = %config.api_url, "Created places API client");
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PlacesConfig {
        &self.config
    }

    /// Builds the search request without sending it.
    fn search_request(&self, name_prefix: &str, limit: u32) -> RequestBuilder {
        let limit = limit.to_string();
        self.http
            .get(&self.config.api_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&[("namePrefix", name_prefix), ("limit", limit.as_str())])
    }

    /// Fetches places whose name starts with `name_prefix`, capped at
    /// `limit` records.
    ///
    /// # Errors
    ///
    /// [`PlacesError::Transport`] when no response arrives,
    /// [`PlacesError::Status`] on a non-2xx answer, and
    /// [`PlacesError::Decode`] when the body does not parse.
    pub async fn search(
        &self,
        name_prefix: &str,
        limit: u32,
    ) -> Result<PlacesResponse, PlacesError> {
        debug!(prefix = name_prefix, limit, "Fetching places");

        let response = self
            .search_request(name_prefix, limit)
            .send()
            .await
            .map_err(PlacesError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::Status(status));
        }

        response.json::<PlacesResponse>().await.map_err(PlacesError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> PlacesClient {
        let config = PlacesConfig {
            api_url: "https://geo.example.com/v1/geo/cities".to_string(),
            api_key: "test-key".to_string(),
        };
        PlacesClient::new(config).unwrap()
    }

    #[test]
    fn search_request_is_a_get_with_both_params() {
        let request = test_client().search_request("Lon", 5).build().unwrap();

        assert_eq!(*request.method(), reqwest::Method::GET);

        let pairs: Vec<(String, String)> =
            request.url().query_pairs().into_owned().collect();
        assert!(pairs.contains(&("namePrefix".to_string(), "Lon".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "5".to_string())));
    }

    #[test]
    fn search_request_carries_the_api_key_header() {
        let request = test_client().search_request("Lon", 5).build().unwrap();
        let key = request.headers().get(API_KEY_HEADER).unwrap();
        assert_eq!(key.to_str().unwrap(), "test-key");
    }

    #[test]
    fn search_request_encodes_the_prefix() {
        let request = test_client().search_request("San Juan", 10).build().unwrap();
        let query = request.url().query().unwrap();
        assert!(query.contains("namePrefix=San+Juan") || query.contains("namePrefix=San%20Juan"));
    }
}
