//! Content API transport over `fetch`.

use blogfront_core::{
    ApiRequest, ApiResponse, BlogError, ContentApi, Result, config::ApiConfig,
};
use gloo_net::http::Request;
use tracing::debug;

/// [`ContentApi`] sending GET requests to the site backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    origin: String,
    config: ApiConfig,
}

impl HttpApi {
    /// Create a transport for the backend served from `origin`.
    pub fn new(origin: impl Into<String>, config: ApiConfig) -> Self {
        Self {
            origin: origin.into(),
            config,
        }
    }

    /// Absolute URL of `request`, without its query string.
    pub fn url(&self, request: &ApiRequest) -> String {
        format!(
            "{}{}",
            self.origin.trim_end_matches('/'),
            request.path(&self.config)
        )
    }
}

impl ContentApi for HttpApi {
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let endpoint = request.endpoint();
        let url = self.url(request);
        debug!(%url, endpoint, "sending request");

        let response = Request::get(&url)
            .query(request.query())
            .send()
            .await
            .map_err(|e| BlogError::network(endpoint, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BlogError::network(endpoint, e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}
