//! Content API requests and responses.
//!
//! Widgets describe what they need as an [`ApiRequest`]; a [`ContentApi`]
//! implementation performs the transport and hands back the raw
//! [`ApiResponse`], which is then checked and decoded here.

use serde::de::DeserializeOwned;

use crate::{
    config::ApiConfig,
    error::{BlogError, Result},
};

/// A GET request against one of the content functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// `get_categories`
    Categories,
    /// `get_posts?limit=&skip=[&categoryId=]`
    Posts {
        limit: u32,
        skip: u64,
        category_id: Option<String>,
    },
    /// `get_post?slug=`
    Post { slug: String },
}

impl ApiRequest {
    /// Function name of the endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Categories => "get_categories",
            Self::Posts { .. } => "get_posts",
            Self::Post { .. } => "get_post",
        }
    }

    /// Path of the endpoint under the configured base path.
    pub fn path(&self, config: &ApiConfig) -> String {
        format!(
            "{}/{}",
            config.base_path.trim_end_matches('/'),
            self.endpoint()
        )
    }

    /// Query parameters, in the order they are sent.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Categories => Vec::new(),
            Self::Posts {
                limit,
                skip,
                category_id,
            } => {
                let mut query = vec![("limit", limit.to_string()), ("skip", skip.to_string())];
                if let Some(id) = category_id {
                    query.push(("categoryId", id.clone()));
                }
                query
            }
            Self::Post { slug } => vec![("slug", slug.clone())],
        }
    }
}

/// A response as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body.
    pub body: String,
}

impl ApiResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check the status and decode the JSON body.
    pub fn decode<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let endpoint = request.endpoint();
        if !self.is_success() {
            return Err(BlogError::http(endpoint, self.status));
        }
        serde_json::from_str(&self.body).map_err(|e| BlogError::malformed(endpoint, e.to_string()))
    }
}

/// Transport for content API requests.
///
/// Implementations only report transport failures as errors; status and
/// body are checked by [`ApiResponse::decode`].
#[allow(async_fn_in_trait)]
pub trait ContentApi {
    /// Perform the request.
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
