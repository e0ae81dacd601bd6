//! Widget configuration management.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::{BlogError, Result};

/// Characters escaped in a query value or path segment (everything but RFC 3986 unreserved).
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Main configuration structure shared by every widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Content API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Post listing settings.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Post detail settings.
    #[serde(default)]
    pub detail: DetailConfig,
}

/// Content API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Path prefix of the content functions, relative to the page origin.
    #[serde(default = "default_api_base_path")]
    pub base_path: String,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path of the blog index page that links point to.
    #[serde(default = "default_blog_path")]
    pub blog_path: String,

    /// Suffix appended to the document title on post pages.
    #[serde(default = "default_title_suffix")]
    pub title_suffix: String,

    /// Image shown when a post has no cover image.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

/// Post listing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size used when the host element gives none (or an invalid one).
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,

    /// Number of content characters used when a post has no excerpt.
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

/// Post detail configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailConfig {
    /// Number of content characters used for the page description.
    #[serde(default = "default_description_chars")]
    pub description_chars: usize,
}

// Default value functions
fn default_api_base_path() -> String {
    "/_functions".to_string()
}

fn default_blog_path() -> String {
    "/blog".to_string()
}

fn default_title_suffix() -> String {
    "Blog".to_string()
}

fn default_placeholder_image() -> String {
    "https://static.wixstatic.com/media/e4e6cc_91529499906b4a6792eaaa474099d76a~mv2.jpg"
        .to_string()
}

fn default_posts_per_page() -> u32 {
    10
}

fn default_excerpt_chars() -> usize {
    150
}

fn default_description_chars() -> usize {
    160
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: default_api_base_path(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            blog_path: default_blog_path(),
            title_suffix: default_title_suffix(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            description_chars: default_description_chars(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a TOML document using the config crate.
    ///
    /// Every key is optional; missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let config: BlogConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.listing.posts_per_page == 0 {
            return Err(BlogError::config(
                "listing.posts_per_page must be greater than zero",
            ));
        }

        if self.site.blog_path.is_empty() {
            return Err(BlogError::config("site.blog_path cannot be empty"));
        }

        if self.api.base_path.ends_with('/') {
            tracing::warn!("api.base_path should not have a trailing slash");
        }

        Ok(())
    }

    /// Link to the blog index, optionally filtered by category.
    pub fn blog_url(&self, category_id: Option<&str>) -> String {
        let base = self.site.blog_path.trim_end_matches('/');
        match category_id {
            Some(id) => format!("{base}?category={}", utf8_percent_encode(id, URL_COMPONENT)),
            None => base.to_string(),
        }
    }

    /// Link to a single post.
    pub fn post_url(&self, slug: &str) -> String {
        let base = self.site.blog_path.trim_end_matches('/');
        format!("{base}/{}", utf8_percent_encode(slug, URL_COMPONENT))
    }

    /// Document title shown while a post is open.
    pub fn post_title(&self, title: &str) -> String {
        format!("{title} | {}", self.site.title_suffix)
    }
}
