//! Content types returned by the blog API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::{excerpt_or_content, truncate_chars};

/// Decode an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    /// Category identifier.
    pub id: String,

    /// Display label.
    pub label: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Category as delivered on the wire; some backends send `_id`, some `id`,
/// some both.
#[derive(Deserialize)]
struct CategoryRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    record_id: Option<String>,
    label: String,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = &'static str;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.record_id)
            .ok_or("category without `id` or `_id`")?;
        Ok(Self {
            id,
            label: record.label,
        })
    }
}

/// Author of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A blog post, used both for listing cards and the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PostRecord")]
pub struct Post {
    /// Post identifier, taken from `id` or `_id`.
    pub id: String,

    /// URL slug.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Short summary; empty excerpts count as missing.
    pub excerpt: Option<String>,

    /// Rich HTML body; `null` decodes as empty.
    pub content: String,

    /// Cover image URL.
    pub cover_image: Option<String>,

    /// Publication date as an ISO string.
    pub published_date: Option<String>,

    /// Post author.
    pub owner: Option<Owner>,

    /// Categories the post belongs to; `null` decodes as empty.
    pub categories: Vec<Category>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "null_as_default")]
    record_id: Option<String>,
    slug: String,
    title: String,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    owner: Option<Owner>,
    #[serde(default, deserialize_with = "null_as_default")]
    categories: Vec<Category>,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id.or(record.record_id).unwrap_or_default(),
            slug: record.slug,
            title: record.title,
            excerpt: record.excerpt,
            content: record.content,
            cover_image: record.cover_image,
            published_date: record.published_date,
            owner: record.owner,
            categories: record.categories,
        }
    }
}

impl Post {
    /// Author name, if one was provided.
    pub fn author(&self) -> Option<&str> {
        self.owner
            .as_ref()
            .and_then(|owner| owner.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Cover image, if one was provided.
    pub fn cover(&self) -> Option<&str> {
        self.cover_image.as_deref().filter(|url| !url.is_empty())
    }

    /// Label of the primary (first) category.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(|category| category.label.as_str())
    }

    /// Summary text for listing cards.
    ///
    /// Falls back to the first `limit` characters of the body followed by `...`.
    pub fn card_excerpt(&self, limit: usize) -> String {
        match self.excerpt.as_deref().filter(|e| !e.is_empty()) {
            Some(excerpt) => excerpt.to_string(),
            None => format!("{}...", truncate_chars(&self.content, limit)),
        }
    }

    /// Text for the page description meta element.
    pub fn description(&self, limit: usize) -> String {
        excerpt_or_content(self.excerpt.as_deref(), &self.content, limit)
    }
}

/// One page of posts from `get_posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    /// Posts on this page.
    pub items: Vec<Post>,

    /// Number of posts matching the filter across all pages.
    pub total_count: u64,

    /// Whether the server has another page after this one.
    pub has_next: bool,
}

/// A post with its related posts from `get_post`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithRelated {
    /// The requested post.
    pub post: Post,

    /// Related post summaries, absent when the backend has none.
    #[serde(default)]
    pub related_posts: Option<Vec<Post>>,
}

impl PostWithRelated {
    /// Related posts, empty when absent.
    pub fn related(&self) -> &[Post] {
        self.related_posts.as_deref().unwrap_or_default()
    }
}
