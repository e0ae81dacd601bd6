//! blogfront UI Components
//!
//! Leptos components mounting the blogfront widgets in a browser page.
//!
//! # Components
//!
//! - [`BlogCategories`] - Category filter links
//! - [`BlogPostsList`] - Paginated post cards, optionally filtered by category
//! - [`BlogPostDetail`] - A single post with its related posts
//!
//! Each component owns one widget from `blogfront-core`, drives it from its
//! props and renders its markup. The site configuration is read from context
//! and falls back to defaults when none was provided.
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use blogfront_ui::BlogPostsList;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let category_id = RwSignal::new(Some("cat1".to_string()));
//!     let posts_per_page = RwSignal::new(Some("5".to_string()));
//!
//!     view! { <BlogPostsList category_id=category_id posts_per_page=posts_per_page /> }
//! }
//! ```

pub mod browser;
pub mod categories;
pub mod detail;
pub mod http;
pub mod listing;
pub mod runtime;
pub mod surface;

pub use browser::BrowserPage;
pub use categories::BlogCategories;
pub use detail::BlogPostDetail;
pub use http::HttpApi;
pub use listing::BlogPostsList;
pub use surface::SignalSurface;
