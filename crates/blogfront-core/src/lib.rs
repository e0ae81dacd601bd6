//! blogfront Core Library
//!
//! Host-independent state machines, data model, configuration and error
//! handling for the blogfront widgets. Nothing here touches the DOM: widgets
//! render to a [`Markup`] tree, talk to the backend through [`ContentApi`]
//! and to the hosting page through [`PageContext`].

pub mod api;
pub mod categories;
pub mod config;
pub mod detail;
pub mod error;
pub mod format;
pub mod listing;
pub mod markup;
pub mod model;
pub mod page;
pub mod pagination;
pub mod widget;

pub use api::{ApiRequest, ApiResponse, ContentApi};
pub use categories::CategoryBrowser;
pub use config::BlogConfig;
pub use detail::PostDetail;
pub use error::{BlogError, Result};
pub use listing::{ListingParams, PageAction, PostListing};
pub use markup::{Element, Markup};
pub use model::{Category, Owner, Post, PostWithRelated, PostsPage};
pub use page::{MemoryPage, PageContext};
pub use pagination::PaginationState;
pub use widget::{
    Completion, FetchWidget, LoadStatus, LoadTicket, MemorySurface, Mounted, ReactiveWidget,
    RenderSurface,
};
