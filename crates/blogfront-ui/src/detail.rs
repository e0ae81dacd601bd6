//! Single post component.

use blogfront_core::PostDetail;
use leptos::prelude::*;

use crate::runtime::{blog_config, mount_widget, spawn_configure};

/// Shows one post, identified by slug, with its related posts.
///
/// Also updates the document title and description once the post loads.
#[component]
pub fn BlogPostDetail(
    /// Slug of the post to show.
    #[prop(into)]
    post_slug: Signal<Option<String>>,
) -> impl IntoView {
    let config = blog_config();
    let (html, widget) = mount_widget(PostDetail::new(config.clone()), &config);

    Effect::new(move |_| spawn_configure(widget, post_slug.get()));

    view! { <div class="blogfront-post" inner_html=move || html.get()></div> }
}
