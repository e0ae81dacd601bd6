//! Paginated post list component.

use blogfront_core::{ListingParams, PostListing};
use leptos::{prelude::*, task::spawn_local};

use crate::runtime::{blog_config, mount_widget, page_action, spawn_configure};

/// Lists post cards with Previous/Next pagination.
///
/// Changing either prop reloads from the first page.
#[component]
pub fn BlogPostsList(
    /// Category to filter by; empty or absent shows every post.
    #[prop(into)]
    category_id: Signal<Option<String>>,
    /// Raw page size; invalid values fall back to the configured default.
    #[prop(into)]
    posts_per_page: Signal<Option<String>>,
) -> impl IntoView {
    let config = blog_config();
    let default_per_page = config.listing.posts_per_page;
    let (html, widget) = mount_widget(PostListing::new(config.clone()), &config);

    Effect::new(move |_| {
        let params = ListingParams::from_attributes(
            category_id.get().as_deref(),
            posts_per_page.get().as_deref(),
            default_per_page,
        );
        spawn_configure(widget, params);
    });

    // Pagination buttons live in the rendered HTML, so clicks are delegated
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(action) = page_action(&ev) else {
            return;
        };
        let mounted = widget.get_value();
        spawn_local(async move { mounted.dispatch(|listing| listing.apply(action)).await });
    };

    view! { <div class="blogfront-posts" on:click=on_click inner_html=move || html.get()></div> }
}
