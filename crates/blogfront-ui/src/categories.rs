//! Category filter component.

use blogfront_core::CategoryBrowser;
use leptos::prelude::*;

use crate::runtime::{blog_config, mount_widget, spawn_configure};

/// Lists the blog categories as filter links.
///
/// Categories are loaded once, on mount.
#[component]
pub fn BlogCategories() -> impl IntoView {
    let config = blog_config();
    let (html, widget) = mount_widget(CategoryBrowser::new(config.clone()), &config);

    Effect::new(move |_| spawn_configure(widget, ()));

    view! { <div class="blogfront-categories" inner_html=move || html.get()></div> }
}
