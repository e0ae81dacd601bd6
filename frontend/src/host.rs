//! Host elements: finding them, mounting widgets into them and forwarding
//! their attribute changes.

use blogfront_core::BlogConfig;
use blogfront_ui::{BlogCategories, BlogPostDetail, BlogPostsList};
use leptos::{mount::mount_to, prelude::*};
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Document, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord};

/// Host tag of the category browser.
pub const CATEGORIES_TAG: &str = "blog-categories";
/// Host tag of the post listing.
pub const POSTS_LIST_TAG: &str = "blog-posts-list";
/// Host tag of the post detail view.
pub const POST_DETAIL_TAG: &str = "blog-post-detail";

/// Observed attributes of `<blog-posts-list>`.
pub const POSTS_LIST_ATTRIBUTES: &[&str] = &["category-id", "posts-per-page"];
/// Observed attributes of `<blog-post-detail>`.
pub const POST_DETAIL_ATTRIBUTES: &[&str] = &["post-slug"];

/// Mount a widget on every host element in `document`.
///
/// Returns the number of widgets mounted.
pub fn mount_all(document: &Document, config: &BlogConfig) -> usize {
    let mut mounted = 0;

    for host in hosts(document, CATEGORIES_TAG) {
        let config = config.clone();
        mount_to(host, move || {
            provide_context(config);
            view! { <BlogCategories /> }
        })
        .forget();
        mounted += 1;
    }

    for host in hosts(document, POSTS_LIST_TAG) {
        let category_id = RwSignal::new(host.get_attribute("category-id"));
        let posts_per_page = RwSignal::new(host.get_attribute("posts-per-page"));
        observe_attributes(&host, POSTS_LIST_ATTRIBUTES, move |name, value| match name {
            "category-id" => category_id.set(value),
            "posts-per-page" => posts_per_page.set(value),
            _ => {}
        });

        let config = config.clone();
        mount_to(host, move || {
            provide_context(config);
            view! { <BlogPostsList category_id=category_id posts_per_page=posts_per_page /> }
        })
        .forget();
        mounted += 1;
    }

    for host in hosts(document, POST_DETAIL_TAG) {
        let post_slug = RwSignal::new(host.get_attribute("post-slug"));
        observe_attributes(&host, POST_DETAIL_ATTRIBUTES, move |_, value| {
            post_slug.set(value)
        });

        let config = config.clone();
        mount_to(host, move || {
            provide_context(config);
            view! { <BlogPostDetail post_slug=post_slug /> }
        })
        .forget();
        mounted += 1;
    }

    mounted
}

fn hosts(document: &Document, tag: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(tag) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Call `on_change` with the new value whenever one of `names` changes on
/// `host`. A removed attribute is reported as `None`.
fn observe_attributes<F>(host: &HtmlElement, names: &'static [&'static str], mut on_change: F)
where
    F: FnMut(&str, Option<String>) + 'static,
{
    let target = host.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            for record in records.iter() {
                let Ok(record) = record.dyn_into::<MutationRecord>() else {
                    continue;
                };
                let Some(name) = record.attribute_name() else {
                    continue;
                };
                if names.contains(&name.as_str()) {
                    on_change(&name, target.get_attribute(&name));
                }
            }
        },
    );

    let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("blogfront: cannot observe host attributes: {err:?}");
            return;
        }
    };

    let options = MutationObserverInit::new();
    options.set_attributes(true);
    if let Err(err) = observer.observe_with_options(host, &options) {
        log::warn!("blogfront: cannot observe host attributes: {err:?}");
        return;
    }

    // The observer lives as long as the page
    callback.forget();
}
