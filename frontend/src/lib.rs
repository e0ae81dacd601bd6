//! blogfront
//!
//! WebAssembly entry point. On load it reads the site configuration from the
//! page and mounts a widget on every `<blog-categories>`, `<blog-posts-list>`
//! and `<blog-post-detail>` element it finds.
//!
//! ```html
//! <script type="application/toml" id="blogfront-config">
//! [listing]
//! posts_per_page = 6
//! </script>
//! <blog-categories></blog-categories>
//! <blog-posts-list category-id="news" posts-per-page="6"></blog-posts-list>
//! ```

pub mod bootstrap;
pub mod host;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("blogfront: no document, nothing mounted");
        return;
    };

    let config = bootstrap::load_config(&document);
    let mounted = host::mount_all(&document, &config);
    log::info!("blogfront: mounted {mounted} widget(s)");
}
