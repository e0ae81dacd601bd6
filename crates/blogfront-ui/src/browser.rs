//! [`PageContext`] backed by the live document.

use blogfront_core::PageContext;
use tracing::warn;
use web_sys::{Document, UrlSearchParams, Window};

/// The page the components are mounted in.
///
/// Every call reads the current `window`, so a widget always sees the
/// location at the time it renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl BrowserPage {
    /// Create a handle to the current page.
    pub fn new() -> Self {
        Self
    }

    fn window(&self) -> Option<Window> {
        web_sys::window()
    }

    fn document(&self) -> Option<Document> {
        self.window().and_then(|w| w.document())
    }
}

impl PageContext for BrowserPage {
    fn origin(&self) -> String {
        self.window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.window()?.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = self.document() {
            document.set_title(title);
        }
    }

    fn set_description(&self, description: &str) {
        let meta = self
            .document()
            .and_then(|d| d.query_selector("meta[name=\"description\"]").ok().flatten());
        let Some(meta) = meta else {
            return;
        };
        if let Err(err) = meta.set_attribute("content", description) {
            warn!(error = ?err, "cannot update description meta element");
        }
    }
}
