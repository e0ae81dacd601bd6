//! The hosting page, as seen by widgets.

use std::{cell::RefCell, collections::HashMap};

/// Capabilities a widget needs from the page it is mounted in.
pub trait PageContext {
    /// Origin the content API is served from (e.g. `https://example.com`).
    fn origin(&self) -> String;

    /// Value of a query parameter of the current page URL.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Replace the document title.
    fn set_title(&self, title: &str);

    /// Set the description meta element's content.
    ///
    /// Does nothing when the page has no description meta element.
    fn set_description(&self, description: &str);
}

/// In-memory page for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryPage {
    origin: String,
    query: HashMap<String, String>,
    has_description_meta: bool,
    title: RefCell<Option<String>>,
    description: RefCell<Option<String>>,
}

impl MemoryPage {
    /// Create a page served from `origin`, with a description meta element.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            has_description_meta: true,
            ..Self::default()
        }
    }

    /// Add a query parameter to the page URL.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Remove the description meta element from the page.
    pub fn without_description_meta(mut self) -> Self {
        self.has_description_meta = false;
        self
    }

    /// Current document title, if one was set.
    pub fn title(&self) -> Option<String> {
        self.title.borrow().clone()
    }

    /// Current description meta content, if one was set.
    pub fn description(&self) -> Option<String> {
        self.description.borrow().clone()
    }
}

impl PageContext for MemoryPage {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = Some(title.to_string());
    }

    fn set_description(&self, description: &str) {
        if self.has_description_meta {
            *self.description.borrow_mut() = Some(description.to_string());
        }
    }
}
