//! Category browser: the category list with the active one highlighted.

use crate::{
    api::ApiRequest,
    config::BlogConfig,
    error::Result,
    markup::{Element, Markup},
    model::Category,
    page::PageContext,
    widget::{Completion, FetchWidget, LoadStatus, LoadTicket, ReactiveWidget},
};

/// Query parameter holding the active category id.
pub const CATEGORY_PARAM: &str = "category";

/// Loads the category set once per mount.
#[derive(Debug)]
pub struct CategoryBrowser {
    config: BlogConfig,
    fetch: FetchWidget<Vec<Category>>,
    mounted: bool,
}

impl CategoryBrowser {
    /// Diagnostic name.
    pub const NAME: &'static str = "category-browser";

    /// Create an unmounted browser.
    pub fn new(config: BlogConfig) -> Self {
        Self {
            config,
            fetch: FetchWidget::new(Self::NAME),
            mounted: false,
        }
    }

    /// Start loading the category collection.
    pub fn load_categories(&mut self) -> LoadTicket {
        self.fetch.begin(ApiRequest::Categories)
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.fetch.status()
    }

    /// Categories of the last successful load.
    pub fn categories(&self) -> Option<&[Category]> {
        self.fetch.data().map(Vec::as_slice)
    }

    fn link(&self, label: &str, category_id: Option<&str>, active: bool) -> Element {
        let class = if active {
            "category-link active"
        } else {
            "category-link"
        };
        Element::new("a")
            .attr("href", self.config.blog_url(category_id))
            .class(class)
            .text(label)
    }

    fn render_list(&self, categories: &[Category], page: &dyn PageContext) -> Vec<Markup> {
        // Read at render time so the highlight follows the page URL.
        let active = page
            .query_param(CATEGORY_PARAM)
            .filter(|id| !id.is_empty());

        let mut nodes: Vec<Markup> = vec![self.link("All Posts", None, active.is_none()).into()];
        if categories.is_empty() {
            nodes.push(
                Element::new("div")
                    .class("no-categories")
                    .text("No categories found")
                    .into(),
            );
            return nodes;
        }

        nodes.extend(categories.iter().map(|category| {
            let is_active = active.as_deref() == Some(category.id.as_str());
            Markup::from(self.link(&category.label, Some(&category.id), is_active))
        }));
        nodes
    }
}

impl ReactiveWidget for CategoryBrowser {
    type Params = ();
    type Data = Vec<Category>;

    fn configure(&mut self, _params: ()) -> Option<LoadTicket> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.load_categories())
    }

    fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<Category>>,
        _page: &dyn PageContext,
    ) -> Completion {
        self.fetch.complete(ticket, result)
    }

    fn render(&self, page: &dyn PageContext) -> Markup {
        let list = Element::new("div").class("categories-list");
        let list = match (self.fetch.status(), self.fetch.data()) {
            (LoadStatus::Idle | LoadStatus::Loading, _) => list.child(
                Element::new("div")
                    .class("loading")
                    .text("Loading categories..."),
            ),
            (LoadStatus::Error, _) | (LoadStatus::Loaded, None) => list.child(
                Element::new("div")
                    .class("error")
                    .text("Error loading categories"),
            ),
            (LoadStatus::Loaded, Some(categories)) => {
                list.children(self.render_list(categories, page))
            }
        };

        Element::new("div")
            .class("blog-categories-container")
            .child(list)
            .into()
    }
}
