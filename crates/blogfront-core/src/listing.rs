//! Post listing: a paginated, optionally category-filtered list of post cards.

use crate::{
    config::BlogConfig,
    error::Result,
    format::format_date,
    markup::{Element, Markup},
    model::{Post, PostsPage},
    page::PageContext,
    pagination::PaginationState,
    widget::{Completion, FetchWidget, LoadStatus, LoadTicket, ReactiveWidget},
};

/// Parse a `posts-per-page` attribute value.
///
/// Absent, non-numeric and zero values fall back to `default`.
pub fn parse_posts_per_page(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Driving parameters of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    /// Category to filter by; `None` lists every post.
    pub category_id: Option<String>,

    /// Page size, always positive.
    pub posts_per_page: u32,
}

impl ListingParams {
    /// Build parameters from raw host attribute values.
    pub fn from_attributes(
        category_id: Option<&str>,
        posts_per_page: Option<&str>,
        default_posts_per_page: u32,
    ) -> Self {
        Self {
            category_id: category_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            posts_per_page: parse_posts_per_page(posts_per_page, default_posts_per_page),
        }
    }
}

/// A pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Go back one page.
    Previous,
    /// Go forward one page.
    Next,
}

impl PageAction {
    /// Value of the button's `data-action` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Previous => "prev-page",
            Self::Next => "next-page",
        }
    }

    /// Parse a `data-action` attribute value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "prev-page" => Some(Self::Previous),
            "next-page" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Loads one page of posts at a time.
#[derive(Debug)]
pub struct PostListing {
    config: BlogConfig,
    fetch: FetchWidget<PostsPage>,
    pagination: PaginationState,
    mounted: bool,
}

impl PostListing {
    /// Diagnostic name.
    pub const NAME: &'static str = "post-listing";

    /// Create an unmounted listing with the configured default page size.
    pub fn new(config: BlogConfig) -> Self {
        let pagination = PaginationState::new(config.listing.posts_per_page, None);
        Self {
            config,
            fetch: FetchWidget::new(Self::NAME),
            pagination,
            mounted: false,
        }
    }

    /// Start loading the current page.
    pub fn load_posts(&mut self) -> LoadTicket {
        self.fetch.begin(self.pagination.request())
    }

    /// Go back one page; `None` when already on the first page.
    pub fn previous_page(&mut self) -> Option<LoadTicket> {
        self.pagination.previous().then(|| self.load_posts())
    }

    /// Go forward one page; `None` when the server reported no next page.
    pub fn next_page(&mut self) -> Option<LoadTicket> {
        self.pagination.next().then(|| self.load_posts())
    }

    /// Run a pagination button action.
    pub fn apply(&mut self, action: PageAction) -> Option<LoadTicket> {
        match action {
            PageAction::Previous => self.previous_page(),
            PageAction::Next => self.next_page(),
        }
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.fetch.status()
    }

    /// Pagination cursor.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Posts of the last successful load.
    pub fn posts(&self) -> Option<&[Post]> {
        self.fetch.data().map(|page| page.items.as_slice())
    }

    fn render_card(&self, post: &Post) -> Element {
        let cover = post
            .cover()
            .unwrap_or(&self.config.site.placeholder_image)
            .to_string();
        let published = format_date(post.published_date.as_deref().unwrap_or_default());

        Element::new("div")
            .class("post-card")
            .child(
                Element::new("img")
                    .attr("src", cover)
                    .attr("alt", post.title.clone())
                    .class("post-image"),
            )
            .child(
                Element::new("div")
                    .class("post-content")
                    .child(
                        Element::new("div")
                            .class("post-category")
                            .text(post.primary_category().unwrap_or("Uncategorized")),
                    )
                    .child(Element::new("h2").class("post-title").text(post.title.clone()))
                    .child(
                        Element::new("p")
                            .class("post-excerpt")
                            .text(post.card_excerpt(self.config.listing.excerpt_chars)),
                    )
                    .child(
                        Element::new("div")
                            .class("post-meta")
                            .child(Element::new("span").class("post-date").text(published))
                            .child(
                                Element::new("span")
                                    .class("post-author")
                                    .text(post.author().unwrap_or("Anonymous")),
                            ),
                    )
                    .child(
                        Element::new("a")
                            .attr("href", self.config.post_url(&post.slug))
                            .class("read-more")
                            .text("Read More"),
                    ),
            )
    }

    fn render_pagination(&self) -> Vec<Markup> {
        let pagination = &self.pagination;
        if !pagination.shows_controls() {
            return Vec::new();
        }

        let button = |action: PageAction, label: &str, enabled: bool| -> Markup {
            Element::new("button")
                .attr("type", "button")
                .class("pagination-button")
                .attr("data-action", action.as_str())
                .flag_if("disabled", !enabled)
                .text(label)
                .into()
        };

        vec![
            button(
                PageAction::Previous,
                "Previous",
                pagination.can_go_previous(),
            ),
            Element::new("div")
                .class("pagination-info")
                .text(format!(
                    "Page {} of {}",
                    pagination.current_page() + 1,
                    pagination.total_pages()
                ))
                .into(),
            button(PageAction::Next, "Next", pagination.can_go_next()),
        ]
    }
}

impl ReactiveWidget for PostListing {
    type Params = ListingParams;
    type Data = PostsPage;

    fn configure(&mut self, params: ListingParams) -> Option<LoadTicket> {
        let changed = self
            .pagination
            .refilter(params.category_id, params.posts_per_page);
        if !self.mounted || changed {
            self.mounted = true;
            return Some(self.load_posts());
        }
        None
    }

    fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<PostsPage>,
        _page: &dyn PageContext,
    ) -> Completion {
        let totals = result
            .as_ref()
            .ok()
            .map(|page| (page.total_count, page.has_next));
        let completion = self.fetch.complete(ticket, result);
        if let (Completion::Applied, Some((total_count, has_next))) = (completion, totals) {
            self.pagination.record(total_count, has_next);
        }
        completion
    }

    fn render(&self, _page: &dyn PageContext) -> Markup {
        let list = Element::new("div").class("posts-list");
        let mut controls = Element::new("div").class("pagination");

        let list = match (self.fetch.status(), self.fetch.data()) {
            (LoadStatus::Idle, _) => list,
            (LoadStatus::Loading, _) => list.child(
                Element::new("div")
                    .class("loading")
                    .text("Loading posts..."),
            ),
            (LoadStatus::Error, _) | (LoadStatus::Loaded, None) => list.child(
                Element::new("div")
                    .class("error")
                    .text("Error loading posts. Please try again later."),
            ),
            (LoadStatus::Loaded, Some(page)) => {
                controls = controls.children(self.render_pagination());
                if page.items.is_empty() {
                    list.child(Element::new("div").class("no-posts").text("No posts found"))
                } else {
                    list.children(page.items.iter().map(|post| self.render_card(post)))
                }
            }
        };

        Element::new("div")
            .class("blog-posts-container")
            .child(list)
            .child(controls)
            .into()
    }
}
