//! Post detail: one post by slug, with its related posts.

use crate::{
    api::ApiRequest,
    config::BlogConfig,
    error::Result,
    format::format_date,
    markup::{Element, Markup},
    model::{Post, PostWithRelated},
    page::PageContext,
    widget::{Completion, FetchWidget, LoadStatus, LoadTicket, ReactiveWidget},
};

/// Loads a post whenever its slug changes.
#[derive(Debug)]
pub struct PostDetail {
    config: BlogConfig,
    fetch: FetchWidget<PostWithRelated>,
    slug: Option<String>,
    mounted: bool,
}

impl PostDetail {
    /// Diagnostic name.
    pub const NAME: &'static str = "post-detail";

    /// Create an unmounted detail view.
    pub fn new(config: BlogConfig) -> Self {
        Self {
            config,
            fetch: FetchWidget::new(Self::NAME),
            slug: None,
            mounted: false,
        }
    }

    /// Start loading the post for the current slug; `None` without a slug.
    pub fn load_post(&mut self) -> Option<LoadTicket> {
        let slug = self.slug.clone()?;
        Some(self.fetch.begin(ApiRequest::Post { slug }))
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.fetch.status()
    }

    /// Slug currently driving the widget.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Post of the last successful load.
    pub fn post(&self) -> Option<&Post> {
        self.fetch.data().map(|data| &data.post)
    }

    /// Related posts of the last successful load.
    pub fn related(&self) -> &[Post] {
        self.fetch
            .data()
            .map(PostWithRelated::related)
            .unwrap_or_default()
    }

    fn cover<'a>(&'a self, post: &'a Post) -> &'a str {
        post.cover().unwrap_or(&self.config.site.placeholder_image)
    }

    fn render_post(&self, post: &Post) -> Vec<Markup> {
        let published = format_date(post.published_date.as_deref().unwrap_or_default());

        let header = Element::new("div")
            .class("post-header")
            .child(
                Element::new("div")
                    .class("post-categories")
                    .children(post.categories.iter().map(|category| {
                        Element::new("span")
                            .class("post-category")
                            .text(category.label.clone())
                    })),
            )
            .child(Element::new("h1").class("post-title").text(post.title.clone()))
            .child(
                Element::new("div")
                    .class("post-meta")
                    .child(
                        Element::new("span")
                            .class("post-author")
                            .text(format!("By {}", post.author().unwrap_or("Anonymous"))),
                    )
                    .child(Element::new("span").class("post-date").text(published)),
            );

        vec![
            header.into(),
            Element::new("img")
                .attr("src", self.cover(post))
                .attr("alt", post.title.clone())
                .class("post-cover-image")
                .into(),
            Element::new("div")
                .class("post-body")
                .child(Markup::Raw(post.content.clone()))
                .into(),
        ]
    }

    fn render_related(&self, related: &[Post]) -> Element {
        let cards = related.iter().map(|post| {
            Element::new("div").class("related-post-card").child(
                Element::new("a")
                    .attr("href", self.config.post_url(&post.slug))
                    .class("related-post-link")
                    .child(
                        Element::new("img")
                            .attr("src", self.cover(post))
                            .attr("alt", post.title.clone())
                            .class("related-post-image"),
                    )
                    .child(
                        Element::new("div").class("related-post-content").child(
                            Element::new("h3")
                                .class("related-post-title")
                                .text(post.title.clone()),
                        ),
                    ),
            )
        });

        Element::new("div")
            .class("related-posts")
            .child(
                Element::new("h2")
                    .class("related-posts-title")
                    .text("Related Posts"),
            )
            .child(Element::new("div").class("related-posts-list").children(cards))
    }
}

impl ReactiveWidget for PostDetail {
    type Params = Option<String>;
    type Data = PostWithRelated;

    fn configure(&mut self, slug: Option<String>) -> Option<LoadTicket> {
        let slug = slug
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if self.mounted && slug == self.slug {
            return None;
        }
        self.mounted = true;
        self.slug = slug;

        let ticket = self.load_post();
        if ticket.is_none() {
            self.fetch.reset();
        }
        ticket
    }

    fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<PostWithRelated>,
        page: &dyn PageContext,
    ) -> Completion {
        let completion = self.fetch.complete(ticket, result);
        if let (Completion::Applied, Some(data)) = (completion, self.fetch.data()) {
            let post = &data.post;
            page.set_title(&self.config.post_title(&post.title));
            page.set_description(&post.description(self.config.detail.description_chars));
        }
        completion
    }

    fn render(&self, _page: &dyn PageContext) -> Markup {
        let content = Element::new("div").class("post-content");
        let mut container = Element::new("div").class("blog-post-container");

        let content = match (self.fetch.status(), self.post()) {
            (LoadStatus::Idle | LoadStatus::Loading, _) => {
                content.child(Element::new("div").class("loading").text("Loading post..."))
            }
            (LoadStatus::Error, _) | (LoadStatus::Loaded, None) => content.child(
                Element::new("div")
                    .class("error")
                    .text("Error loading post. Please try again later."),
            ),
            (LoadStatus::Loaded, Some(post)) => content.children(self.render_post(post)),
        };
        container = container.child(content);

        let related = self.related();
        if self.fetch.status() == LoadStatus::Loaded && !related.is_empty() {
            container = container.child(self.render_related(related));
        }

        container.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::BlogError,
        model::{Category, Owner},
        page::MemoryPage,
    };

    fn page() -> MemoryPage {
        MemoryPage::new("https://example.com")
    }

    fn hello() -> Post {
        Post {
            id: "p1".to_string(),
            slug: "hello-world".to_string(),
            title: "Hello".to_string(),
            excerpt: Some(String::new()),
            content: "abcdefghij".repeat(20),
            published_date: Some("2024-02-29T12:00:00Z".to_string()),
            ..Post::default()
        }
    }

    fn response(post: Post, related: Option<Vec<Post>>) -> PostWithRelated {
        PostWithRelated {
            post,
            related_posts: related,
        }
    }

    #[test]
    fn test_configure_loads_slug() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        assert_eq!(
            ticket.request(),
            &ApiRequest::Post {
                slug: "hello-world".to_string()
            }
        );
        assert_eq!(detail.status(), LoadStatus::Loading);
    }

    #[test]
    fn test_same_slug_does_not_reload() {
        let mut detail = PostDetail::new(BlogConfig::default());
        detail.configure(Some("a".to_string())).unwrap();
        assert!(detail.configure(Some("a".to_string())).is_none());
        assert!(detail.configure(Some("b".to_string())).is_some());
    }

    #[test]
    fn test_missing_slug_does_not_load() {
        let mut detail = PostDetail::new(BlogConfig::default());
        assert!(detail.configure(None).is_none());
        assert!(detail.configure(Some("  ".to_string())).is_none());
        assert_eq!(detail.status(), LoadStatus::Idle);
    }

    #[test]
    fn test_clearing_slug_invalidates_pending_load() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("a".to_string())).unwrap();
        assert!(detail.configure(None).is_none());

        let completion = detail.complete(&ticket, Ok(response(hello(), None)), &page());
        assert_eq!(completion, Completion::Stale);
        assert_eq!(detail.status(), LoadStatus::Idle);
        assert!(detail.post().is_none());
    }

    #[test]
    fn test_description_falls_back_to_content() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        let page = page();
        detail.complete(&ticket, Ok(response(hello(), Some(Vec::new()))), &page);

        assert_eq!(page.title().as_deref(), Some("Hello | Blog"));
        let description = page.description().unwrap();
        assert_eq!(description.chars().count(), 160);
        assert_eq!(description, "abcdefghij".repeat(16));

        let markup = detail.render(&page);
        assert!(markup.by_class("related-posts").is_empty());
        assert!(!markup.to_html().contains("Related Posts"));
    }

    #[test]
    fn test_description_prefers_excerpt() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        let page = page();
        let post = Post {
            excerpt: Some("A short hello".to_string()),
            ..hello()
        };
        detail.complete(&ticket, Ok(response(post, None)), &page);
        assert_eq!(page.description().as_deref(), Some("A short hello"));
    }

    #[test]
    fn test_no_description_meta_is_fine() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        let page = page().without_description_meta();
        detail.complete(&ticket, Ok(response(hello(), None)), &page);
        assert_eq!(page.title().as_deref(), Some("Hello | Blog"));
        assert!(page.description().is_none());
    }

    #[test]
    fn test_renders_post() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        let post = Post {
            content: "<h2>Intro</h2><p>Hi</p>".to_string(),
            owner: Some(Owner {
                name: Some("Ada".to_string()),
            }),
            categories: vec![Category::new("c1", "Rust"), Category::new("c2", "Wasm")],
            ..hello()
        };
        detail.complete(&ticket, Ok(response(post, None)), &page());

        let markup = detail.render(&page());
        assert_eq!(markup.by_class("post-title")[0].text_content(), "Hello");
        assert_eq!(markup.by_class("post-author")[0].text_content(), "By Ada");
        assert_eq!(
            markup.by_class("post-date")[0].text_content(),
            "February 29, 2024"
        );
        assert_eq!(markup.by_class("post-category").len(), 2);
        assert!(markup.to_html().contains("<h2>Intro</h2><p>Hi</p>"));
        assert_eq!(
            markup.by_class("post-cover-image")[0].get_attr("src"),
            Some(BlogConfig::default().site.placeholder_image.as_str())
        );
    }

    #[test]
    fn test_anonymous_author() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        detail.complete(&ticket, Ok(response(hello(), None)), &page());
        let markup = detail.render(&page());
        assert_eq!(
            markup.by_class("post-author")[0].text_content(),
            "By Anonymous"
        );
    }

    #[test]
    fn test_renders_related_posts() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        let related = vec![
            Post {
                slug: "second".to_string(),
                title: "Second".to_string(),
                cover_image: Some("https://example.com/2.jpg".to_string()),
                ..Post::default()
            },
            Post {
                slug: "third".to_string(),
                title: "Third".to_string(),
                ..Post::default()
            },
        ];
        detail.complete(&ticket, Ok(response(hello(), Some(related))), &page());

        let markup = detail.render(&page());
        assert_eq!(markup.by_class("related-posts").len(), 1);
        let links = markup.by_class("related-post-link");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].get_attr("href"), Some("/blog/second"));
        let images = markup.by_class("related-post-image");
        assert_eq!(images[0].get_attr("src"), Some("https://example.com/2.jpg"));
        assert_eq!(
            images[1].get_attr("src"),
            Some(BlogConfig::default().site.placeholder_image.as_str())
        );
    }

    #[test]
    fn test_error_placeholder_keeps_previous_post() {
        let mut detail = PostDetail::new(BlogConfig::default());
        let page = page();
        let ticket = detail.configure(Some("hello-world".to_string())).unwrap();
        detail.complete(&ticket, Ok(response(hello(), None)), &page);

        let ticket = detail.configure(Some("missing".to_string())).unwrap();
        let completion = detail.complete(&ticket, Err(BlogError::http("get_post", 404)), &page);
        assert_eq!(completion, Completion::Failed);
        assert_eq!(detail.post().map(|p| p.title.as_str()), Some("Hello"));
        assert_eq!(page.title().as_deref(), Some("Hello | Blog"));

        let markup = detail.render(&page);
        assert!(
            markup
                .text_content()
                .contains("Error loading post. Please try again later.")
        );
        assert!(markup.by_class("post-title").is_empty());
    }
}
