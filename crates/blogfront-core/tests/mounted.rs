//! End-to-end widget lifecycle tests against a scripted content API.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

use blogfront_core::{
    ApiRequest, ApiResponse, BlogConfig, BlogError, CategoryBrowser, ContentApi, ListingParams,
    LoadStatus, MemoryPage, MemorySurface, Mounted, PageAction, PostDetail, PostListing, Result,
};

struct Scripted {
    yields: usize,
    outcome: std::result::Result<ApiResponse, String>,
}

/// Content API answering from a script, optionally after yielding to the executor.
#[derive(Default)]
struct ScriptedApi {
    script: RefCell<HashMap<String, VecDeque<Scripted>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedApi {
    fn key(request: &ApiRequest) -> String {
        format!("{request:?}")
    }

    fn push(&self, request: ApiRequest, scripted: Scripted) {
        self.script
            .borrow_mut()
            .entry(Self::key(&request))
            .or_default()
            .push_back(scripted);
    }

    fn respond(&self, request: ApiRequest, response: ApiResponse) {
        self.respond_after(0, request, response);
    }

    fn respond_after(&self, yields: usize, request: ApiRequest, response: ApiResponse) {
        self.push(
            request,
            Scripted {
                yields,
                outcome: Ok(response),
            },
        );
    }

    fn fail(&self, request: ApiRequest, message: &str) {
        self.push(
            request,
            Scripted {
                yields: 0,
                outcome: Err(message.to_string()),
            },
        );
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl ContentApi for ScriptedApi {
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        let scripted = self
            .script
            .borrow_mut()
            .get_mut(&Self::key(request))
            .and_then(VecDeque::pop_front);
        let Some(scripted) = scripted else {
            return Err(BlogError::network(request.endpoint(), "no scripted response"));
        };

        for _ in 0..scripted.yields {
            tokio::task::yield_now().await;
        }
        scripted
            .outcome
            .map_err(|message| BlogError::network(request.endpoint(), message))
    }
}

fn page() -> MemoryPage {
    MemoryPage::new("https://example.com")
}

fn posts_request(limit: u32, skip: u64, category_id: Option<&str>) -> ApiRequest {
    ApiRequest::Posts {
        limit,
        skip,
        category_id: category_id.map(str::to_string),
    }
}

fn post_request(slug: &str) -> ApiRequest {
    ApiRequest::Post {
        slug: slug.to_string(),
    }
}

fn posts_json(count: usize, total_count: u64, has_next: bool) -> String {
    let items: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"_id": "p{n}", "slug": "post-{n}", "title": "Post {n}", "content": "Body {n}", "publishedDate": "2024-01-0{d}T00:00:00Z"}}"#,
                d = (n % 9) + 1
            )
        })
        .collect();
    format!(
        r#"{{"items": [{}], "totalCount": {total_count}, "hasNext": {has_next}}}"#,
        items.join(",")
    )
}

fn listing_params(category: Option<&str>, per_page: u32) -> ListingParams {
    ListingParams {
        category_id: category.map(str::to_string),
        posts_per_page: per_page,
    }
}

#[tokio::test]
async fn test_empty_categories_render_message_and_all_posts() {
    let api = ScriptedApi::default();
    api.respond(ApiRequest::Categories, ApiResponse::ok("[]"));

    let mounted = Mounted::new(
        CategoryBrowser::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted.configure(()).await;

    let html = mounted.surface().html();
    assert!(html.contains("No categories found"));
    assert!(html.contains(r#"<a href="/blog" class="category-link active">All Posts</a>"#));
    assert!(!html.contains("Error loading categories"));
    assert_eq!(mounted.with_widget(CategoryBrowser::status), LoadStatus::Loaded);
}

#[tokio::test]
async fn test_categories_load_once() {
    let api = ScriptedApi::default();
    api.respond(
        ApiRequest::Categories,
        ApiResponse::ok(r#"[{"_id": "c1", "label": "Rust"}]"#),
    );

    let mounted = Mounted::new(
        CategoryBrowser::new(BlogConfig::default()),
        api,
        page().with_query("category", "c1"),
        MemorySurface::new(),
    );
    mounted.configure(()).await;
    mounted.configure(()).await;

    let html = mounted.surface().html();
    assert!(html.contains(r#"<a href="/blog?category=c1" class="category-link active">Rust</a>"#));
}

#[tokio::test]
async fn test_single_page_listing_has_no_controls() {
    let api = ScriptedApi::default();
    api.respond(
        posts_request(10, 0, None),
        ApiResponse::ok(posts_json(5, 5, false)),
    );

    let mounted = Mounted::new(
        PostListing::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted
        .configure(ListingParams::from_attributes(None, None, 10))
        .await;

    let html = mounted.surface().html();
    assert_eq!(html.matches(r#"class="post-card""#).count(), 5);
    assert!(!html.contains("pagination-button"));
}

#[tokio::test]
async fn test_pagination_issues_one_load_per_step() {
    let api = ScriptedApi::default();
    api.respond(posts_request(2, 0, None), ApiResponse::ok(posts_json(2, 5, true)));
    api.respond(posts_request(2, 2, None), ApiResponse::ok(posts_json(2, 5, true)));
    api.respond(posts_request(2, 0, None), ApiResponse::ok(posts_json(2, 5, true)));

    let mounted = Mounted::new(
        PostListing::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted.configure(listing_params(None, 2)).await;
    assert!(mounted.surface().html().contains("Page 1 of 3"));

    // Previous on the first page does nothing.
    mounted.dispatch(|w| w.apply(PageAction::Previous)).await;
    assert_eq!(mounted.with_widget(|w| w.pagination().current_page()), 0);

    mounted.dispatch(|w| w.apply(PageAction::Next)).await;
    assert!(mounted.surface().html().contains("Page 2 of 3"));

    mounted.dispatch(|w| w.apply(PageAction::Previous)).await;
    assert!(mounted.surface().html().contains("Page 1 of 3"));

    // Three loads: mount, next, previous.
    assert_eq!(
        mounted.api().requests(),
        vec![
            posts_request(2, 0, None),
            posts_request(2, 2, None),
            posts_request(2, 0, None),
        ]
    );
}

#[tokio::test]
async fn test_next_is_noop_when_server_reports_no_next_page() {
    let api = ScriptedApi::default();
    api.respond(posts_request(2, 0, None), ApiResponse::ok(posts_json(2, 4, false)));

    let mounted = Mounted::new(
        PostListing::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted.configure(listing_params(None, 2)).await;
    let commits = mounted.surface().commit_count();

    mounted.dispatch(|w| w.next_page()).await;
    assert_eq!(mounted.surface().commit_count(), commits);
    assert_eq!(mounted.api().requests().len(), 1);
    assert!(mounted.surface().html().contains(r#"data-action="next-page" disabled"#));
}

#[tokio::test]
async fn test_filter_change_restarts_at_first_page() {
    let api = ScriptedApi::default();
    api.respond(posts_request(2, 0, None), ApiResponse::ok(posts_json(2, 6, true)));
    api.respond(posts_request(2, 2, None), ApiResponse::ok(posts_json(2, 6, true)));
    api.respond(
        posts_request(2, 0, Some("c1")),
        ApiResponse::ok(posts_json(1, 1, false)),
    );

    let mounted = Mounted::new(
        PostListing::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted.configure(listing_params(None, 2)).await;
    mounted.dispatch(PostListing::next_page).await;
    assert_eq!(mounted.with_widget(|w| w.pagination().current_page()), 1);

    mounted.configure(listing_params(Some("c1"), 2)).await;
    assert_eq!(mounted.with_widget(|w| w.pagination().current_page()), 0);
    assert_eq!(
        mounted.api().requests().last(),
        Some(&posts_request(2, 0, Some("c1")))
    );
    assert!(!mounted.surface().html().contains("pagination-button"));
}

#[tokio::test]
async fn test_failed_load_shows_error_and_keeps_data() {
    let api = ScriptedApi::default();
    api.respond(posts_request(2, 0, None), ApiResponse::ok(posts_json(2, 6, true)));
    api.respond(posts_request(2, 2, None), ApiResponse::new(500, "boom"));

    let mounted = Mounted::new(
        PostListing::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted.configure(listing_params(None, 2)).await;
    mounted.dispatch(PostListing::next_page).await;

    let html = mounted.surface().html();
    assert!(html.contains("Error loading posts. Please try again later."));
    assert!(!html.contains("post-card"));
    mounted.with_widget(|w| {
        assert_eq!(w.status(), LoadStatus::Error);
        assert_eq!(w.posts().map(|p| p[0].title.as_str()), Some("Post 1"));
    });
}

#[tokio::test]
async fn test_malformed_and_network_failures_render_error() {
    let api = ScriptedApi::default();
    api.respond(post_request("bad-json"), ApiResponse::ok("<html>oops</html>"));
    api.fail(post_request("offline"), "connection reset");

    let mounted = Mounted::new(
        PostDetail::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );

    mounted.configure(Some("bad-json".to_string())).await;
    assert!(mounted.surface().html().contains("Error loading post."));
    mounted.with_widget(|w| assert_eq!(w.status(), LoadStatus::Error));

    mounted.configure(Some("offline".to_string())).await;
    assert!(mounted.surface().html().contains("Error loading post."));
    assert!(mounted.page().title().is_none());
}

#[tokio::test]
async fn test_post_detail_hello_world() {
    let content = "abcdefghij".repeat(20);
    let api = ScriptedApi::default();
    api.respond(
        post_request("hello-world"),
        ApiResponse::ok(format!(
            r#"{{"post": {{"slug": "hello-world", "title": "Hello", "excerpt": "", "content": "{content}"}}, "relatedPosts": []}}"#
        )),
    );

    let mounted = Mounted::new(
        PostDetail::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );
    mounted.configure(Some("hello-world".to_string())).await;

    assert_eq!(mounted.page().title().as_deref(), Some("Hello | Blog"));
    assert_eq!(
        mounted.page().description(),
        Some(content.chars().take(160).collect::<String>())
    );
    let html = mounted.surface().html();
    assert!(html.contains(r#"<h1 class="post-title">Hello</h1>"#));
    assert!(!html.contains("related-posts"));
}

#[tokio::test]
async fn test_slug_change_race_keeps_latest() {
    let api = ScriptedApi::default();
    api.respond_after(
        8,
        post_request("a"),
        ApiResponse::ok(r#"{"post": {"slug": "a", "title": "Post A"}}"#),
    );
    api.respond(
        post_request("b"),
        ApiResponse::ok(r#"{"post": {"slug": "b", "title": "Post B"}}"#),
    );

    let mounted = Mounted::new(
        PostDetail::new(BlogConfig::default()),
        api,
        page(),
        MemorySurface::new(),
    );

    // "a" is requested first but resolves after "b".
    tokio::join!(
        mounted.configure(Some("a".to_string())),
        mounted.configure(Some("b".to_string())),
    );

    let html = mounted.surface().html();
    assert!(html.contains("Post B"));
    assert!(!html.contains("Post A"));
    assert_eq!(mounted.page().title().as_deref(), Some("Post B | Blog"));
    mounted.with_widget(|w| assert_eq!(w.slug(), Some("b")));
    // Two loading renders plus one for "b"; the stale "a" commits nothing.
    assert_eq!(mounted.surface().commit_count(), 3);
}

#[tokio::test]
async fn test_widgets_fail_in_isolation() {
    let categories_api = ScriptedApi::default();
    categories_api.respond(ApiRequest::Categories, ApiResponse::new(502, ""));
    let listing_api = ScriptedApi::default();
    listing_api.respond(
        posts_request(10, 0, None),
        ApiResponse::ok(posts_json(3, 3, false)),
    );

    let categories = Mounted::new(
        CategoryBrowser::new(BlogConfig::default()),
        categories_api,
        page(),
        MemorySurface::new(),
    );
    let listing = Mounted::new(
        PostListing::new(BlogConfig::default()),
        listing_api,
        page(),
        MemorySurface::new(),
    );

    tokio::join!(
        categories.configure(()),
        listing.configure(listing_params(None, 10)),
    );

    assert!(categories.surface().html().contains("Error loading categories"));
    assert_eq!(listing.surface().html().matches("post-card").count(), 3);
}
