//! The reactive fetch lifecycle shared by every widget.
//!
//! A widget moves through [`LoadStatus`] as its driving parameters change:
//!
//! ```text
//! Idle --mount/param change--> Loading --success--> Loaded --param change--> Loading
//!                              Loading --failure--> Error  --param change--> Loading
//! ```
//!
//! Every load gets a generation number. Completions whose generation is not
//! the one currently awaited are discarded, so an earlier slow request can
//! never overwrite the result of a later one.

use std::cell::{Cell, RefCell};

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::{
    api::{ApiRequest, ContentApi},
    error::{BlogError, Result},
    markup::Markup,
    page::PageContext,
};

/// Which render branch of a widget is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Not mounted yet, or nothing to load.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed.
    Error,
}

/// A started load: the request to send and the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    request: ApiRequest,
}

impl LoadTicket {
    /// Generation this load was started in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The request to send.
    pub fn request(&self) -> &ApiRequest {
        &self.request
    }
}

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was stored and the widget is `Loaded`.
    Applied,
    /// The load failed and the widget is in `Error`.
    Failed,
    /// A newer load superseded this one; the widget is unchanged.
    Stale,
}

/// Load state for one widget instance.
#[derive(Debug)]
pub struct FetchWidget<T> {
    name: &'static str,
    status: LoadStatus,
    data: Option<T>,
    error: Option<BlogError>,
    generation: u64,
    pending: Option<u64>,
}

impl<T> FetchWidget<T> {
    /// Create an idle widget; `name` tags its diagnostics.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            status: LoadStatus::Idle,
            data: None,
            error: None,
            generation: 0,
            pending: None,
        }
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Data of the last successful load.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error of the last failed load, cleared by the next success.
    pub fn error(&self) -> Option<&BlogError> {
        self.error.as_ref()
    }

    /// Generation of the most recently started load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a load is awaiting completion.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin(&mut self, request: ApiRequest) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.status = LoadStatus::Loading;
        debug!(
            widget = self.name,
            endpoint = request.endpoint(),
            generation = self.generation,
            "load started"
        );
        LoadTicket {
            generation: self.generation,
            request,
        }
    }

    /// Settle a load.
    ///
    /// Failures keep previously loaded data and are reported as `error!`
    /// events carrying the cause.
    pub fn complete(&mut self, ticket: &LoadTicket, result: Result<T>) -> Completion {
        if self.pending != Some(ticket.generation) {
            match &result {
                Ok(_) => debug!(
                    widget = self.name,
                    generation = ticket.generation,
                    current = self.generation,
                    "discarding stale completion"
                ),
                Err(err) => debug!(
                    widget = self.name,
                    generation = ticket.generation,
                    current = self.generation,
                    error = %err,
                    "discarding stale failed completion"
                ),
            }
            return Completion::Stale;
        }
        self.pending = None;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.status = LoadStatus::Loaded;
                Completion::Applied
            }
            Err(err) => {
                error!(
                    widget = self.name,
                    endpoint = ticket.request.endpoint(),
                    error = %err,
                    "failed to load"
                );
                self.error = Some(err);
                self.status = LoadStatus::Error;
                Completion::Failed
            }
        }
    }

    /// Return to `Idle`, invalidating any load in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.status = LoadStatus::Idle;
    }
}

/// A widget driven by external parameters.
pub trait ReactiveWidget {
    /// Driving parameters; a change triggers a reload.
    type Params;

    /// Decoded response body.
    type Data: DeserializeOwned;

    /// Apply driving parameters.
    ///
    /// Returns a ticket when a load must be issued: on first mount and
    /// whenever the parameters differ from the previous snapshot.
    fn configure(&mut self, params: Self::Params) -> Option<LoadTicket>;

    /// Settle a load, applying any page side effects on success.
    fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Self::Data>,
        page: &dyn PageContext,
    ) -> Completion;

    /// Render the current state.
    fn render(&self, page: &dyn PageContext) -> Markup;
}

/// Sink receiving rendered markup; each commit replaces the whole content.
pub trait RenderSurface {
    /// Replace the surface content.
    fn commit(&self, markup: &Markup);
}

/// Render surface keeping the last committed HTML in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    html: RefCell<String>,
    commits: Cell<usize>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed HTML.
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    /// Number of commits so far.
    pub fn commit_count(&self) -> usize {
        self.commits.get()
    }
}

impl RenderSurface for MemorySurface {
    fn commit(&self, markup: &Markup) {
        *self.html.borrow_mut() = markup.to_html();
        self.commits.set(self.commits.get() + 1);
    }
}

/// A widget mounted on a page: wires state, transport and render surface.
pub struct Mounted<W, A, P, S> {
    widget: RefCell<W>,
    api: A,
    page: P,
    surface: S,
}

impl<W, A, P, S> Mounted<W, A, P, S>
where
    W: ReactiveWidget,
    A: ContentApi,
    P: PageContext,
    S: RenderSurface,
{
    /// Mount `widget`. Nothing is loaded until the first [`Self::configure`].
    pub fn new(widget: W, api: A, page: P, surface: S) -> Self {
        Self {
            widget: RefCell::new(widget),
            api,
            page,
            surface,
        }
    }

    /// Feed driving parameters, loading when they changed.
    pub async fn configure(&self, params: W::Params) {
        let ticket = self.widget.borrow_mut().configure(params);
        self.commit();
        if let Some(ticket) = ticket {
            self.load(ticket).await;
        }
    }

    /// Run a user action (e.g. pagination) that may start a load.
    pub async fn dispatch<F>(&self, action: F)
    where
        F: FnOnce(&mut W) -> Option<LoadTicket>,
    {
        let ticket = action(&mut *self.widget.borrow_mut());
        if let Some(ticket) = ticket {
            self.commit();
            self.load(ticket).await;
        }
    }

    async fn load(&self, ticket: LoadTicket) {
        let request = ticket.request();
        let result = match self.api.fetch(request).await {
            Ok(response) => response.decode::<W::Data>(request),
            Err(err) => Err(err),
        };

        let completion = self
            .widget
            .borrow_mut()
            .complete(&ticket, result, &self.page);
        if completion != Completion::Stale {
            self.commit();
        }
    }

    /// Render the current state into the surface.
    pub fn commit(&self) {
        let markup = self.widget.borrow().render(&self.page);
        self.surface.commit(&markup);
    }

    /// Inspect the widget state.
    pub fn with_widget<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.widget.borrow())
    }

    /// The content API transport.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The page the widget is mounted in.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
