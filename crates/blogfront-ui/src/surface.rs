//! [`RenderSurface`] feeding a Leptos signal.

use blogfront_core::{Markup, RenderSurface};
use leptos::prelude::*;

/// Render surface holding the committed HTML in a signal.
///
/// Commits after the owning component was disposed are dropped.
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    html: RwSignal<String>,
}

impl SignalSurface {
    /// Create a surface writing into `html`.
    pub fn new(html: RwSignal<String>) -> Self {
        Self { html }
    }

    /// The signal receiving the HTML.
    pub fn html(&self) -> RwSignal<String> {
        self.html
    }
}

impl RenderSurface for SignalSurface {
    fn commit(&self, markup: &Markup) {
        let _ = self.html.try_set(markup.to_html());
    }
}
