//! Glue between the core widgets and the Leptos components.

use std::rc::Rc;

use blogfront_core::{BlogConfig, Mounted, PageAction, PageContext, ReactiveWidget};
use leptos::{prelude::*, task::spawn_local};
use wasm_bindgen::JsCast;

use crate::{browser::BrowserPage, http::HttpApi, surface::SignalSurface};

/// A widget mounted in the browser.
pub type BrowserWidget<W> = Mounted<W, HttpApi, BrowserPage, SignalSurface>;

/// Handle to a mounted widget that can be moved into closures.
pub type WidgetHandle<W> = StoredValue<Rc<BrowserWidget<W>>, LocalStorage>;

/// The configuration provided by the host, or the defaults.
pub fn blog_config() -> BlogConfig {
    use_context::<BlogConfig>().unwrap_or_default()
}

/// Mount `widget` on the current page.
///
/// Returns the signal receiving its HTML and a handle to drive it.
pub fn mount_widget<W>(widget: W, config: &BlogConfig) -> (RwSignal<String>, WidgetHandle<W>)
where
    W: ReactiveWidget + 'static,
{
    let html = RwSignal::new(String::new());
    let page = BrowserPage::new();
    let api = HttpApi::new(page.origin(), config.api.clone());
    let mounted = Mounted::new(widget, api, page, SignalSurface::new(html));
    (html, StoredValue::new_local(Rc::new(mounted)))
}

/// Feed new driving parameters to a mounted widget.
pub fn spawn_configure<W>(handle: WidgetHandle<W>, params: W::Params)
where
    W: ReactiveWidget + 'static,
    W::Params: 'static,
{
    let mounted = handle.get_value();
    spawn_local(async move { mounted.configure(params).await });
}

/// The pagination action of the control a click landed on, if enabled.
pub fn page_action(ev: &web_sys::MouseEvent) -> Option<PageAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest("[data-action]").ok().flatten()?;
    if control.has_attribute("disabled") {
        return None;
    }
    PageAction::parse(&control.get_attribute("data-action")?)
}
