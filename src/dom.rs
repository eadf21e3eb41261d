//! Small web-sys conveniences shared by the components and interactions.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub(crate) fn document() -> Option<Document> {
	web_sys::window()?.document()
}

/// Inner window size in CSS pixels, `(0, 0)` if unavailable.
pub(crate) fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// High-resolution timestamp in ms, same clock as `requestAnimationFrame`.
pub(crate) fn now() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}

pub(crate) fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// All elements matching `selector`, in document order. An invalid selector
/// yields nothing.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = doc.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

pub(crate) fn query_html(doc: &Document, selector: &str) -> Vec<HtmlElement> {
	query_all(doc, selector)
		.into_iter()
		.filter_map(|el| el.dyn_into::<HtmlElement>().ok())
		.collect()
}

/// Attach `handler` for the page lifetime.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
	F: FnMut(Event) + 'static,
{
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Run `f` once the DOM is parsed: now if it already is, otherwise on
/// `DOMContentLoaded`.
pub(crate) fn when_ready<F>(doc: &Document, f: F) -> Result<(), JsValue>
where
	F: FnOnce() + 'static,
{
	if doc.ready_state() != "loading" {
		f();
		return Ok(());
	}
	let mut f = Some(f);
	listen(doc, "DOMContentLoaded", move |_| {
		if let Some(f) = f.take() {
			f();
		}
	})
}
