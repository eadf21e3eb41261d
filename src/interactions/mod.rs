//! Page behaviours wired to plain DOM elements: scroll reveals, anchor
//! navigation, the mobile menu, card hover tilts and the heading typing
//! effect.
//!
//! Every `init_*` function is a no-op on pages that lack its target
//! elements, so the same bundle can be loaded everywhere.

mod mobile_menu;
mod navigation;
mod project_cards;
mod reveal;
mod typing;

use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub use mobile_menu::{MENU_CLASS, MENU_ID, MENU_LINKS, init_mobile_menu, next_display};
pub use navigation::{fragment_id, init_navigation, init_smooth_scroll, links_to_section};
pub use project_cards::{hover_in, hover_out, init_project_cards};
pub use reveal::{init_scroll_reveal, reveal, skill_reveal};
pub use typing::{glyphs, init_typing_effect, typing};

/// Build an observer that calls `on_enter` with each intersecting entry
/// batch. Entries leaving the viewport are dropped.
pub(crate) fn observer<F>(
	threshold: f64,
	root_margin: Option<&str>,
	mut on_enter: F,
) -> Result<IntersectionObserver, JsValue>
where
	F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			let entering: Vec<_> = entries
				.iter()
				.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
				.filter(|e| e.is_intersecting())
				.collect();
			if !entering.is_empty() {
				on_enter(entering, &observer);
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(threshold));
	if let Some(margin) = root_margin {
		init.set_root_margin(margin);
	}
	let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
	callback.forget();
	Ok(observer)
}
