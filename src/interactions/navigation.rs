//! In-page anchor navigation: smooth scrolling on click and keeping the
//! `active` nav link in sync with the section on screen.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::observer;
use crate::dom;

const ACTIVE: &str = "active";
/// Nav links that point into the current page. Links to other pages keep
/// whatever highlight the page gave them.
const ANCHOR_LINKS: &str = r##".nav-link[href^="#"]"##;

/// Element id an in-page href points at: `"#about"` gives `"about"`. Bare
/// `"#"` and external hrefs give `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a nav link with `href` belongs to the section `id`.
pub fn links_to_section(href: &str, id: &str) -> bool {
	fragment_id(href) == Some(id)
}

/// Make `active` the only in-page nav link carrying the active class.
fn set_active(doc: &Document, active: impl Fn(&Element) -> bool) {
	for link in dom::query_all(doc, ANCHOR_LINKS) {
		let _ = if active(&link) {
			link.class_list().add_1(ACTIVE)
		} else {
			link.class_list().remove_1(ACTIVE)
		};
	}
}

pub fn init_smooth_scroll() -> Result<(), JsValue> {
	let Some(doc) = dom::document() else {
		return Ok(());
	};
	for link in dom::query_all(&doc, ANCHOR_LINKS) {
		let (doc, clicked) = (doc.clone(), link.clone());
		dom::listen(&link, "click", move |event| {
			event.prevent_default();
			let Some(target) = clicked
				.get_attribute("href")
				.as_deref()
				.and_then(fragment_id)
				.and_then(|id| doc.get_element_by_id(id))
			else {
				return;
			};
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			options.set_block(ScrollLogicalPosition::Start);
			target.scroll_into_view_with_scroll_into_view_options(&options);
			set_active(&doc, |l| l == &clicked);
		})?;
	}
	Ok(())
}

pub fn init_navigation() -> Result<(), JsValue> {
	let Some(doc) = dom::document() else {
		return Ok(());
	};
	let sections = dom::query_all(&doc, "section[id]");
	if sections.is_empty() {
		debug!("portfolio-fx: no sections, nav tracking skipped");
		return Ok(());
	}
	let page = doc.clone();
	let watcher = observer(0.5, None, move |entries, _| {
		for entry in entries {
			let id = entry.target().id();
			set_active(&page, |link| {
				link.get_attribute("href")
					.is_some_and(|href| links_to_section(&href, &id))
			});
		}
	})?;
	for section in &sections {
		watcher.observe(section);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fragment_ids() {
		assert_eq!(fragment_id("#projects"), Some("projects"));
		assert_eq!(fragment_id("#"), None);
		assert_eq!(fragment_id("about.html"), None);
		assert_eq!(fragment_id(""), None);
	}

	#[test]
	fn links_match_their_section_only() {
		assert!(links_to_section("#home", "home"));
		assert!(!links_to_section("#home", "homepage"));
		assert!(!links_to_section("home", "home"));
		assert!(!links_to_section("#", ""));
	}
}
