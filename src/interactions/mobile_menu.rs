//! Collapsible navigation for narrow screens, built on first use.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

pub const MENU_ID: &str = "mobile-menu";
pub const MENU_CLASS: &str =
	"md:hidden bg-black bg-opacity-90 backdrop-blur-md absolute top-full left-0 w-full py-4";
const LIST_CLASS: &str = "flex flex-col space-y-4 px-6";
const LINK_CLASS: &str = "text-white hover:text-cyan-400 transition-colors";

/// `(label, href)` of each menu entry, top to bottom.
pub const MENU_LINKS: [(&str, &str); 3] = [
	("Home", "#home"),
	("Projects", "projects.html"),
	("About", "about.html"),
];

/// Display value after a toggle: hidden menus open, anything else closes.
pub fn next_display(current: &str) -> &'static str {
	if current == "none" { "block" } else { "none" }
}

fn build_menu(doc: &Document) -> Result<HtmlElement, JsValue> {
	let menu: HtmlElement = doc.create_element("div")?.dyn_into()?;
	menu.set_id(MENU_ID);
	menu.set_class_name(MENU_CLASS);

	let list = doc.create_element("div")?;
	list.set_class_name(LIST_CLASS);
	for (label, href) in MENU_LINKS {
		let link = doc.create_element("a")?;
		link.set_attribute("href", href)?;
		link.set_class_name(LINK_CLASS);
		link.set_text_content(Some(label));
		list.append_child(&link)?;
	}
	menu.append_child(&list)?;
	Ok(menu)
}

fn toggle(doc: &Document, nav: &Element) -> Result<(), JsValue> {
	if let Some(menu) = doc
		.get_element_by_id(MENU_ID)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	{
		let style = menu.style();
		let current = style.get_property_value("display")?;
		return style.set_property("display", next_display(&current));
	}
	let menu = build_menu(doc)?;
	nav.append_child(&menu)?;
	menu.style().set_property("display", "block")
}

pub fn init_mobile_menu() -> Result<(), JsValue> {
	let Some(doc) = dom::document() else {
		return Ok(());
	};
	let (Some(button), Some(nav)) = (doc.get_element_by_id("mobile-menu-btn"), doc.query_selector("nav")?) else {
		debug!("portfolio-fx: no mobile menu button, skipped");
		return Ok(());
	};
	dom::listen(&button, "click", move |_| {
		if let Err(e) = toggle(&doc, &nav) {
			warn!("portfolio-fx: mobile menu toggle failed: {:?}", e);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggling_alternates_block_and_none() {
		assert_eq!(next_display("none"), "block");
		assert_eq!(next_display("block"), "none");
		assert_eq!(next_display(""), "none");
	}

	#[test]
	fn menu_links_in_order() {
		let hrefs: Vec<_> = MENU_LINKS.iter().map(|(_, h)| *h).collect();
		assert_eq!(hrefs, ["#home", "projects.html", "about.html"]);
	}
}
