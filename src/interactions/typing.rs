//! Letter-by-letter reveal of the hero heading.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom;
use crate::tween::{self, Delay, Easing, Property, TweenSpec};

/// One glyph per character; spaces become non-breaking so each span keeps
/// its width.
pub fn glyphs(text: &str) -> Vec<String> {
	text.chars()
		.map(|c| if c == ' ' { '\u{00A0}' } else { c })
		.map(String::from)
		.collect()
}

pub fn typing() -> TweenSpec {
	TweenSpec::new(50.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.easing(Easing::EaseOutCubic)
		.delay(Delay::Stagger(50.0))
}

pub fn init_typing_effect() -> Result<(), JsValue> {
	let Some(doc) = dom::document() else {
		return Ok(());
	};
	let Some(title) = doc.query_selector(".orbitron")? else {
		debug!("portfolio-fx: no .orbitron heading, typing skipped");
		return Ok(());
	};
	let text = title.text_content().unwrap_or_default();
	title.set_text_content(None);

	let mut spans = Vec::new();
	for glyph in glyphs(&text) {
		let span: HtmlElement = doc.create_element("span")?.dyn_into()?;
		span.set_text_content(Some(&glyph));
		span.style().set_property("opacity", "0")?;
		title.append_child(&span)?;
		spans.push(span);
	}
	tween::animate(spans, &typing());
	Ok(())
}
