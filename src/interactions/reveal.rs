//! One-shot fade-up of content as it scrolls into view.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::observer;
use crate::dom;
use crate::tween::{self, Delay, Easing, Property, TweenSpec};

/// Fade-up for `.reveal-element` blocks.
pub fn reveal() -> TweenSpec {
	TweenSpec::new(800.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.from_to(Property::TranslateY, 30.0, 0.0)
		.easing(Easing::EaseOutCubic)
		.delay(Delay::Stagger(100.0))
}

/// Fade-up for the `.skill-item` list, run once for all items together.
pub fn skill_reveal() -> TweenSpec {
	TweenSpec::new(600.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.from_to(Property::TranslateY, 20.0, 0.0)
		.easing(Easing::EaseOutCubic)
		.delay(Delay::Stagger(150.0))
}

pub fn init_scroll_reveal() -> Result<(), JsValue> {
	let Some(doc) = dom::document() else {
		return Ok(());
	};

	let blocks = dom::query_all(&doc, ".reveal-element");
	if !blocks.is_empty() {
		let spec = reveal();
		let watcher = observer(0.1, Some("0px 0px -50px 0px"), move |entries, observer| {
			let targets: Vec<HtmlElement> = entries
				.iter()
				.filter_map(|e| e.target().dyn_into::<HtmlElement>().ok())
				.collect();
			for entry in &entries {
				observer.unobserve(&entry.target());
			}
			// Blocks entering together still start together.
			tween::animate_each(targets, &spec);
		})?;
		for block in &blocks {
			watcher.observe(block);
		}
	}

	let items = dom::query_html(&doc, ".skill-item");
	let Some(first) = items.first().cloned() else {
		debug!("portfolio-fx: no .skill-item, skill reveal skipped");
		return Ok(());
	};
	let spec = skill_reveal();
	let watcher = observer(0.3, None, move |entries, observer| {
		for entry in &entries {
			observer.unobserve(&entry.target());
		}
		tween::animate(items.clone(), &spec);
	})?;
	watcher.observe(&first);
	debug!("portfolio-fx: watching {} reveal blocks", blocks.len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tween::Track;

	#[test]
	fn reveal_timings() {
		let spec = reveal();
		assert_eq!(spec.duration_ms, 800.0);
		assert_eq!(spec.delay.for_index(3), 300.0);
		assert_eq!(
			spec.tracks,
			[
				Track {
					property: Property::Opacity,
					from: Some(0.0),
					to: 1.0
				},
				Track {
					property: Property::TranslateY,
					from: Some(30.0),
					to: 0.0
				},
			]
		);
	}

	#[test]
	fn skill_reveal_is_shorter_with_wider_stagger() {
		let spec = skill_reveal();
		assert_eq!(spec.duration_ms, 600.0);
		assert_eq!(spec.delay.for_index(2), 300.0);
		assert_eq!(spec.tracks[1].from, Some(20.0));
	}
}
