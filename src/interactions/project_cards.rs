//! Lift-and-tilt hover on `.project-card`.

use wasm_bindgen::prelude::*;

use crate::dom;
use crate::tween::{self, Easing, Property, TweenSpec};

pub fn hover_in() -> TweenSpec {
	TweenSpec::new(300.0)
		.to(Property::Scale, 1.02)
		.to(Property::RotateX, 5.0)
		.to(Property::TranslateY, -8.0)
		.easing(Easing::EaseOutCubic)
}

pub fn hover_out() -> TweenSpec {
	TweenSpec::new(300.0)
		.to(Property::Scale, 1.0)
		.to(Property::RotateX, 0.0)
		.to(Property::TranslateY, 0.0)
		.easing(Easing::EaseOutCubic)
}

pub fn init_project_cards() -> Result<(), JsValue> {
	let Some(doc) = dom::document() else {
		return Ok(());
	};
	for card in dom::query_html(&doc, ".project-card") {
		let (enter, spec) = (card.clone(), hover_in());
		dom::listen(&card, "mouseenter", move |_| {
			tween::animate(vec![enter.clone()], &spec);
		})?;
		let (leave, spec) = (card.clone(), hover_out());
		dom::listen(&card, "mouseleave", move |_| {
			tween::animate(vec![leave.clone()], &spec);
		})?;
	}
	Ok(())
}
