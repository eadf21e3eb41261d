//! portfolio-fx: client-side effects for a personal portfolio site.
//!
//! This crate renders an animated particle backdrop and a skills radar chart
//! on HTML canvases, and wires the page's reveal, navigation, menu, hover and
//! typing animations through a small tween engine. Everything is driven by
//! `requestAnimationFrame` on the browser's main thread.

use leptos::prelude::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

pub mod components;
mod dom;
pub mod interactions;
pub mod tween;

pub use components::particle_field::{CANVAS_ID, FrameSink, Link, Particle, ParticleBackground, ParticleField};
pub use components::skills_chart::{
	ChartError, DEFAULT_SKILLS, Indicator, RadarChart, RadarGeometry, RadarOption, RadarSeries, RadarShape,
	SkillsChart, init_skills_chart,
};
pub use components::theme::{Color, ParticleStyle, RadarStyle};

/// Element the particle backdrop mounts into; the body when absent.
pub const BACKDROP_ID: &str = "particle-bg";
/// Window property other pages call the initialisers through.
pub const API_GLOBAL: &str = "PortfolioJS";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let level = if cfg!(debug_assertions) {
		Level::Debug
	} else {
		Level::Info
	};
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Bring every effect up once the DOM is parsed.
pub fn start() {
	let Some(doc) = dom::document() else {
		warn!("portfolio-fx: no document, nothing to start");
		return;
	};
	let page = doc.clone();
	if let Err(e) = dom::when_ready(&doc, move || boot(&page)) {
		warn!("portfolio-fx: startup deferred and failed: {:?}", e);
	}
}

fn boot(doc: &Document) {
	mount_backdrop(doc);
	init_skills_chart();

	let steps: [(&str, fn() -> Result<(), JsValue>); 6] = [
		("scroll reveal", interactions::init_scroll_reveal),
		("smooth scroll", interactions::init_smooth_scroll),
		("mobile menu", interactions::init_mobile_menu),
		("project cards", interactions::init_project_cards),
		("navigation", interactions::init_navigation),
		("typing effect", interactions::init_typing_effect),
	];
	for (name, init) in steps {
		if let Err(e) = init() {
			warn!("portfolio-fx: {} failed to start: {:?}", name, e);
		}
	}

	if let Err(e) = pause_when_hidden(doc) {
		warn!("portfolio-fx: visibility tracking unavailable: {:?}", e);
	}
	if let Err(e) = export_api() {
		warn!("portfolio-fx: window.{} not exported: {:?}", API_GLOBAL, e);
	}
	fade_in_body(doc);
	info!("portfolio-fx: started");
}

fn mount_backdrop(doc: &Document) {
	let host = doc
		.get_element_by_id(BACKDROP_ID)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.or_else(|| doc.body());
	let Some(host) = host else {
		warn!("portfolio-fx: no body, particle backdrop skipped");
		return;
	};
	leptos::mount::mount_to(host, || view! { <ParticleBackground /> }).forget();
}

fn fade_in_body(doc: &Document) {
	let Some(body) = doc.body() else {
		return;
	};
	let spec = tween::TweenSpec::new(1000.0)
		.from_to(tween::Property::Opacity, 0.0, 1.0)
		.easing(tween::Easing::EaseOutCubic);
	tween::animate(vec![body], &spec);
}

/// Freeze animations while the tab is in the background.
fn pause_when_hidden(doc: &Document) -> Result<(), JsValue> {
	let page = doc.clone();
	dom::listen(doc, "visibilitychange", move |_| {
		if page.hidden() {
			debug!("portfolio-fx: hidden, pausing animations");
			tween::pause_all();
		} else {
			tween::resume_all();
		}
	})
}

/// Publish the re-runnable initialisers as `window.PortfolioJS`.
pub fn export_api() -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let api = js_sys::Object::new();
	let entries: [(&str, fn() -> Result<(), JsValue>); 4] = [
		("initScrollReveal", interactions::init_scroll_reveal),
		("initSmoothScroll", interactions::init_smooth_scroll),
		("initMobileMenu", interactions::init_mobile_menu),
		("initNavigation", interactions::init_navigation),
	];
	for (name, init) in entries {
		let callback = Closure::<dyn FnMut()>::new(move || {
			if let Err(e) = init() {
				warn!("portfolio-fx: {} failed: {:?}", name, e);
			}
		});
		js_sys::Reflect::set(&api, &JsValue::from_str(name), &callback.into_js_value())?;
	}
	js_sys::Reflect::set(&window, &JsValue::from_str(API_GLOBAL), &api)?;
	Ok(())
}
