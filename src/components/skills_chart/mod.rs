//! Skills radar chart.
//!
//! Eight skill axes on a 0-100 scale, drawn as a polygon radar on a canvas
//! that fills `#skills-chart`. Pages can supply their own data in a
//! `<script id="skills-data" type="application/json">` block.

mod component;
mod radar;
mod render;
mod types;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlScriptElement};

pub use component::SkillsChart;
pub use radar::{Axis, LabelAlign, RadarChart, RadarGeometry, axis_angle};
pub use types::{ChartError, DEFAULT_SKILLS, Indicator, RadarOption, RadarSeries, RadarShape};

/// Container the chart mounts into.
pub const CONTAINER_ID: &str = "skills-chart";
/// Script element that may carry a JSON [`RadarOption`].
pub const DATA_ID: &str = "skills-data";

/// Read the chart option embedded in the page, falling back to the default
/// skills when there is none or it does not validate.
pub fn load_option(doc: &Document) -> RadarOption {
	let Some(script) = doc
		.get_element_by_id(DATA_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
	else {
		return RadarOption::default();
	};
	let Ok(json) = script.text() else {
		return RadarOption::default();
	};
	match RadarOption::from_json(&json) {
		Ok(option) => {
			info!(
				"portfolio-fx: loaded {} skill axes, {} series",
				option.indicator.len(),
				option.series.len()
			);
			option
		}
		Err(e) => {
			warn!("portfolio-fx: {}, using default skills", e);
			RadarOption::default()
		}
	}
}

/// Mount the radar into `#skills-chart`. Pages without the container are
/// left alone.
pub fn init_skills_chart() {
	let Some(doc) = crate::dom::document() else {
		return;
	};
	let Some(container) = doc
		.get_element_by_id(CONTAINER_ID)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		debug!("portfolio-fx: no #{}, skills chart skipped", CONTAINER_ID);
		return;
	};
	let option = load_option(&doc);
	leptos::mount::mount_to(container, move || {
		leptos::view! { <SkillsChart option=option /> }
	})
	.forget();
}
