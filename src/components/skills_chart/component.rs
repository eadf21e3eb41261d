//! Leptos component wrapping the skills radar canvas.
//!
//! The canvas fills its parent container. The series polygons grow in over
//! the option's animation duration via `requestAnimationFrame`; after that the
//! chart only redraws when the window is resized.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::radar::RadarChart;
use super::render;
use super::types::RadarOption;

const FALLBACK_SIZE: (f64, f64) = (600.0, 400.0);

/// Chart plus the drawing state the frame and resize callbacks share.
struct ChartContext {
	chart: RadarChart,
	ctx: CanvasRenderingContext2d,
	canvas: HtmlCanvasElement,
	started_at: Option<f64>,
	growth: f64,
}

impl ChartContext {
	fn draw(&self) {
		let option = self.chart.option();
		render::render(
			&self.ctx,
			&self.chart.geometry(self.growth),
			self.chart.size(),
			option.shape,
			&option.style,
		);
	}

	fn fit_to_parent(&mut self) {
		let (w, h) = container_size(&self.canvas);
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		self.chart.resize(w, h);
	}
}

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let parent = canvas.parent_element();
	let dim = |v: Option<i32>, fallback: f64| {
		v.map(f64::from).filter(|v| *v > 0.0).unwrap_or(fallback)
	};
	(
		dim(parent.as_ref().map(|p| p.client_width()), FALLBACK_SIZE.0),
		dim(parent.as_ref().map(|p| p.client_height()), FALLBACK_SIZE.1),
	)
}

/// Renders a radar chart for `option` into its parent container.
#[component]
pub fn SkillsChart(#[prop(optional)] option: Option<RadarOption>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<ChartContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let option = option.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("portfolio-fx: 2d context unavailable, skills chart disabled");
			return;
		};

		let chart = match RadarChart::new(option.clone(), 0.0, 0.0) {
			Ok(chart) => chart,
			Err(e) => {
				warn!("portfolio-fx: skills chart disabled: {}", e);
				return;
			}
		};
		let mut c = ChartContext {
			chart,
			ctx,
			canvas: canvas.clone(),
			started_at: None,
			growth: 0.0,
		};
		c.fit_to_parent();
		*context.borrow_mut() = Some(c);

		let context_resize = context.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.fit_to_parent();
				c.draw();
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move |ts: f64| {
			let settled = match *context_anim.borrow_mut() {
				Some(ref mut c) => {
					let start = *c.started_at.get_or_insert(ts);
					c.growth = c.chart.growth(ts - start);
					c.draw();
					c.chart.is_settled(ts - start)
				}
				None => true,
			};
			if settled {
				return;
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="skills-chart-canvas"
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
