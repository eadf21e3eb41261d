//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page and an
//! animation loop via `requestAnimationFrame` that steps and draws the field
//! each frame. A window `resize` listener keeps canvas and field bounds in
//! step with the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render::CanvasSink;
use crate::components::theme::ParticleStyle;
use crate::dom;

/// Element id of the backdrop canvas.
pub const CANVAS_ID: &str = "p5-canvas";

/// Renders the animated particle field behind all other page content.
///
/// `seed` fixes the particle layout; by default each page load is random.
#[component]
pub fn ParticleBackground(#[prop(optional)] seed: Option<u64>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = dom::viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("portfolio-fx: 2d context unavailable, particle backdrop disabled");
			return;
		};

		let style = ParticleStyle::default();
		let seed = seed.unwrap_or_else(dom::random_seed);
		*field.borrow_mut() = Some(ParticleField::seeded(style, w, h, seed));
		debug!("portfolio-fx: particle field {}x{} seeded with {}", w, h, seed);

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = dom::viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner) = (field.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				let mut sink = CanvasSink::new(&ctx, f.style());
				f.frame(&mut sink);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				request_frame(&win, cb);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			request_frame(&window, cb);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=CANVAS_ID
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) {
	let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
}
