//! Page-wide animator bound to real DOM elements.
//!
//! One `requestAnimationFrame` loop, started on first use, ticks the shared
//! registry. Everything runs on the browser's main thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::engine::{AnimationHandle, Animator, Channels, StyleState, StyleTarget, TweenSpec};
use crate::dom;

impl StyleTarget for HtmlElement {
	fn apply_style(&self, style: &StyleState, channels: Channels) {
		let css = self.style();
		if channels.opacity {
			let _ = css.set_property("opacity", &style.opacity_css());
		}
		if channels.transform {
			// An identity transform would still make this element the
			// containing block of fixed-position descendants.
			let _ = if style.has_transform() {
				css.set_property("transform", &style.transform_css())
			} else {
				css.remove_property("transform").map(drop)
			};
		}
	}
}

thread_local! {
	static ANIMATOR: RefCell<Animator<HtmlElement>> = RefCell::new(Animator::new());
	static DRIVER_STARTED: Cell<bool> = const { Cell::new(false) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Animate `targets` with `spec`, starting now. The starting values are
/// written immediately.
pub fn animate(targets: Vec<HtmlElement>, spec: &TweenSpec) -> AnimationHandle {
	ensure_driver();
	let now = dom::now();
	ANIMATOR.with(|a| {
		let mut a = a.borrow_mut();
		let handle = a.animate(targets, spec, now);
		a.tick(now);
		handle
	})
}

/// Freeze every running animation (e.g. while the tab is hidden).
pub fn pause_all() {
	let now = dom::now();
	ANIMATOR.with(|a| a.borrow_mut().pause_all(now));
}

/// Continue every frozen animation.
pub fn resume_all() {
	let now = dom::now();
	ANIMATOR.with(|a| a.borrow_mut().resume_all(now));
}

/// Animate each of `targets` on its own, all starting now.
pub fn animate_each(targets: Vec<HtmlElement>, spec: &TweenSpec) -> Vec<AnimationHandle> {
	ensure_driver();
	let now = dom::now();
	ANIMATOR.with(|a| {
		let mut a = a.borrow_mut();
		let handles = a.animate_each(targets, spec, now);
		a.tick(now);
		handles
	})
}

fn ensure_driver() {
	if DRIVER_STARTED.with(|s| s.replace(true)) {
		return;
	}
	let f: FrameCallback = Rc::new(RefCell::new(None));
	let g = f.clone();
	*g.borrow_mut() = Some(Closure::new(move |ts: f64| {
		ANIMATOR.with(|a| a.borrow_mut().tick(ts));
		if let (Some(cb), Some(w)) = (f.borrow().as_ref(), web_sys::window()) {
			let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let (Some(cb), Some(w)) = (g.borrow().as_ref(), web_sys::window()) {
		let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}
