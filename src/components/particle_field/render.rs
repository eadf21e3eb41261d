//! Canvas rendering for the particle field.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{FrameSink, Link, Particle};
use crate::components::theme::{Color, ParticleStyle};

/// Draws frames onto a 2D canvas context in the style's accent color.
pub struct CanvasSink<'a> {
	ctx: &'a CanvasRenderingContext2d,
	color: Color,
	link_width: f64,
}

impl<'a> CanvasSink<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d, style: &ParticleStyle) -> Self {
		Self {
			ctx,
			color: style.color,
			link_width: style.link_width,
		}
	}
}

impl FrameSink for CanvasSink<'_> {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn particle(&mut self, particle: &Particle) {
		self.ctx
			.set_fill_style_str(&self.color.with_alpha(particle.opacity).to_css());
		self.ctx.begin_path();
		let _ = self
			.ctx
			.arc(particle.x, particle.y, particle.size / 2.0, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn link(&mut self, link: &Link) {
		self.ctx
			.set_stroke_style_str(&self.color.with_alpha(link.alpha / 255.0).to_css());
		self.ctx.set_line_width(self.link_width);
		self.ctx.begin_path();
		self.ctx.move_to(link.from.0, link.from.1);
		self.ctx.line_to(link.to.0, link.to.1);
		self.ctx.stroke();
	}
}
