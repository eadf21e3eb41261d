//! Canvas rendering for the skills radar.
//!
//! Passes, back to front: grid rings, axis spokes, axis names, then each
//! series as a filled polygon with outlined vertex dots.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::radar::RadarGeometry;
use super::types::RadarShape;
use crate::components::theme::RadarStyle;

pub fn render(
	ctx: &CanvasRenderingContext2d,
	geometry: &RadarGeometry,
	size: (f64, f64),
	shape: RadarShape,
	style: &RadarStyle,
) {
	ctx.clear_rect(0.0, 0.0, size.0, size.1);

	draw_rings(ctx, geometry, shape, style);
	draw_axes(ctx, geometry, style);
	draw_labels(ctx, geometry, style);
	for polygon in &geometry.series {
		draw_series(ctx, polygon, style);
	}
}

fn draw_rings(ctx: &CanvasRenderingContext2d, g: &RadarGeometry, shape: RadarShape, style: &RadarStyle) {
	ctx.set_stroke_style_str(&style.split_line_color.to_css());
	ctx.set_line_width(1.0);
	for &r in &g.rings {
		ctx.begin_path();
		match shape {
			RadarShape::Polygon => trace_polygon(ctx, &g.ring_points(r)),
			RadarShape::Circle => {
				let _ = ctx.arc(g.center.0, g.center.1, r, 0.0, TAU);
			}
		}
		ctx.stroke();
	}
}

fn draw_axes(ctx: &CanvasRenderingContext2d, g: &RadarGeometry, style: &RadarStyle) {
	ctx.set_stroke_style_str(&style.axis_line_color.to_css());
	ctx.set_line_width(1.0);
	for axis in &g.axes {
		ctx.begin_path();
		ctx.move_to(g.center.0, g.center.1);
		ctx.line_to(axis.tip.0, axis.tip.1);
		ctx.stroke();
	}
}

fn draw_labels(ctx: &CanvasRenderingContext2d, g: &RadarGeometry, style: &RadarStyle) {
	ctx.set_fill_style_str(&style.axis_name_color.to_css());
	ctx.set_font(&style.axis_name_font);
	ctx.set_text_baseline("middle");
	for axis in &g.axes {
		ctx.set_text_align(axis.label_align.as_css());
		let _ = ctx.fill_text(&axis.name, axis.label_at.0, axis.label_at.1);
	}
}

fn draw_series(ctx: &CanvasRenderingContext2d, polygon: &[(f64, f64)], style: &RadarStyle) {
	ctx.begin_path();
	trace_polygon(ctx, polygon);
	ctx.set_fill_style_str(&style.area_color.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&style.line_color.to_css());
	ctx.set_line_width(style.line_width);
	ctx.stroke();

	ctx.set_fill_style_str(&style.point_color.to_css());
	ctx.set_stroke_style_str(&style.point_border_color.to_css());
	ctx.set_line_width(style.point_border_width);
	for &(x, y) in polygon {
		ctx.begin_path();
		let _ = ctx.arc(x, y, style.point_radius, 0.0, TAU);
		ctx.fill();
		ctx.stroke();
	}
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
	let Some((&(x0, y0), rest)) = points.split_first() else {
		return;
	};
	ctx.move_to(x0, y0);
	for &(x, y) in rest {
		ctx.line_to(x, y);
	}
	ctx.close_path();
}
