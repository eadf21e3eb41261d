//! Radar layout: where axes, grid rings and series points land for a given
//! container size and grow-in progress.
//!
//! Axis 0 points straight up and the rest follow counter-clockwise. The chart
//! is centred in its container with a radius of 75% of half the shorter side.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::types::{ChartError, RadarOption};

/// Fraction of half the shorter container side used as the radius.
const RADIUS_RATIO: f64 = 0.75;
/// Gap between an axis tip and its label.
const LABEL_GAP: f64 = 14.0;

/// Horizontal anchoring of an axis label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAlign {
	Left,
	Center,
	Right,
}

impl LabelAlign {
	pub fn as_css(self) -> &'static str {
		match self {
			LabelAlign::Left => "left",
			LabelAlign::Center => "center",
			LabelAlign::Right => "right",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
	pub name: String,
	/// Math angle in radians (counter-clockwise from +x).
	pub angle: f64,
	pub tip: (f64, f64),
	pub label_at: (f64, f64),
	pub label_align: LabelAlign,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarGeometry {
	pub center: (f64, f64),
	pub radius: f64,
	pub axes: Vec<Axis>,
	/// Ring radii, innermost first.
	pub rings: Vec<f64>,
	/// One polygon per series, vertices in indicator order.
	pub series: Vec<Vec<(f64, f64)>>,
}

impl RadarGeometry {
	/// Vertices of ring `radius`, one per axis.
	pub fn ring_points(&self, radius: f64) -> Vec<(f64, f64)> {
		self.axes
			.iter()
			.map(|a| polar(self.center, radius, a.angle))
			.collect()
	}
}

/// Angle of axis `index` out of `count`.
pub fn axis_angle(index: usize, count: usize) -> f64 {
	FRAC_PI_2 + index as f64 * TAU / count as f64
}

/// Canvas coordinates (y down) of a point at `radius` along `angle`.
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
	(center.0 + radius * angle.cos(), center.1 - radius * angle.sin())
}

/// Validated option bound to a container size.
#[derive(Clone, Debug)]
pub struct RadarChart {
	option: RadarOption,
	width: f64,
	height: f64,
}

impl RadarChart {
	pub fn new(option: RadarOption, width: f64, height: f64) -> Result<Self, ChartError> {
		option.validate()?;
		Ok(Self {
			option,
			width,
			height,
		})
	}

	/// The option exactly as supplied.
	pub fn option(&self) -> &RadarOption {
		&self.option
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Eased grow-in progress `elapsed_ms` after the chart first drew.
	pub fn growth(&self, elapsed_ms: f64) -> f64 {
		let duration = self.option.animation_duration;
		if duration <= 0.0 {
			return 1.0;
		}
		self.option.animation_easing.apply(elapsed_ms / duration)
	}

	pub fn is_settled(&self, elapsed_ms: f64) -> bool {
		elapsed_ms >= self.option.animation_duration
	}

	pub fn geometry(&self, growth: f64) -> RadarGeometry {
		let center = (self.width / 2.0, self.height / 2.0);
		let radius = (self.width.min(self.height) / 2.0 * RADIUS_RATIO).max(0.0);
		let n = self.option.indicator.len();

		let axes = self
			.option
			.indicator
			.iter()
			.enumerate()
			.map(|(i, ind)| {
				let angle = axis_angle(i, n);
				let cos = angle.cos();
				let label_align = if cos > 0.01 {
					LabelAlign::Left
				} else if cos < -0.01 {
					LabelAlign::Right
				} else {
					LabelAlign::Center
				};
				Axis {
					name: ind.name.clone(),
					angle,
					tip: polar(center, radius, angle),
					label_at: polar(center, radius + LABEL_GAP, angle),
					label_align,
				}
			})
			.collect::<Vec<_>>();

		let splits = self.option.split_number.max(1);
		let rings = (1..=splits)
			.map(|k| radius * k as f64 / splits as f64)
			.collect();

		let growth = growth.clamp(0.0, 1.0);
		let series = self
			.option
			.series
			.iter()
			.map(|s| {
				s.value
					.iter()
					.zip(&self.option.indicator)
					.zip(&axes)
					.map(|((v, ind), axis)| {
						let ratio = (v / ind.max).clamp(0.0, 1.0);
						polar(center, radius * ratio * growth, axis.angle)
					})
					.collect()
			})
			.collect();

		RadarGeometry {
			center,
			radius,
			axes,
			rings,
			series,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skills_chart::types::{Indicator, RadarSeries};

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	fn square(values: Vec<f64>) -> RadarOption {
		RadarOption {
			indicator: (0..4).map(|i| Indicator::new(format!("s{i}"), 100.0)).collect(),
			series: vec![RadarSeries {
				name: "s".into(),
				value: values,
			}],
			..RadarOption::default()
		}
	}

	#[test]
	fn chart_is_centred_with_three_quarter_radius() {
		let chart = RadarChart::new(RadarOption::default(), 800.0, 600.0).unwrap();
		let g = chart.geometry(1.0);
		assert_eq!(g.center, (400.0, 300.0));
		assert_eq!(g.radius, 225.0);
		assert_eq!(g.rings.len(), 5);
		assert_eq!(g.rings[0], 45.0);
		assert_eq!(*g.rings.last().unwrap(), 225.0);
	}

	#[test]
	fn axes_start_at_top_and_run_counter_clockwise() {
		let chart = RadarChart::new(square(vec![100.0; 4]), 200.0, 200.0).unwrap();
		let g = chart.geometry(1.0);
		let r = g.radius;
		assert!(close(g.axes[0].tip, (100.0, 100.0 - r)));
		assert!(close(g.axes[1].tip, (100.0 - r, 100.0)));
		assert!(close(g.axes[2].tip, (100.0, 100.0 + r)));
		assert!(close(g.axes[3].tip, (100.0 + r, 100.0)));
		assert_eq!(g.axes[0].label_align, LabelAlign::Center);
		assert_eq!(g.axes[1].label_align, LabelAlign::Right);
		assert_eq!(g.axes[3].label_align, LabelAlign::Left);
	}

	#[test]
	fn series_points_scale_with_value_and_growth() {
		let chart = RadarChart::new(square(vec![50.0, 100.0, 0.0, 150.0]), 200.0, 200.0).unwrap();
		let r = chart.geometry(1.0).radius;
		let full = chart.geometry(1.0);
		assert!(close(full.series[0][0], (100.0, 100.0 - r / 2.0)));
		assert!(close(full.series[0][2], (100.0, 100.0)));
		// values above max are clamped to the rim
		assert!(close(full.series[0][3], (100.0 + r, 100.0)));

		let half = chart.geometry(0.5);
		assert!(close(half.series[0][1], (100.0 - r / 2.0, 100.0)));

		let none = chart.geometry(0.0);
		assert!(none.series[0].iter().all(|p| close(*p, (100.0, 100.0))));
	}

	#[test]
	fn ring_points_follow_axes() {
		let chart = RadarChart::new(square(vec![1.0; 4]), 200.0, 200.0).unwrap();
		let g = chart.geometry(1.0);
		let pts = g.ring_points(g.rings[0]);
		assert_eq!(pts.len(), 4);
		assert!(close(pts[0], (100.0, 100.0 - g.rings[0])));
	}

	#[test]
	fn growth_follows_the_configured_easing() {
		let chart = RadarChart::new(RadarOption::default(), 400.0, 400.0).unwrap();
		assert_eq!(chart.growth(0.0), 0.0);
		assert!((chart.growth(1000.0) - 0.875).abs() < 1e-12);
		assert_eq!(chart.growth(5000.0), 1.0);
		assert!(!chart.is_settled(1999.0));
		assert!(chart.is_settled(2000.0));
	}

	#[test]
	fn resize_recentres_without_touching_the_option() {
		let mut chart = RadarChart::new(RadarOption::default(), 800.0, 600.0).unwrap();
		chart.resize(300.0, 500.0);
		assert_eq!(chart.size(), (300.0, 500.0));
		let g = chart.geometry(1.0);
		assert_eq!(g.center, (150.0, 250.0));
		assert_eq!(g.radius, 112.5);
		assert_eq!(chart.option(), &RadarOption::default());
	}

	#[test]
	fn invalid_option_is_refused() {
		let mut option = RadarOption::default();
		option.series[0].value.push(1.0);
		assert!(RadarChart::new(option, 100.0, 100.0).is_err());
	}
}
