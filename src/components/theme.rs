//! Visual theming shared by the particle backdrop and the skills radar.
//!
//! Provides the accent palette and the style records each canvas reads.

use serde::{Deserialize, Serialize};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when fully opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Site accent (`#00d4ff`).
pub const ACCENT: Color = Color::rgb(0, 212, 255);

/// Background particle field configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles; fixed for the lifetime of the field.
	pub count: usize,
	/// Fill and link color (alpha is taken from each particle / link).
	pub color: Color,
	/// Diameter range.
	pub size_min: f64,
	pub size_max: f64,
	/// Each velocity component is drawn from `[-speed, speed]` units/frame.
	pub speed: f64,
	/// Per-particle opacity range.
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Particles closer than this are joined by a line.
	pub link_distance: f64,
	/// Link alpha at zero distance, on the 0..=255 channel scale.
	pub link_alpha_max: f64,
	pub link_width: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 50,
			color: ACCENT,
			size_min: 2.0,
			size_max: 6.0,
			speed: 0.5,
			opacity_min: 0.3,
			opacity_max: 0.8,
			link_distance: 100.0,
			link_alpha_max: 50.0,
			link_width: 0.5,
		}
	}
}

/// Radar chart colors and stroke widths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
	pub axis_name_color: Color,
	pub axis_name_font: String,
	pub split_line_color: Color,
	pub axis_line_color: Color,
	pub area_color: Color,
	pub line_color: Color,
	pub line_width: f64,
	pub point_color: Color,
	pub point_border_color: Color,
	pub point_border_width: f64,
	pub point_radius: f64,
}

impl Default for RadarStyle {
	fn default() -> Self {
		Self {
			axis_name_color: ACCENT,
			axis_name_font: "bold 12px sans-serif".to_string(),
			split_line_color: ACCENT.with_alpha(0.2),
			axis_line_color: ACCENT.with_alpha(0.3),
			area_color: ACCENT.with_alpha(0.2),
			line_color: ACCENT,
			line_width: 2.0,
			point_color: ACCENT,
			point_border_color: Color::rgb(255, 255, 255),
			point_border_width: 2.0,
			point_radius: 4.0,
		}
	}
}
