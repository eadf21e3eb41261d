//! Easing curves.

use serde::{Deserialize, Serialize};

/// Maps linear progress `t ∈ [0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
	#[serde(rename = "linear")]
	Linear,
	#[default]
	#[serde(rename = "easeOutCubic", alias = "cubicOut")]
	EaseOutCubic,
	#[serde(rename = "easeInOutQuad", alias = "quadraticInOut")]
	EaseInOutQuad,
}

impl Easing {
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
			Easing::EaseInOutQuad => {
				if t < 0.5 {
					2.0 * t * t
				} else {
					1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
				}
			}
		}
	}
}
