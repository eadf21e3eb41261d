//! Declarative radar chart option, deserialisable from page-embedded JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::theme::RadarStyle;
use crate::tween::Easing;

/// One radar axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
	pub name: String,
	pub max: f64,
}

impl Indicator {
	pub fn new(name: impl Into<String>, max: f64) -> Self {
		Self {
			name: name.into(),
			max,
		}
	}
}

/// One plotted polygon: a value per indicator, in indicator order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
	pub name: String,
	pub value: Vec<f64>,
}

/// Shape of the background grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarShape {
	#[default]
	Polygon,
	Circle,
}

/// Complete chart configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarOption {
	pub indicator: Vec<Indicator>,
	pub series: Vec<RadarSeries>,
	#[serde(default)]
	pub shape: RadarShape,
	/// Number of concentric grid rings.
	#[serde(default = "default_split_number")]
	pub split_number: u32,
	#[serde(default)]
	pub style: RadarStyle,
	/// Grow-in duration of the series polygons, in ms.
	#[serde(default = "default_animation_duration")]
	pub animation_duration: f64,
	#[serde(default)]
	pub animation_easing: Easing,
}

fn default_split_number() -> u32 {
	5
}

fn default_animation_duration() -> f64 {
	2000.0
}

/// Skill axes shown when the page provides no data of its own.
pub const DEFAULT_SKILLS: [(&str, f64); 8] = [
	("Unity 3D", 95.0),
	("C# Programming", 90.0),
	("AI Systems", 88.0),
	("Multiplayer", 85.0),
	("UI/UX Design", 82.0),
	("Backend", 80.0),
	("3D Modeling", 75.0),
	("Optimization", 87.0),
];

impl Default for RadarOption {
	fn default() -> Self {
		Self {
			indicator: DEFAULT_SKILLS
				.iter()
				.map(|(name, _)| Indicator::new(*name, 100.0))
				.collect(),
			series: vec![RadarSeries {
				name: "Technical Skills".to_string(),
				value: DEFAULT_SKILLS.iter().map(|(_, v)| *v).collect(),
			}],
			shape: RadarShape::Polygon,
			split_number: default_split_number(),
			style: RadarStyle::default(),
			animation_duration: default_animation_duration(),
			animation_easing: Easing::EaseOutCubic,
		}
	}
}

/// Why an option cannot be charted.
#[derive(Debug, Error)]
pub enum ChartError {
	#[error("invalid chart data: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("a radar needs at least 3 indicators, got {0}")]
	TooFewIndicators(usize),
	#[error("indicator `{name}` has non-positive max {max}")]
	InvalidMax { name: String, max: f64 },
	#[error("series `{series}` has {got} values for {expected} indicators")]
	ValueCount {
		series: String,
		expected: usize,
		got: usize,
	},
	#[error("split number must be at least 1")]
	NoSplits,
}

impl RadarOption {
	/// Parse and validate a JSON option.
	pub fn from_json(json: &str) -> Result<Self, ChartError> {
		let option: RadarOption = serde_json::from_str(json)?;
		option.validate()?;
		Ok(option)
	}

	pub fn validate(&self) -> Result<(), ChartError> {
		if self.indicator.len() < 3 {
			return Err(ChartError::TooFewIndicators(self.indicator.len()));
		}
		if let Some(bad) = self.indicator.iter().find(|i| !(i.max > 0.0)) {
			return Err(ChartError::InvalidMax {
				name: bad.name.clone(),
				max: bad.max,
			});
		}
		if let Some(bad) = self
			.series
			.iter()
			.find(|s| s.value.len() != self.indicator.len())
		{
			return Err(ChartError::ValueCount {
				series: bad.name.clone(),
				expected: self.indicator.len(),
				got: bad.value.len(),
			});
		}
		if self.split_number == 0 {
			return Err(ChartError::NoSplits);
		}
		Ok(())
	}
}
