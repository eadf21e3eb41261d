//! Tween registry.
//!
//! An [`Animator`] holds every running animation plus the last style written
//! to each element, so a new tween without an explicit `from` continues from
//! wherever the element currently is. Starting a tween on an element cancels
//! any in-flight track for the same property on that element.

use super::easing::Easing;

/// Animatable style properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
	Opacity,
	/// Pixels.
	TranslateY,
	Scale,
	/// Degrees.
	RotateX,
}

/// One property's keyframes. `from = None` starts at the element's current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
	pub property: Property,
	pub from: Option<f64>,
	pub to: f64,
}

/// Start offset of each target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delay {
	/// Same delay (ms) for every target.
	Fixed(f64),
	/// Target `i` waits `i * step` ms.
	Stagger(f64),
}

impl Delay {
	pub fn for_index(self, index: usize) -> f64 {
		match self {
			Delay::Fixed(ms) => ms,
			Delay::Stagger(step) => step * index as f64,
		}
	}
}

/// Configuration record for one animation.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
	pub tracks: Vec<Track>,
	pub duration_ms: f64,
	pub easing: Easing,
	pub delay: Delay,
}

impl TweenSpec {
	pub fn new(duration_ms: f64) -> Self {
		Self {
			tracks: Vec::new(),
			duration_ms,
			easing: Easing::default(),
			delay: Delay::Fixed(0.0),
		}
	}

	pub fn easing(mut self, easing: Easing) -> Self {
		self.easing = easing;
		self
	}

	pub fn delay(mut self, delay: Delay) -> Self {
		self.delay = delay;
		self
	}

	/// Animate `property` from `from` to `to`.
	pub fn from_to(mut self, property: Property, from: f64, to: f64) -> Self {
		self.tracks.push(Track {
			property,
			from: Some(from),
			to,
		});
		self
	}

	/// Animate `property` from its current value to `to`.
	pub fn to(mut self, property: Property, to: f64) -> Self {
		self.tracks.push(Track {
			property,
			from: None,
			to,
		});
		self
	}
}

/// Last applied value of every animatable property of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleState {
	pub opacity: f64,
	pub translate_y: f64,
	pub scale: f64,
	pub rotate_x: f64,
}

impl Default for StyleState {
	fn default() -> Self {
		Self {
			opacity: 1.0,
			translate_y: 0.0,
			scale: 1.0,
			rotate_x: 0.0,
		}
	}
}

impl StyleState {
	pub fn get(&self, property: Property) -> f64 {
		match property {
			Property::Opacity => self.opacity,
			Property::TranslateY => self.translate_y,
			Property::Scale => self.scale,
			Property::RotateX => self.rotate_x,
		}
	}

	pub fn set(&mut self, property: Property, value: f64) {
		match property {
			Property::Opacity => self.opacity = value,
			Property::TranslateY => self.translate_y = value,
			Property::Scale => self.scale = value,
			Property::RotateX => self.rotate_x = value,
		}
	}

	pub fn opacity_css(&self) -> String {
		css_num(self.opacity)
	}

	pub fn transform_css(&self) -> String {
		format!(
			"translateY({}px) scale({}) rotateX({}deg)",
			css_num(self.translate_y),
			css_num(self.scale),
			css_num(self.rotate_x)
		)
	}

	/// False when the transform part renders as the identity.
	pub fn has_transform(&self) -> bool {
		css_num(self.translate_y) != "0" || css_num(self.scale) != "1" || css_num(self.rotate_x) != "0"
	}
}

/// Three decimals, no trailing zeros, no negative zero.
fn css_num(v: f64) -> String {
	let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
	format!("{}", rounded)
}

/// Style declarations an animation owns on its targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Channels {
	pub opacity: bool,
	/// Any of translateY, scale or rotateX; they share one `transform`.
	pub transform: bool,
}

impl Channels {
	pub fn of(properties: impl IntoIterator<Item = Property>) -> Self {
		properties.into_iter().fold(Self::default(), |mut c, p| {
			match p {
				Property::Opacity => c.opacity = true,
				Property::TranslateY | Property::Scale | Property::RotateX => c.transform = true,
			}
			c
		})
	}
}

/// Something an [`Animator`] can write styles to.
pub trait StyleTarget: Clone + PartialEq {
	/// Write the `channels` parts of `style`; everything else is left to the
	/// page's own stylesheet.
	fn apply_style(&self, style: &StyleState, channels: Channels);
}

/// Returned by [`Animator::animate`]; only useful for querying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

#[derive(Clone, Copy, Debug)]
struct ActiveTrack {
	property: Property,
	from: f64,
	to: f64,
}

#[derive(Clone, Debug)]
struct TargetRun<T> {
	target: T,
	delay: f64,
	tracks: Vec<ActiveTrack>,
}

#[derive(Clone, Debug)]
struct Animation<T> {
	id: u64,
	start: f64,
	duration: f64,
	easing: Easing,
	runs: Vec<TargetRun<T>>,
}

impl<T> Animation<T> {
	fn progress(&self, run: &TargetRun<T>, now: f64) -> f64 {
		let elapsed = now - self.start - run.delay;
		if self.duration <= 0.0 {
			if elapsed >= 0.0 { 1.0 } else { 0.0 }
		} else {
			(elapsed / self.duration).clamp(0.0, 1.0)
		}
	}

	fn finished(&self, now: f64) -> bool {
		self.runs.iter().all(|run| self.progress(run, now) >= 1.0)
	}
}

/// Registry of running animations.
#[derive(Clone, Debug)]
pub struct Animator<T> {
	animations: Vec<Animation<T>>,
	styles: Vec<(T, StyleState)>,
	paused_at: Option<f64>,
	next_id: u64,
}

impl<T> Default for Animator<T> {
	fn default() -> Self {
		Self {
			animations: Vec::new(),
			styles: Vec::new(),
			paused_at: None,
			next_id: 0,
		}
	}
}

impl<T: StyleTarget> Animator<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Last style written to `target` (defaults if never animated).
	pub fn style_of(&self, target: &T) -> StyleState {
		self.styles
			.iter()
			.find(|(t, _)| t == target)
			.map(|(_, s)| *s)
			.unwrap_or_default()
	}

	/// Register an animation of `targets` starting at `now`.
	pub fn animate(&mut self, targets: Vec<T>, spec: &TweenSpec, now: f64) -> AnimationHandle {
		for target in &targets {
			self.cancel_tracks(target, spec);
		}

		let runs = targets
			.into_iter()
			.enumerate()
			.map(|(i, target)| {
				let current = self.style_of(&target);
				let tracks = spec
					.tracks
					.iter()
					.map(|t| ActiveTrack {
						property: t.property,
						from: t.from.unwrap_or_else(|| current.get(t.property)),
						to: t.to,
					})
					.collect();
				TargetRun {
					target,
					delay: spec.delay.for_index(i),
					tracks,
				}
			})
			.collect();

		let id = self.next_id;
		self.next_id += 1;
		// A tween registered while paused starts counting on resume.
		let start = self.paused_at.unwrap_or(now);
		self.animations.push(Animation {
			id,
			start,
			duration: spec.duration_ms,
			easing: spec.easing,
			runs,
		});
		AnimationHandle(id)
	}

	/// Register one animation per target, so every target starts at `now`
	/// whatever the spec's delay says about later indices.
	pub fn animate_each(&mut self, targets: Vec<T>, spec: &TweenSpec, now: f64) -> Vec<AnimationHandle> {
		targets
			.into_iter()
			.map(|target| self.animate(vec![target], spec, now))
			.collect()
	}

	fn cancel_tracks(&mut self, target: &T, spec: &TweenSpec) {
		for anim in &mut self.animations {
			for run in anim.runs.iter_mut().filter(|r| r.target == *target) {
				run.tracks
					.retain(|t| !spec.tracks.iter().any(|n| n.property == t.property));
			}
			anim.runs.retain(|r| !r.tracks.is_empty());
		}
		self.animations.retain(|a| !a.runs.is_empty());
	}

	/// Write the styles for time `now` and drop finished animations.
	/// Does nothing while paused.
	pub fn tick(&mut self, now: f64) {
		if self.paused_at.is_some() {
			return;
		}

		for anim in &self.animations {
			for run in &anim.runs {
				let eased = anim.easing.apply(anim.progress(run, now));
				let style = style_entry(&mut self.styles, &run.target);
				for track in &run.tracks {
					style.set(track.property, track.from + (track.to - track.from) * eased);
				}
				run.target
					.apply_style(style, Channels::of(run.tracks.iter().map(|t| t.property)));
			}
		}

		self.animations.retain(|a| !a.finished(now));
	}

	/// Freeze every running animation.
	pub fn pause_all(&mut self, now: f64) {
		if self.paused_at.is_none() {
			self.paused_at = Some(now);
		}
	}

	/// Continue every animation from where it was frozen.
	pub fn resume_all(&mut self, now: f64) {
		if let Some(paused_at) = self.paused_at.take() {
			let shift = (now - paused_at).max(0.0);
			for anim in &mut self.animations {
				anim.start += shift;
			}
		}
	}

	pub fn is_running(&self, handle: AnimationHandle) -> bool {
		self.animations.iter().any(|a| a.id == handle.0)
	}

	/// Number of animations still in the registry.
	pub fn running(&self) -> usize {
		self.animations.len()
	}
}

fn style_entry<'a, T: StyleTarget>(styles: &'a mut Vec<(T, StyleState)>, target: &T) -> &'a mut StyleState {
	let idx = match styles.iter().position(|(t, _)| t == target) {
		Some(idx) => idx,
		None => {
			styles.push((target.clone(), StyleState::default()));
			styles.len() - 1
		}
	};
	&mut styles[idx].1
}
