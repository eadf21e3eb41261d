//! Ambient particle field: fixed-size set of drifting points joined by
//! proximity lines.
//!
//! The field owns its particles outright; the render loop is the only code
//! that mutates it. Drawing goes through [`FrameSink`] so the same frame
//! logic drives the canvas and the tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::theme::ParticleStyle;

/// A single floating particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Diameter.
	pub size: f64,
	/// Alpha multiplier in `[0, 1]`.
	pub opacity: f64,
}

impl Particle {
	/// Apply one frame of velocity, then teleport across any edge crossed.
	fn advance(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Edge teleport: below zero jumps to `max`, beyond `max` jumps to zero.
fn wrap(v: f64, max: f64) -> f64 {
	if v < 0.0 {
		max
	} else if v > max {
		0.0
	} else {
		v
	}
}

/// A proximity line between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: (f64, f64),
	pub to: (f64, f64),
	/// Stroke alpha on the 0..=255 channel scale.
	pub alpha: f64,
}

/// Receives the draw calls of one frame.
pub trait FrameSink {
	fn clear(&mut self, width: f64, height: f64);
	fn particle(&mut self, particle: &Particle);
	fn link(&mut self, link: &Link);
}

/// Owns the particles and their bounds.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	style: ParticleStyle,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Populate `style.count` particles uniformly inside `width x height`.
	pub fn new<R: Rng>(style: ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: sample(rng, 0.0, width),
				y: sample(rng, 0.0, height),
				vx: sample(rng, -style.speed, style.speed),
				vy: sample(rng, -style.speed, style.speed),
				size: sample(rng, style.size_min, style.size_max),
				opacity: sample(rng, style.opacity_min, style.opacity_max),
			})
			.collect();

		Self {
			particles,
			style,
			width,
			height,
		}
	}

	/// Deterministic field for a given seed.
	pub fn seeded(style: ParticleStyle, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		Self::new(style, width, height, &mut rng)
	}

	/// Build a field around explicit particles.
	pub fn from_particles(style: ParticleStyle, particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			style,
			width,
			height,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Adopt new bounds. Positions are left where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Link alpha (0..=255 scale) for a pair `distance` apart, or `None`
	/// once they are at least `link_distance` apart.
	pub fn link_alpha(&self, distance: f64) -> Option<f64> {
		let max = self.style.link_distance;
		(distance < max).then(|| (1.0 - distance / max) * self.style.link_alpha_max)
	}

	/// Advance every particle one step and emit the frame.
	///
	/// Each particle is moved, drawn, then linked against the whole set, so
	/// particles later in the list are compared at last frame's position.
	/// The pair check includes the particle itself (a zero-length link).
	pub fn frame<S: FrameSink + ?Sized>(&mut self, sink: &mut S) {
		sink.clear(self.width, self.height);

		for i in 0..self.particles.len() {
			self.particles[i].advance(self.width, self.height);
			let p = self.particles[i];
			sink.particle(&p);

			for other in &self.particles {
				if let Some(alpha) = self.link_alpha(p.distance_to(other)) {
					sink.link(&Link {
						from: (p.x, p.y),
						to: (other.x, other.y),
						alpha,
					});
				}
			}
		}
	}
}

fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Recorder {
		clears: usize,
		particles: Vec<Particle>,
		links: Vec<Link>,
	}

	impl FrameSink for Recorder {
		fn clear(&mut self, _width: f64, _height: f64) {
			self.clears += 1;
		}
		fn particle(&mut self, particle: &Particle) {
			self.particles.push(*particle);
		}
		fn link(&mut self, link: &Link) {
			self.links.push(*link);
		}
	}

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 4.0,
			opacity: 0.5,
		}
	}

	#[test]
	fn seeded_fields_respect_attribute_ranges() {
		let field = ParticleField::seeded(ParticleStyle::default(), 800.0, 600.0, 7);
		assert_eq!(field.len(), 50);
		for p in field.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.5..=0.5).contains(&p.vx));
			assert!((-0.5..=0.5).contains(&p.vy));
			assert!((2.0..=6.0).contains(&p.size));
			assert!((0.3..=0.8).contains(&p.opacity));
		}
	}

	#[test]
	fn same_seed_same_field() {
		let a = ParticleField::seeded(ParticleStyle::default(), 640.0, 480.0, 42);
		let b = ParticleField::seeded(ParticleStyle::default(), 640.0, 480.0, 42);
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn zero_sized_viewport_does_not_panic() {
		let field = ParticleField::seeded(ParticleStyle::default(), 0.0, 0.0, 1);
		assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn wrap_teleports_to_opposite_edge() {
		assert_eq!(wrap(-0.1, 800.0), 800.0);
		assert_eq!(wrap(800.1, 800.0), 0.0);
		assert_eq!(wrap(800.0, 800.0), 800.0);
		assert_eq!(wrap(0.0, 800.0), 0.0);
		assert_eq!(wrap(12.5, 800.0), 12.5);
	}

	#[test]
	fn link_alpha_fades_with_distance() {
		let field = ParticleField::from_particles(ParticleStyle::default(), Vec::new(), 100.0, 100.0);
		assert_eq!(field.link_alpha(0.0), Some(50.0));
		assert!((field.link_alpha(50.0).unwrap() - 25.0).abs() < 1e-9);
		assert!((field.link_alpha(99.0).unwrap() - 0.5).abs() < 1e-9);
		assert_eq!(field.link_alpha(100.0), None);
		assert_eq!(field.link_alpha(250.0), None);
	}

	#[test]
	fn frame_clears_once_and_draws_every_particle() {
		let mut field = ParticleField::seeded(ParticleStyle::default(), 800.0, 600.0, 3);
		let mut rec = Recorder::default();
		field.frame(&mut rec);
		assert_eq!(rec.clears, 1);
		assert_eq!(rec.particles.len(), 50);
		// every particle at least links to itself
		assert!(rec.links.len() >= 50);
	}

	#[test]
	fn self_links_are_zero_length_and_full_alpha() {
		let mut field = ParticleField::from_particles(ParticleStyle::default(), vec![still(10.0, 10.0)], 800.0, 600.0);
		let mut rec = Recorder::default();
		field.frame(&mut rec);
		assert_eq!(
			rec.links,
			vec![Link {
				from: (10.0, 10.0),
				to: (10.0, 10.0),
				alpha: 50.0
			}]
		);
	}

	#[test]
	fn pair_links_are_drawn_from_both_ends() {
		let mut field = ParticleField::from_particles(
			ParticleStyle::default(),
			vec![still(100.0, 100.0), still(130.0, 140.0)],
			800.0,
			600.0,
		);
		let mut rec = Recorder::default();
		field.frame(&mut rec);
		let cross: Vec<_> = rec.links.iter().filter(|l| l.from != l.to).collect();
		assert_eq!(cross.len(), 2);
		for link in cross {
			assert!((link.alpha - 25.0).abs() < 1e-9);
		}
	}

	#[test]
	fn later_particles_are_linked_at_their_previous_position() {
		let mover = Particle {
			vx: 0.5,
			..still(200.0, 200.0)
		};
		let mut field = ParticleField::from_particles(ParticleStyle::default(), vec![still(150.0, 200.0), mover], 800.0, 600.0);
		let mut rec = Recorder::default();
		field.frame(&mut rec);
		let first_cross = rec.links.iter().find(|l| l.from == (150.0, 200.0) && l.to != l.from).unwrap();
		assert_eq!(first_cross.to, (200.0, 200.0));
		assert_eq!(field.particles()[1].x, 200.5);
	}

	#[test]
	fn resize_keeps_positions() {
		let mut field = ParticleField::seeded(ParticleStyle::default(), 800.0, 600.0, 9);
		let before = field.particles().to_vec();
		field.resize(400.0, 300.0);
		assert_eq!(field.bounds(), (400.0, 300.0));
		assert_eq!(field.particles(), &before[..]);
	}
}
