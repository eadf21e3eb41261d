//! Tween registry timing through the public API.

// Test crates link the whole dependency set, silence noisy lint.
#![allow(unused_crate_dependencies)]

use portfolio_fx::tween::{Animator, Channels, Delay, Easing, Property, StyleState, StyleTarget, TweenSpec};

#[derive(Clone, Debug, PartialEq)]
struct Card(&'static str);

impl StyleTarget for Card {
	fn apply_style(&self, _style: &StyleState, _channels: Channels) {}
}

fn close(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}

#[test]
fn value_follows_the_eased_curve() {
	let card = Card("a");
	let mut animator = Animator::new();
	let spec = TweenSpec::new(800.0)
		.from_to(Property::TranslateY, 30.0, 0.0)
		.easing(Easing::EaseOutCubic);
	animator.animate(vec![card.clone()], &spec, 1_000.0);

	for elapsed in [0.0, 200.0, 400.0, 799.0] {
		animator.tick(1_000.0 + elapsed);
		let expected = 30.0 + (0.0 - 30.0) * Easing::EaseOutCubic.apply(elapsed / 800.0);
		assert!(close(animator.style_of(&card).translate_y, expected));
	}
	animator.tick(1_800.0);
	assert_eq!(animator.style_of(&card).translate_y, 0.0);
	assert_eq!(animator.running(), 0);
}

#[test]
fn pause_freezes_and_resume_continues() {
	let card = Card("a");
	let mut animator = Animator::new();
	let spec = TweenSpec::new(1_000.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.easing(Easing::Linear);
	animator.animate(vec![card.clone()], &spec, 0.0);

	animator.tick(400.0);
	assert!(close(animator.style_of(&card).opacity, 0.4));

	animator.pause_all(400.0);
	animator.tick(5_000.0);
	assert!(close(animator.style_of(&card).opacity, 0.4));

	animator.resume_all(5_000.0);
	animator.tick(5_000.0);
	assert!(close(animator.style_of(&card).opacity, 0.4));
	animator.tick(5_300.0);
	assert!(close(animator.style_of(&card).opacity, 0.7));
}

#[test]
fn retriggering_cancels_the_earlier_track() {
	let card = Card("a");
	let mut animator = Animator::new();
	let lift = TweenSpec::new(300.0)
		.to(Property::TranslateY, -8.0)
		.easing(Easing::Linear);
	let drop = TweenSpec::new(300.0)
		.to(Property::TranslateY, 0.0)
		.easing(Easing::Linear);

	let first = animator.animate(vec![card.clone()], &lift, 0.0);
	animator.tick(150.0);
	assert!(close(animator.style_of(&card).translate_y, -4.0));

	let second = animator.animate(vec![card.clone()], &drop, 150.0);
	assert!(!animator.is_running(first));
	assert!(animator.is_running(second));

	// the return trip starts from where the lift stopped
	animator.tick(300.0);
	assert!(close(animator.style_of(&card).translate_y, -2.0));
	animator.tick(450.0);
	assert_eq!(animator.style_of(&card).translate_y, 0.0);
}

#[test]
fn stagger_holds_later_targets_at_their_start_value() {
	let (a, b) = (Card("a"), Card("b"));
	let mut animator = Animator::new();
	let spec = TweenSpec::new(100.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.easing(Easing::Linear)
		.delay(Delay::Stagger(100.0));
	animator.animate(vec![a.clone(), b.clone()], &spec, 0.0);

	animator.tick(50.0);
	assert!(close(animator.style_of(&a).opacity, 0.5));
	assert_eq!(animator.style_of(&b).opacity, 0.0);

	animator.tick(150.0);
	assert_eq!(animator.style_of(&a).opacity, 1.0);
	assert!(close(animator.style_of(&b).opacity, 0.5));
}
