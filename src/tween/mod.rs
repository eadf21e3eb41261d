//! Style tweening for page elements.
//!
//! Register a target set with a [`TweenSpec`] (tracks, duration, easing,
//! delay or stagger) and get an [`AnimationHandle`] back. All animations live
//! in one registry that can be paused and resumed as a whole.

mod driver;
mod easing;
mod engine;

pub use driver::{animate, animate_each, pause_all, resume_all};
pub use easing::Easing;
pub use engine::{AnimationHandle, Animator, Channels, Delay, Property, StyleState, StyleTarget, Track, TweenSpec};
