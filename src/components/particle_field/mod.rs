//! Animated particle backdrop.
//!
//! Fifty drifting points wrap around the viewport edges and are joined by
//! faint lines when they come within 100px of each other.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::ParticleBackground;
//!
//! view! { <ParticleBackground /> }
//! ```

mod component;
mod particles;
mod render;

pub use component::{CANVAS_ID, ParticleBackground};
pub use particles::{FrameSink, Link, Particle, ParticleField};
