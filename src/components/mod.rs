//! Canvas-backed Leptos components.

pub mod particle_field;
pub mod skills_chart;
pub mod theme;
