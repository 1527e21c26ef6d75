//! Common utilities for the simulation browsers
//!
//! This crate provides the window/GPU setup and the egui overlay that the
//! simulation front-ends draw through.

pub mod graphics;
pub mod overlay;

pub use graphics::*;
pub use overlay::*;
