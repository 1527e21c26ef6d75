//! Theory of Everything Simulations
//!
//! A browser over forty small, independent physics-themed visualizations.
//! Each one is a leaf routine that evaluates a closed-form curve or draws a
//! random outcome and renders it as a plot or a short statement:
//!
//! - **Registry**: the read-only id → simulation table built at startup
//! - **Catalog**: the simulations themselves, grouped by field
//! - **Scene**: headless record of what a simulation rendered
//! - **View**: egui front-end that dispatches the selected simulation

pub mod catalog;
pub mod config;
pub mod context;
pub mod controls;
pub mod equations_ui;
pub mod grid;
pub mod registry;
pub mod render;
pub mod view;

pub use config::{AppConfig, Args};
pub use context::UnitContext;
pub use controls::{ControlSource, FixedControls, Slider, SliderBank};
pub use registry::{Registry, RegistryError, Simulation, VisualizationId};
pub use render::{Figure, Layer, RenderSink, Scene};

/// Scaled constants shared by the catalog
pub mod constants {
    /// Speed of light (velocities are given as fractions of it)
    pub const C: f64 = 1.0;

    /// Barrier height used by the tunneling thought experiment
    pub const BARRIER_HEIGHT: f64 = 7.0;

    /// Default number of samples for smooth curves
    pub const FINE_GRID: usize = 1000;

    /// Number of samples for coarse curves
    pub const COARSE_GRID: usize = 100;
}
