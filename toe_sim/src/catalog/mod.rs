//! The simulation catalog
//!
//! Forty small thought experiments, each a leaf routine that either
//! evaluates a closed-form curve on a fixed grid, draws a random outcome, or
//! reads one slider and derives something from it. Order here is the id
//! order: entry `i` gets id `i + 1`.

pub mod cosmology;
pub mod fields;
pub mod particles;
pub mod quantum;
pub mod relativity;

use rand::{Rng, RngCore};

use crate::grid;
use crate::registry::Simulation;
use crate::render::{Figure, Layer};

pub const CATALOG: &[Simulation] = &[
    quantum::PARTICLE_IN_A_BOX,
    relativity::TIME_DILATION,
    fields::STRING_VIBRATIONS,
    relativity::BLACK_HOLE_HORIZON,
    quantum::ENTANGLEMENT,
    cosmology::MULTIVERSE,
    fields::HOLOGRAPHIC_PRINCIPLE,
    cosmology::DARK_MATTER,
    relativity::GRAVITATIONAL_WAVES,
    fields::FIELD_FLUCTUATIONS,
    cosmology::INFLATION,
    particles::SUPERSYMMETRY,
    particles::SPIN_NETWORKS,
    quantum::TUNNELING,
    quantum::SCHRODINGERS_CAT,
    quantum::DECOHERENCE,
    cosmology::ENTROPIC_GRAVITY,
    particles::FEYNMAN_DIAGRAMS,
    fields::NONCOMMUTATIVE_GEOMETRY,
    quantum::QUANTUM_BITS,
    fields::VIRTUAL_PARTICLES,
    cosmology::CASIMIR_EFFECT,
    particles::BRANES,
    quantum::QUANTUM_GATES,
    quantum::DOUBLE_SLIT,
    cosmology::BOSE_EINSTEIN,
    particles::QUARK_GLUON_PLASMA,
    quantum::CRYPTOGRAPHY,
    quantum::TELEPORTATION,
    quantum::ZENO_EFFECT,
    fields::HALL_EFFECT,
    fields::TOPOLOGICAL_INSULATORS,
    relativity::WORMHOLES,
    relativity::WHITE_HOLES,
    fields::KALUZA_KLEIN,
    particles::CHROMODYNAMICS,
    relativity::GRAVITONS,
    particles::ELECTRODYNAMICS,
    fields::SYMMETRY_BREAKING,
    quantum::CONSCIOUSNESS,
];

/// Single-line plot of `f` over `xs`
pub(crate) fn curve(title: &str, xs: &[f64], f: impl Fn(f64) -> f64) -> Figure {
    Figure::new(title).layer(Layer::line(grid::sample(xs, f)))
}

/// Polar plot of `r(θ)` over `theta`
pub(crate) fn polar(title: &str, theta: &[f64], r: impl Fn(f64) -> f64) -> Figure {
    let radius = theta.iter().map(|&t| r(t)).collect();
    Figure::new(title).layer(Layer::Polar {
        theta: theta.to_vec(),
        radius,
    })
}

/// Uniform choice among non-empty `options`
pub(crate) fn pick(rng: &mut dyn RngCore, options: &[&'static str]) -> &'static str {
    options[rng.gen_range(0..options.len())]
}

pub(crate) fn random_bits(rng: &mut dyn RngCore, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.gen_range(0..=1u8)).collect()
}

/// Bits printed as `[0 1 1 0]`
pub(crate) fn format_bits(bits: &[u8]) -> String {
    let inner: Vec<String> = bits.iter().map(|b| b.to_string()).collect();
    format!("[{}]", inner.join(" "))
}
