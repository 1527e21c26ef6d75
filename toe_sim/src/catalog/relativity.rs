//! Relativity and gravitation

use std::f64::consts::PI;

use super::{curve, polar};
use crate::constants::{C, FINE_GRID};
use crate::context::UnitContext;
use crate::controls::Slider;
use crate::equations_ui::Equation;
use crate::grid::linspace;
use crate::registry::Simulation;
use crate::render::{Figure, Layer, Tint};

// ============================================
// Time dilation
// ============================================

pub const VELOCITY: Slider = Slider::new("Velocity (as a fraction of the speed of light)", 0.1, 0.99, 0.5);

pub const TIME_DILATION: Simulation = Simulation {
    title: "Relativistic Effects on a Moving Object",
    equations: &[Equation {
        name: "Lorentz Factor",
        formula: "γ = 1/√(1 - v²/c²)",
        description: "Moving clocks run slow by γ",
    }],
    variables: &[
        ("γ", "Lorentz factor"),
        ("v", "Velocity"),
        ("c", "Speed of light"),
    ],
    run: time_dilation,
};

/// γ for a velocity given in units of c
pub fn lorentz_factor(v: f64) -> f64 {
    let beta = v / C;
    1.0 / (1.0 - beta * beta).sqrt()
}

fn time_dilation(ctx: &mut UnitContext<'_>) {
    let v = ctx.slider(&VELOCITY);
    let gamma = lorentz_factor(v);
    ctx.write(&format!("Gamma Factor: {gamma}"));

    let dilation = Layer::Line {
        points: vec![[0.0, 0.0], [1.0, gamma]],
        label: Some(format!("v={v}c")),
        tint: Tint::Auto,
    };
    ctx.plot(
        Figure::new("Relativistic Time Dilation")
            .axes("Proper Time", "Dilated Time")
            .layer(dilation),
    );
}

// ============================================
// Horizons
// ============================================

pub const BLACK_HOLE_HORIZON: Simulation = Simulation {
    title: "Black Hole Event Horizon",
    equations: &[Equation {
        name: "Inverse Square",
        formula: "g(r) = 1/r²",
        description: "Pull outside the horizon",
    }],
    variables: &[("r", "Distance from the center")],
    run: black_hole_horizon,
};

fn black_hole_horizon(ctx: &mut UnitContext<'_>) {
    let r = linspace(1.0, 10.0, FINE_GRID);
    ctx.plot(curve("Gravitational Force Near a Black Hole", &r, |r| 1.0 / (r * r)));
}

pub const WHITE_HOLES: Simulation = Simulation {
    title: "White Holes",
    equations: &[Equation {
        name: "Time-Reversed Pull",
        formula: "g(r) = -1/r²",
        description: "Everything is pushed out",
    }],
    variables: &[("r", "Distance from the center")],
    run: white_holes,
};

fn white_holes(ctx: &mut UnitContext<'_>) {
    let r = linspace(1.0, 10.0, FINE_GRID);
    ctx.plot(curve("Gravitational Repulsion Near a White Hole", &r, |r| -1.0 / (r * r)));
}

pub const WORMHOLES: Simulation = Simulation {
    title: "Wormholes",
    equations: &[Equation {
        name: "Throat Profile",
        formula: "r(θ) = 1 + 0.3 sin 3θ",
        description: "Three-lobed cross section",
    }],
    variables: &[("θ", "Polar angle")],
    run: wormholes,
};

fn wormholes(ctx: &mut UnitContext<'_>) {
    let theta = linspace(0.0, 2.0 * PI, FINE_GRID);
    ctx.plot(polar("Wormhole Visualization", &theta, |t| 1.0 + 0.3 * (3.0 * t).sin()));
}

// ============================================
// Waves
// ============================================

pub const GRAVITATIONAL_WAVES: Simulation = Simulation {
    title: "Gravitational Waves",
    equations: &[Equation {
        name: "Modulated Strain",
        formula: "h(t) = sin t · sin 10t",
        description: "Carrier under a slow envelope",
    }],
    variables: &[("h", "Strain"), ("t", "Time")],
    run: gravitational_waves,
};

fn gravitational_waves(ctx: &mut UnitContext<'_>) {
    let t = linspace(0.0, 4.0 * PI, FINE_GRID);
    ctx.plot(curve("Gravitational Waves Propagation", &t, |t| t.sin() * (10.0 * t).sin()));
}

pub const GRAVITONS: Simulation = Simulation {
    title: "Quantum Gravity Gravitons",
    equations: &[Equation {
        name: "Plane Wave",
        formula: "y(x) = sin 10x",
        description: "A single graviton mode",
    }],
    variables: &[],
    run: gravitons,
};

fn gravitons(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 2.0 * PI, FINE_GRID);
    ctx.plot(curve("Gravitons in Quantum Gravity", &x, |x| (10.0 * x).sin()));
}
