//! Cosmology and thermodynamics of the vacuum

use std::f64::consts::PI;

use rand::Rng;

use super::{curve, polar};
use crate::constants::{COARSE_GRID, FINE_GRID};
use crate::context::UnitContext;
use crate::equations_ui::Equation;
use crate::grid::linspace;
use crate::registry::Simulation;

pub const UNIVERSE_COUNT: u32 = 10;

pub const MULTIVERSE: Simulation = Simulation {
    title: "Multiverse Theory",
    equations: &[Equation {
        name: "Branch Selection",
        formula: "k ~ U{1, …, 10}",
        description: "Each universe equally likely",
    }],
    variables: &[],
    run: multiverse,
};

fn multiverse(ctx: &mut UnitContext<'_>) {
    let k = ctx.rng().gen_range(1..=UNIVERSE_COUNT);
    ctx.write(&format!("You are now in Universe {k}!"));
}

pub const DARK_MATTER: Simulation = Simulation {
    title: "Dark Matter Distribution",
    equations: &[Equation {
        name: "Halo Lobes",
        formula: "r(θ) = |sin 5θ|",
        description: "Ten-petal density profile",
    }],
    variables: &[("θ", "Galactic azimuth")],
    run: dark_matter,
};

fn dark_matter(ctx: &mut UnitContext<'_>) {
    let theta = linspace(0.0, 2.0 * PI, FINE_GRID);
    ctx.plot(polar("Dark Matter Distribution in a Galaxy", &theta, |t| (5.0 * t).sin().abs()));
}

pub const INFLATION: Simulation = Simulation {
    title: "Cosmic Inflation",
    equations: &[Equation {
        name: "de Sitter Expansion",
        formula: "a(t) = e^(Ht), H = 1",
        description: "Exponential scale factor",
    }],
    variables: &[("a", "Scale factor"), ("H", "Hubble rate")],
    run: inflation,
};

fn inflation(ctx: &mut UnitContext<'_>) {
    let t = linspace(0.0, 10.0, COARSE_GRID);
    ctx.plot(curve("Cosmic Inflation", &t, f64::exp));
}

pub const ENTROPIC_GRAVITY: Simulation = Simulation {
    title: "Entropic Gravity",
    equations: &[Equation {
        name: "Entropy Scaling",
        formula: "S = T²",
        description: "Toy entropy–temperature law",
    }],
    variables: &[("S", "Entropy"), ("T", "Temperature")],
    run: entropic_gravity,
};

fn entropic_gravity(ctx: &mut UnitContext<'_>) {
    let temperature = linspace(1.0, 10.0, COARSE_GRID);
    ctx.plot(curve("Entropic Gravity: Entropy vs. Temperature", &temperature, |t| t * t));
}

pub const CASIMIR_EFFECT: Simulation = Simulation {
    title: "Casimir Effect",
    equations: &[Equation {
        name: "Plate Attraction",
        formula: "F(d) ∝ 1/d⁴",
        description: "Vacuum pressure between plates",
    }],
    variables: &[("d", "Plate separation")],
    run: casimir_effect,
};

fn casimir_effect(ctx: &mut UnitContext<'_>) {
    let d = linspace(0.1, 10.0, COARSE_GRID);
    ctx.plot(curve("Casimir Effect: Force vs. Distance", &d, |d| 1.0 / d.powi(4)));
}

pub const BOSE_EINSTEIN: Simulation = Simulation {
    title: "Bose-Einstein Condensate",
    equations: &[Equation {
        name: "Bose-Einstein Occupation",
        formula: "N(T) = 1/(e^(1/T) - 1)",
        description: "Mean occupation of a unit-energy level",
    }],
    variables: &[("N", "Occupation"), ("T", "Temperature")],
    run: bose_einstein,
};

/// Occupation of a unit-energy level; tends to 0 as T → 0⁺
pub fn bose_occupation(t: f64) -> f64 {
    1.0 / ((1.0 / t).exp() - 1.0)
}

fn bose_einstein(ctx: &mut UnitContext<'_>) {
    let t = linspace(0.0, 1.0, COARSE_GRID);
    ctx.plot(curve("Bose-Einstein Condensate", &t, bose_occupation));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{line_points, only_figure, render};
    use crate::controls::FixedControls;

    #[test]
    fn multiverse_lands_in_a_known_universe() {
        for seed in 0..30 {
            let scene = render(&MULTIVERSE, FixedControls::new(), seed);
            let text = scene.texts().next().unwrap();
            let k: u32 = text
                .trim_start_matches("You are now in Universe ")
                .trim_end_matches('!')
                .parse()
                .unwrap();
            assert!((1..=UNIVERSE_COUNT).contains(&k));
        }
    }

    #[test]
    fn bose_occupation_at_absolute_zero_is_zero() {
        // 1/0 → ∞, e^∞ → ∞, 1/∞ → 0
        assert_eq!(bose_occupation(0.0), 0.0);

        let scene = render(&BOSE_EINSTEIN, FixedControls::new(), 0);
        let points = line_points(only_figure(&scene));
        assert!(points.iter().all(|p| p[1].is_finite()));
    }

    #[test]
    fn inflation_is_repeatable() {
        let a = render(&INFLATION, FixedControls::new(), 1);
        let b = render(&INFLATION, FixedControls::new(), 2);
        assert_eq!(a, b);
    }
}
