//! Strings, fields and condensed-matter curves

use std::f64::consts::PI;

use rand_distr::{Distribution, StandardNormal};

use super::{curve, polar};
use crate::constants::{COARSE_GRID, FINE_GRID};
use crate::context::UnitContext;
use crate::equations_ui::Equation;
use crate::grid::{linspace, sinc};
use crate::registry::Simulation;
use crate::render::{Figure, Layer};

pub const STRING_VIBRATIONS: Simulation = Simulation {
    title: "String Vibrations",
    equations: &[Equation {
        name: "Two-Mode Superposition",
        formula: "y(x) = sin 5x + sin 7x",
        description: "Fifth and seventh harmonics",
    }],
    variables: &[("x", "Position along the string")],
    run: string_vibrations,
};

fn string_vibrations(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 2.0 * PI, FINE_GRID);
    ctx.plot(curve("String Vibrations", &x, |x| (5.0 * x).sin() + (7.0 * x).sin()));
}

pub const HOLOGRAPHIC_PRINCIPLE: Simulation = Simulation {
    title: "Holographic Principle",
    equations: &[Equation {
        name: "Boundary Encoding",
        formula: "y(x) = sin(πx)/(πx)",
        description: "Normalized sinc",
    }],
    variables: &[],
    run: holographic_principle,
};

fn holographic_principle(ctx: &mut UnitContext<'_>) {
    let x = linspace(-5.0, 5.0, FINE_GRID);
    ctx.plot(curve("Holographic Principle Representation", &x, sinc));
}

pub const FIELD_FLUCTUATIONS: Simulation = Simulation {
    title: "Quantum Field Fluctuations",
    equations: &[Equation {
        name: "White Noise",
        formula: "φ(x) ~ N(0, 1)",
        description: "Independent sample per grid point",
    }],
    variables: &[("φ", "Field value")],
    run: field_fluctuations,
};

fn field_fluctuations(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 10.0, FINE_GRID);
    let rng = ctx.rng();
    let points = x
        .iter()
        .map(|&x| [x, StandardNormal.sample(&mut *rng)])
        .collect();
    ctx.plot(Figure::new("Quantum Field Fluctuations").layer(Layer::line(points)));
}

pub const NONCOMMUTATIVE_GEOMETRY: Simulation = Simulation {
    title: "Noncommutative Geometry",
    equations: &[Equation {
        name: "Deformed Circle",
        formula: "r(θ) = 1 + 0.5 sin 5θ",
        description: "Five-fold fuzzy boundary",
    }],
    variables: &[("θ", "Polar angle")],
    run: noncommutative_geometry,
};

fn noncommutative_geometry(ctx: &mut UnitContext<'_>) {
    let theta = linspace(0.0, 2.0 * PI, FINE_GRID);
    ctx.plot(polar("Noncommutative Geometry Visualization", &theta, |t| {
        1.0 + 0.5 * (5.0 * t).sin()
    }));
}

pub const VIRTUAL_PARTICLES: Simulation = Simulation {
    title: "Virtual Particles in a Vacuum",
    equations: &[Equation {
        name: "Noisy Oscillation",
        formula: "y(t) = sin t + 0.1 ξ(t)",
        description: "ξ standard normal",
    }],
    variables: &[("ξ", "Vacuum noise")],
    run: virtual_particles,
};

fn virtual_particles(ctx: &mut UnitContext<'_>) {
    let t = linspace(0.0, 10.0, FINE_GRID);
    let rng = ctx.rng();
    let points = t
        .iter()
        .map(|&t| {
            let noise: f64 = StandardNormal.sample(&mut *rng);
            [t, t.sin() + 0.1 * noise]
        })
        .collect();
    ctx.plot(Figure::new("Virtual Particles Fluctuations").layer(Layer::line(points)));
}

pub const HALL_EFFECT: Simulation = Simulation {
    title: "Quantum Hall Effect",
    equations: &[Equation {
        name: "Sawtooth Resistance",
        formula: "R(B) = B mod 2",
        description: "Repeating plateaus",
    }],
    variables: &[("R", "Hall resistance"), ("B", "Magnetic field")],
    run: hall_effect,
};

fn hall_effect(ctx: &mut UnitContext<'_>) {
    let b = linspace(0.0, 10.0, COARSE_GRID);
    ctx.plot(curve("Quantum Hall Effect", &b, |b| b.rem_euclid(2.0)));
}

pub const TOPOLOGICAL_INSULATORS: Simulation = Simulation {
    title: "Topological Insulators",
    equations: &[Equation {
        name: "Edge State",
        formula: "y(x) = sin x + cos 2x",
        description: "Conducting surface mode",
    }],
    variables: &[],
    run: topological_insulators,
};

fn topological_insulators(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 10.0, COARSE_GRID);
    ctx.plot(curve("Edge States in Topological Insulators", &x, |x| x.sin() + (2.0 * x).cos()));
}

pub const KALUZA_KLEIN: Simulation = Simulation {
    title: "Kaluza-Klein Theory",
    equations: &[Equation {
        name: "Compact Mode",
        formula: "y(x) = sin x + cos x",
        description: "Field wrapped on a small circle",
    }],
    variables: &[],
    run: kaluza_klein,
};

fn kaluza_klein(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 10.0, FINE_GRID);
    ctx.plot(curve("Extra Dimensions in Kaluza-Klein Theory", &x, |x| x.sin() + x.cos()));
}

pub const SYMMETRY_BREAKING: Simulation = Simulation {
    title: "Gauge Symmetry Breaking",
    equations: &[Equation {
        name: "Shifted Potential",
        formula: "V(x) = x² - 10x + 25 = (x - 5)²",
        description: "Vacuum sits at x = 5",
    }],
    variables: &[("V", "Potential")],
    run: symmetry_breaking,
};

fn symmetry_breaking(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 10.0, COARSE_GRID);
    ctx.plot(curve("Gauge Symmetry Breaking Potential", &x, |x| x * x - 10.0 * x + 25.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{line_points, only_figure, render};
    use crate::controls::FixedControls;

    #[test]
    fn hall_resistance_is_a_sawtooth() {
        let scene = render(&HALL_EFFECT, FixedControls::new(), 0);
        let points = line_points(only_figure(&scene));
        assert!(points.iter().all(|p| (0.0..2.0).contains(&p[1])));
        assert_eq!(points[99], [10.0, 0.0]);
    }

    #[test]
    fn symmetry_breaking_minimum_is_non_negative() {
        let scene = render(&SYMMETRY_BREAKING, FixedControls::new(), 0);
        let points = line_points(only_figure(&scene));
        assert!(points.iter().all(|p| p[1] >= -1e-9));
        assert_eq!(points[0][1], 25.0);
    }

    #[test]
    fn fluctuations_follow_the_seed() {
        let a = render(&FIELD_FLUCTUATIONS, FixedControls::new(), 7);
        let b = render(&FIELD_FLUCTUATIONS, FixedControls::new(), 7);
        let c = render(&FIELD_FLUCTUATIONS, FixedControls::new(), 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(line_points(only_figure(&a)).len(), 1000);
    }

    #[test]
    fn virtual_particles_hug_the_sine() {
        let scene = render(&VIRTUAL_PARTICLES, FixedControls::new(), 11);
        let points = line_points(only_figure(&scene));
        let mean_offset = points
            .iter()
            .map(|p| p[1] - p[0].sin())
            .sum::<f64>()
            / points.len() as f64;
        assert!(mean_offset.abs() < 0.05);
    }
}
