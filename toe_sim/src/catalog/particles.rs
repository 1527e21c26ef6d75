//! Particle physics: spectra, diagrams and lattice snapshots

use glam::DVec2;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};

use super::pick;
use crate::context::UnitContext;
use crate::equations_ui::Equation;
use crate::registry::Simulation;
use crate::render::{Colormap, Figure, Layer, Tint};

/// Uniform points in the unit square
fn random_nodes(rng: &mut dyn RngCore, n: usize) -> Vec<DVec2> {
    (0..n)
        .map(|_| DVec2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

fn segment(a: DVec2, b: DVec2, tint: Tint) -> Layer {
    Layer::Line {
        points: vec![a.to_array(), b.to_array()],
        label: None,
        tint,
    }
}

fn scatter(nodes: &[DVec2], tint: Tint) -> Layer {
    Layer::Scatter {
        points: nodes.iter().map(|n| n.to_array()).collect(),
        tint,
    }
}

fn random_grid(rng: &mut dyn RngCore, rows: usize, cols: usize) -> Vec<f64> {
    (0..rows * cols).map(|_| rng.gen::<f64>()).collect()
}

// ============================================
// Spectra
// ============================================

pub const SPARTICLES: &[&str] = &["Squark", "Slepton", "Gluino", "Neutralino"];

pub const SUPERSYMMETRY: Simulation = Simulation {
    title: "Supersymmetry Particles",
    equations: &[Equation {
        name: "Superpartner",
        formula: "Q|boson⟩ = |fermion⟩",
        description: "Every particle gets a partner",
    }],
    variables: &[("Q", "Supersymmetry generator")],
    run: supersymmetry,
};

fn supersymmetry(ctx: &mut UnitContext<'_>) {
    let particle = pick(ctx.rng(), SPARTICLES);
    ctx.write(&format!("Discovered Supersymmetry Particle: {particle}"));
}

pub const BRANE_TYPES: &[&str] = &["D1", "D3", "D5", "M2", "M5"];

pub const BRANES: Simulation = Simulation {
    title: "M-Theory Branes",
    equations: &[Equation {
        name: "Brane Spectrum",
        formula: "Dp, p ∈ {1, 3, 5}; M2, M5",
        description: "Extended objects of string/M-theory",
    }],
    variables: &[],
    run: branes,
};

fn branes(ctx: &mut UnitContext<'_>) {
    let brane = pick(ctx.rng(), BRANE_TYPES);
    ctx.write(&format!("Selected Brane: {brane}"));
}

// ============================================
// Graphs
// ============================================

pub const SPIN_NODES: usize = 10;
pub const SPIN_EDGES: usize = 15;

pub const SPIN_NETWORKS: Simulation = Simulation {
    title: "Loop Quantum Gravity Spin Networks",
    equations: &[Equation {
        name: "Area Spectrum",
        formula: "A = 8πγℓ² Σ √(j(j+1))",
        description: "Edges carry quanta of area",
    }],
    variables: &[("j", "Edge spin"), ("γ", "Immirzi parameter")],
    run: spin_networks,
};

fn spin_networks(ctx: &mut UnitContext<'_>) {
    let rng = ctx.rng();
    let nodes = random_nodes(rng, SPIN_NODES);

    // endpoints drawn independently, self-loops allowed
    let mut figure = Figure::new("Spin Networks in Loop Quantum Gravity");
    for _ in 0..SPIN_EDGES {
        let a = nodes[rng.gen_range(0..SPIN_NODES)];
        let b = nodes[rng.gen_range(0..SPIN_NODES)];
        figure = figure.layer(segment(a, b, Tint::Black));
    }
    ctx.plot(figure.layer(scatter(&nodes, Tint::Auto)));
}

pub const FEYNMAN_VERTICES: usize = 5;

pub const FEYNMAN_DIAGRAMS: Simulation = Simulation {
    title: "Feynman Diagrams",
    equations: &[Equation {
        name: "Complete Graph",
        formula: "edges = n(n-1)/2",
        description: "Every vertex pair is connected",
    }],
    variables: &[("n", "Vertices (5)")],
    run: feynman_diagrams,
};

fn feynman_diagrams(ctx: &mut UnitContext<'_>) {
    let vertices = random_nodes(ctx.rng(), FEYNMAN_VERTICES);

    let mut figure = Figure::new("Random Feynman Diagram");
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            figure = figure.layer(segment(a, b, Tint::Blue));
        }
    }
    ctx.plot(figure.layer(scatter(&vertices, Tint::Red)));
}

// ============================================
// Lattice snapshots
// ============================================

pub const LATTICE_SIZE: usize = 10;

pub const QUARK_GLUON_PLASMA: Simulation = Simulation {
    title: "Quark-Gluon Plasma",
    equations: &[Equation {
        name: "Energy Density",
        formula: "ε(i, j) ~ U[0, 1)",
        description: "10 × 10 lattice snapshot",
    }],
    variables: &[("ε", "Energy density")],
    run: quark_gluon_plasma,
};

fn quark_gluon_plasma(ctx: &mut UnitContext<'_>) {
    let values = random_grid(ctx.rng(), LATTICE_SIZE, LATTICE_SIZE);
    ctx.plot(
        Figure::new("Quark-Gluon Plasma Energy Density").layer(Layer::Heatmap {
            rows: LATTICE_SIZE,
            cols: LATTICE_SIZE,
            values,
            colormap: Colormap::Hot,
        }),
    );
}

pub const CHROMODYNAMICS: Simulation = Simulation {
    title: "Quantum Chromodynamics",
    equations: &[Equation {
        name: "Color Field",
        formula: "F(i, j) ~ U[0, 1)",
        description: "10 × 10 lattice snapshot",
    }],
    variables: &[],
    run: chromodynamics,
};

fn chromodynamics(ctx: &mut UnitContext<'_>) {
    let values = random_grid(ctx.rng(), LATTICE_SIZE, LATTICE_SIZE);
    ctx.plot(Figure::new("Quantum Chromodynamics").layer(Layer::Heatmap {
        rows: LATTICE_SIZE,
        cols: LATTICE_SIZE,
        values,
        colormap: Colormap::Viridis,
    }));
}

pub const QED_SAMPLES: usize = 1000;
pub const QED_BINS: usize = 30;

pub const ELECTRODYNAMICS: Simulation = Simulation {
    title: "Quantum Electrodynamics",
    equations: &[Equation {
        name: "Gaussian Spread",
        formula: "x ~ N(0, 1)",
        description: "1000 samples in 30 bins",
    }],
    variables: &[],
    run: electrodynamics,
};

fn electrodynamics(ctx: &mut UnitContext<'_>) {
    let rng = ctx.rng();
    let samples = (0..QED_SAMPLES)
        .map(|_| StandardNormal.sample(&mut *rng))
        .collect();
    ctx.plot(Figure::new("Quantum Electrodynamics").layer(Layer::Histogram {
        samples,
        bins: QED_BINS,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{only_figure, render};
    use crate::controls::FixedControls;
    use crate::render::histogram;

    fn count_layers(figure: &Figure) -> (usize, usize) {
        let lines = figure
            .layers
            .iter()
            .filter(|l| matches!(l, Layer::Line { .. }))
            .count();
        let scatters = figure
            .layers
            .iter()
            .filter(|l| matches!(l, Layer::Scatter { .. }))
            .count();
        (lines, scatters)
    }

    #[test]
    fn spin_network_shape() {
        let scene = render(&SPIN_NETWORKS, FixedControls::new(), 4);
        let figure = only_figure(&scene);
        assert_eq!(count_layers(figure), (SPIN_EDGES, 1));
        match figure.layers.last() {
            Some(Layer::Scatter { points, .. }) => {
                assert_eq!(points.len(), SPIN_NODES);
                assert!(points
                    .iter()
                    .all(|p| (0.0..1.0).contains(&p[0]) && (0.0..1.0).contains(&p[1])));
            }
            other => panic!("expected scatter layer, got {other:?}"),
        }
    }

    #[test]
    fn feynman_diagram_is_complete() {
        let scene = render(&FEYNMAN_DIAGRAMS, FixedControls::new(), 4);
        let figure = only_figure(&scene);
        assert_eq!(count_layers(figure), (10, 1));
    }

    #[test]
    fn heatmaps_fill_the_lattice() {
        for sim in [&QUARK_GLUON_PLASMA, &CHROMODYNAMICS] {
            let scene = render(sim, FixedControls::new(), 2);
            match &only_figure(&scene).layers[0] {
                Layer::Heatmap { rows, cols, values, .. } => {
                    assert_eq!((*rows, *cols), (10, 10));
                    assert_eq!(values.len(), 100);
                    assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
                }
                other => panic!("expected heatmap, got {other:?}"),
            }
        }
    }

    #[test]
    fn electrodynamics_bins_every_sample() {
        let scene = render(&ELECTRODYNAMICS, FixedControls::new(), 6);
        match &only_figure(&scene).layers[0] {
            Layer::Histogram { samples, bins } => {
                assert_eq!(samples.len(), QED_SAMPLES);
                let binned = histogram(samples, *bins);
                assert_eq!(binned.len(), QED_BINS);
                assert_eq!(binned.iter().map(|b| b.count).sum::<usize>(), QED_SAMPLES);
            }
            other => panic!("expected histogram, got {other:?}"),
        }
    }

    #[test]
    fn text_draws_come_from_their_lists() {
        for seed in 0..20 {
            let scene = render(&SUPERSYMMETRY, FixedControls::new(), seed);
            let text = scene.texts().next().unwrap();
            let name = text.trim_start_matches("Discovered Supersymmetry Particle: ");
            assert!(SPARTICLES.contains(&name));

            let scene = render(&BRANES, FixedControls::new(), seed);
            let text = scene.texts().next().unwrap();
            assert!(BRANE_TYPES.contains(&text.trim_start_matches("Selected Brane: ")));
        }
    }
}
