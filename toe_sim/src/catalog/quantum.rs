//! Quantum mechanics and quantum information

use std::f64::consts::{PI, SQRT_2};

use rand::Rng;

use super::{curve, format_bits, pick, random_bits};
use crate::constants::{BARRIER_HEIGHT, COARSE_GRID, FINE_GRID};
use crate::context::UnitContext;
use crate::controls::Slider;
use crate::equations_ui::Equation;
use crate::grid::linspace;
use crate::registry::Simulation;

// ============================================
// Particle in a box
// ============================================

pub const PARTICLE_IN_A_BOX: Simulation = Simulation {
    title: "Quantum Particle in a Box",
    equations: &[Equation {
        name: "Stationary States",
        formula: "ψ_n(x) = √2 sin(nπx)",
        description: "Infinite well of unit width",
    }],
    variables: &[("n", "Mode number, drawn from 1..5"), ("x", "Position in the box")],
    run: particle_in_a_box,
};

/// Normalized n-th eigenfunction of the unit-width infinite well
pub fn box_eigenstate(n: u32, x: f64) -> f64 {
    SQRT_2 * (n as f64 * PI * x).sin()
}

fn particle_in_a_box(ctx: &mut UnitContext<'_>) {
    let x = linspace(0.0, 1.0, FINE_GRID);
    let n: u32 = ctx.rng().gen_range(1..=5);
    ctx.plot(curve(
        &format!("Quantum Particle in a Box (n={n})"),
        &x,
        |x| box_eigenstate(n, x),
    ));
}

// ============================================
// Entanglement
// ============================================

pub const ENTANGLEMENT: Simulation = Simulation {
    title: "Quantum Entanglement",
    equations: &[Equation {
        name: "Singlet State",
        formula: "|ψ⟩ = (|↑↓⟩ - |↓↑⟩)/√2",
        description: "Measured spins always disagree",
    }],
    variables: &[],
    run: entanglement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    pub fn opposite(self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Spin::Up => "Up",
            Spin::Down => "Down",
        }
    }
}

fn entanglement(ctx: &mut UnitContext<'_>) {
    let first = if ctx.rng().gen_bool(0.5) { Spin::Up } else { Spin::Down };
    let second = first.opposite();
    ctx.write(&format!("Particle 1: {}", first.label()));
    ctx.write(&format!("Particle 2: {}", second.label()));
}

// ============================================
// Tunneling
// ============================================

pub const ENERGY: Slider = Slider::new("Energy of Particle", 0.1, 10.0, 5.0);

pub const TUNNELING: Simulation = Simulation {
    title: "Quantum Tunneling",
    equations: &[Equation {
        name: "Barrier Check",
        formula: "E > V₀ ⇒ transmitted",
        description: "Classical threshold with V₀ = 7",
    }],
    variables: &[("E", "Particle energy"), ("V₀", "Barrier height")],
    run: tunneling,
};

/// What the particle does at the barrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierOutcome {
    Tunnels,
    Reflects,
}

impl BarrierOutcome {
    /// Strictly above the barrier tunnels; equal energy reflects
    pub fn classify(energy: f64, barrier: f64) -> Self {
        if energy > barrier {
            BarrierOutcome::Tunnels
        } else {
            BarrierOutcome::Reflects
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BarrierOutcome::Tunnels => "Particle Tunnels Through the Barrier",
            BarrierOutcome::Reflects => "Particle Reflects Back",
        }
    }
}

fn tunneling(ctx: &mut UnitContext<'_>) {
    let energy = ctx.slider(&ENERGY);
    let outcome = BarrierOutcome::classify(energy, BARRIER_HEIGHT);
    ctx.write(outcome.message());
}

// ============================================
// Schrödinger's cat
// ============================================

pub const CAT_STATES: &[&str] = &["Alive", "Dead"];

pub const SCHRODINGERS_CAT: Simulation = Simulation {
    title: "Schrödinger's Cat",
    equations: &[Equation {
        name: "Superposition",
        formula: "|cat⟩ = (|alive⟩ + |dead⟩)/√2",
        description: "Opening the box collapses it",
    }],
    variables: &[],
    run: schrodingers_cat,
};

fn schrodingers_cat(ctx: &mut UnitContext<'_>) {
    let state = pick(ctx.rng(), CAT_STATES);
    ctx.write(&format!("Schrödinger's Cat is {state}"));
}

// ============================================
// Decoherence
// ============================================

pub const DECOHERENCE: Simulation = Simulation {
    title: "Quantum Decoherence",
    equations: &[Equation {
        name: "Coherence Decay",
        formula: "C(t) = e^(-5t)",
        description: "Off-diagonal terms fade",
    }],
    variables: &[("t", "Time")],
    run: decoherence,
};

fn decoherence(ctx: &mut UnitContext<'_>) {
    let t = linspace(0.0, 1.0, COARSE_GRID);
    ctx.plot(curve("Quantum Decoherence Over Time", &t, |t| (-5.0 * t).exp()));
}

// ============================================
// Quantum information
// ============================================

pub const QUANTUM_BITS: Simulation = Simulation {
    title: "Quantum Information Theory",
    equations: &[Equation {
        name: "Measurement",
        formula: "P(0) = P(1) = ½",
        description: "Eight qubits in |+⟩, measured",
    }],
    variables: &[],
    run: quantum_bits,
};

fn quantum_bits(ctx: &mut UnitContext<'_>) {
    let bits = random_bits(ctx.rng(), 8);
    ctx.write(&format!("Random Quantum Bits: {}", format_bits(&bits)));
}

pub const GATES: &[&str] = &["Hadamard", "CNOT", "Pauli-X", "Pauli-Z"];

pub const QUANTUM_GATES: Simulation = Simulation {
    title: "Quantum Computing Circuits",
    equations: &[Equation {
        name: "Hadamard",
        formula: "H = (X + Z)/√2",
        description: "One of four gates is applied",
    }],
    variables: &[],
    run: quantum_gates,
};

fn quantum_gates(ctx: &mut UnitContext<'_>) {
    let gate = pick(ctx.rng(), GATES);
    ctx.write(&format!("Random Quantum Gate Applied: {gate}"));
}

pub const DOUBLE_SLIT: Simulation = Simulation {
    title: "Quantum Double-Slit Experiment",
    equations: &[Equation {
        name: "Fringe Intensity",
        formula: "I(x) = sin²(x)",
        description: "Two-path interference",
    }],
    variables: &[("x", "Screen position")],
    run: double_slit,
};

fn double_slit(ctx: &mut UnitContext<'_>) {
    let x = linspace(-5.0, 5.0, FINE_GRID);
    ctx.plot(curve(
        "Interference Pattern in Double-Slit Experiment",
        &x,
        |x| x.sin().powi(2),
    ));
}

pub const CRYPTOGRAPHY: Simulation = Simulation {
    title: "Quantum Cryptography",
    equations: &[Equation {
        name: "BB84 Key Bit",
        formula: "k_i ∈ {0, 1}",
        description: "Eight sifted key bits",
    }],
    variables: &[],
    run: cryptography,
};

fn cryptography(ctx: &mut UnitContext<'_>) {
    let key = random_bits(ctx.rng(), 8);
    ctx.write(&format!("Generated Quantum Key: {}", format_bits(&key)));
}

pub const TELEPORTED_STATES: &[&str] = &["|0>", "|1>", "|+>", "|->"];

pub const TELEPORTATION: Simulation = Simulation {
    title: "Quantum Teleportation",
    equations: &[Equation {
        name: "Bell Pair",
        formula: "|Φ⁺⟩ = (|00⟩ + |11⟩)/√2",
        description: "Shared resource for the transfer",
    }],
    variables: &[],
    run: teleportation,
};

fn teleportation(ctx: &mut UnitContext<'_>) {
    let state = pick(ctx.rng(), TELEPORTED_STATES);
    ctx.write(&format!("State Teleported: {state}"));
}

pub const ZENO_EFFECT: Simulation = Simulation {
    title: "Quantum Zeno Effect",
    equations: &[Equation {
        name: "Survival",
        formula: "P(t) = e^(-t)",
        description: "Unobserved decay",
    }],
    variables: &[("t", "Time")],
    run: zeno_effect,
};

fn zeno_effect(ctx: &mut UnitContext<'_>) {
    let t = linspace(0.0, 10.0, COARSE_GRID);
    ctx.plot(curve("Quantum Zeno Effect: Survival Probability", &t, |t| (-t).exp()));
}

pub const CONSCIOUSNESS_STATES: &[&str] = &["Superposition", "Entanglement", "Collapse"];

pub const CONSCIOUSNESS: Simulation = Simulation {
    title: "Quantum Consciousness Interactions",
    equations: &[Equation {
        name: "Pure Speculation",
        formula: "mind ∈ {superposed, entangled, collapsed}",
        description: "Drawn uniformly",
    }],
    variables: &[],
    run: consciousness,
};

fn consciousness(ctx: &mut UnitContext<'_>) {
    let state = pick(ctx.rng(), CONSCIOUSNESS_STATES);
    ctx.write(&format!("Quantum Consciousness State: {state}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{line_points, only_figure, render};
    use crate::controls::FixedControls;

    #[test]
    fn particle_in_a_box_grid_and_mode() {
        for seed in 0..20 {
            let scene = render(&PARTICLE_IN_A_BOX, FixedControls::new(), seed);
            let figure = only_figure(&scene);
            let points = line_points(figure);
            assert_eq!(points.len(), 1000);
            assert_eq!(points[0][0], 0.0);
            assert_eq!(points[999][0], 1.0);

            let n: u32 = figure
                .title
                .trim_start_matches("Quantum Particle in a Box (n=")
                .trim_end_matches(')')
                .parse()
                .unwrap();
            assert!((1..=5).contains(&n));
            assert!((points[500][1] - box_eigenstate(n, points[500][0])).abs() < 1e-12);
        }
    }

    #[test]
    fn entangled_spins_disagree() {
        for seed in 0..20 {
            let scene = render(&ENTANGLEMENT, FixedControls::new(), seed);
            let lines: Vec<_> = scene.texts().collect();
            assert!(
                lines == ["Particle 1: Up", "Particle 2: Down"]
                    || lines == ["Particle 1: Down", "Particle 2: Up"]
            );
        }
    }

    #[test]
    fn tunneling_threshold_is_strict() {
        let outcome = |energy: f64| {
            let scene = render(&TUNNELING, FixedControls::new().with(ENERGY.label, energy), 0);
            scene.texts().map(str::to_owned).collect::<Vec<_>>()
        };

        assert_eq!(outcome(8.0), ["Particle Tunnels Through the Barrier"]);
        assert_eq!(outcome(5.0), ["Particle Reflects Back"]);
        assert_eq!(outcome(7.0), ["Particle Reflects Back"]);
        assert_eq!(outcome(ENERGY.min), ["Particle Reflects Back"]);
        assert_eq!(outcome(ENERGY.max), ["Particle Tunnels Through the Barrier"]);
    }

    #[test]
    fn tunneling_default_reflects() {
        let scene = render(&TUNNELING, FixedControls::new(), 0);
        assert_eq!(scene.texts().collect::<Vec<_>>(), ["Particle Reflects Back"]);
        assert_eq!(scene.figures().count(), 0);
    }

    #[test]
    fn cat_is_alive_or_dead() {
        for seed in 0..20 {
            let scene = render(&SCHRODINGERS_CAT, FixedControls::new(), seed);
            let text = scene.texts().next().unwrap().to_owned();
            assert!(text == "Schrödinger's Cat is Alive" || text == "Schrödinger's Cat is Dead");
        }
    }

    #[test]
    fn key_has_eight_bits() {
        let scene = render(&CRYPTOGRAPHY, FixedControls::new(), 5);
        let text = scene.texts().next().unwrap();
        let bits = text
            .trim_start_matches("Generated Quantum Key: [")
            .trim_end_matches(']');
        let bits: Vec<&str> = bits.split(' ').collect();
        assert_eq!(bits.len(), 8);
        assert!(bits.iter().all(|b| *b == "0" || *b == "1"));
    }

    #[test]
    fn decoherence_starts_fully_coherent() {
        let scene = render(&DECOHERENCE, FixedControls::new(), 0);
        let points = line_points(only_figure(&scene));
        assert_eq!(points.len(), 100);
        assert_eq!(points[0][1], 1.0);
        assert!((points[99][1] - (-5.0f64).exp()).abs() < 1e-15);
    }
}
