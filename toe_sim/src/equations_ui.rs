//! Equations sidebar for the selected simulation
//!
//! Every catalog entry carries the formula it plots (or the rule behind its
//! random draw); the sidebar shows it next to the output together with the
//! control values the last run read.

use egui::{Color32, Context, FontFamily, FontId, RichText, Ui};

use crate::controls::Slider;
use crate::registry::{Simulation, VisualizationId};

const TITLE_COLOR: Color32 = Color32::from_rgb(100, 200, 255);
const SECTION_COLOR: Color32 = Color32::from_rgb(255, 200, 100);
const SYMBOL_COLOR: Color32 = Color32::from_rgb(150, 255, 150);
const FORMULA_COLOR: Color32 = Color32::from_rgb(200, 220, 255);

/// Equation entry with label and formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// One line per control, e.g. `Energy of Particle = 5.00  [0.1, 10]`
pub fn control_summary(readings: &[(Slider, f64)]) -> Vec<String> {
    readings
        .iter()
        .map(|(slider, value)| {
            format!(
                "{} = {:.2}  [{}, {}]",
                slider.label, value, slider.min, slider.max
            )
        })
        .collect()
}

/// Right-hand panel: what the selected simulation computes and from which inputs
pub fn draw_equations_sidebar(
    ctx: &Context,
    id: VisualizationId,
    sim: &Simulation,
    readings: &[(Slider, f64)],
) {
    egui::SidePanel::right("equations_panel")
        .min_width(260.0)
        .max_width(340.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(format!("Simulation {id}")).small().color(Color32::GRAY));
                ui.heading(RichText::new(sim.title).color(TITLE_COLOR));
            });

            section(ui, "Equations");
            if sim.equations.is_empty() {
                ui.label(RichText::new("Nothing to derive here").small().color(Color32::GRAY));
            }
            for eq in sim.equations {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            if !sim.variables.is_empty() {
                section(ui, "Variables");
                for (symbol, meaning) in sim.variables {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(*symbol)
                                .color(SYMBOL_COLOR)
                                .font(FontId::new(14.0, FontFamily::Monospace)),
                        );
                        ui.label(RichText::new("=").color(Color32::GRAY));
                        ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                    });
                }
            }

            section(ui, "Inputs");
            let lines = control_summary(readings);
            if lines.is_empty() {
                ui.label(
                    RichText::new("No sliders; press Rerun for a fresh draw")
                        .small()
                        .color(Color32::GRAY),
                );
            }
            for line in lines {
                ui.label(RichText::new(line).monospace().color(Color32::LIGHT_GRAY));
            }
        });
}

fn section(ui: &mut Ui, name: &str) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(5.0);
    ui.label(RichText::new(name).strong().color(SECTION_COLOR));
    ui.add_space(5.0);
}

fn draw_equation(ui: &mut Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(FORMULA_COLOR),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::quantum::ENERGY;
    use crate::catalog::relativity::VELOCITY;

    #[test]
    fn control_summary_lists_each_reading() {
        let lines = control_summary(&[(ENERGY, 8.0), (VELOCITY, 0.5)]);
        assert_eq!(
            lines,
            [
                "Energy of Particle = 8.00  [0.1, 10]",
                "Velocity (as a fraction of the speed of light) = 0.50  [0.1, 0.99]",
            ]
        );
        assert!(control_summary(&[]).is_empty());
    }
}
