//! egui front-end
//!
//! One dispatch per user interaction: the selected simulation runs when the
//! selection changes, when one of its sliders moves, or when "Rerun" is
//! pressed. Its output is cached as a [`Scene`] and repainted every frame.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotUi, Points, Polygon};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::context::UnitContext;
use crate::controls::{Slider, SliderBank};
use crate::equations_ui::draw_equations_sidebar;
use crate::registry::{Registry, VisualizationId};
use crate::render::{histogram, Block, Colormap, Figure, Layer, Scene, Tint};

const FIGURE_HEIGHT: f32 = 360.0;
const MARKER_RADIUS: f32 = 4.0;

/// Host state for the simulation menu
pub struct SimulationBrowser {
    registry: Registry,
    title: String,
    selection: VisualizationId,
    controls: SliderBank,
    scene: Scene,
    failure: Option<String>,
    rng: StdRng,
    dirty: bool,
}

impl SimulationBrowser {
    pub fn new(registry: Registry, config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            registry,
            title: config.title.clone(),
            selection: config.initial,
            controls: SliderBank::new(),
            scene: Scene::new(),
            failure: None,
            rng,
            dirty: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Sliders the current simulation read on its last run
    pub fn active_sliders(&self) -> &[Slider] {
        self.controls.active()
    }

    /// Active sliders paired with the values they were last read at
    pub fn readings(&self) -> Vec<(Slider, f64)> {
        self.controls
            .active()
            .iter()
            .map(|slider| (*slider, self.controls.value(slider)))
            .collect()
    }

    pub fn select(&mut self, id: VisualizationId) {
        if id != self.selection {
            self.selection = id;
            self.dirty = true;
        }
    }

    /// Move a slider; the simulation reruns on the next refresh if it changed
    pub fn set_control(&mut self, slider: &Slider, value: f64) {
        if self.controls.set(slider, value) {
            self.dirty = true;
        }
    }

    pub fn request_rerun(&mut self) {
        self.dirty = true;
    }

    /// Re-dispatch the selection if anything changed since the last run.
    /// Returns true if a dispatch happened.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.run_selected();
        true
    }

    fn run_selected(&mut self) {
        self.controls.begin_cycle();
        self.scene.clear();
        self.failure = None;

        let id = self.selection;
        let registry = &self.registry;
        let controls = &mut self.controls;
        let scene = &mut self.scene;
        let rng = &mut self.rng;

        // A failing simulation only loses its own render cycle
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut ctx = UnitContext::new(controls, scene, rng);
            registry.dispatch(id, &mut ctx);
        }));

        if let Err(payload) = result {
            let message = panic_message(payload.as_ref());
            log::error!("Simulation {} failed: {}", id, message);
            self.failure = Some(message);
        }
    }

    /// Build the whole UI for one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.refresh();

        egui::SidePanel::left("selection_panel")
            .min_width(220.0)
            .resizable(false)
            .show(ctx, |ui| self.selection_panel(ui));

        if let Some(sim) = self.registry.get(self.selection) {
            draw_equations_sidebar(ctx, self.selection, sim, &self.readings());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new(&self.title).size(26.0).strong());
                ui.add_space(6.0);
                ui.heading("Welcome to the Theory of Everything Simulations!");
                ui.label("Choose a simulation from the sidebar to see it in action.");
                ui.separator();

                if let Some(failure) = &self.failure {
                    ui.colored_label(Color32::LIGHT_RED, format!("Simulation failed: {failure}"));
                }
                draw_scene(ui, &self.scene);
            });
        });

        if self.dirty {
            ctx.request_repaint();
        }
    }

    fn selection_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Choose a Simulation");
        ui.add_space(6.0);

        let mut selected = self.selection;
        egui::ComboBox::from_label("Select a Simulation")
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for id in self.registry.identifiers() {
                    let label = match self.registry.title(id) {
                        Some(title) => format!("{id}. {title}"),
                        None => id.to_string(),
                    };
                    ui.selectable_value(&mut selected, id, label);
                }
            });
        self.select(selected);

        if self.registry.contains(self.selection) {
            let title = self.registry.title(self.selection).unwrap_or_default();
            ui.label(RichText::new(title).small().color(Color32::GRAY));
        } else {
            ui.colored_label(
                Color32::LIGHT_RED,
                format!("No simulation has id {}", self.selection),
            );
        }

        ui.add_space(6.0);
        if ui.button("Rerun").clicked() {
            self.request_rerun();
        }

        let sliders = self.controls.active().to_vec();
        if sliders.is_empty() {
            return;
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(RichText::new("Controls").strong());
        for slider in sliders {
            let mut value = self.controls.value(&slider);
            ui.label(slider.label);
            let response = ui.add(egui::Slider::new(&mut value, slider.min..=slider.max));
            if response.changed() {
                self.set_control(&slider, value);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

/// Paint a recorded scene top to bottom
pub fn draw_scene(ui: &mut egui::Ui, scene: &Scene) {
    for (index, block) in scene.blocks.iter().enumerate() {
        match block {
            Block::Heading(text) => {
                ui.add_space(4.0);
                ui.heading(text.as_str());
            }
            Block::Text(text) => {
                ui.label(text.as_str());
            }
            Block::Figure(figure) => draw_figure(ui, index, figure),
        }
    }
}

fn draw_figure(ui: &mut egui::Ui, index: usize, figure: &Figure) {
    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&figure.title).strong());
    });

    let mut plot = Plot::new(("scene_figure", index)).height(FIGURE_HEIGHT);
    if figure.has_legend() {
        plot = plot.legend(Legend::default());
    }
    if let Some(x) = &figure.x_label {
        plot = plot.x_axis_label(x.clone());
    }
    if let Some(y) = &figure.y_label {
        plot = plot.y_axis_label(y.clone());
    }
    let square = figure
        .layers
        .iter()
        .any(|l| matches!(l, Layer::Polar { .. } | Layer::Heatmap { .. }));
    if square {
        plot = plot.data_aspect(1.0);
    }

    plot.show(ui, |plot_ui| {
        for layer in &figure.layers {
            draw_layer(plot_ui, layer);
        }
    });
}

fn tint_color(tint: Tint) -> Option<Color32> {
    tint.rgb().map(|[r, g, b]| Color32::from_rgb(r, g, b))
}

fn draw_layer(plot_ui: &mut PlotUi, layer: &Layer) {
    match layer {
        Layer::Line { points, label, tint } => {
            let mut line = Line::new(points.clone()).width(1.5);
            if let Some(label) = label {
                line = line.name(label);
            }
            if let Some(color) = tint_color(*tint) {
                line = line.color(color);
            }
            plot_ui.line(line);
        }
        Layer::Polar { theta, radius } => {
            plot_ui.line(Line::new(Layer::polar_points(theta, radius)).width(1.5));
        }
        Layer::Scatter { points, tint } => {
            let mut markers = Points::new(points.clone()).radius(MARKER_RADIUS);
            if let Some(color) = tint_color(*tint) {
                markers = markers.color(color);
            }
            plot_ui.points(markers);
        }
        Layer::Histogram { samples, bins } => {
            let bars = histogram(samples, *bins)
                .iter()
                .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        }
        Layer::Heatmap {
            rows,
            cols,
            values,
            colormap,
        } => draw_heatmap(plot_ui, *rows, *cols, values, *colormap),
    }
}

/// Filled unit cells, row 0 at the top like an image
fn draw_heatmap(plot_ui: &mut PlotUi, rows: usize, cols: usize, values: &[f64], colormap: Colormap) {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = if hi > lo { hi - lo } else { 1.0 };

    for (i, value) in values.iter().take(rows * cols).enumerate() {
        let (row, col) = (i / cols, i % cols);
        let x = col as f64;
        let y = (rows - 1 - row) as f64;
        let [r, g, b] = colormap.sample((value - lo) / span);
        let cell = vec![[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0]];
        plot_ui.polygon(
            Polygon::new(cell)
                .fill_color(Color32::from_rgb(r, g, b))
                .stroke(egui::Stroke::NONE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::quantum::ENERGY;
    use crate::catalog::relativity::VELOCITY;

    fn browser(initial: u32) -> SimulationBrowser {
        let config = AppConfig {
            initial: VisualizationId(initial),
            seed: Some(17),
            ..AppConfig::default()
        };
        SimulationBrowser::new(Registry::standard(), &config)
    }

    #[test]
    fn first_refresh_runs_the_initial_selection() {
        let mut app = browser(3);
        assert!(app.refresh());
        assert_eq!(
            app.scene().headings().collect::<Vec<_>>(),
            ["Simulation 3: String Vibrations"]
        );
        // nothing changed, nothing reruns
        assert!(!app.refresh());
    }

    #[test]
    fn out_of_range_selection_renders_nothing() {
        let mut app = browser(999);
        assert!(app.refresh());
        assert!(app.scene().is_empty());
        assert!(app.failure().is_none());
        assert!(app.active_sliders().is_empty());
    }

    #[test]
    fn moving_a_slider_reruns_with_the_new_value() {
        let mut app = browser(14);
        app.refresh();
        assert_eq!(app.active_sliders(), &[ENERGY]);
        assert_eq!(app.scene().texts().collect::<Vec<_>>(), ["Particle Reflects Back"]);

        app.set_control(&ENERGY, 8.0);
        assert!(app.refresh());
        assert_eq!(
            app.scene().texts().collect::<Vec<_>>(),
            ["Particle Tunnels Through the Barrier"]
        );

        // same value again is not an interaction
        app.set_control(&ENERGY, 8.0);
        assert!(!app.refresh());
    }

    #[test]
    fn switching_selection_swaps_registered_sliders() {
        let mut app = browser(2);
        app.refresh();
        assert_eq!(app.active_sliders(), &[VELOCITY]);

        app.select(VisualizationId(5));
        assert!(app.refresh());
        assert!(app.active_sliders().is_empty());
        assert_eq!(app.scene().texts().count(), 2);
    }

    #[test]
    fn rerun_redraws_stochastic_output() {
        let mut app = browser(20);
        assert!(app.refresh());
        let first = app.scene().texts().next().unwrap().to_owned();

        let mut draws = vec![first.clone()];
        for _ in 0..5 {
            app.request_rerun();
            assert!(app.refresh());
            assert_eq!(app.scene().headings().count(), 1);
            draws.push(app.scene().texts().next().unwrap().to_owned());
        }
        // six draws of eight bits from a seeded rng never all coincide
        assert!(draws.iter().any(|bits| *bits != first), "{draws:?}");
        assert!(draws.iter().all(|bits| bits.starts_with("Random Quantum Bits: [")));
    }

    #[test]
    fn readings_follow_slider_moves() {
        let mut app = browser(14);
        app.refresh();
        assert_eq!(app.readings(), [(ENERGY, ENERGY.default)]);

        app.set_control(&ENERGY, 9.5);
        app.refresh();
        assert_eq!(app.readings(), [(ENERGY, 9.5)]);

        app.select(VisualizationId(20));
        app.refresh();
        assert!(app.readings().is_empty());
    }

    #[test]
    fn panic_messages_are_extracted() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
