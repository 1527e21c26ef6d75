//! Ambient numeric controls read by simulations at dispatch time

use std::collections::HashMap;

/// A bounded numeric control with a default
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Slider {
    pub const fn new(label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            label,
            min,
            max,
            default,
        }
    }

    /// Force a raw value into `[min, max]`. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Where simulations pull control values from.
///
/// Reading a slider may register it with the host for display. The value
/// returned is always inside the slider's range.
pub trait ControlSource {
    fn slider(&mut self, slider: &Slider) -> f64;
}

/// Fixed control values keyed by label; unset controls read their default
#[derive(Debug, Clone, Default)]
pub struct FixedControls {
    values: HashMap<&'static str, f64>,
}

impl FixedControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: &'static str, value: f64) -> Self {
        self.values.insert(label, value);
        self
    }

    pub fn set(&mut self, label: &'static str, value: f64) {
        self.values.insert(label, value);
    }
}

impl ControlSource for FixedControls {
    fn slider(&mut self, slider: &Slider) -> f64 {
        let raw = self
            .values
            .get(slider.label)
            .copied()
            .unwrap_or(slider.default);
        slider.clamp(raw)
    }
}

/// Host-side slider state.
///
/// Values persist by label for the whole session, like widget state in an
/// immediate-mode UI. `active` lists the sliders the last dispatch read, in
/// the order it read them, so the host knows which ones to draw.
#[derive(Debug, Default)]
pub struct SliderBank {
    values: HashMap<&'static str, f64>,
    active: Vec<Slider>,
}

impl SliderBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget which sliders were registered; values are kept
    pub fn begin_cycle(&mut self) {
        self.active.clear();
    }

    pub fn active(&self) -> &[Slider] {
        &self.active
    }

    pub fn value(&self, slider: &Slider) -> f64 {
        slider.clamp(self.values.get(slider.label).copied().unwrap_or(slider.default))
    }

    /// Store a new value for `slider`. Returns true if it changed.
    pub fn set(&mut self, slider: &Slider, value: f64) -> bool {
        let value = slider.clamp(value);
        let previous = self.value(slider);
        self.values.insert(slider.label, value);
        previous != value
    }
}

impl ControlSource for SliderBank {
    fn slider(&mut self, slider: &Slider) -> f64 {
        if !self.active.iter().any(|s| s.label == slider.label) {
            self.active.push(*slider);
        }
        self.value(slider)
    }
}
