//! Everything a simulation may touch while it runs

use crate::controls::{ControlSource, Slider};
use crate::render::{Figure, RenderSink};
use rand::RngCore;

/// Explicit stand-in for the ambient UI session: controls to read, a sink
/// to render into and the randomness source for stochastic draws.
pub struct UnitContext<'a> {
    controls: &'a mut dyn ControlSource,
    sink: &'a mut dyn RenderSink,
    rng: &'a mut dyn RngCore,
}

impl<'a> UnitContext<'a> {
    pub fn new(
        controls: &'a mut dyn ControlSource,
        sink: &'a mut dyn RenderSink,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self { controls, sink, rng }
    }

    pub fn heading(&mut self, text: &str) {
        self.sink.heading(text);
    }

    pub fn write(&mut self, text: &str) {
        self.sink.text(text);
    }

    pub fn plot(&mut self, figure: Figure) {
        self.sink.figure(figure);
    }

    pub fn slider(&mut self, slider: &Slider) -> f64 {
        self.controls.slider(slider)
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::FixedControls;
    use crate::render::Scene;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const GAIN: Slider = Slider::new("Gain", 0.0, 2.0, 1.0);

    #[test]
    fn units_reach_everything_through_the_context() {
        let mut controls = FixedControls::new().with(GAIN.label, 5.0);
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut expected = StdRng::seed_from_u64(3);

        let mut ctx = UnitContext::new(&mut controls, &mut scene, &mut rng);
        ctx.heading("Gain check");
        let gain = ctx.slider(&GAIN);
        ctx.write(&format!("gain {gain}"));
        let draw: u32 = ctx.rng().gen();
        ctx.plot(Figure::new("empty"));

        assert_eq!(draw, expected.gen::<u32>());
        assert_eq!(scene.headings().collect::<Vec<_>>(), ["Gain check"]);
        assert_eq!(scene.texts().collect::<Vec<_>>(), ["gain 2"]);
        assert_eq!(scene.figures().count(), 1);
    }
}
