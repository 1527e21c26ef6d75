//! Theory of Everything Simulations
//!
//! Pick a simulation from the left panel; its plot or verdict appears in
//! the middle and the equation behind it on the right.
//!
//! Usage: `toe_sim [ID] [--seed N] [--window WIDTHxHEIGHT]`, see `--help`.
//! Each option can also come from `TOE_SIMULATION`, `TOE_SEED` or
//! `TOE_WINDOW`. `RUST_LOG` sets the log filter.

use common::{EguiLayer, GraphicsContext};
use toe_sim::view::SimulationBrowser;
use toe_sim::{AppConfig, Registry};
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

struct App {
    gfx: GraphicsContext,
    egui: EguiLayer,
    browser: SimulationBrowser,
}

impl App {
    fn new(gfx: GraphicsContext, config: &AppConfig) -> Self {
        let egui = EguiLayer::new(&gfx, config.background);
        let registry = Registry::standard();
        log::info!("Registered {} simulations", registry.len());
        let browser = SimulationBrowser::new(registry, config);

        Self { gfx, egui, browser }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gfx.resize(new_size);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let browser = &mut self.browser;
        self.egui.render(&self.gfx, |ctx| browser.show(ctx))
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.on_window_event(&self.gfx.window, event)
    }
}

fn main() {
    env_logger::init();

    let config = AppConfig::from_cli();
    let (gfx, event_loop) = match pollster::block_on(GraphicsContext::new(
        &config.title,
        config.width,
        config.height,
    )) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Graphics setup failed: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(gfx, &config);

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.resize(*size),
                    WindowEvent::RedrawRequested if !consumed => match app.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => app.resize(app.gfx.size),
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(e) => log::error!("Render error: {:?}", e),
                    },
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.gfx.window.request_redraw();
            }
            _ => {}
        }
    });

    if let Err(e) = result {
        log::error!("Event loop error: {e}");
    }
}
