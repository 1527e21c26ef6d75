//! egui overlay drawn straight onto the window surface

use crate::GraphicsContext;
use winit::{event::WindowEvent, window::Window};

/// egui context, winit input state and wgpu renderer bundled together
pub struct EguiLayer {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    clear_color: wgpu::Color,
}

impl EguiLayer {
    pub fn new(gfx: &GraphicsContext, clear_color: [f32; 3]) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            &gfx.window,
            Some(gfx.window.scale_factor() as f32),
            None,
        );
        let renderer = egui_wgpu::Renderer::new(&gfx.device, gfx.config.format, None, 1);

        Self {
            ctx,
            state,
            renderer,
            clear_color: wgpu::Color {
                r: clear_color[0] as f64,
                g: clear_color[1] as f64,
                b: clear_color[2] as f64,
                a: 1.0,
            },
        }
    }

    /// Feed a window event to egui. Returns true if egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one UI pass and present it
    pub fn render(
        &mut self,
        gfx: &GraphicsContext,
        build_ui: impl FnMut(&egui::Context),
    ) -> Result<(), wgpu::SurfaceError> {
        let output = gfx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.state.take_egui_input(&gfx.window);
        let full_output = self.ctx.run(raw_input, build_ui);

        self.state
            .handle_platform_output(&gfx.window, full_output.platform_output);
        let tris = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(&gfx.device, &gfx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gfx.size.width, gfx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Egui Encoder"),
            });

        let extra_cmds = self.renderer.update_buffers(
            &gfx.device,
            &gfx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        gfx.queue
            .submit(extra_cmds.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }
}
