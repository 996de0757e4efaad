use crate::adapters::pixel_format::{clear_rgba, copy_pixel_buffer_to_rgba};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Fixed-size framebuffer scaled onto the window surface, with the egui HUD on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    buffer_width: u32,
    buffer_height: u32,
    surface_width: u32,
    surface_height: u32,
    latest_frame: Option<FrameData>,
    last_error_message: Option<String>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        (buffer_width, buffer_height): (u32, u32),
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;

        clear_rgba(pixels.frame_mut());

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            buffer_width,
            buffer_height,
            surface_width: size.width,
            surface_height: size.height,
            latest_frame: None,
            last_error_message: None,
        })
    }

    fn ingest_render_event(&mut self) {
        let Some(event) = self.adapter.render_event() else {
            return;
        };

        let last_presented = self.latest_frame.as_ref().map_or(0, |f| f.generation);

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= last_presented
                    || frame.pixel_buffer.width() != self.buffer_width
                    || frame.pixel_buffer.height() != self.buffer_height
                {
                    log::debug!("skipping frame {}", frame.generation);
                    return;
                }

                match copy_pixel_buffer_to_rgba(&frame.pixel_buffer, self.pixels.frame_mut()) {
                    Ok(()) => {
                        self.last_error_message = None;
                        self.latest_frame = Some(frame);
                    }
                    Err(err) => {
                        log::error!("cannot upload frame {}: {}", frame.generation, err);
                        self.last_error_message = Some(err.to_string());
                    }
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= last_presented {
                    self.last_error_message = Some(error.message);
                }
            }
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.ingest_render_event();

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            // scaling pass first, egui composited over it
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("failed to resize surface to {}x{}: {}", width, height, err);
        }
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point> {
        self.pixels
            .window_pos_to_pixel(position)
            .ok()
            .map(|(x, y)| Point {
                x: x as i32,
                y: y as i32,
            })
    }

    fn latest_frame(&self) -> Option<&FrameData> {
        self.latest_frame.as_ref()
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.latest_frame.as_ref().map(|f| f.render_duration)
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}
