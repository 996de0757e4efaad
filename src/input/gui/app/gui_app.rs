use std::path::PathBuf;

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::PhysicalPosition,
    error::EventLoopError,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::navigation::{InputEvent, NavigationOutcome};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::key_bindings::{GuiAction, action_for_key};
use crate::presenters::file::ppm::PpmFilePresenter;

const MAX_ITERATIONS_RANGE: std::ops::RangeInclusive<u32> = 1..=10_000;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    ui_state: GuiAppState,
    save_dir: PathBuf,
    cursor_position: Option<PhysicalPosition<f64>>,
    last_save_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        ui_state: GuiAppState,
        save_dir: PathBuf,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            controller,
            ui_state,
            save_dir,
            cursor_position: None,
            last_save_message: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                let response = self.egui_state.on_window_event(self.window, event);

                if response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => self.quit(elwt),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        if self.ui_state.tick() {
                            redraw_pending = true;
                        }

                        let egui_output = self.update_ui();
                        self.submit_render_request_if_needed();

                        if self.ui_state.navigator().is_animating() {
                            redraw_pending = true;
                        }

                        self.egui_state
                            .handle_platform_output(self.window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                            log::error!("render error: {}", err);
                            self.quit(elwt);
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.presenter.resize_surface(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = self.window.inner_size();
                        self.presenter.resize_surface(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.cursor_position = Some(*position);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        self.cursor_position = None;
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !response.consumed => {
                        if let Some(pixel) = self.cursor_pixel() {
                            redraw_pending |= self.navigate(InputEvent::PrimaryClick(pixel), elwt);
                        }
                    }
                    WindowEvent::KeyboardInput { event: key_event, .. }
                        if !response.consumed && key_event.state == ElementState::Pressed =>
                    {
                        if let PhysicalKey::Code(code) = key_event.physical_key {
                            match action_for_key(code) {
                                Some(GuiAction::Navigate(input)) => {
                                    redraw_pending |= self.navigate(input, elwt);
                                }
                                Some(GuiAction::SaveFrame) if !key_event.repeat => {
                                    self.save_frame();
                                    redraw_pending = true;
                                }
                                _ => {}
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn quit(&mut self, elwt: &EventLoopWindowTarget<GuiEvent>) {
        log::info!("shutting down");
        self.controller.shutdown();
        elwt.exit();
    }

    /// Returns whether a redraw is needed.
    fn navigate(&mut self, input: InputEvent, elwt: &EventLoopWindowTarget<GuiEvent>) -> bool {
        match self.ui_state.apply(input) {
            NavigationOutcome::Quit => {
                self.quit(elwt);
                false
            }
            NavigationOutcome::Unchanged => false,
            NavigationOutcome::Redraw
            | NavigationOutcome::Animating
            | NavigationOutcome::Refused(_) => true,
        }
    }

    fn cursor_pixel(&self) -> Option<Point> {
        let position = self.cursor_position?;

        self.presenter
            .window_pos_to_pixel((position.x as f32, position.y as f32))
    }

    fn submit_render_request_if_needed(&mut self) {
        let request = self.ui_state.build_render_request();

        if self.ui_state.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.ui_state.record_submission(request, generation);
        }
    }

    fn save_frame(&mut self) {
        let Some(frame) = self.presenter.latest_frame() else {
            self.last_save_message = Some("No frame to save yet".to_string());
            return;
        };

        let filepath = self
            .save_dir
            .join(format!("mandelbrot_{:05}.ppm", frame.generation));

        self.last_save_message = match PpmFilePresenter::new().present(&frame.pixel_buffer, &filepath)
        {
            Ok(()) => {
                log::info!("Saved to {}", filepath.display());
                Some(format!("Saved {}", filepath.display()))
            }
            Err(err) => {
                log::error!("failed to save {}: {}", filepath.display(), err);
                Some(format!("Save failed: {}", err))
            }
        };
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut reset_clicked = false;
        let mut save_clicked = false;
        let mut smoothing_enabled = self.ui_state.smoothing_enabled();

        let ui_state = &mut self.ui_state;
        let presenter = &self.presenter;
        let last_save_message = self.last_save_message.as_deref();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(
                            egui::Slider::new(
                                &mut ui_state.mandelbrot.max_iterations,
                                MAX_ITERATIONS_RANGE,
                            )
                            .logarithmic(true),
                        );
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(ui_state.mandelbrot.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut ui_state.mandelbrot.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.checkbox(&mut smoothing_enabled, "Smooth navigation");

                    ui.separator();
                    let region = ui_state.navigator().current().region();
                    ui.label(format!("Real: [{:.12}, {:.12}]", region.x_min(), region.x_max()));
                    ui.label(format!("Imag: [{:.12}, {:.12}]", region.y_min(), region.y_max()));
                    ui.label(format!("Zoom: {:.3e}x", ui_state.zoom_level()));

                    ui.horizontal(|ui| {
                        reset_clicked = ui.button("Reset view").clicked();
                        save_clicked = ui.button("Save PPM").clicked();
                    });

                    ui.separator();
                    ui.label(format!("Generation: {}", ui_state.latest_submitted_generation));
                    if let Some(render_duration) = presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(warning) = ui_state.last_warning {
                        ui.colored_label(egui::Color32::YELLOW, warning.to_string());
                    }
                    if let Some(message) = presenter.last_error_message() {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                    if let Some(message) = last_save_message {
                        ui.label(message);
                    }

                    ui.separator();
                    ui.small("Click: zoom in | Arrows: pan | +/-: zoom | R: reset | S: save | Esc: quit");
                });
        });

        if smoothing_enabled != self.ui_state.smoothing_enabled() {
            self.ui_state.set_smoothing_enabled(smoothing_enabled);
        }

        if reset_clicked {
            self.ui_state.apply(InputEvent::Reset);
        }

        if save_clicked {
            self.save_frame();
        }

        output
    }
}
