use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize_surface(&mut self, width: u32, height: u32);
    /// Maps a physical window position onto the framebuffer, `None` outside it.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point>;
    fn latest_frame(&self) -> Option<&FrameData>;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
