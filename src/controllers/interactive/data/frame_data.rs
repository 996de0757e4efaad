use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub viewport: Viewport,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
