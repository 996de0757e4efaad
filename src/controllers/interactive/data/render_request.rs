use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Snapshot of everything needed for one interactive frame.
///
/// Iteration settings are carried raw and validated by the worker, so an invalid
/// value from the UI surfaces as a render error rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub escape_threshold_squared: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl RenderRequest {
    #[must_use]
    pub fn from_config(viewport: Viewport, config: &MandelbrotConfig) -> Self {
        Self {
            viewport,
            max_iterations: config.max_iterations,
            escape_threshold_squared: config.escape_threshold_squared,
            colour_map_kind: config.colour_map_kind,
        }
    }
}
