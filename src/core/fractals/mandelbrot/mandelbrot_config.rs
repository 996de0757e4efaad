use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::{
    DEFAULT_ESCAPE_THRESHOLD_SQUARED, DEFAULT_MAX_ITERATIONS, MandelbrotParams,
};

pub const DEFAULT_BOUNDS: (f64, f64, f64, f64) = (-2.5, 1.5, -1.5, 1.5);

pub(crate) fn default_region() -> ComplexRect {
    let (x_min, x_max, y_min, y_max) = DEFAULT_BOUNDS;

    ComplexRect::from_bounds(x_min, x_max, y_min, y_max)
        .expect("default fractal region is valid")
}

/// User-tunable Mandelbrot settings: the home region plus everything a frame needs
/// besides the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub max_iterations: u32,
    pub escape_threshold_squared: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold_squared: DEFAULT_ESCAPE_THRESHOLD_SQUARED,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn params(&self) -> Result<MandelbrotParams, MandelbrotError> {
        MandelbrotParams::new(self.max_iterations, self.escape_threshold_squared)
    }

    pub fn viewport(&self, width: u32, height: u32) -> Result<Viewport, ViewportError> {
        Viewport::new(self.region, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_classic_view() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.region.x_min(), -2.5);
        assert_eq!(config.region.x_max(), 1.5);
        assert_eq!(config.region.y_min(), -1.5);
        assert_eq!(config.region.y_max(), 1.5);
        assert_eq!(config.params(), Ok(MandelbrotParams::default()));
        assert_eq!(config.colour_map_kind, MandelbrotColourMapKinds::Polynomial);
    }

    #[test]
    fn params_reports_invalid_settings() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.params(), Err(MandelbrotError::ZeroMaxIterations));
    }

    #[test]
    fn viewport_rejects_empty_surface() {
        assert!(MandelbrotConfig::default().viewport(0, 600).is_err());
        assert_eq!(
            MandelbrotConfig::default().viewport(800, 600).unwrap().width(),
            800
        );
    }
}
