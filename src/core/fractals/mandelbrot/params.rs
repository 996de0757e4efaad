use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
/// `|z| > 2` compared on the squared magnitude.
pub const DEFAULT_ESCAPE_THRESHOLD_SQUARED: f64 = 4.0;

/// Iteration bound and escape test for one field computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    max_iterations: u32,
    escape_threshold_squared: f64,
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold_squared: DEFAULT_ESCAPE_THRESHOLD_SQUARED,
        }
    }
}

impl MandelbrotParams {
    pub fn new(max_iterations: u32, escape_threshold_squared: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !(escape_threshold_squared.is_finite() && escape_threshold_squared > 0.0) {
            return Err(MandelbrotError::InvalidEscapeThreshold(
                escape_threshold_squared,
            ));
        }

        Ok(Self {
            max_iterations,
            escape_threshold_squared,
        })
    }

    pub fn with_max_iterations(max_iterations: u32) -> Result<Self, MandelbrotError> {
        Self::new(max_iterations, DEFAULT_ESCAPE_THRESHOLD_SQUARED)
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold_squared(&self) -> f64 {
        self.escape_threshold_squared
    }
}
