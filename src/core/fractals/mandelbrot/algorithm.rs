use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Iterates `z ← z² + c` from `z = 0` and returns the 0-based iteration on which
/// `|z|²` first exceeded `escape_threshold_squared`, or `max_iterations` if it never did.
///
/// A magnitude that overflows to infinity or becomes NaN counts as escaped.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32, escape_threshold_squared: f64) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        // NaN fails every comparison, so negating `<=` escapes it too
        if !(z.magnitude_squared() <= escape_threshold_squared) {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    params: MandelbrotParams,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, params: MandelbrotParams) -> Self {
        Self { viewport, params }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn params(&self) -> MandelbrotParams {
        self.params
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = ViewportError;

    #[inline]
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.viewport.pixel_to_complex(pixel)?;

        Ok(escape_time(
            c,
            self.params.max_iterations(),
            self.params.escape_threshold_squared(),
        ))
    }
}
