use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::shading::{channel, escaped};

/// Smooth blue-through-orange palette over `t = iterations / max_iterations`:
///
/// `r = 9(1-t)t³`, `g = 15(1-t)²t²`, `b = 8.5(1-t)³t`, each scaled to `[0, 255]`.
///
/// Counts at or above `max_iterations` are black, and only those.
#[must_use]
pub fn polynomial_colour(iterations: u32, max_iterations: u32) -> Colour {
    if iterations >= max_iterations {
        return Colour::BLACK;
    }

    let t = f64::from(iterations) / f64::from(max_iterations);
    let u = 1.0 - t;

    escaped(Colour {
        r: channel(9.0 * u * t * t * t),
        g: channel(15.0 * u * u * t * t),
        b: channel(8.5 * u * u * u * t),
    })
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotPolynomialGradient {
    max_iterations: u32,
}

impl MandelbrotPolynomialGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for MandelbrotPolynomialGradient {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        check_iterations(iterations, self.max_iterations)?;

        Ok(polynomial_colour(iterations, self.max_iterations))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotPolynomialGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Polynomial
    }
}
