use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::shading::{channel, escaped};

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotGreyscale {
    max_iterations: u32,
}

impl MandelbrotGreyscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for MandelbrotGreyscale {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        check_iterations(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let grey = channel(f64::from(iterations) / f64::from(self.max_iterations));

        Ok(escaped(Colour {
            r: grey,
            g: grey,
            b: grey,
        }))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGreyscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Greyscale
    }
}
