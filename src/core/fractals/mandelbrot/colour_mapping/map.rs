use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap<u32, Failure = MandelbrotColourMapError> {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

pub(crate) fn check_iterations(
    iterations: u32,
    max_iterations: u32,
) -> Result<(), MandelbrotColourMapError> {
    if iterations > max_iterations {
        return Err(MandelbrotColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(())
}
