use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Maps every value of a row-major `width × height` grid to an RGB triple.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    width: u32,
    height: u32,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + ?Sized,
{
    generate_pixel_buffer_cancelable(input, width, height, mapper, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], checking `cancel` before each row is coloured.
///
/// Rows are coloured in parallel straight into the preallocated output, so a
/// cancelled job stops after at most one row per worker.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    width: u32,
    height: u32,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + ?Sized,
    C: CancelToken,
{
    let row_width = width as usize;
    let expected_len = row_width * height as usize;

    if row_width == 0 || input.len() != expected_len {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                expected_size: expected_len * BYTES_PER_PIXEL,
                buffer_size: input.len() * BYTES_PER_PIXEL,
            },
        ));
    }

    let mut buffer = vec![0u8; expected_len * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(row_width * BYTES_PER_PIXEL)
        .zip(input.par_chunks(row_width))
        .try_for_each(|(out_row, in_row)| {
            if cancel.is_cancelled() {
                return Err(GeneratePixelBufferError::Cancelled(Cancelled));
            }

            for (rgb, &value) in out_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(in_row) {
                let Colour { r, g, b } = mapper
                    .map(value)
                    .map_err(GeneratePixelBufferError::ColourMap)?;
                rgb.copy_from_slice(&[r, g, b]);
            }

            Ok(())
        })?;

    PixelBuffer::from_data(width, height, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}
