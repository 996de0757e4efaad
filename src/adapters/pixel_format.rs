//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::error::Error;
use std::fmt;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    SizeMismatch { expected_len: usize, actual_len: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_len,
                actual_len,
            } => write!(
                f,
                "RGBA target holds {} bytes but the frame needs {}",
                actual_len, expected_len
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies an RGB frame into an RGBA surface of the same dimensions, alpha fully opaque.
pub fn copy_pixel_buffer_to_rgba(src: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    let expected_len = src.buffer_size() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected_len {
        return Err(PixelFormatError::SizeMismatch {
            expected_len,
            actual_len: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[BYTES_PER_PIXEL] = u8::MAX;
    }

    Ok(())
}

/// Fills an RGBA surface with opaque black.
pub fn clear_rgba(dst: &mut [u8]) {
    for rgba in dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
        rgba.copy_from_slice(&[0, 0, 0, u8::MAX]);
    }
}
