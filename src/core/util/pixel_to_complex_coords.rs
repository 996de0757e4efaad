use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, width: u32, height: u32 },
    ComplexOutsideRect { point: Complex, complex_rect: ComplexRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x, point.y, width, height
                )
            }
            Self::ComplexOutsideRect {
                point,
                complex_rect,
            } => {
                write!(
                    f,
                    "point ({}, {}i) is outside the region real: [{}, {}) imag: [{}, {})",
                    point.real,
                    point.imag,
                    complex_rect.x_min(),
                    complex_rect.x_max(),
                    complex_rect.y_min(),
                    complex_rect.y_max()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel of a `width × height` grid onto `complex_rect`.
///
/// Pixel `(0, 0)` lands exactly on the minimum corner; each step to the right or down
/// advances by `extent / dimension`, so the last pixel sits one step short of the
/// maximum corner. Pixels outside `[0, width) × [0, height)` are rejected, never clamped.
pub fn pixel_to_complex_coords(
    pixel: Point,
    width: u32,
    height: u32,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    let inside = pixel.x >= 0
        && pixel.y >= 0
        && (pixel.x as u32) < width
        && (pixel.y as u32) < height;

    if !inside {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel,
            width,
            height,
        });
    }

    let real = complex_rect.x_min()
        + complex_rect.width() * (f64::from(pixel.x) / f64::from(width));
    let imag = complex_rect.y_min()
        + complex_rect.height() * (f64::from(pixel.y) / f64::from(height));

    Ok(Complex { real, imag })
}

/// Inverse of [`pixel_to_complex_coords`]: returns the pixel whose cell contains `point`.
///
/// The maximum edges of the rectangle belong to no pixel and are rejected.
pub fn complex_to_pixel_coords(
    point: Complex,
    width: u32,
    height: u32,
    complex_rect: ComplexRect,
) -> Result<Point, PixelToComplexCoordsError> {
    let outside = PixelToComplexCoordsError::ComplexOutsideRect {
        point,
        complex_rect,
    };

    let fraction_x = (point.real - complex_rect.x_min()) / complex_rect.width();
    let fraction_y = (point.imag - complex_rect.y_min()) / complex_rect.height();

    // also rejects NaN fractions
    if !(0.0..1.0).contains(&fraction_x) || !(0.0..1.0).contains(&fraction_y) {
        return Err(outside);
    }

    let x = ((fraction_x * f64::from(width)).floor() as u32).min(width - 1);
    let y = ((fraction_y * f64::from(height)).floor() as u32).min(height - 1);

    Ok(Point {
        x: x as i32,
        y: y as i32,
    })
}
