use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFiniteBounds,
    NonFiniteExtent { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteBounds => write!(f, "complex rect bounds must be finite"),
            Self::NonFiniteExtent { width, height } => {
                write!(f, "complex rect extent overflows: {}x{}", width, height)
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned rectangle of the complex plane. `top_left` holds the minimum real and
/// imaginary bounds, `bottom_right` the maximum ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ComplexRectError::NonFiniteBounds);
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        if !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::NonFiniteExtent { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(x_min, y_min), Complex::new(x_max, y_max))
    }

    /// Rectangle of the given extents centred on `center`.
    pub fn centered_on(center: Complex, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Self::from_bounds(
            center.real - half_width,
            center.real + half_width,
            center.imag - half_height,
            center.imag + half_height,
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.top_left.real
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.bottom_right.real
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.top_left.imag
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.bottom_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.top_left.real + self.bottom_right.real) / 2.0,
            (self.top_left.imag + self.bottom_right.imag) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex::new(-2.5, -1.5);
        let bottom_right = Complex::new(1.5, 1.5);

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.x_min(), -2.5);
        assert_eq!(rect.x_max(), 1.5);
        assert_eq!(rect.y_min(), -1.5);
        assert_eq!(rect.y_max(), 1.5);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        assert_eq!(
            ComplexRect::from_bounds(0.0, 0.0, 0.0, 100.0),
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, -100.0, 0.0, 10.0),
            Err(ComplexRectError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, 100.0, 0.0, 0.0),
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(2.0, -2.0, 2.0, -2.0),
            Err(ComplexRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_and_infinite_bounds() {
        assert_eq!(
            ComplexRect::from_bounds(f64::NAN, 1.0, -1.0, 1.0),
            Err(ComplexRectError::NonFiniteBounds)
        );
        assert_eq!(
            ComplexRect::from_bounds(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(ComplexRectError::NonFiniteBounds)
        );
    }

    #[test]
    fn test_complex_rect_rejects_overflowing_extent() {
        assert_eq!(
            ComplexRect::from_bounds(-1e308, 1e308, -1.0, 1.0),
            Err(ComplexRectError::NonFiniteExtent {
                width: f64::INFINITY,
                height: 2.0
            })
        );
        assert!(matches!(
            ComplexRect::from_bounds(-1.0, 1.0, -f64::MAX, f64::MAX),
            Err(ComplexRectError::NonFiniteExtent { .. })
        ));
    }

    #[test]
    fn test_complex_rect_dimensions_and_area() {
        let rect = ComplexRect::from_bounds(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.area(), 7.0);
        assert_eq!(rect.center(), Complex::new(-0.75, 0.0));
    }

    #[test]
    fn test_centered_on_builds_symmetric_rect() {
        let rect = ComplexRect::centered_on(Complex::new(1.0, -1.0), 4.0, 2.0).unwrap();

        assert_eq!(rect.x_min(), -1.0);
        assert_eq!(rect.x_max(), 3.0);
        assert_eq!(rect.y_min(), -2.0);
        assert_eq!(rect.y_max(), 0.0);
        assert_eq!(rect.center(), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect = ComplexRect::from_bounds(-10.0, 100.0, -5.0, 200.0).unwrap();

        assert!(rect.contains_point(Complex::new(50.0, 50.0)));
        assert!(rect.contains_point(Complex::new(-10.0, 0.0)));
        assert!(rect.contains_point(Complex::new(100.0, 200.0)));
        assert!(!rect.contains_point(Complex::new(101.0, 50.0)));
        assert!(!rect.contains_point(Complex::new(-11.0, 50.0)));
        assert!(!rect.contains_point(Complex::new(50.0, -6.0)));
        assert!(!rect.contains_point(Complex::new(50.0, 201.0)));
    }
}
