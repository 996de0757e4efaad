use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, complex_to_pixel_coords, pixel_to_complex_coords,
};
use std::error::Error;
use std::fmt;

/// Interpolation stops once every bound is within this fraction of the current axis
/// extent of its target.
pub const SETTLE_EPSILON: f64 = 1e-9;

/// Largest grid side; pixel coordinates are `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidRegion(ComplexRectError),
    InvalidDimensions { width: u32, height: u32 },
    PixelOutOfRange { pixel: Point, width: u32, height: u32 },
    PointOutsideViewport { point: Complex },
    InvalidZoomFactor(f64),
    InvalidPanFraction { dx: f64, dy: f64 },
    InvalidSmoothing(f64),
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid viewport region: {}", err),
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "viewport dimensions must lie in 1..={}: {}x{}",
                    MAX_DIMENSION, width, height
                )
            }
            Self::PixelOutOfRange {
                pixel,
                width,
                height,
            } => write!(
                f,
                "pixel (x: {}, y: {}) is outside the {}x{} viewport",
                pixel.x, pixel.y, width, height
            ),
            Self::PointOutsideViewport { point } => write!(
                f,
                "point ({}, {}i) is outside the viewport",
                point.real, point.imag
            ),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be finite and positive: {}", factor)
            }
            Self::InvalidPanFraction { dx, dy } => {
                write!(f, "pan fractions must be finite: ({}, {})", dx, dy)
            }
            Self::InvalidSmoothing(smoothing) => {
                write!(f, "smoothing must lie in (0, 1]: {}", smoothing)
            }
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "viewport dimensions {}x{} do not match {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<PixelToComplexCoordsError> for ViewportError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        match err {
            PixelToComplexCoordsError::PointOutsideGrid {
                point,
                width,
                height,
            } => Self::PixelOutOfRange {
                pixel: point,
                width,
                height,
            },
            PixelToComplexCoordsError::ComplexOutsideRect { point, .. } => {
                Self::PointOutsideViewport { point }
            }
        }
    }
}

/// The region of the complex plane shown on a `width × height` pixel grid.
///
/// Every transform returns a new value; the four bounds of a viewport never change
/// independently of each other.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(region: ComplexRect, width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ViewportError::InvalidDimensions { width, height });
        }

        Ok(Self {
            region,
            width,
            height,
        })
    }

    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        let region = ComplexRect::from_bounds(x_min, x_max, y_min, y_max)?;
        Self::new(region, width, height)
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn step_x(&self) -> f64 {
        self.region.width() / f64::from(self.width)
    }

    #[must_use]
    pub fn step_y(&self) -> f64 {
        self.region.height() / f64::from(self.height)
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height
    }

    #[inline]
    pub fn pixel_to_complex(&self, pixel: Point) -> Result<Complex, ViewportError> {
        Ok(pixel_to_complex_coords(
            pixel,
            self.width,
            self.height,
            self.region,
        )?)
    }

    pub fn complex_to_pixel(&self, point: Complex) -> Result<Point, ViewportError> {
        Ok(complex_to_pixel_coords(
            point,
            self.width,
            self.height,
            self.region,
        )?)
    }

    /// Centres the view on `pixel` and scales both extents by `zoom_factor`.
    ///
    /// Factors in `(0, 1)` zoom in, factors above `1` zoom out.
    pub fn recenter_and_zoom(&self, pixel: Point, zoom_factor: f64) -> Result<Self, ViewportError> {
        validate_zoom_factor(zoom_factor)?;
        let center = self.pixel_to_complex(pixel)?;

        self.scaled_around(center, zoom_factor)
    }

    /// Scales both extents by `zoom_factor` keeping the current centre.
    pub fn zoom_about_center(&self, zoom_factor: f64) -> Result<Self, ViewportError> {
        validate_zoom_factor(zoom_factor)?;

        self.scaled_around(self.region.center(), zoom_factor)
    }

    /// Shifts the view by fractions of its own extents, keeping its size.
    pub fn pan(&self, dx_fraction: f64, dy_fraction: f64) -> Result<Self, ViewportError> {
        if !dx_fraction.is_finite() || !dy_fraction.is_finite() {
            return Err(ViewportError::InvalidPanFraction {
                dx: dx_fraction,
                dy: dy_fraction,
            });
        }

        let dx = dx_fraction * self.region.width();
        let dy = dy_fraction * self.region.height();

        self.with_bounds(
            self.region.x_min() + dx,
            self.region.x_max() + dx,
            self.region.y_min() + dy,
            self.region.y_max() + dy,
        )
    }

    /// Moves every bound a `smoothing` fraction of the way towards `target`.
    ///
    /// Returns `self` unchanged once all four bounds are within [`SETTLE_EPSILON`]
    /// (relative to the current extents) of the target, so callers can compare the
    /// result with the input to decide whether a recompute is needed.
    pub fn interpolate_towards(&self, target: &Self, smoothing: f64) -> Result<Self, ViewportError> {
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(ViewportError::InvalidSmoothing(smoothing));
        }

        if (self.width, self.height) != (target.width, target.height) {
            return Err(ViewportError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (target.width, target.height),
            });
        }

        let from = self.region;
        let to = target.region;
        let tolerance_x = SETTLE_EPSILON * from.width();
        let tolerance_y = SETTLE_EPSILON * from.height();

        let settled = (to.x_min() - from.x_min()).abs() < tolerance_x
            && (to.x_max() - from.x_max()).abs() < tolerance_x
            && (to.y_min() - from.y_min()).abs() < tolerance_y
            && (to.y_max() - from.y_max()).abs() < tolerance_y;

        if settled {
            return Ok(*self);
        }

        // weighted form lands exactly on the target when smoothing is 1
        let lerp = |a: f64, b: f64| a * (1.0 - smoothing) + b * smoothing;

        self.with_bounds(
            lerp(from.x_min(), to.x_min()),
            lerp(from.x_max(), to.x_max()),
            lerp(from.y_min(), to.y_min()),
            lerp(from.y_max(), to.y_max()),
        )
    }

    /// Same pixel grid over a different region.
    pub fn with_region(&self, region: ComplexRect) -> Self {
        Self { region, ..*self }
    }

    fn with_bounds(
        &self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self, ViewportError> {
        let region = ComplexRect::from_bounds(x_min, x_max, y_min, y_max)?;
        Ok(self.with_region(region))
    }

    fn scaled_around(&self, center: Complex, zoom_factor: f64) -> Result<Self, ViewportError> {
        let region = ComplexRect::centered_on(
            center,
            self.region.width() * zoom_factor,
            self.region.height() * zoom_factor,
        )?;

        Ok(self.with_region(region))
    }
}

fn validate_zoom_factor(zoom_factor: f64) -> Result<(), ViewportError> {
    if zoom_factor.is_finite() && zoom_factor > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidZoomFactor(zoom_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn default_viewport() -> Viewport {
        Viewport::from_bounds(-2.5, 1.5, -1.5, 1.5, 800, 600).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let region = default_viewport().region();

        assert_eq!(
            Viewport::new(region, 0, 600),
            Err(ViewportError::InvalidDimensions {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            Viewport::new(region, 800, 0),
            Err(ViewportError::InvalidDimensions {
                width: 800,
                height: 0
            })
        );
    }

    #[test]
    fn test_new_rejects_dimensions_beyond_pixel_range() {
        let region = default_viewport().region();

        assert_eq!(
            Viewport::new(region, MAX_DIMENSION + 1, 600),
            Err(ViewportError::InvalidDimensions {
                width: MAX_DIMENSION + 1,
                height: 600
            })
        );
        assert!(Viewport::new(region, 800, u32::MAX).is_err());
    }

    #[test]
    fn test_from_bounds_rejects_overflowing_extent() {
        let result = Viewport::from_bounds(-1e308, 1e308, -1.0, 1.0, 4, 4);

        assert!(matches!(
            result,
            Err(ViewportError::InvalidRegion(
                ComplexRectError::NonFiniteExtent { .. }
            ))
        ));
    }

    #[test]
    fn test_from_bounds_rejects_inverted_bounds() {
        let result = Viewport::from_bounds(1.0, -1.0, -1.0, 1.0, 10, 10);

        assert!(matches!(result, Err(ViewportError::InvalidRegion(_))));
    }

    #[test]
    fn test_steps() {
        let viewport = default_viewport();

        assert_eq!(viewport.step_x(), 4.0 / 800.0);
        assert_eq!(viewport.step_y(), 3.0 / 600.0);
        assert_eq!(viewport.pixel_count(), 480_000);
    }

    #[test]
    fn test_pixel_to_complex_origin_pixel_is_minimum_corner() {
        let viewport = default_viewport();

        let c = viewport.pixel_to_complex(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(c, Complex::new(-2.5, -1.5));
    }

    #[test]
    fn test_pixel_to_complex_last_pixel_within_one_step_of_maximum_corner() {
        let viewport = default_viewport();

        let c = viewport.pixel_to_complex(Point { x: 799, y: 599 }).unwrap();

        assert!((1.5 - c.real) <= viewport.step_x() + EPSILON);
        assert!((1.5 - c.imag) <= viewport.step_y() + EPSILON);
        assert!(c.real < 1.5 && c.imag < 1.5);
    }

    #[test]
    fn test_pixel_to_complex_out_of_range_is_an_error() {
        let viewport = default_viewport();

        assert_eq!(
            viewport.pixel_to_complex(Point { x: 800, y: 0 }),
            Err(ViewportError::PixelOutOfRange {
                pixel: Point { x: 800, y: 0 },
                width: 800,
                height: 600
            })
        );
        assert!(viewport.pixel_to_complex(Point { x: 0, y: -1 }).is_err());
    }

    #[test]
    fn test_complex_to_pixel_finds_pixel_of_plane_origin() {
        let viewport = default_viewport();

        assert_eq!(
            viewport.complex_to_pixel(Complex::ZERO),
            Ok(Point { x: 500, y: 300 })
        );
        assert!(matches!(
            viewport.complex_to_pixel(Complex::new(3.0, 0.0)),
            Err(ViewportError::PointOutsideViewport { .. })
        ));
    }

    #[test]
    fn test_recenter_and_zoom_centres_on_old_pixel_and_scales_area() {
        let viewport = default_viewport();
        let pixel = Point { x: 200, y: 150 };
        let old_center = viewport.pixel_to_complex(pixel).unwrap();

        let zoomed = viewport.recenter_and_zoom(pixel, 0.5).unwrap();

        assert_approx_eq(zoomed.region().center().real, old_center.real);
        assert_approx_eq(zoomed.region().center().imag, old_center.imag);
        assert_approx_eq(zoomed.region().area(), viewport.region().area() * 0.25);
        assert_eq!((zoomed.width(), zoomed.height()), (800, 600));
    }

    #[test]
    fn test_recenter_and_zoom_matches_click_formula() {
        let viewport = default_viewport();

        let zoomed = viewport.recenter_and_zoom(Point { x: 400, y: 300 }, 0.5).unwrap();

        // centre (-0.5, 0.0), half extents (1.0, 0.75)
        assert_approx_eq(zoomed.region().x_min(), -1.5);
        assert_approx_eq(zoomed.region().x_max(), 0.5);
        assert_approx_eq(zoomed.region().y_min(), -0.75);
        assert_approx_eq(zoomed.region().y_max(), 0.75);
    }

    #[test]
    fn test_zoom_factor_above_one_zooms_out() {
        let viewport = default_viewport();

        let zoomed = viewport.recenter_and_zoom(Point { x: 500, y: 300 }, 2.0).unwrap();

        assert_approx_eq(zoomed.region().width(), 8.0);
        assert_approx_eq(zoomed.region().height(), 6.0);
    }

    #[test]
    fn test_recenter_and_zoom_rejects_bad_inputs() {
        let viewport = default_viewport();

        for factor in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                viewport.recenter_and_zoom(Point { x: 1, y: 1 }, factor),
                Err(ViewportError::InvalidZoomFactor(_))
            ));
        }
        assert!(matches!(
            viewport.recenter_and_zoom(Point { x: 900, y: 1 }, 0.5),
            Err(ViewportError::PixelOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zoom_about_center_keeps_center() {
        let viewport = default_viewport();

        let zoomed = viewport.zoom_about_center(0.8).unwrap();

        assert_approx_eq(zoomed.region().center().real, viewport.region().center().real);
        assert_approx_eq(zoomed.region().center().imag, viewport.region().center().imag);
        assert_approx_eq(zoomed.region().width(), 3.2);
        assert_approx_eq(zoomed.region().height(), 2.4);
    }

    #[test]
    fn test_zoom_below_double_precision_fails_fast() {
        let viewport = Viewport::from_bounds(1.0, 1.0 + 1e-15, 1.0, 1.0 + 1e-15, 10, 10).unwrap();

        assert!(matches!(
            viewport.zoom_about_center(1e-3),
            Err(ViewportError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_pan_shifts_bounds_and_preserves_size() {
        let viewport = default_viewport();

        let panned = viewport.pan(0.25, -0.5).unwrap();

        assert_approx_eq(panned.region().x_min(), -1.5);
        assert_approx_eq(panned.region().x_max(), 2.5);
        assert_approx_eq(panned.region().y_min(), -3.0);
        assert_approx_eq(panned.region().y_max(), 0.0);
        assert_approx_eq(panned.region().width(), viewport.region().width());
        assert_approx_eq(panned.region().height(), viewport.region().height());
    }

    #[test]
    fn test_pan_rejects_non_finite_fractions() {
        assert!(matches!(
            default_viewport().pan(f64::NAN, 0.0),
            Err(ViewportError::InvalidPanFraction { .. })
        ));
    }

    #[test]
    fn test_interpolate_with_full_smoothing_reaches_target() {
        let viewport = default_viewport();
        let target = viewport.recenter_and_zoom(Point { x: 100, y: 100 }, 0.5).unwrap();

        assert_eq!(viewport.interpolate_towards(&target, 1.0), Ok(target));
    }

    #[test]
    fn test_interpolate_moves_part_way() {
        let viewport = default_viewport();
        let target = viewport.pan(1.0, 0.0).unwrap();

        let step = viewport.interpolate_towards(&target, 0.25).unwrap();

        assert_approx_eq(step.region().x_min(), -1.5);
        assert_approx_eq(step.region().x_max(), 2.5);
        assert_eq!(step.region().y_min(), -1.5);
    }

    #[test]
    fn test_interpolate_converges_and_settles() {
        let mut viewport = default_viewport();
        let target = viewport.recenter_and_zoom(Point { x: 600, y: 450 }, 0.1).unwrap();

        let mut steps = 0;
        loop {
            let next = viewport.interpolate_towards(&target, 0.3).unwrap();
            if next == viewport {
                break;
            }
            viewport = next;
            steps += 1;
            assert!(steps < 1_000, "interpolation did not settle");
        }

        assert!((viewport.region().x_min() - target.region().x_min()).abs() < 1e-8);
        assert_eq!(viewport.interpolate_towards(&target, 0.3), Ok(viewport));
    }

    #[test]
    fn test_interpolate_rejects_bad_smoothing_and_mismatched_grids() {
        let viewport = default_viewport();
        let other = Viewport::new(viewport.region(), 10, 10).unwrap();

        for smoothing in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                viewport.interpolate_towards(&viewport, smoothing),
                Err(ViewportError::InvalidSmoothing(_))
            ));
        }
        assert!(matches!(
            viewport.interpolate_towards(&other, 0.5),
            Err(ViewportError::DimensionMismatch { .. })
        ));
    }
}
