use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
use crate::core::data::colour::Colour;
use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::polynomial::polynomial_colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use std::error::Error;
use std::fmt;

/// How the per-pixel escape counts are scheduled. Both produce identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldExecution {
    Sequential,
    #[default]
    Parallel,
}

#[derive(Debug)]
pub enum FieldError {
    Cancelled(Cancelled),
    Params(MandelbrotError),
    Viewport(ViewportError),
    Field(EscapeFieldError),
    ColourMap(MandelbrotColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(err) => write!(f, "{}", err),
            Self::Params(err) => write!(f, "invalid mandelbrot parameters: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Field(err) => write!(f, "escape field error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Field(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for FieldError {
    fn from(err: MandelbrotError) -> Self {
        Self::Params(err)
    }
}

impl From<ViewportError> for FieldError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<EscapeFieldError> for FieldError {
    fn from(err: EscapeFieldError) -> Self {
        Self::Field(err)
    }
}

impl From<GenerateFractalError<ViewportError>> for FieldError {
    fn from(err: GenerateFractalError<ViewportError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Viewport(e),
        }
    }
}

impl From<GeneratePixelBufferError<MandelbrotColourMapError>> for FieldError {
    fn from(err: GeneratePixelBufferError<MandelbrotColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::ColourMap(e) => Self::ColourMap(e),
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Escape counts for every pixel of `viewport`, computed in parallel with the default
/// escape threshold.
pub fn compute_field(viewport: &Viewport, max_iterations: u32) -> Result<EscapeField, FieldError> {
    let params = MandelbrotParams::with_max_iterations(max_iterations)?;

    compute_field_with(viewport, params, FieldExecution::Parallel)
}

pub fn compute_field_with(
    viewport: &Viewport,
    params: MandelbrotParams,
    execution: FieldExecution,
) -> Result<EscapeField, FieldError> {
    let algorithm = MandelbrotAlgorithm::new(*viewport, params);
    let (width, height) = (viewport.width(), viewport.height());

    let counts = match execution {
        FieldExecution::Sequential => generate_fractal_serial(width, height, &algorithm)?,
        FieldExecution::Parallel => generate_fractal_parallel_rayon(width, height, &algorithm)?,
    };

    Ok(EscapeField::from_counts(
        width,
        height,
        params.max_iterations(),
        counts,
    )?)
}

/// Parallel field computation that gives up with [`FieldError::Cancelled`] once
/// `cancel` fires.
pub fn compute_field_cancelable<C: CancelToken>(
    viewport: &Viewport,
    params: MandelbrotParams,
    cancel: &C,
) -> Result<EscapeField, FieldError> {
    let algorithm = MandelbrotAlgorithm::new(*viewport, params);
    let (width, height) = (viewport.width(), viewport.height());

    let counts = generate_fractal_parallel_rayon_cancelable(width, height, &algorithm, cancel)?;

    Ok(EscapeField::from_counts(
        width,
        height,
        params.max_iterations(),
        counts,
    )?)
}

/// Default palette colour for one escape count. Black iff `iterations == max_iterations`.
#[inline]
#[must_use]
pub fn colour_of(iterations: u32, max_iterations: u32) -> Colour {
    polynomial_colour(iterations, max_iterations)
}

pub fn colour_field(
    field: &EscapeField,
    colour_map: &dyn MandelbrotColourMap,
) -> Result<PixelBuffer, FieldError> {
    Ok(generate_pixel_buffer(
        field.counts(),
        field.width(),
        field.height(),
        colour_map,
    )?)
}

/// Computes and colours one frame with the default palette.
pub fn render_frame(viewport: &Viewport, max_iterations: u32) -> Result<PixelBuffer, FieldError> {
    let params = MandelbrotParams::with_max_iterations(max_iterations)?;

    render_frame_with(
        viewport,
        params,
        MandelbrotColourMapKinds::default(),
        FieldExecution::Parallel,
    )
}

pub fn render_frame_with(
    viewport: &Viewport,
    params: MandelbrotParams,
    colour_map_kind: MandelbrotColourMapKinds,
    execution: FieldExecution,
) -> Result<PixelBuffer, FieldError> {
    let field = compute_field_with(viewport, params, execution)?;
    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, params.max_iterations());

    colour_field(&field, colour_map.as_ref())
}

pub fn render_frame_cancelable<C: CancelToken>(
    viewport: &Viewport,
    params: MandelbrotParams,
    colour_map_kind: MandelbrotColourMapKinds,
    cancel: &C,
) -> Result<PixelBuffer, FieldError> {
    let field = compute_field_cancelable(viewport, params, cancel)?;
    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, params.max_iterations());

    Ok(generate_pixel_buffer_cancelable(
        field.counts(),
        field.width(),
        field.height(),
        colour_map.as_ref(),
        cancel,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::point::Point;

    fn home(width: u32, height: u32) -> Viewport {
        Viewport::from_bounds(-2.5, 1.5, -1.5, 1.5, width, height).unwrap()
    }

    #[test]
    fn compute_field_matches_viewport_dimensions() {
        let field = compute_field(&home(40, 30), 50).unwrap();

        assert_eq!(field.width(), 40);
        assert_eq!(field.height(), 30);
        assert_eq!(field.counts().len(), 1200);
        assert_eq!(field.max_iterations(), 50);
    }

    #[test]
    fn compute_field_is_deterministic() {
        let viewport = home(64, 48);

        let first = compute_field(&viewport, 80).unwrap();
        let second = compute_field(&viewport, 80).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn sequential_and_parallel_fields_are_identical() {
        let viewports = [
            home(97, 61),
            Viewport::from_bounds(-0.75, -0.73, 0.1, 0.12, 33, 45).unwrap(),
            Viewport::from_bounds(-0.1, 0.1, -0.1, 0.1, 1, 1).unwrap(),
        ];

        for viewport in viewports {
            let params = MandelbrotParams::with_max_iterations(200).unwrap();
            let sequential = compute_field_with(&viewport, params, FieldExecution::Sequential).unwrap();
            let parallel = compute_field_with(&viewport, params, FieldExecution::Parallel).unwrap();

            assert_eq!(sequential, parallel);
        }
    }

    #[test]
    fn origin_never_escapes_in_any_containing_viewport() {
        // pixel (w/2, h/2) lands exactly on zero for these symmetric regions
        for (half_extent, max) in [(2.0, 100), (0.5, 300), (1e-6, 1000)] {
            let viewport =
                Viewport::from_bounds(-half_extent, half_extent, -half_extent, half_extent, 8, 8)
                    .unwrap();
            let field = compute_field(&viewport, max).unwrap();

            assert_eq!(field.get(Point { x: 4, y: 4 }), Some(max));
        }
    }

    #[test]
    fn two_plus_two_i_escapes_immediately() {
        let viewport = Viewport::from_bounds(2.0, 3.0, 2.0, 3.0, 4, 4).unwrap();
        let field = compute_field(&viewport, 100).unwrap();

        assert_eq!(field.get(Point { x: 0, y: 0 }), Some(0));
    }

    #[test]
    fn default_view_scenario() {
        let viewport = home(800, 600);
        let field = compute_field(&viewport, 100).unwrap();

        assert_eq!(field.get(Point { x: 500, y: 300 }), Some(100));
        assert!(field.get(Point { x: 799, y: 599 }).unwrap() <= 2);
        assert!(field.counts().iter().all(|&count| count <= 100));
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        assert!(matches!(
            compute_field(&home(4, 4), 0),
            Err(FieldError::Params(MandelbrotError::ZeroMaxIterations))
        ));
        assert!(matches!(
            render_frame(&home(4, 4), 0),
            Err(FieldError::Params(MandelbrotError::ZeroMaxIterations))
        ));
    }

    #[test]
    fn colour_of_is_black_iff_bounded() {
        for iterations in 0..100 {
            assert!(!colour_of(iterations, 100).is_black());
        }
        assert_eq!(colour_of(100, 100), Colour::BLACK);
    }

    #[test]
    fn render_frame_colours_bounded_pixels_black() {
        let viewport = home(80, 60);
        let field = compute_field(&viewport, 100).unwrap();
        let frame = render_frame(&viewport, 100).unwrap();

        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 60);
        assert_eq!(frame.buffer_size(), 80 * 60 * 3);

        for (colour, &count) in frame.colours().zip(field.counts()) {
            assert_eq!(colour.is_black(), count == 100);
            assert_eq!(colour, colour_of(count, 100));
        }
    }

    #[test]
    fn render_frame_with_greyscale_differs_from_default() {
        let viewport = home(32, 24);
        let params = MandelbrotParams::default();

        let polynomial = render_frame(&viewport, 100).unwrap();
        let greyscale = render_frame_with(
            &viewport,
            params,
            MandelbrotColourMapKinds::Greyscale,
            FieldExecution::Sequential,
        )
        .unwrap();

        assert_ne!(polynomial, greyscale);
        assert!(greyscale.colours().all(|c| c.r == c.g && c.g == c.b));
    }

    #[test]
    fn cancelable_render_matches_render_when_never_cancelled() {
        let viewport = home(50, 40);
        let params = MandelbrotParams::default();

        let frame = render_frame_cancelable(
            &viewport,
            params,
            MandelbrotColourMapKinds::default(),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(frame, render_frame(&viewport, 100).unwrap());
    }

    #[test]
    fn cancelled_render_reports_cancellation() {
        let result = render_frame_cancelable(
            &home(50, 40),
            MandelbrotParams::default(),
            MandelbrotColourMapKinds::default(),
            &|| true,
        );

        assert!(matches!(result, Err(FieldError::Cancelled(_))));
    }
}
