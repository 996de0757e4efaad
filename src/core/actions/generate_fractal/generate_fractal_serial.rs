use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel of a `width × height` grid on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let mut results = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct IndexAlgorithm {
        width: i32,
    }

    impl FractalAlgorithm for IndexAlgorithm {
        type Success = i32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.y * self.width + pixel.x)
        }
    }

    struct FailOnPixel {
        fail_at: Point,
    }

    impl FractalAlgorithm for FailOnPixel {
        type Success = ();
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == self.fail_at {
                Err(StubError {})
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_serial_visits_pixels_in_row_major_order() {
        let results = generate_fractal_serial(4, 3, &IndexAlgorithm { width: 4 }).unwrap();

        assert_eq!(results, (0..12).collect::<Vec<i32>>());
    }

    #[test]
    fn test_serial_single_pixel_grid() {
        let results = generate_fractal_serial(1, 1, &IndexAlgorithm { width: 1 }).unwrap();

        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let algorithm = FailOnPixel {
            fail_at: Point { x: 2, y: 1 },
        };

        assert_eq!(generate_fractal_serial(4, 3, &algorithm), Err(StubError {}));
    }
}
