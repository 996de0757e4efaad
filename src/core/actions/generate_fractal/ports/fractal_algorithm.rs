use crate::core::data::point::Point;
use std::error::Error;

/// A per-pixel computation with no shared mutable state, so generators are free to
/// evaluate pixels in any order and on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
