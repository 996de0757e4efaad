use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeFieldError {
    InvalidDimensions { width: u32, height: u32 },
    BoundsMismatch { expected_len: usize, actual_len: usize },
    CountExceedsMax { count: u32, max_iterations: u32 },
}

impl fmt::Display for EscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "escape field dimensions must be positive: {}x{}", width, height)
            }
            Self::BoundsMismatch {
                expected_len,
                actual_len,
            } => write!(
                f,
                "escape field expects {} counts but got {}",
                expected_len, actual_len
            ),
            Self::CountExceedsMax {
                count,
                max_iterations,
            } => write!(
                f,
                "escape count {} exceeds maximum iterations {}",
                count, max_iterations
            ),
        }
    }
}

impl Error for EscapeFieldError {}

/// Escape iteration counts for every pixel of one frame, row-major.
///
/// A count equal to `max_iterations` marks a pixel that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    width: u32,
    height: u32,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl EscapeField {
    pub fn from_counts(
        width: u32,
        height: u32,
        max_iterations: u32,
        counts: Vec<u32>,
    ) -> Result<Self, EscapeFieldError> {
        if width == 0 || height == 0 {
            return Err(EscapeFieldError::InvalidDimensions { width, height });
        }

        let expected_len = width as usize * height as usize;

        if counts.len() != expected_len {
            return Err(EscapeFieldError::BoundsMismatch {
                expected_len,
                actual_len: counts.len(),
            });
        }

        if let Some(&count) = counts.iter().find(|&&count| count > max_iterations) {
            return Err(EscapeFieldError::CountExceedsMax {
                count,
                max_iterations,
            });
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            counts,
        })
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u32> {
        if pixel.x < 0 || pixel.y < 0 {
            return None;
        }

        let (x, y) = (pixel.x as u32, pixel.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }

        self.counts
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.width as usize)
    }

    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&&count| count == self.max_iterations)
            .count()
    }
}
