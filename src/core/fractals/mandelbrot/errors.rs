use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterations,
    InvalidEscapeThreshold(f64),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeThreshold(threshold) => {
                write!(
                    f,
                    "Escape threshold must be finite and positive, got {}",
                    threshold
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
