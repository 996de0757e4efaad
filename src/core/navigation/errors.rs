use crate::core::data::viewport::ViewportError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationError {
    InvalidZoomFactor { name: &'static str, value: f64 },
    InvalidPanFraction(f64),
    InvalidSmoothing(f64),
    InvalidLimits { min: f64, max: f64 },
    Viewport(ViewportError),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor { name, value } => {
                write!(f, "{} must lie in (0, 1): {}", name, value)
            }
            Self::InvalidPanFraction(value) => {
                write!(f, "pan fraction must be finite and positive: {}", value)
            }
            Self::InvalidSmoothing(value) => {
                write!(f, "smoothing must lie in (0, 1]: {}", value)
            }
            Self::InvalidLimits { min, max } => write!(
                f,
                "region extent limits must satisfy 0 < min <= max < inf: [{}, {}]",
                min, max
            ),
            Self::Viewport(err) => write!(f, "{}", err),
        }
    }
}

impl Error for NavigationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for NavigationError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
