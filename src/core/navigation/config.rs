use crate::core::navigation::errors::NavigationError;
use crate::core::navigation::limits::NavigationLimits;

pub const DEFAULT_CLICK_ZOOM_FACTOR: f64 = 0.5;
pub const DEFAULT_KEY_ZOOM_FACTOR: f64 = 0.8;
pub const DEFAULT_PAN_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationConfig {
    pub click_zoom_factor: f64,
    /// Applied as-is for zoom in and inverted for zoom out.
    pub key_zoom_factor: f64,
    pub pan_fraction: f64,
    /// `None` jumps straight to every new view.
    pub smoothing: Option<f64>,
    pub limits: NavigationLimits,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            click_zoom_factor: DEFAULT_CLICK_ZOOM_FACTOR,
            key_zoom_factor: DEFAULT_KEY_ZOOM_FACTOR,
            pan_fraction: DEFAULT_PAN_FRACTION,
            smoothing: None,
            limits: NavigationLimits::default(),
        }
    }
}

fn is_unit_open(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

pub(crate) fn validate_smoothing(smoothing: Option<f64>) -> Result<(), NavigationError> {
    match smoothing {
        Some(value) if !(value > 0.0 && value <= 1.0) => Err(NavigationError::InvalidSmoothing(value)),
        _ => Ok(()),
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<(), NavigationError> {
        if !is_unit_open(self.click_zoom_factor) {
            return Err(NavigationError::InvalidZoomFactor {
                name: "click zoom factor",
                value: self.click_zoom_factor,
            });
        }

        if !is_unit_open(self.key_zoom_factor) {
            return Err(NavigationError::InvalidZoomFactor {
                name: "key zoom factor",
                value: self.key_zoom_factor,
            });
        }

        if !(self.pan_fraction.is_finite() && self.pan_fraction > 0.0) {
            return Err(NavigationError::InvalidPanFraction(self.pan_fraction));
        }

        validate_smoothing(self.smoothing)?;

        let NavigationLimits {
            min_region_extent: min,
            max_region_extent: max,
        } = self.limits;
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(NavigationError::InvalidLimits { min, max });
        }

        Ok(())
    }
}
