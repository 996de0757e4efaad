use crate::core::data::complex_rect::ComplexRect;
use crate::core::navigation::status::NavigationWarning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Below this extent neighbouring pixels stop resolving to distinct doubles.
    pub min_region_extent: f64,
    pub max_region_extent: f64,
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            min_region_extent: 1e-13,
            max_region_extent: 64.0,
        }
    }
}

impl NavigationLimits {
    pub(crate) fn check(&self, region: &ComplexRect) -> Result<(), NavigationWarning> {
        let smallest = region.width().min(region.height());
        let largest = region.width().max(region.height());

        if smallest < self.min_region_extent {
            return Err(NavigationWarning::ExtentAtMinimum);
        }

        if largest > self.max_region_extent {
            return Err(NavigationWarning::ExtentAtMaximum);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = NavigationLimits::default();

        assert!(limits.min_region_extent > 0.0);
        assert!(limits.max_region_extent.is_finite());
        assert!(limits.max_region_extent >= limits.min_region_extent);
    }

    #[test]
    fn check_accepts_home_region() {
        let region = ComplexRect::from_bounds(-2.5, 1.5, -1.5, 1.5).unwrap();

        assert_eq!(NavigationLimits::default().check(&region), Ok(()));
    }

    #[test]
    fn check_flags_either_axis() {
        let limits = NavigationLimits::default();
        let thin = ComplexRect::from_bounds(0.0, 1.0, 0.0, 1e-14).unwrap();
        let wide = ComplexRect::from_bounds(-50.0, 50.0, -1.0, 1.0).unwrap();

        assert_eq!(limits.check(&thin), Err(NavigationWarning::ExtentAtMinimum));
        assert_eq!(limits.check(&wide), Err(NavigationWarning::ExtentAtMaximum));
    }
}
