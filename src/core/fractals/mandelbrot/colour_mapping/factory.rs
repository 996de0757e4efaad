use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{greyscale::MandelbrotGreyscale, polynomial::MandelbrotPolynomialGradient},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::Polynomial => {
            Box::new(MandelbrotPolynomialGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::Greyscale => Box::new(MandelbrotGreyscale::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 256);
            assert_eq!(map.display_name(), kind.display_name());
            assert_eq!(kind.to_string(), kind.display_name());
        }
    }

    #[test]
    fn every_kind_keeps_black_for_bounded_points_only() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 64);

            assert!(map.map(64).unwrap().is_black());
            for iterations in 0..64 {
                assert!(!map.map(iterations).unwrap().is_black(), "{kind} at {iterations}");
            }
            assert!(map.map(65).is_err());
        }
    }
}
