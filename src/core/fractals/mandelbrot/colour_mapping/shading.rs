use crate::core::data::colour::Colour;

/// Scales a unit intensity to a channel byte, clamping to `[0, 255]` and truncating.
#[inline]
pub(crate) fn channel(intensity: f64) -> u8 {
    (intensity * 255.0).clamp(0.0, 255.0) as u8
}

/// Pure black is reserved for points that never escaped.
#[inline]
pub(crate) fn escaped(colour: Colour) -> Colour {
    if colour.is_black() {
        Colour { r: 1, g: 1, b: 1 }
    } else {
        colour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_clamps_and_truncates() {
        assert_eq!(channel(-0.5), 0);
        assert_eq!(channel(0.0), 0);
        assert_eq!(channel(0.5), 127);
        assert_eq!(channel(1.0), 255);
        assert_eq!(channel(3.0), 255);
        assert_eq!(channel(f64::NAN), 0);
    }

    #[test]
    fn escaped_lifts_only_black() {
        assert_eq!(escaped(Colour::BLACK), Colour { r: 1, g: 1, b: 1 });
        assert_eq!(
            escaped(Colour { r: 0, g: 0, b: 7 }),
            Colour { r: 0, g: 0, b: 7 }
        );
    }
}
