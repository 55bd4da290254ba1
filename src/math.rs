//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Clamp `value` into `min..=max`. NaN is mapped to `min` and a negative
/// zero to a positive one.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max) + T::zero()
    }
}

/// Wrap a hue in degrees into `0..360`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue % 360.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Map a normalized channel value to the range 0 to 255, rounding to the
/// nearest integer.
pub fn to_channel(value: Component) -> u8 {
    (clamp(value, 0.0, 1.0) * 255.0).round() as u8
}

/// Round a channel value in the range 0 to 255 and clamp it into a `u8`.
pub fn clamp_channel(value: Component) -> u8 {
    clamp(value.round(), 0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_nan_and_bounds() {
        assert_eq!(clamp(Component::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert!(clamp(-0.0 as Component, 0.0, 360.0).is_sign_positive());
        assert!(clamp(-0.0 as Component, -1.0, 1.0).is_sign_positive());
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
    }

    #[test]
    fn channels_round_to_nearest() {
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(to_channel(1.2), 255);
        assert_eq!(clamp_channel(400.0), 255);
        assert_eq!(clamp_channel(-5.0), 0);
        assert_eq!(clamp_channel(12.4), 12);
    }
}
