//! Text representations of the color models. These are the strings that get
//! copied to the clipboard and that [`parse_color`](crate::parse_color)
//! reads back.

use std::fmt;

use crate::{Cmyk, Hsb, Hsl, Rgb, Rgba};

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// The alpha is always written with two decimals, `rgba(255, 0, 0, 0.50)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.2})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsb({}, {}%, {}%)",
            self.hue, self.saturation, self.brightness
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_alpha_has_two_decimals() {
        assert_eq!(Rgba::new(255, 0, 0, 0.5).to_string(), "rgba(255, 0, 0, 0.50)");
        assert_eq!(Rgba::new(0, 123, 255, 1.0).to_string(), "rgba(0, 123, 255, 1.00)");
        assert_eq!(Rgba::new(1, 2, 3, 0.0).to_string(), "rgba(1, 2, 3, 0.00)");
    }

    #[test]
    fn whole_numbers_have_no_decimals() {
        assert_eq!(Rgb::new(0, 123, 255).to_string(), "rgb(0, 123, 255)");
        assert_eq!(Hsl::new(211.0, 100.0, 50.0).to_string(), "hsl(211, 100%, 50%)");
        assert_eq!(Hsb::new(25.0, 86.0, 82.0).to_string(), "hsb(25, 86%, 82%)");
        assert_eq!(
            Cmyk::new(100.0, 52.0, 0.0, 0.0).to_string(),
            "cmyk(100%, 52%, 0%, 0%)"
        );
    }

    #[test]
    fn fractional_components_are_kept() {
        assert_eq!(Hsl::new(12.5, 0.0, 0.0).to_string(), "hsl(12.5, 0%, 0%)");
    }
}
