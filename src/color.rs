//! Types shared by all the color models: the [`Component`] scalar, the
//! [`Space`] tag and the traits that tie a model to the canonical [`Rgb`]
//! pivot.

use std::fmt;

use crate::Rgb;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// The color models a color can be specified or displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Six hexadecimal digits, two per RGB channel.
    Hex = 0,
    /// Red, green and blue channels in the range 0 to 255.
    Rgb = 1,
    /// RGB with an additional alpha channel in the range 0 to 1.
    Rgba = 2,
    /// Hue, saturation and lightness.
    Hsl = 3,
    /// Hue, saturation and brightness (also known as HSV).
    Hsb = 4,
    /// Cyan, magenta, yellow and key (black).
    Cmyk = 5,
}

impl Space {
    /// Every space, in display order.
    pub const ALL: [Space; 6] = [
        Space::Hex,
        Space::Rgb,
        Space::Rgba,
        Space::Hsl,
        Space::Hsb,
        Space::Cmyk,
    ];

    /// A short upper case label for the space.
    pub fn label(&self) -> &'static str {
        match self {
            Space::Hex => "HEX",
            Space::Rgb => "RGB",
            Space::Rgba => "RGBA",
            Space::Hsl => "HSL",
            Space::Hsb => "HSB",
            Space::Cmyk => "CMYK",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Implemented by types that represent a color in a specific [`Space`].
pub trait HasSpace {
    /// The space the type represents.
    const SPACE: Space;
}

/// A trait implemented for color models that can be converted to and from
/// the canonical [`Rgb`] representation.
pub trait Model: HasSpace + Sized {
    /// Derive the model from a canonical RGB color.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert the model to a canonical RGB color.
    fn to_rgb(&self) -> Rgb;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_display() {
        for space in Space::ALL {
            assert_eq!(space.to_string(), space.label());
        }
        assert_eq!(Space::Cmyk.to_string(), "CMYK");
    }

    #[test]
    fn spaces_are_ordered_by_discriminant() {
        for (i, space) in Space::ALL.iter().enumerate() {
            assert_eq!(*space as usize, i);
        }
    }
}
