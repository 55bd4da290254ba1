//! Model a color with red, green and blue channels. [`Rgb`] is the canonical
//! representation every other model converts through.

use crate::{
    color::{Component, HasSpace, Model, Space},
    math::{clamp, clamp_channel, to_channel},
};

/// A color specified with 8-bit red, green and blue channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a new color from arbitrary numeric input. Each channel is
    /// rounded and clamped into the range 0 to 255.
    pub fn clamped(red: Component, green: Component, blue: Component) -> Self {
        Self::new(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
        )
    }

    /// Return a copy with the red channel set to `value`, clamped.
    pub fn with_red(&self, value: Component) -> Self {
        Self {
            red: clamp_channel(value),
            ..*self
        }
    }

    /// Return a copy with the green channel set to `value`, clamped.
    pub fn with_green(&self, value: Component) -> Self {
        Self {
            green: clamp_channel(value),
            ..*self
        }
    }

    /// Return a copy with the blue channel set to `value`, clamped.
    pub fn with_blue(&self, value: Component) -> Self {
        Self {
            blue: clamp_channel(value),
            ..*self
        }
    }

    /// Add an alpha channel to this color.
    pub fn with_alpha(&self, alpha: Component) -> Rgba {
        Rgba::new(self.red, self.green, self.blue, clamp(alpha, 0.0, 1.0))
    }

    /// The channels mapped into the range 0 to 1.
    pub(crate) fn to_normalized(self) -> [Component; 3] {
        [
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        ]
    }

    /// Build a color from channels in the range 0 to 1, rounding to the
    /// nearest integer and clamping.
    pub(crate) fn from_normalized([red, green, blue]: [Component; 3]) -> Self {
        Self::new(to_channel(red), to_channel(green), to_channel(blue))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Model for Rgb {
    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }
}

/// A color specified with 8-bit red, green and blue channels and an alpha
/// channel in the range 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
    /// The opacity of the color, 0 is transparent and 1 is opaque.
    pub alpha: Component,
}

impl Rgba {
    /// Create a new color from its channels. The alpha is not clamped.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a new color from arbitrary numeric input, clamping every
    /// channel into its valid range.
    pub fn clamped(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Rgb::clamped(red, green, blue).with_alpha(alpha)
    }

    /// Return a copy with the alpha clamped into the range 0 to 1.
    pub fn clamp(&self) -> Self {
        Self {
            alpha: clamp(self.alpha, 0.0, 1.0),
            ..*self
        }
    }

    /// Return a copy with the red channel set to `value`, clamped.
    pub fn with_red(&self, value: Component) -> Self {
        self.to_rgb().with_red(value).with_alpha(self.alpha)
    }

    /// Return a copy with the green channel set to `value`, clamped.
    pub fn with_green(&self, value: Component) -> Self {
        self.to_rgb().with_green(value).with_alpha(self.alpha)
    }

    /// Return a copy with the blue channel set to `value`, clamped.
    pub fn with_blue(&self, value: Component) -> Self {
        self.to_rgb().with_blue(value).with_alpha(self.alpha)
    }

    /// Return a copy with the alpha set to `value`, clamped.
    pub fn with_alpha(&self, value: Component) -> Self {
        self.to_rgb().with_alpha(value)
    }

    /// Drop the alpha channel.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgb::default().with_alpha(1.0)
    }
}

impl HasSpace for Rgba {
    const SPACE: Space = Space::Rgba;
}

impl Model for Rgba {
    /// The derived color is opaque.
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.with_alpha(1.0)
    }

    fn to_rgb(&self) -> Rgb {
        Rgba::to_rgb(self)
    }
}
