//! A [`Swatch`] holds one color in every supported model at once.

use bitflags::bitflags;

use crate::{
    color::{Component, HasSpace, Model, Space},
    Cmyk, Hex, Hsb, Hsl, Rgb, Rgba,
};

/// A color specified in one of the supported models. This is the single
/// entry point for changing a color; see [`Swatch::from_input`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// A hexadecimal color.
    Hex(Hex),
    /// An opaque RGB color.
    Rgb(Rgb),
    /// An RGB color with its own alpha.
    Rgba(Rgba),
    /// A color in the HSL notation.
    Hsl(Hsl),
    /// A color in the HSB notation.
    Hsb(Hsb),
    /// A color in CMYK.
    Cmyk(Cmyk),
}

impl Input {
    /// The space the input was specified in.
    pub fn space(&self) -> Space {
        match self {
            Input::Hex(_) => Hex::SPACE,
            Input::Rgb(_) => Rgb::SPACE,
            Input::Rgba(_) => Rgba::SPACE,
            Input::Hsl(_) => Hsl::SPACE,
            Input::Hsb(_) => Hsb::SPACE,
            Input::Cmyk(_) => Cmyk::SPACE,
        }
    }

    /// Return a copy with every component clamped to its valid range.
    pub fn clamp(&self) -> Self {
        match *self {
            Input::Hex(hex) => Input::Hex(hex),
            Input::Rgb(rgb) => Input::Rgb(rgb),
            Input::Rgba(rgba) => Input::Rgba(rgba.clamp()),
            Input::Hsl(hsl) => Input::Hsl(hsl.clamp()),
            Input::Hsb(hsb) => Input::Hsb(hsb.clamp()),
            Input::Cmyk(cmyk) => Input::Cmyk(cmyk.clamp()),
        }
    }

    /// Convert the input to the canonical RGB color. The input is not
    /// clamped first.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Input::Hex(hex) => hex.to_rgb(),
            Input::Rgb(rgb) => *rgb,
            Input::Rgba(rgba) => rgba.to_rgb(),
            Input::Hsl(hsl) => hsl.to_rgb(),
            Input::Hsb(hsb) => hsb.to_rgb(),
            Input::Cmyk(cmyk) => cmyk.to_rgb(),
        }
    }
}

macro_rules! impl_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Input {
                fn from(value: $model) -> Self {
                    Input::$model(value)
                }
            }
        )*
    };
}

impl_from_model!(Hex, Rgb, Rgba, Hsl, Hsb, Cmyk);

bitflags! {
    /// Flags marking which representations of a [`Swatch`] changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changed : u8 {
        /// The hexadecimal representation changed.
        const HEX = 1 << 0;
        /// The RGB representation changed.
        const RGB = 1 << 1;
        /// The RGBA representation changed.
        const RGBA = 1 << 2;
        /// The HSL representation changed.
        const HSL = 1 << 3;
        /// The HSB representation changed.
        const HSB = 1 << 4;
        /// The CMYK representation changed.
        const CMYK = 1 << 5;
    }
}

impl From<Space> for Changed {
    fn from(value: Space) -> Self {
        match value {
            Space::Hex => Changed::HEX,
            Space::Rgb => Changed::RGB,
            Space::Rgba => Changed::RGBA,
            Space::Hsl => Changed::HSL,
            Space::Hsb => Changed::HSB,
            Space::Cmyk => Changed::CMYK,
        }
    }
}

/// One color held in all six supported representations. All of them denote
/// the same color, up to the rounding of the integer RGB channels. The alpha
/// is only tracked by the RGBA representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    hex: Hex,
    rgb: Rgb,
    rgba: Rgba,
    hsl: Hsl,
    hsb: Hsb,
    cmyk: Cmyk,
}

impl Swatch {
    /// Derive every representation from an RGB color with the given alpha.
    pub fn from_rgb(rgb: Rgb, alpha: Component) -> Self {
        Self::from_input(Input::Rgb(rgb), alpha)
    }

    /// Build a swatch from a color specified in any model.
    ///
    /// The input is clamped and converted to RGB, then every other
    /// representation is derived from that RGB color. The input's own
    /// representation keeps the clamped value as given, except for HEX which
    /// is always canonical. `alpha` is used for the RGBA representation unless
    /// the input is RGBA itself.
    pub fn from_input(input: Input, alpha: Component) -> Self {
        let input = input.clamp();
        let rgb = input.to_rgb();

        let mut swatch = Self {
            hex: Hex::from_rgb(&rgb),
            rgb,
            rgba: rgb.with_alpha(alpha),
            hsl: Hsl::from_rgb(&rgb),
            hsb: Hsb::from_rgb(&rgb),
            cmyk: Cmyk::from_rgb(&rgb),
        };

        match input {
            Input::Hex(_) | Input::Rgb(_) => {}
            Input::Rgba(rgba) => swatch.rgba = rgba,
            Input::Hsl(hsl) => swatch.hsl = hsl,
            Input::Hsb(hsb) => swatch.hsb = hsb,
            Input::Cmyk(cmyk) => swatch.cmyk = cmyk,
        }

        swatch
    }

    /// The color as six hexadecimal digits.
    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// The canonical RGB color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The color with its alpha.
    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    /// The alpha of the color.
    pub fn alpha(&self) -> Component {
        self.rgba.alpha
    }

    /// The color in the HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The color in the HSB notation.
    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    /// The color in CMYK.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// Format the representation in `space` as text.
    pub fn format(&self, space: Space) -> String {
        match space {
            Space::Hex => self.hex.to_string(),
            Space::Rgb => self.rgb.to_string(),
            Space::Rgba => self.rgba.to_string(),
            Space::Hsl => self.hsl.to_string(),
            Space::Hsb => self.hsb.to_string(),
            Space::Cmyk => self.cmyk.to_string(),
        }
    }

    /// The text to show for the color: the RGBA notation when the color is
    /// translucent, the HEX notation otherwise.
    pub fn display_code(&self) -> String {
        if self.rgba.is_opaque() {
            self.format(Space::Hex)
        } else {
            self.format(Space::Rgba)
        }
    }

    /// Compare against an older swatch and flag every representation that
    /// differs.
    pub fn changes_since(&self, previous: &Swatch) -> Changed {
        let mut changed = Changed::empty();
        changed.set(Changed::HEX, self.hex != previous.hex);
        changed.set(Changed::RGB, self.rgb != previous.rgb);
        changed.set(Changed::RGBA, self.rgba != previous.rgba);
        changed.set(Changed::HSL, self.hsl != previous.hsl);
        changed.set(Changed::HSB, self.hsb != previous.hsb);
        changed.set(Changed::CMYK, self.cmyk != previous.cmyk);
        changed
    }
}
