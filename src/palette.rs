//! Named colors and helpers for picking colors that work well together.

use rand::Rng;

use crate::{color::Component, math::clamp_channel, Hex, Rgb};

/// A color with a human readable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedColor {
    /// The name of the color.
    pub name: &'static str,
    /// The color itself.
    pub color: Rgb,
}

impl NamedColor {
    const fn new(name: &'static str, color: Rgb) -> Self {
        Self { name, color }
    }

    /// The color in its hexadecimal notation.
    pub fn hex(&self) -> Hex {
        Hex::from(self.color)
    }
}

/// A basic palette to pick common colors from.
pub const PRESET_COLORS: [NamedColor; 16] = [
    NamedColor::new("Red", Rgb::new(0xff, 0x00, 0x00)),
    NamedColor::new("Orange", Rgb::new(0xff, 0x7f, 0x00)),
    NamedColor::new("Yellow", Rgb::new(0xff, 0xff, 0x00)),
    NamedColor::new("Green", Rgb::new(0x00, 0xff, 0x00)),
    NamedColor::new("Cyan", Rgb::new(0x00, 0xff, 0xff)),
    NamedColor::new("Blue", Rgb::new(0x00, 0x00, 0xff)),
    NamedColor::new("Purple", Rgb::new(0x80, 0x00, 0x80)),
    NamedColor::new("Black", Rgb::new(0x00, 0x00, 0x00)),
    NamedColor::new("White", Rgb::new(0xff, 0xff, 0xff)),
    NamedColor::new("Gray", Rgb::new(0x80, 0x80, 0x80)),
    NamedColor::new("Light Gray", Rgb::new(0xc0, 0xc0, 0xc0)),
    NamedColor::new("Dark Gray", Rgb::new(0x40, 0x40, 0x40)),
    NamedColor::new("Pink", Rgb::new(0xff, 0xc0, 0xcb)),
    NamedColor::new("Brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    NamedColor::new("Navy", Rgb::new(0x00, 0x00, 0x80)),
    NamedColor::new("Olive", Rgb::new(0x80, 0x80, 0x00)),
];

/// Colors of well known brands.
pub const BRAND_COLORS: [NamedColor; 12] = [
    NamedColor::new("Google Blue", Rgb::new(0x42, 0x85, 0xf4)),
    NamedColor::new("Google Red", Rgb::new(0xea, 0x43, 0x35)),
    NamedColor::new("Google Yellow", Rgb::new(0xfb, 0xbc, 0x05)),
    NamedColor::new("Google Green", Rgb::new(0x34, 0xa8, 0x53)),
    NamedColor::new("Facebook Blue", Rgb::new(0x18, 0x77, 0xf2)),
    NamedColor::new("Twitter Blue", Rgb::new(0x1d, 0xa1, 0xf2)),
    NamedColor::new("Instagram Pink", Rgb::new(0xc1, 0x35, 0x84)),
    NamedColor::new("GitHub Gray", Rgb::new(0x24, 0x29, 0x2e)),
    NamedColor::new("VS Code Blue", Rgb::new(0x00, 0x7a, 0xcc)),
    NamedColor::new("React Blue", Rgb::new(0x61, 0xda, 0xfb)),
    NamedColor::new("Vue Green", Rgb::new(0x4f, 0xc0, 0x8d)),
    NamedColor::new("Angular Red", Rgb::new(0xdd, 0x00, 0x31)),
];

/// The name returned by [`color_name`] for colors that are not in any
/// palette.
pub const CUSTOM_COLOR_NAME: &str = "Custom";

/// Look up the name of `color` in the preset and brand palettes.
///
/// ```rust
/// use swatch::{color_name, Rgb};
/// assert_eq!(color_name(&Rgb::new(0x80, 0x80, 0x00)), "Olive");
/// assert_eq!(color_name(&Rgb::new(1, 2, 3)), "Custom");
/// ```
pub fn color_name(color: &Rgb) -> &'static str {
    PRESET_COLORS
        .iter()
        .chain(BRAND_COLORS.iter())
        .find(|named| named.color == *color)
        .map_or(CUSTOM_COLOR_NAME, |named| named.name)
}

/// Pick a color with every channel uniformly distributed.
pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// The perceived brightness of `color` in the range 0 to 255, using the HSP
/// weighting of the channels.
pub fn perceived_brightness(color: &Rgb) -> Component {
    let [red, green, blue] = [color.red, color.green, color.blue].map(|c| c as Component);
    (0.299 * red * red + 0.587 * green * green + 0.114 * blue * blue).sqrt()
}

/// Whether `color` is perceived as dark.
pub fn is_dark(color: &Rgb) -> bool {
    perceived_brightness(color) < 127.5
}

/// The text color that reads best on top of `color`: white on dark colors
/// and black on light ones.
pub fn contrast_text_color(color: &Rgb) -> Hex {
    if is_dark(color) {
        Hex::from(Rgb::new(255, 255, 255))
    } else {
        Hex::from(Rgb::new(0, 0, 0))
    }
}

/// Scale every channel by `percent`, e.g. `10.0` makes the color 10% brighter
/// and `-100.0` makes it black.
pub fn adjust_brightness(color: &Rgb, percent: Component) -> Rgb {
    let factor = 1.0 + percent / 100.0;
    Rgb::new(
        clamp_channel(color.red as Component * factor),
        clamp_channel(color.green as Component * factor),
        clamp_channel(color.blue as Component * factor),
    )
}

/// The euclidean distance between two colors in RGB.
pub fn color_difference(a: &Rgb, b: &Rgb) -> Component {
    let d = |x: u8, y: u8| {
        let d = x as Component - y as Component;
        d * d
    };
    (d(a.red, b.red) + d(a.green, b.green) + d(a.blue, b.blue)).sqrt()
}
