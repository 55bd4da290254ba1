//! Model a color with the HSL notation.

use crate::color::{Component, HasSpace, Space};

swatch_macros::gen_model! {
    /// A color specified with the HSL notation. The hue is in degrees, the
    /// saturation and lightness in percent.
    pub struct Hsl {
        /// The hue component of the color.
        #[range(0.0, 360.0)]
        hue: Component,
        /// The saturation component of the color.
        #[range(0.0, 100.0)]
        saturation: Component,
        /// The lightness component of the color.
        #[range(0.0, 100.0)]
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}
