//! Model a color with the HSB (HSV) notation.

use crate::color::{Component, HasSpace, Space};

swatch_macros::gen_model! {
    /// A color specified with the HSB notation, also known as HSV. The hue is
    /// in degrees, the saturation and brightness in percent.
    pub struct Hsb {
        /// The hue component of the color.
        #[range(0.0, 360.0)]
        hue: Component,
        /// The saturation component of the color.
        #[range(0.0, 100.0)]
        saturation: Component,
        /// The brightness (value) component of the color.
        #[range(0.0, 100.0)]
        brightness: Component,
    }
}

impl HasSpace for Hsb {
    const SPACE: Space = Space::Hsb;
}
