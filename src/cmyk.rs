//! Model a color with the subtractive CMYK notation.

use crate::color::{Component, HasSpace, Space};

swatch_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) inks, each
    /// in percent.
    pub struct Cmyk {
        /// The cyan component of the color.
        #[range(0.0, 100.0)]
        cyan: Component,
        /// The magenta component of the color.
        #[range(0.0, 100.0)]
        magenta: Component,
        /// The yellow component of the color.
        #[range(0.0, 100.0)]
        yellow: Component,
        /// The key (black) component of the color.
        #[range(0.0, 100.0)]
        key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_clamped() {
        let cmyk = Cmyk::clamped(-5.0, 50.0, 120.0, 100.0);
        assert_eq!(cmyk, Cmyk::new(0.0, 50.0, 100.0, 100.0));
        assert_eq!(cmyk.with_key(30.0).to_components(), [0.0, 50.0, 100.0, 30.0]);
    }
}
