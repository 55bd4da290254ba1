//! Conversions between [`Rgb`] and the other models. Every conversion goes
//! through RGB, which is the only representation holding integer channels.
//!
//! The `to_*` conversions out of RGB round hue to whole degrees and
//! percentages to whole percent, the way the values are displayed. The
//! `to_*_fractional` variants skip the rounding and convert back to the same
//! RGB color.
//!
//! ```rust
//! use swatch::{Hsl, Rgb};
//! let hsl = Rgb::new(210, 105, 30).to_hsl();
//! assert_eq!(hsl, Hsl::new(25.0, 75.0, 47.0));
//! assert_eq!(hsl.to_string(), "hsl(25, 75%, 47%)");
//! ```

use crate::{color::Model, Cmyk, Hex, Hsb, Hsl, Rgb};

impl Rgb {
    /// Convert this color to its hexadecimal notation.
    pub fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    /// Convert this color to the HSL notation, rounded to whole degrees and
    /// percent.
    pub fn to_hsl(&self) -> Hsl {
        self.to_hsl_fractional().round()
    }

    /// Convert this color to the HSL notation without rounding.
    pub fn to_hsl_fractional(&self) -> Hsl {
        let [hue, saturation, lightness] = util::rgb_to_hsl(self.to_normalized());
        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert this color to the HSB notation, rounded to whole degrees and
    /// percent.
    pub fn to_hsb(&self) -> Hsb {
        self.to_hsb_fractional().round()
    }

    /// Convert this color to the HSB notation without rounding.
    pub fn to_hsb_fractional(&self) -> Hsb {
        let [hue, saturation, brightness] = util::rgb_to_hsb(self.to_normalized());
        Hsb::new(hue, saturation * 100.0, brightness * 100.0)
    }

    /// Convert this color to CMYK, rounded to whole percent.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_cmyk_fractional().round()
    }

    /// Convert this color to CMYK without rounding.
    pub fn to_cmyk_fractional(&self) -> Cmyk {
        Cmyk::from(util::rgb_to_cmyk(self.to_normalized()).map(|v| v * 100.0))
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(util::hsl_to_rgb([
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        ]))
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(util::hsb_to_rgb([
            self.hue,
            self.saturation / 100.0,
            self.brightness / 100.0,
        ]))
    }
}

impl Cmyk {
    /// Convert this color from CMYK to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_normalized(util::cmyk_to_rgb(self.to_components().map(|v| v / 100.0)))
    }
}

macro_rules! impl_model {
    ($model:ident, $from_rgb:ident) => {
        impl Model for $model {
            fn from_rgb(rgb: &Rgb) -> Self {
                rgb.$from_rgb()
            }

            fn to_rgb(&self) -> Rgb {
                $model::to_rgb(self)
            }
        }
    };
}

impl_model!(Hex, to_hex);
impl_model!(Hsl, to_hsl);
impl_model!(Hsb, to_hsb);
impl_model!(Cmyk, to_cmyk);

mod util {
    use crate::{color::Component, math::normalize_hue};

    /// Calculate the hue in degrees from normalized RGB channels and return
    /// it along with the min and max channel values. The hue of an achromatic
    /// color is 0.
    fn rgb_to_hue_with_min_max([red, green, blue]: [Component; 3]) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from normalized RGB to HSL with saturation and lightness in
    /// the range 0 to 1.
    pub fn rgb_to_hsl(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 || lightness <= 0.0 || lightness >= 1.0 {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        [hue, saturation, lightness]
    }

    /// Convert from HSL (saturation and lightness in the range 0 to 1) to
    /// normalized RGB.
    pub fn hsl_to_rgb([hue, saturation, lightness]: [Component; 3]) -> [Component; 3] {
        if saturation <= 0.0 {
            return [lightness; 3];
        }

        let hue = normalize_hue(hue);
        let a = saturation * lightness.min(1.0 - lightness);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [f(0.0), f(8.0), f(4.0)]
    }

    /// Convert from normalized RGB to HSB with saturation and brightness in
    /// the range 0 to 1.
    pub fn rgb_to_hsb(from: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let brightness = max;
        let saturation = if brightness == 0.0 {
            0.0
        } else {
            (max - min) / brightness
        };

        [hue, saturation, brightness]
    }

    /// Convert from HSB (saturation and brightness in the range 0 to 1) to
    /// normalized RGB.
    pub fn hsb_to_rgb([hue, saturation, brightness]: [Component; 3]) -> [Component; 3] {
        let hue = normalize_hue(hue);

        let f = |n: Component| {
            let k = (n + hue / 60.0) % 6.0;
            brightness - brightness * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        [f(5.0), f(3.0), f(1.0)]
    }

    /// Convert from normalized RGB to CMYK with every component in the range
    /// 0 to 1.
    pub fn rgb_to_cmyk([red, green, blue]: [Component; 3]) -> [Component; 4] {
        let key = 1.0 - red.max(green).max(blue);

        // Pure black has no chroma to spread over the other inks.
        if key >= 1.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }

        let ink = |channel: Component| (1.0 - channel - key) / (1.0 - key);

        [ink(red), ink(green), ink(blue), key]
    }

    /// Convert from CMYK (every component in the range 0 to 1) to normalized
    /// RGB.
    pub fn cmyk_to_rgb([cyan, magenta, yellow, key]: [Component; 4]) -> [Component; 3] {
        [
            (1.0 - cyan) * (1.0 - key),
            (1.0 - magenta) * (1.0 - key),
            (1.0 - yellow) * (1.0 - key),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_rgb_near, Component};

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        const TESTS: &[([u8; 3], [Component; 3], [Component; 3], [Component; 4])] = &[
            ([210, 105,  30], [ 25.0,  75.0,  47.0], [ 25.0,  86.0,  82.0], [  0.0, 50.0, 86.0,  18.0]),
            ([  0, 123, 255], [211.0, 100.0,  50.0], [211.0, 100.0, 100.0], [100.0, 52.0,  0.0,   0.0]),
            ([255,   0,   0], [  0.0, 100.0,  50.0], [  0.0, 100.0, 100.0], [  0.0, 100.0, 100.0, 0.0]),
            ([  0, 128,   0], [120.0, 100.0,  25.0], [120.0, 100.0,  50.0], [100.0, 0.0, 100.0,  50.0]),
            ([128, 128, 128], [  0.0,   0.0,  50.0], [  0.0,   0.0,  50.0], [  0.0, 0.0,  0.0,  50.0]),
            ([  0,   0,   0], [  0.0,   0.0,   0.0], [  0.0,   0.0,   0.0], [  0.0, 0.0,  0.0, 100.0]),
            ([255, 255, 255], [  0.0,   0.0, 100.0], [  0.0,   0.0, 100.0], [  0.0, 0.0,  0.0,   0.0]),
        ];

        for &(rgb, hsl, hsb, cmyk) in TESTS {
            let rgb = Rgb::from(rgb);
            println!("{rgb}");
            assert_eq!(rgb.to_hsl().to_components(), hsl);
            assert_eq!(rgb.to_hsb().to_components(), hsb);
            assert_eq!(rgb.to_cmyk().to_components(), cmyk);
        }
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(0, 123, 255).to_hex().to_string(), "#007bff");
        assert_eq!(Rgb::new(1, 2, 3).to_hex().to_string(), "#010203");
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        assert_eq!(Rgb::new(255, 255, 255).to_hsl().hue, 0.0);
        assert_eq!(Rgb::new(0, 0, 0).to_hsb().hue, 0.0);
        assert_eq!(Rgb::new(77, 77, 77).to_hsl_fractional().saturation, 0.0);
    }

    #[test]
    fn fractional_conversions_are_not_rounded() {
        let hsl = Rgb::new(210, 105, 30).to_hsl_fractional();
        assert_component_eq!(hsl.hue, 25.0);
        assert_component_eq!(hsl.saturation, 75.0);
        assert_component_eq!(hsl.lightness, 47.058_823);
    }

    #[test]
    fn hsl_to_rgb() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 25.0).to_rgb(), Rgb::new(0, 128, 0));
        assert_eq!(Hsl::new(240.0, 0.0, 100.0).to_rgb(), Rgb::new(255, 255, 255));
        // A hue of 360 degrees is red again.
        assert_eq!(Hsl::new(360.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_rgb_near!(Hsl::new(25.0, 75.0, 47.0).to_rgb(), Rgb::new(210, 105, 30), 3);
    }

    #[test]
    fn hsb_to_rgb() {
        assert_eq!(Hsb::new(240.0, 100.0, 100.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsb::new(0.0, 0.0, 50.0).to_rgb(), Rgb::new(128, 128, 128));
        assert_eq!(Hsb::new(60.0, 100.0, 100.0).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsb::new(300.0, 100.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn cmyk_to_rgb() {
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 100.0).to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(Cmyk::new(0.0, 100.0, 100.0, 0.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn black_and_white_in_cmyk() {
        assert_eq!(Rgb::new(0, 0, 0).to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(Rgb::new(255, 255, 255).to_cmyk(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn models_convert_through_rgb() {
        let rgb = Rgb::new(52, 168, 83);
        assert_eq!(<Hex as Model>::from_rgb(&rgb).to_rgb(), rgb);
        assert_rgb_near!(Model::to_rgb(&Hsl::from_rgb(&rgb)), rgb, 3);
        assert_rgb_near!(Model::to_rgb(&Hsb::from_rgb(&rgb)), rgb, 3);
        assert_rgb_near!(Model::to_rgb(&Cmyk::from_rgb(&rgb)), rgb, 3);
    }
}
