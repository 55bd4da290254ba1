//! Parse colors from text.
//!
//! The accepted formats are:
//! * `#RGB`, `#RRGGBB` (the `#` is optional)
//! * `#RGBA`, `#RRGGBBAA`, read as RGBA
//! * `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! * `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`, the latter read as RGBA
//! * `hsb(h, s%, b%)`, also spelled `hsv(..)`
//! * `cmyk(c%, m%, y%, k%)`
//!
//! Percent signs are optional. On RGB channels `100%` means 255 and on an
//! alpha it means 1; a hue can not be given in percent. Numbers outside their
//! component's range are clamped rather than rejected.

use std::str::FromStr;

use crate::{
    color::Component,
    error::ParseError,
    hex::parse_digits,
    swatch::Input,
    Cmyk, Hex, Hsb, Hsl, Rgb, Rgba,
};

/// Parse a color in any of the supported text formats.
///
/// ```rust
/// use swatch::{parse_color, Hsl, Input};
/// assert_eq!(
///     parse_color("hsl(211, 100%, 50%)"),
///     Ok(Input::Hsl(Hsl::new(211.0, 100.0, 50.0)))
/// );
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(text: &str) -> Result<Input, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    match text.split_once('(') {
        Some((name, args)) => parse_function(name, args),
        None => parse_hex(text),
    }
}

/// Whether `text` holds a color in any of the formats [`parse_color`]
/// accepts.
pub fn is_valid_color(text: &str) -> bool {
    parse_color(text).is_ok()
}

impl FromStr for Input {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

fn parse_hex(text: &str) -> Result<Input, ParseError> {
    let digits = text.strip_prefix('#').unwrap_or(text);

    match parse_digits(digits)?.as_slice() {
        &[red, green, blue] => Ok(Input::Hex(Hex::from(Rgb::new(red, green, blue)))),
        &[red, green, blue, alpha] => Ok(Input::Rgba(Rgba::new(
            red,
            green,
            blue,
            alpha as Component / 255.0,
        ))),
        other => Err(ParseError::InvalidLength(other.len())),
    }
}

fn parse_function(name: &str, args: &str) -> Result<Input, ParseError> {
    let name = name.trim().to_ascii_lowercase();
    let Some(args) = args.trim_end().strip_suffix(')') else {
        return Err(ParseError::UnclosedFunction(name));
    };
    let args = args.split(',').map(str::trim).collect::<Vec<_>>();

    use Unit::*;

    let input = match name.as_str() {
        "rgb" => {
            let [red, green, blue] = numbers("rgb", &args, [Channel; 3])?;
            Input::Rgb(Rgb::clamped(red, green, blue))
        }
        "rgba" => {
            let [red, green, blue, alpha] =
                numbers("rgba", &args, [Channel, Channel, Channel, Alpha])?;
            Input::Rgba(Rgba::clamped(red, green, blue, alpha))
        }
        "hsl" => Input::Hsl(Hsl::from(numbers("hsl", &args, [Hue, Percent, Percent])?).clamp()),
        "hsla" => {
            let [hue, saturation, lightness, alpha] =
                numbers("hsla", &args, [Hue, Percent, Percent, Alpha])?;
            let rgb = Hsl::clamped(hue, saturation, lightness).to_rgb();
            Input::Rgba(rgb.with_alpha(alpha))
        }
        "hsb" | "hsv" => {
            Input::Hsb(Hsb::from(numbers("hsb", &args, [Hue, Percent, Percent])?).clamp())
        }
        "cmyk" => Input::Cmyk(Cmyk::from(numbers("cmyk", &args, [Percent; 4])?).clamp()),
        other => return Err(ParseError::UnknownFunction(other.to_owned())),
    };

    Ok(input)
}

/// What an argument of a color function measures. This decides what a
/// trailing `%` means.
#[derive(Clone, Copy)]
enum Unit {
    /// An RGB channel from 0 to 255, where `100%` is 255.
    Channel,
    /// An alpha from 0 to 1, where `100%` is 1.
    Alpha,
    /// A hue in degrees. Percentages are not allowed.
    Hue,
    /// A percentage, with or without the `%` sign.
    Percent,
}

/// Parse exactly `N` comma separated numbers, each scaled to its unit.
fn numbers<const N: usize>(
    function: &'static str,
    args: &[&str],
    units: [Unit; N],
) -> Result<[Component; N], ParseError> {
    if args.len() != N {
        return Err(ParseError::ArgumentCount {
            function,
            expected: N,
            found: args.len(),
        });
    }

    let mut values = [0.0; N];
    for ((value, arg), unit) in values.iter_mut().zip(args).zip(units) {
        *value = number(arg, unit)?;
    }
    Ok(values)
}

fn number(arg: &str, unit: Unit) -> Result<Component, ParseError> {
    let invalid = || ParseError::InvalidNumber(arg.to_owned());

    let (digits, percent) = match arg.strip_suffix('%') {
        Some(digits) => (digits.trim_end(), true),
        None => (arg, false),
    };

    let value = digits
        .parse::<Component>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(invalid)?;

    match (unit, percent) {
        (_, false) | (Unit::Percent, true) => Ok(value),
        (Unit::Channel, true) => Ok(value * 255.0 / 100.0),
        (Unit::Alpha, true) => Ok(value / 100.0),
        (Unit::Hue, true) => Err(invalid()),
    }
}
