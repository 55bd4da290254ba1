//! Model a color with its hexadecimal notation.

use std::{fmt, str::FromStr};

use crate::{
    color::{HasSpace, Space},
    error::ParseError,
    Rgb,
};

/// A color written as six hexadecimal digits, two per RGB channel.
///
/// Parsing accepts 3 or 6 digits with an optional leading `#`, in any case.
/// The 3 digit shorthand is expanded by duplicating each digit. Formatting
/// always produces `#` followed by six lower case digits. Surrounding
/// whitespace is rejected; use [`parse_color`](crate::parse_color) for
/// lenient parsing.
///
/// ```rust
/// use swatch::{Hex, Rgb};
/// let hex: Hex = "#F0A".parse().unwrap();
/// assert_eq!(hex.to_rgb(), Rgb::new(0xff, 0x00, 0xaa));
/// assert_eq!(hex.to_string(), "#ff00aa");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hex(Rgb);

impl Hex {
    /// The RGB color the digits encode.
    pub fn to_rgb(&self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Self(value)
    }
}

impl From<Hex> for Rgb {
    fn from(value: Hex) -> Self {
        value.0
    }
}

impl HasSpace for Hex {
    const SPACE: Space = Space::Hex;
}

impl Rgb {
    /// Parse a color from its hexadecimal notation. See [`Hex`] for the
    /// accepted formats.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        hex.parse::<Hex>().map(Rgb::from)
    }
}

/// Parse the value of a single hex digit.
pub(crate) fn nibble(c: char) -> Result<u8, ParseError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseError::InvalidDigit(c))
}

/// Parse a run of hex digits into bytes. Runs of 3 or 4 digits are expanded
/// by duplicating every digit, runs of 6 or 8 are read in pairs.
pub(crate) fn parse_digits(digits: &str) -> Result<Vec<u8>, ParseError> {
    let nibbles = digits.chars().map(nibble).collect::<Result<Vec<_>, _>>()?;

    match nibbles.len() {
        3 | 4 => Ok(nibbles.iter().map(|n| n * 17).collect()),
        6 | 8 => Ok(nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect()),
        len => Err(ParseError::InvalidLength(len)),
    }
}

impl FromStr for Hex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let digits = s.strip_prefix('#').unwrap_or(s);

        let len = digits.chars().count();
        if len != 3 && len != 6 {
            return Err(ParseError::InvalidLength(len));
        }

        match parse_digits(digits)?.as_slice() {
            &[red, green, blue] => Ok(Self(Rgb::new(red, green, blue))),
            other => Err(ParseError::InvalidLength(other.len())),
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { red, green, blue } = self.0;
        write!(f, "#{red:02x}{green:02x}{blue:02x}")
    }
}
