//! swatch holds a color in HEX, RGB, RGBA, HSL, HSB and CMYK at the same
//! time and keeps all of them in sync.
//!
//! Every change, whichever model it is made in, is converted to [`Rgb`]
//! first and all other representations are derived from that. The
//! [`Picker`] owns the current color of a session and publishes each new
//! [`Swatch`] to its observers.
//!
//! ```rust
//! use swatch::{Input, Picker, Space};
//!
//! let mut picker = Picker::default();
//! picker.update("cmyk(0%, 50%, 86%, 18%)".parse::<Input>().unwrap());
//! assert_eq!(picker.swatch().format(Space::Hex), "#d1691d");
//! ```

#![deny(missing_docs)]

mod clipboard;
mod cmyk;
mod color;
mod config;
mod convert;
mod error;
mod format;
mod hex;
mod hsb;
mod hsl;
mod math;
mod palette;
mod parse;
mod picker;
mod rgb;
mod swatch;

pub use clipboard::{Clipboard, MemoryClipboard, Notice, NoticeKind, Notifier};
pub use cmyk::Cmyk;
pub use color::{Component, HasSpace, Model, Space};
pub use config::PickerConfig;
pub use error::{ClipboardError, ParseError};
pub use hex::Hex;
pub use hsb::Hsb;
pub use hsl::Hsl;
pub use palette::{
    adjust_brightness, color_difference, color_name, contrast_text_color, is_dark,
    perceived_brightness, random_color, NamedColor, BRAND_COLORS, CUSTOM_COLOR_NAME,
    PRESET_COLORS,
};
pub use parse::{is_valid_color, parse_color};
pub use picker::{ObserverId, Picker};
pub use rgb::{Rgb, Rgba};
pub use swatch::{Changed, Input, Swatch};
