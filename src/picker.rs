//! The [`Picker`] owns the currently selected color of a session and keeps
//! everybody watching it up to date.

use tracing::{debug, trace, warn};

use crate::{
    color::{Component, Space},
    config::PickerConfig,
    error::ParseError,
    parse::parse_color,
    swatch::{Changed, Input, Swatch},
    Hex, Rgb,
};

/// Handle returned by [`Picker::subscribe`], used to unsubscribe again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&Swatch)>;

/// The currently selected color, held in every representation.
///
/// All changes go through [`Picker::update`]: the input is converted to RGB,
/// every other representation is derived from it, the new [`Swatch`] replaces
/// the old one in a single step and is then published to the observers,
/// followed by the color changed callback with the canonical HEX string.
///
/// ```rust
/// use swatch::{Hsl, Input, Picker, Rgb};
/// let mut picker = Picker::new(Rgb::new(0, 123, 255));
/// picker.update(Input::Hsl(Hsl::new(0.0, 100.0, 50.0)));
/// assert_eq!(picker.swatch().hex().to_string(), "#ff0000");
/// ```
pub struct Picker {
    swatch: Swatch,
    hex_text: String,
    observers: Vec<(ObserverId, Observer)>,
    on_change: Option<Box<dyn FnMut(&str)>>,
    next_observer: u64,
}

impl Picker {
    /// Create a picker holding an opaque `initial` color.
    pub fn new(initial: Rgb) -> Self {
        Self::with_swatch(Swatch::from_rgb(initial, 1.0))
    }

    /// Create a picker from a configuration. Fails if the initial color in the
    /// configuration can not be parsed.
    pub fn from_config(config: &PickerConfig) -> Result<Self, ParseError> {
        initial_swatch(config).map(Self::with_swatch)
    }

    fn with_swatch(swatch: Swatch) -> Self {
        Self {
            hex_text: swatch.hex().to_string(),
            swatch,
            observers: Vec::new(),
            on_change: None,
            next_observer: 0,
        }
    }

    /// The current color.
    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// The text of the HEX field. While the user is typing this may hold text
    /// that is not (yet) a valid color.
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Call `observer` with the new swatch after every update.
    pub fn subscribe(&mut self, observer: impl FnMut(&Swatch) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Stop calling the observer registered with `id`. Returns `false` if no
    /// such observer exists.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Call `callback` with the canonical HEX string after every update,
    /// replacing any previous callback.
    pub fn on_color_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Apply a color specified in any model. See [`Swatch::from_input`] for
    /// how the representations are derived. Returns which representations
    /// changed.
    pub fn update(&mut self, input: Input) -> Changed {
        let source = input.space();
        let next = Swatch::from_input(input, self.swatch.alpha());
        let changed = next.changes_since(&self.swatch);

        self.swatch = next;
        self.hex_text = next.hex().to_string();

        debug!(%source, hex = %self.hex_text, ?changed, "color updated");

        for (_, observer) in self.observers.iter_mut() {
            observer(&self.swatch);
        }

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.hex_text);
        }

        changed
    }

    /// Parse `text` as a hex color and apply it. On error nothing changes.
    pub fn set_hex(&mut self, text: &str) -> Result<Changed, ParseError> {
        let hex = text.parse::<Hex>()?;
        Ok(self.update(Input::Hex(hex)))
    }

    /// Apply text typed into the HEX field. The text is always kept, but the
    /// color only changes once the text is a complete hex color.
    pub fn edit_hex_text(&mut self, text: &str) -> Option<Changed> {
        match text.parse::<Hex>() {
            Ok(hex) => Some(self.update(Input::Hex(hex))),
            Err(err) => {
                trace!(text, %err, "incomplete hex color");
                self.hex_text = text.to_owned();
                None
            }
        }
    }

    /// Set the red channel, clamped into the range 0 to 255.
    pub fn set_red(&mut self, value: Component) -> Changed {
        self.update(Input::Rgb(self.swatch.rgb().with_red(value)))
    }

    /// Set the green channel, clamped into the range 0 to 255.
    pub fn set_green(&mut self, value: Component) -> Changed {
        self.update(Input::Rgb(self.swatch.rgb().with_green(value)))
    }

    /// Set the blue channel, clamped into the range 0 to 255.
    pub fn set_blue(&mut self, value: Component) -> Changed {
        self.update(Input::Rgb(self.swatch.rgb().with_blue(value)))
    }

    /// Set the alpha, clamped into the range 0 to 1.
    pub fn set_alpha(&mut self, value: Component) -> Changed {
        self.update(Input::Rgba(self.swatch.rgba().with_alpha(value)))
    }

    /// Set the hue of the representation in `space`, which must be
    /// [`Space::Hsl`] or [`Space::Hsb`]. The hue is clamped into the range 0
    /// to 360. Other spaces leave the color unchanged.
    pub fn set_hue(&mut self, space: Space, value: Component) -> Changed {
        match space {
            Space::Hsl => self.update(Input::Hsl(self.swatch.hsl().with_hue(value))),
            Space::Hsb => self.update(Input::Hsb(self.swatch.hsb().with_hue(value))),
            Space::Hex | Space::Rgb | Space::Rgba | Space::Cmyk => Changed::empty(),
        }
    }
}

fn initial_swatch(config: &PickerConfig) -> Result<Swatch, ParseError> {
    let input = parse_color(&config.initial_color)?;
    Ok(Swatch::from_input(input, config.alpha))
}

impl Default for Picker {
    /// A picker built from [`PickerConfig::default`]. Falls back to black if
    /// the configured color does not parse.
    fn default() -> Self {
        let config = PickerConfig::default();
        let swatch = initial_swatch(&config).unwrap_or_else(|err| {
            warn!(%err, color = %config.initial_color, "invalid initial color");
            Swatch::from_rgb(Rgb::default(), config.alpha)
        });
        Self::with_swatch(swatch)
    }
}
