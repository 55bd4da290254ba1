//! Settings for a picker session.

use std::time::Duration;

use crate::Component;

/// Settings a [`Picker`](crate::Picker) and its clipboard
/// [`Notifier`](crate::Notifier) start from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// The color selected when the session starts, in any format
    /// [`parse_color`](crate::parse_color) accepts.
    pub initial_color: String,
    /// The alpha the session starts with.
    pub alpha: Component,
    /// How long a clipboard notice stays visible, in milliseconds.
    pub notice_millis: u64,
}

impl PickerConfig {
    /// How long a clipboard notice stays visible.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_millis)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: "#007bff".to_owned(),
            alpha: 1.0,
            notice_millis: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.initial_color, "#007bff");
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.notice_duration(), Duration::from_secs(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PickerConfig = serde_json::from_str(r#"{ "alpha": 0.5 }"#).unwrap();
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.initial_color, "#007bff");
        assert_eq!(config.notice_millis, 3000);
    }
}
