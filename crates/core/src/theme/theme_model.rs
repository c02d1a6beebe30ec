//! Theme mode and change-notification types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Storage key under which the explicit theme preference is persisted.
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Canonical name of the theme change broadcast.
pub const THEME_CHANGED: &str = "theme:changed";

/// Buffered events per subscriber before it is considered lagging.
pub const THEME_EVENT_CAPACITY: usize = 16;

/// Light or dark visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::InvalidThemeMode(other.to_string())),
        }
    }
}

/// Broadcast envelope for theme changes.
///
/// `mode: None` tells consumers to re-resolve from the ambient state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEvent {
    pub name: &'static str,
    pub mode: Option<ThemeMode>,
}

impl ThemeEvent {
    pub fn changed(mode: Option<ThemeMode>) -> Self {
        Self {
            name: THEME_CHANGED,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_serialization() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<ThemeMode>("\"dark\"").unwrap(),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(Error::InvalidThemeMode(_))
        ));
    }

    #[test]
    fn test_toggled_and_default() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_event_payload_shape() {
        let event = ThemeEvent::changed(None);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({ "name": "theme:changed", "mode": null })
        );
    }
}
