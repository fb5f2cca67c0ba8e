use heapless::String;
use serde::{Deserialize, Serialize};
use wordclock_composer::math8::MAX_BRIGHTNESS_PERCENT;
use wordclock_composer::{Dialect, PrefixMode, Rgb};

use crate::config::LANGUAGE_CAPACITY;
use crate::domain::{entity::ClockSettings, ports::SettingsError};

/// Represents a user intent to change the clock settings.
///
/// This is a domain-neutral representation of what the user wants to do,
/// independent of the source (HTTP, button, etc.).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsChangeIntent {
    /// Turn on (Some(true)), turn off (Some(false)), or no change (None)
    pub enabled: Option<bool>,
    /// Set brightness to this value in percent
    pub brightness: Option<u8>,
    /// Set color to this RGB value
    pub color: Option<Rgb>,
    pub prefix_mode: Option<PrefixMode>,
    pub dialect: Option<Dialect>,
}

impl SettingsChangeIntent {
    /// Create a new empty intent (no changes)
    pub const fn new() -> Self {
        Self {
            enabled: None,
            brightness: None,
            color: None,
            prefix_mode: None,
            dialect: None,
        }
    }

    /// Set power state
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Set color
    #[must_use]
    pub const fn with_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.color = Some(Rgb::new(r, g, b));
        self
    }

    #[must_use]
    pub const fn with_prefix_mode(mut self, mode: PrefixMode) -> Self {
        self.prefix_mode = Some(mode);
        self
    }

    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Whether the intent changes nothing
    pub const fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.brightness.is_none()
            && self.color.is_none()
            && self.prefix_mode.is_none()
            && self.dialect.is_none()
    }

    /// Settings after applying the intent to `settings`
    pub fn applied_to(&self, settings: ClockSettings) -> ClockSettings {
        ClockSettings {
            enabled: self.enabled.unwrap_or(settings.enabled),
            brightness: self.brightness.unwrap_or(settings.brightness),
            color: self.color.unwrap_or(settings.color),
            prefix_mode: self.prefix_mode.unwrap_or(settings.prefix_mode),
            dialect: self.dialect.unwrap_or(settings.dialect),
        }
    }
}

impl From<ClockSettings> for SettingsChangeIntent {
    fn from(settings: ClockSettings) -> Self {
        SettingsChangeIntent {
            enabled: Some(settings.enabled),
            brightness: Some(settings.brightness),
            color: Some(settings.color),
            prefix_mode: Some(settings.prefix_mode),
            dialect: Some(settings.dialect),
        }
    }
}

/// Body of a settings update request
///
/// Every field is optional. Fields the clock doesn't support, such as
/// transitions, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsUpdateBody {
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
    pub language: Option<String<LANGUAGE_CAPACITY>>,
    pub brightness: Option<u16>,
    pub enabled: Option<bool>,
    pub prefix_mode: Option<u8>,
}

impl TryFrom<SettingsUpdateBody> for SettingsChangeIntent {
    type Error = SettingsError;

    fn try_from(body: SettingsUpdateBody) -> Result<Self, Self::Error> {
        let color = match (body.red, body.green, body.blue) {
            (None, None, None) => None,
            (Some(r), Some(g), Some(b)) => Some(Rgb::new(r, g, b)),
            _ => return Err(SettingsError::IncompleteColor),
        };
        let brightness = body.brightness.map(validate_brightness).transpose()?;
        let dialect = body
            .language
            .map(|name| Dialect::parse_from_str(&name).ok_or(SettingsError::UnknownLanguage))
            .transpose()?;
        let prefix_mode = body
            .prefix_mode
            .map(|id| PrefixMode::from_u8(id).ok_or(SettingsError::UnknownPrefixMode(id)))
            .transpose()?;

        Ok(SettingsChangeIntent {
            enabled: body.enabled,
            brightness,
            color,
            prefix_mode,
            dialect,
        })
    }
}

/// Brightness in percent, rejecting values above 100
pub fn validate_brightness(value: u16) -> Result<u8, SettingsError> {
    match u8::try_from(value) {
        Ok(percent) if percent <= MAX_BRIGHTNESS_PERCENT => Ok(percent),
        _ => Err(SettingsError::InvalidBrightness(value)),
    }
}

/// Settings state as reported to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsStateBody {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub language: &'static str,
    pub brightness: u8,
    pub enabled: bool,
    pub prefix_mode: u8,
}

impl From<&ClockSettings> for SettingsStateBody {
    fn from(settings: &ClockSettings) -> Self {
        Self {
            red: settings.color.r,
            green: settings.color.g,
            blue: settings.color.b,
            language: settings.dialect.as_str(),
            brightness: settings.brightness,
            enabled: settings.enabled,
            prefix_mode: settings.prefix_mode.as_u8(),
        }
    }
}
