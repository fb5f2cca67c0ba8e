use core::fmt;

use crate::domain::{dto::SettingsChangeIntent, entity::ClockSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// Clock engine is not draining its command queue
    Busy,
    /// Brightness above 100 percent
    InvalidBrightness(u16),
    /// Only some of the color channels given
    IncompleteColor,
    /// Dialect name not known
    UnknownLanguage,
    /// Prefix mode id not known
    UnknownPrefixMode(u8),
    /// Request body is not valid settings JSON
    Parse,
    /// State doesn't fit the response buffer
    Serialize,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Busy => write!(f, "clock is busy"),
            SettingsError::InvalidBrightness(value) => {
                write!(f, "brightness {} is outside 0..=100", value)
            }
            SettingsError::IncompleteColor => write!(f, "color needs red, green and blue"),
            SettingsError::UnknownLanguage => write!(f, "unknown language"),
            SettingsError::UnknownPrefixMode(id) => write!(f, "unknown prefix mode {}", id),
            SettingsError::Parse => write!(f, "malformed settings body"),
            SettingsError::Serialize => write!(f, "settings state buffer too small"),
        }
    }
}

impl core::error::Error for SettingsError {}

/// Reader interface for the clock settings
pub trait SettingsReader {
    /// Get the current settings
    fn get_settings(&self) -> ClockSettings;
}

/// Applier interface for the settings intent
pub trait SettingsChanger {
    /// Apply a settings change intent
    fn apply_settings_intent(&self, intent: SettingsChangeIntent) -> Result<(), SettingsError>;
}

/// Trait for the settings usecases state handler
pub trait SettingsHandler: SettingsReader + SettingsChanger + Sync + Send {}

/// Port interface for the settings usecases
pub trait SettingsUsecasesPort: SettingsReader + SettingsChanger + Sync + Send {
    /// Parse, validate and apply a JSON settings update
    fn apply_settings_json(&self, body: &[u8]) -> Result<(), SettingsError>;
}
