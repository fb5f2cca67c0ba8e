use wordclock_composer::{ClockEngineConfig, Dialect, PrefixMode, Rgb, Transcript};

use crate::config::{DEFAULT_BRIGHTNESS, DEFAULT_COLOR, DEFAULT_DIALECT, DEFAULT_PREFIX_MODE};

/// Represents the user-facing clock settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSettings {
    pub enabled: bool,
    /// Brightness in percent (0-100)
    pub brightness: u8,
    pub color: Rgb,
    pub prefix_mode: PrefixMode,
    pub dialect: Dialect,
}

impl ClockSettings {
    /// Create settings with factory defaults
    pub const fn new() -> Self {
        Self {
            enabled: true,
            brightness: DEFAULT_BRIGHTNESS,
            color: DEFAULT_COLOR,
            prefix_mode: DEFAULT_PREFIX_MODE,
            dialect: DEFAULT_DIALECT,
        }
    }

    /// Initial configuration of a clock engine showing these settings
    pub const fn engine_config(&self, transcript: Transcript) -> ClockEngineConfig {
        ClockEngineConfig {
            color: self.color,
            brightness: self.brightness,
            enabled: self.enabled,
            prefix_mode: self.prefix_mode,
            dialect: self.dialect,
            transcript,
        }
    }
}

impl Default for ClockSettings {
    /// Create settings with factory defaults
    fn default() -> Self {
        Self::new()
    }
}
