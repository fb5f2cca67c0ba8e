use wordclock_composer::{Dialect, PrefixMode, Rgb};

/// Brightness after first boot, in percent
pub const DEFAULT_BRIGHTNESS: u8 = 50;
pub const DEFAULT_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const DEFAULT_PREFIX_MODE: PrefixMode = PrefixMode::Always;
pub const DEFAULT_DIALECT: Dialect = Dialect::Alemannic;

/// Longest accepted dialect name in a settings body
pub const LANGUAGE_CAPACITY: usize = 16;

/// Size of the serialized settings state
pub const STATE_JSON_CAPACITY: usize = 128;
