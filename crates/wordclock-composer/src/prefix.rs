//! Leading phrase decision policy
//!
//! Decides once per render whether "es ist" is lit. In the randomized modes
//! the decision is cached per minute, so re-rendering the same minute never
//! toggles the prefix.

use rand::{Rng, RngCore};

const PREFIX_MODE_NAME_ALWAYS: &str = "always";
const PREFIX_MODE_NAME_RANDOMIZED: &str = "random";
const PREFIX_MODE_NAME_NEVER: &str = "never";
const PREFIX_MODE_NAME_ANCHORED: &str = "anchored";

const PREFIX_MODE_ID_ALWAYS: u8 = 0;
const PREFIX_MODE_ID_RANDOMIZED: u8 = 1;
const PREFIX_MODE_ID_NEVER: u8 = 2;
const PREFIX_MODE_ID_ANCHORED: u8 = 3;

/// Minutes after every full and half hour during which `Anchored` shows the prefix
const ANCHOR_MINUTES: u8 = 5;

/// Configured prefix behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrefixMode {
    /// Prefix always lit
    #[default]
    Always = PREFIX_MODE_ID_ALWAYS,
    /// Coin flip per minute
    Randomized = PREFIX_MODE_ID_RANDOMIZED,
    /// Prefix never lit
    Never = PREFIX_MODE_ID_NEVER,
    /// Coin flip per minute, forced on for the first minutes of each half hour
    Anchored = PREFIX_MODE_ID_ANCHORED,
}

impl PrefixMode {
    pub const ALL: [PrefixMode; 4] = [Self::Always, Self::Randomized, Self::Never, Self::Anchored];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            PREFIX_MODE_ID_ALWAYS => Some(Self::Always),
            PREFIX_MODE_ID_RANDOMIZED => Some(Self::Randomized),
            PREFIX_MODE_ID_NEVER => Some(Self::Never),
            PREFIX_MODE_ID_ANCHORED => Some(Self::Anchored),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => PREFIX_MODE_NAME_ALWAYS,
            Self::Randomized => PREFIX_MODE_NAME_RANDOMIZED,
            Self::Never => PREFIX_MODE_NAME_NEVER,
            Self::Anchored => PREFIX_MODE_NAME_ANCHORED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PREFIX_MODE_NAME_ALWAYS => Some(Self::Always),
            PREFIX_MODE_NAME_RANDOMIZED => Some(Self::Randomized),
            PREFIX_MODE_NAME_NEVER => Some(Self::Never),
            PREFIX_MODE_NAME_ANCHORED => Some(Self::Anchored),
            _ => None,
        }
    }

    const fn is_randomized(self) -> bool {
        matches!(self, Self::Randomized | Self::Anchored)
    }
}

/// Anti-flicker state of the prefix policy
///
/// Owned by the caller and carried across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixState {
    last_minute: Option<u8>,
    last_mode: Option<PrefixMode>,
    cached: bool,
}

impl PrefixState {
    pub const fn new() -> Self {
        Self {
            last_minute: None,
            last_mode: None,
            cached: true,
        }
    }

    /// Last cached decision of the randomized modes
    pub const fn cached(&self) -> bool {
        self.cached
    }

    /// Decide whether the prefix is shown for `minute`
    ///
    /// Entering a randomized mode always shows the prefix first. After that
    /// the coin is only flipped when the minute changes.
    pub fn decide<R: RngCore>(&mut self, minute: u8, mode: PrefixMode, rng: &mut R) -> bool {
        let entered = self.last_mode != Some(mode);
        self.last_mode = Some(mode);

        if !mode.is_randomized() {
            self.last_minute = None;
            return mode == PrefixMode::Always;
        }

        if entered {
            self.last_minute = Some(minute);
            self.cached = true;
        } else if self.last_minute != Some(minute) {
            self.last_minute = Some(minute);
            self.cached = rng.random_bool(0.5);
        }

        if mode == PrefixMode::Anchored && minute % 30 < ANCHOR_MINUTES {
            return true;
        }
        self.cached
    }
}

impl Default for PrefixState {
    fn default() -> Self {
        Self::new()
    }
}
