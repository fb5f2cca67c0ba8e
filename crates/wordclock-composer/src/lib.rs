#![no_std]

//! Word clock composer - time-to-words engine
//!
//! Architecture layers:
//! - `time` - Validated hour/minute input
//! - `grid` - Physical letter grid, LED numbering and [`LitSet`]
//! - `dialect` - Per-dialect word tables ([`DialectTable`])
//! - `phrase` - Phrase selector (minute buckets, hour rounding)
//! - `prefix` - Leading phrase decision policy ([`PrefixState`])
//! - `render` - Resolves phrases into lit LEDs and transcripts
//! - `driver` - Hardware abstraction (`[LedDriver]` trait)
//! - `engine` - Command-driven clock orchestrator
//!
//! Dialects are plain data. Adding one means adding a table, the selector and
//! renderer stay untouched.

pub mod dialect;
pub mod driver;
pub mod engine;
pub mod grid;
pub mod math8;
pub mod phrase;
pub mod prefix;
pub mod render;
pub mod time;

mod logging;

pub use smart_leds::RGB8 as Rgb;

// Driver exports
pub use driver::LedDriver;

// Engine exports
pub use engine::{
    ClockCommand, ClockEngine, ClockEngineConfig, CommandChannel, CommandReceiver, CommandSender,
};

// Table exports
pub use dialect::{Dialect, DialectTable, TableError, Word};
pub use grid::{LED_COUNT, LedRange, LitSet};

// Phrase exports
pub use phrase::{Connector, HourForm, MinuteWord, Phrase, PhraseToken, select};

// Prefix exports
pub use prefix::{PrefixMode, PrefixState};

// Render exports
pub use render::{
    Frame, RenderContext, RenderError, Rendering, TRANSCRIPT_CAPACITY, Transcript, resolve_phrase,
    write_transcript,
};

pub use time::{TimeError, TimeOfDay};
