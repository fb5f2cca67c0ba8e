//! Renderer
//!
//! Combines the prefix policy, the phrase selector and a dialect table into
//! the set of lit LEDs for one time, plus an optional transcript such as
//! `Es ist viertel nach vier + 2 min`.
//!
//! Rendering never touches hardware. Callers paint the result into a
//! [`Frame`] and hand it to their [`LedDriver`](crate::LedDriver).

use core::fmt::{self, Write};

use heapless::String;
use rand::RngCore;

use crate::dialect::DialectTable;
use crate::grid::{LED_COUNT, LitSet};
use crate::logging::log_debug;
use crate::phrase::{Phrase, PhraseToken, select};
use crate::prefix::{PrefixMode, PrefixState};
use crate::time::{TimeError, TimeOfDay};
use crate::Rgb;

/// Transcript buffer size in bytes
pub const TRANSCRIPT_CAPACITY: usize = 64;

/// Colors of a full strip
pub type Frame = [Rgb; LED_COUNT];

/// Whether a render records a transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transcript {
    #[default]
    Skip,
    Record,
}

/// Render failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Hour or minute out of range
    Time(TimeError),
    /// Transcript didn't fit the buffer
    TranscriptOverflow,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Time(e) => write!(f, "invalid time: {}", e),
            RenderError::TranscriptOverflow => write!(f, "transcript buffer too small"),
        }
    }
}

impl core::error::Error for RenderError {}

impl From<TimeError> for RenderError {
    fn from(e: TimeError) -> Self {
        RenderError::Time(e)
    }
}

/// Result of one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub time: TimeOfDay,
    /// Lit LEDs, everything else is off
    pub leds: LitSet,
    pub color: Rgb,
    /// Whether the leading phrase is lit
    pub prefix: bool,
    pub phrase: Phrase,
    pub transcript: Option<String<TRANSCRIPT_CAPACITY>>,
}

impl Rendering {
    /// Full frame with unlit LEDs cleared
    pub fn frame(&self) -> Frame {
        let mut frame = [Rgb::default(); LED_COUNT];
        self.paint(&mut frame);
        frame
    }

    /// Paint into an existing frame, clearing it first
    pub fn paint(&self, frame: &mut Frame) {
        for (index, led) in frame.iter_mut().enumerate() {
            *led = if self.leds.contains(index) {
                self.color
            } else {
                Rgb::default()
            };
        }
    }
}

/// Lit LEDs of a phrase
///
/// Tokens without a word on the plate are skipped.
pub fn resolve_phrase(table: &DialectTable, phrase: &Phrase, prefix: bool) -> LitSet {
    let mut leds = LitSet::new();
    let prefix_token = prefix.then_some(PhraseToken::Prefix);
    for token in prefix_token.into_iter().chain(phrase.tokens.iter().copied()) {
        if let Some(word) = table.resolve(token) {
            for span in word.spans {
                leds.insert_range(*span);
            }
        }
    }
    leds
}

/// Write the dialect transcript of a phrase
pub fn write_transcript<W: Write>(
    table: &DialectTable,
    phrase: &Phrase,
    prefix: bool,
    out: &mut W,
) -> fmt::Result {
    let prefix_token = prefix.then_some(PhraseToken::Prefix);
    let mut first = true;
    for token in prefix_token.into_iter().chain(phrase.words()) {
        let Some(word) = table.resolve(token) else {
            continue;
        };
        if !first {
            out.write_char(' ')?;
        }
        out.write_str(word.spelling)?;
        first = false;
    }
    write!(out, " + {} min", phrase.minute_dots)
}

/// Owned render state: dialect table, prefix state and random source
pub struct RenderContext<R: RngCore> {
    table: &'static DialectTable,
    prefix: PrefixState,
    rng: R,
}

impl<R: RngCore> RenderContext<R> {
    pub fn new(table: &'static DialectTable, rng: R) -> Self {
        Self {
            table,
            prefix: PrefixState::new(),
            rng,
        }
    }

    /// Resume from a previously saved prefix state
    #[must_use]
    pub fn with_prefix_state(mut self, prefix: PrefixState) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn table(&self) -> &'static DialectTable {
        self.table
    }

    /// Switch the dialect, the prefix state is kept
    pub fn set_table(&mut self, table: &'static DialectTable) {
        self.table = table;
    }

    pub fn prefix_state(&self) -> PrefixState {
        self.prefix
    }

    /// Render a validated time
    pub fn render(
        &mut self,
        time: TimeOfDay,
        color: Rgb,
        mode: PrefixMode,
        transcript: Transcript,
    ) -> Result<Rendering, RenderError> {
        let prefix = self.prefix.decide(time.minute(), mode, &mut self.rng);
        let phrase = select(time);
        let leds = resolve_phrase(self.table, &phrase, prefix);

        let transcript = match transcript {
            Transcript::Skip => None,
            Transcript::Record => {
                let mut text = String::new();
                write_transcript(self.table, &phrase, prefix, &mut text)
                    .map_err(|_| RenderError::TranscriptOverflow)?;
                log_debug!("clock: {} -> {}", time, text.as_str());
                Some(text)
            }
        };

        Ok(Rendering {
            time,
            leds,
            color,
            prefix,
            phrase,
            transcript,
        })
    }

    /// Render raw hour and minute, rejecting out-of-range values
    pub fn render_at(
        &mut self,
        hour: u8,
        minute: u8,
        color: Rgb,
        mode: PrefixMode,
        transcript: Transcript,
    ) -> Result<Rendering, RenderError> {
        let time = TimeOfDay::new(hour, minute)?;
        self.render(time, color, mode, transcript)
    }
}
