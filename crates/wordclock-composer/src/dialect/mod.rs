//! Grid coordinate maps
//!
//! Each dialect is one immutable [`DialectTable`]: the letters printed on its
//! front plate and, for every phrase token, the spelling and LED spans of
//! the word. Tables are plain `static` data shared by all renders.

mod alemannic;
mod german;

use core::fmt;

use crate::grid::{GRID_COLUMNS, GRID_ROWS, LED_COUNT, LedRange, MINUTE_DOT_START, cell_position};
use crate::phrase::{Connector, HourForm, MinuteWord, PhraseToken};

pub use alemannic::ALEMANNIC;
pub use german::GERMAN;

const DIALECT_NAME_GERMAN: &str = "deutsch";
const DIALECT_NAME_ALEMANNIC: &str = "dialekt";

const DIALECT_ID_GERMAN: u8 = 0;
const DIALECT_ID_ALEMANNIC: u8 = 1;

static MINUTE_DOT_SPANS: [LedRange; 4] = [
    LedRange::single(MINUTE_DOT_START as u8),
    LedRange::single(MINUTE_DOT_START as u8 + 1),
    LedRange::single(MINUTE_DOT_START as u8 + 2),
    LedRange::single(MINUTE_DOT_START as u8 + 3),
];

/// A displayable word: its spelling and the LEDs behind its letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub spelling: &'static str,
    pub spans: &'static [LedRange],
}

impl Word {
    pub const fn new(spelling: &'static str, spans: &'static [LedRange]) -> Self {
        Self { spelling, spans }
    }

    /// Number of LEDs lit by the word
    pub fn led_count(&self) -> usize {
        self.spans.iter().map(|span| span.len()).sum()
    }

    /// LED indices of the word, span by span
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.spans.iter().flat_map(|span| span.indices())
    }
}

/// Error found while validating a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A span reaches past the last LED
    SpanOffStrip { word: &'static str, span: LedRange },
    /// A span ends before it starts
    ReversedSpan { word: &'static str, span: LedRange },
    /// A word lights no LED
    EmptyWord { word: &'static str },
    /// A letter row is not `GRID_COLUMNS` characters wide
    MalformedRow { row: usize },
    /// The lit letters don't spell the word
    Misspelled { word: &'static str },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::SpanOffStrip { word, span } => write!(
                f,
                "span {}..={} of \"{}\" exceeds {} LEDs",
                span.start, span.end, word, LED_COUNT
            ),
            TableError::ReversedSpan { word, span } => {
                write!(f, "span {}..={} of \"{}\" is reversed", span.start, span.end, word)
            }
            TableError::EmptyWord { word } => write!(f, "\"{}\" lights no LED", word),
            TableError::MalformedRow { row } => {
                write!(f, "letter row {} is not {} wide", row, GRID_COLUMNS)
            }
            TableError::Misspelled { word } => {
                write!(f, "lit letters don't spell \"{}\"", word)
            }
        }
    }
}

impl core::error::Error for TableError {}

/// Word table of one dialect
#[derive(Debug)]
pub struct DialectTable {
    pub name: &'static str,
    /// Front plate, one string per row, read left to right
    pub letters: [&'static str; GRID_ROWS],
    /// Leading "it is" phrase
    pub prefix: Word,
    /// five, ten, quarter, twenty
    pub minutes: [Word; 4],
    /// past, to, half
    pub connectors: [Word; 3],
    /// Hour words, index 0 is twelve
    pub hours: [Word; 12],
    /// Short forms used before the suffix of the exact hour
    pub standalone_hours: &'static [(u8, Word)],
    /// Trailing suffix of the exact hour, `None` if the plate has none
    pub o_clock: Option<Word>,
}

impl DialectTable {
    /// Hour word for `hour` in 1..=12
    pub fn hour(&self, hour: u8, form: HourForm) -> Word {
        if form == HourForm::Standalone {
            if let Some((_, word)) = self.standalone_hours.iter().find(|(h, _)| *h == hour) {
                return *word;
            }
        }
        self.hours[usize::from(hour % 12)]
    }

    /// Resolve a token to its word
    ///
    /// Returns `None` only for [`PhraseToken::OClock`] on a plate without
    /// suffix, and for minute dots outside the four slots.
    pub fn resolve(&self, token: PhraseToken) -> Option<Word> {
        match token {
            PhraseToken::Prefix => Some(self.prefix),
            PhraseToken::Minute(word) => Some(self.minutes[word.slot()]),
            PhraseToken::Connector(connector) => Some(self.connectors[connector.slot()]),
            PhraseToken::Hour { hour, form } => Some(self.hour(hour, form)),
            PhraseToken::OClock => self.o_clock,
            PhraseToken::MinuteDot(slot) => MINUTE_DOT_SPANS
                .get(usize::from(slot))
                .map(|span| Word::new("", core::slice::from_ref(span))),
        }
    }

    /// Every word of the table, including alternate forms
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        core::iter::once(self.prefix)
            .chain(self.minutes.iter().copied())
            .chain(self.connectors.iter().copied())
            .chain(self.hours.iter().copied())
            .chain(self.standalone_hours.iter().map(|(_, word)| *word))
            .chain(self.o_clock)
    }

    /// Every token the selector can produce, paired with its word
    pub fn entries(&self) -> impl Iterator<Item = (PhraseToken, Option<Word>)> + '_ {
        let minutes = MinuteWord::ALL.into_iter().map(PhraseToken::Minute);
        let connectors = Connector::ALL.into_iter().map(PhraseToken::Connector);
        let hours = (1..=12u8).flat_map(|hour| {
            [HourForm::Standalone, HourForm::Combined]
                .into_iter()
                .map(move |form| PhraseToken::Hour { hour, form })
        });
        let dots = (0..4u8).map(PhraseToken::MinuteDot);

        core::iter::once(PhraseToken::Prefix)
            .chain(minutes)
            .chain(connectors)
            .chain(hours)
            .chain(core::iter::once(PhraseToken::OClock))
            .chain(dots)
            .map(|token| (token, self.resolve(token)))
    }

    /// Check spans and spelling against the letter plate
    pub fn validate(&self) -> Result<(), TableError> {
        for (row, letters) in self.letters.iter().enumerate() {
            if letters.chars().count() != GRID_COLUMNS {
                return Err(TableError::MalformedRow { row });
            }
        }
        for word in self.words() {
            self.validate_word(word)?;
        }
        Ok(())
    }

    fn validate_word(&self, word: Word) -> Result<(), TableError> {
        if word.spans.is_empty() {
            return Err(TableError::EmptyWord {
                word: word.spelling,
            });
        }
        for span in word.spans {
            if span.end < span.start {
                return Err(TableError::ReversedSpan {
                    word: word.spelling,
                    span: *span,
                });
            }
            if !span.is_on_strip() {
                return Err(TableError::SpanOffStrip {
                    word: word.spelling,
                    span: *span,
                });
            }
        }
        if !self.spells(word) {
            return Err(TableError::Misspelled {
                word: word.spelling,
            });
        }
        Ok(())
    }

    /// Whether the lit letters, read in plate order, spell the word
    fn spells(&self, word: Word) -> bool {
        let mut expected = word.spelling.chars().filter(|c| !c.is_whitespace());
        let mut cells: heapless::Vec<(usize, usize), GRID_COLUMNS> = heapless::Vec::new();

        for span in word.spans {
            cells.clear();
            for index in span.indices() {
                let Some(position) = cell_position(index) else {
                    return false;
                };
                if cells.push(position).is_err() {
                    return false;
                }
            }
            cells.sort_unstable();
            for (row, column) in &cells {
                let Some(letter) = self.letter(*row, *column) else {
                    return false;
                };
                let Some(wanted) = expected.next() else {
                    return false;
                };
                if !wanted.to_uppercase().eq(letter.to_uppercase()) {
                    return false;
                }
            }
        }
        expected.next().is_none()
    }

    /// Letter printed at a cell
    pub fn letter(&self, row: usize, column: usize) -> Option<char> {
        self.letters.get(row)?.chars().nth(column)
    }
}

/// Known dialects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dialect {
    /// Standard German ("es ist viertel nach vier")
    German = DIALECT_ID_GERMAN,
    /// Alemannic dialect ("es isch viertel noch viere")
    #[default]
    Alemannic = DIALECT_ID_ALEMANNIC,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Self::German, Self::Alemannic];

    /// Word table of the dialect
    pub fn table(self) -> &'static DialectTable {
        match self {
            Self::German => &GERMAN,
            Self::Alemannic => &ALEMANNIC,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            DIALECT_ID_GERMAN => Some(Self::German),
            DIALECT_ID_ALEMANNIC => Some(Self::Alemannic),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::German => DIALECT_NAME_GERMAN,
            Self::Alemannic => DIALECT_NAME_ALEMANNIC,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            DIALECT_NAME_GERMAN => Some(Self::German),
            DIALECT_NAME_ALEMANNIC => Some(Self::Alemannic),
            _ => None,
        }
    }
}
