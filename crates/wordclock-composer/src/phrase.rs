//! Phrase selector
//!
//! Maps a [`TimeOfDay`] to the ordered tokens of the spoken time. The token
//! sequence is the same for every dialect; tables only decide spelling and
//! letter positions.
//!
//! Buckets from 25 minutes on are expressed relative to the next hour
//! ("fünf vor halb fünf" at 4:25), so the displayed hour is rounded up there.

use core::fmt;

use heapless::Vec;

use crate::grid::MINUTE_DOT_COUNT;
use crate::time::TimeOfDay;

/// Longest phrase: three minute tokens, hour, dots
pub const MAX_PHRASE_TOKENS: usize = 3 + 1 + MINUTE_DOT_COUNT;

/// Minute at which phrases start to refer to the next hour
const NEXT_HOUR_FROM_MINUTE: u8 = 25;

/// Minute words of the five-minute buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteWord {
    Five,
    Ten,
    Quarter,
    Twenty,
}

impl MinuteWord {
    pub const ALL: [MinuteWord; 4] = [Self::Five, Self::Ten, Self::Quarter, Self::Twenty];

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Five => 0,
            Self::Ten => 1,
            Self::Quarter => 2,
            Self::Twenty => 3,
        }
    }
}

/// Words relating the minutes to the hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    Past,
    To,
    Half,
}

impl Connector {
    pub const ALL: [Connector; 3] = [Self::Past, Self::To, Self::Half];

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Past => 0,
            Self::To => 1,
            Self::Half => 2,
        }
    }
}

/// Which spelling of the hour word a phrase needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourForm {
    /// Hour stands alone before the "o'clock" suffix
    Standalone,
    /// Hour follows a minute phrase
    Combined,
}

/// Displayable unit of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseToken {
    /// Leading "it is"
    Prefix,
    Minute(MinuteWord),
    Connector(Connector),
    /// Hour word, `hour` in 1..=12
    Hour { hour: u8, form: HourForm },
    /// Trailing "o'clock" of the exact hour
    OClock,
    /// Minute dot, `slot` in 0..4
    MinuteDot(u8),
}

impl PhraseToken {
    /// English gloss, used for diagnostics independent of the dialect
    pub const fn gloss(self) -> &'static str {
        match self {
            Self::Prefix => "it is",
            Self::Minute(MinuteWord::Five) => "five",
            Self::Minute(MinuteWord::Ten) => "ten",
            Self::Minute(MinuteWord::Quarter) => "quarter",
            Self::Minute(MinuteWord::Twenty) => "twenty",
            Self::Connector(Connector::Past) => "past",
            Self::Connector(Connector::To) => "to",
            Self::Connector(Connector::Half) => "half",
            Self::Hour { hour, .. } => hour_gloss(hour),
            Self::OClock => "o'clock",
            Self::MinuteDot(_) => "",
        }
    }

    /// Whether the token is spelled out (minute dots are not)
    pub const fn is_word(self) -> bool {
        !matches!(self, Self::MinuteDot(_))
    }
}

const fn hour_gloss(hour: u8) -> &'static str {
    match hour {
        1 => "one",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        11 => "eleven",
        _ => "twelve",
    }
}

/// Selected tokens for one time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// Tokens in display order, the prefix is never included
    pub tokens: Vec<PhraseToken, MAX_PHRASE_TOKENS>,
    /// Displayed hour, 1..=12
    pub hour: u8,
    /// Lit minute dots, 0..=4
    pub minute_dots: u8,
}

impl Phrase {
    /// Spelled-out tokens, minute dots skipped
    pub fn words(&self) -> impl Iterator<Item = PhraseToken> + '_ {
        self.tokens.iter().copied().filter(|token| token.is_word())
    }

    /// Whether this is the exact-hour phrase
    pub fn is_full_hour(&self) -> bool {
        self.tokens.contains(&PhraseToken::OClock)
    }
}

/// English gloss of the phrase, e.g. `quarter past four + 2 min`
impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.words() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token.gloss())?;
            first = false;
        }
        write!(f, " + {} min", self.minute_dots)
    }
}

/// Minute tokens of a five-minute bucket
const fn bucket_tokens(bucket: u8) -> &'static [PhraseToken] {
    use Connector::{Half, Past, To};
    use MinuteWord::{Five, Quarter, Ten, Twenty};
    use PhraseToken::{Connector as C, Minute as M};

    match bucket {
        1 => &[M(Five), C(Past)],
        2 => &[M(Ten), C(Past)],
        3 => &[M(Quarter), C(Past)],
        4 => &[M(Twenty), C(Past)],
        5 => &[M(Five), C(To), C(Half)],
        6 => &[C(Half)],
        7 => &[M(Five), C(Past), C(Half)],
        8 => &[M(Twenty), C(To)],
        9 => &[M(Quarter), C(To)],
        10 => &[M(Ten), C(To)],
        11 => &[M(Five), C(To)],
        _ => &[],
    }
}

/// Displayed hour in 1..=12 after rounding towards the next hour
pub const fn display_hour(time: TimeOfDay) -> u8 {
    let mut hour = time.hour() % 12;
    if time.minute() >= NEXT_HOUR_FROM_MINUTE {
        hour = (hour + 1) % 12;
    }
    if hour == 0 { 12 } else { hour }
}

/// The longest bucket plus the hour and every dot fits `MAX_PHRASE_TOKENS`
fn push_token(tokens: &mut Vec<PhraseToken, MAX_PHRASE_TOKENS>, token: PhraseToken) {
    let pushed = tokens.push(token);
    debug_assert!(pushed.is_ok(), "phrase exceeds {} tokens", MAX_PHRASE_TOKENS);
}

/// Select the tokens for a time
pub fn select(time: TimeOfDay) -> Phrase {
    let mut tokens = Vec::new();
    let minute_tokens = bucket_tokens(time.bucket());
    let full_hour = minute_tokens.is_empty();
    let hour = display_hour(time);

    for token in minute_tokens {
        push_token(&mut tokens, *token);
    }
    let form = if full_hour {
        HourForm::Standalone
    } else {
        HourForm::Combined
    };
    push_token(&mut tokens, PhraseToken::Hour { hour, form });
    if full_hour {
        push_token(&mut tokens, PhraseToken::OClock);
    }
    let minute_dots = time.minute_remainder();
    for slot in 0..minute_dots {
        push_token(&mut tokens, PhraseToken::MinuteDot(slot));
    }

    Phrase {
        tokens,
        hour,
        minute_dots,
    }
}
