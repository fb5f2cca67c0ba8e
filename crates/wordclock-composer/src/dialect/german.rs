use super::{DialectTable, Word};
use crate::grid::LedRange;

const fn word(spelling: &'static str, spans: &'static [LedRange]) -> Word {
    Word::new(spelling, spans)
}

/// Standard German plate
///
/// "ein" shares its letters with "eins" and is only used for "ein uhr".
pub static GERMAN: DialectTable = DialectTable {
    name: "deutsch",
    letters: [
        "HESCEISTHLS",
        "FÜNFZWANZIG",
        "VIERTELZEHN",
        "FVORLNACHNS",
        "HALBHZWEINS",
        "DREIVSECHSE",
        "SIEBENZNEUN",
        "FÜNFENACHTE",
        "VIERNZWÖLFE",
        "ELFZEHNEUHR",
    ],
    prefix: word("Es ist", &[LedRange::new(1, 2), LedRange::new(5, 7)]),
    minutes: [
        word("fünf", &[LedRange::new(18, 21)]),
        word("zehn", &[LedRange::new(29, 32)]),
        word("viertel", &[LedRange::new(22, 28)]),
        word("zwanzig", &[LedRange::new(11, 17)]),
    ],
    connectors: [
        word("nach", &[LedRange::new(35, 38)]),
        word("vor", &[LedRange::new(40, 42)]),
        word("halb", &[LedRange::new(44, 47)]),
    ],
    hours: [
        word("zwölf", &[LedRange::new(93, 97)]),
        word("eins", &[LedRange::new(51, 54)]),
        word("zwei", &[LedRange::new(49, 52)]),
        word("drei", &[LedRange::new(62, 65)]),
        word("vier", &[LedRange::new(88, 91)]),
        word("fünf", &[LedRange::new(84, 87)]),
        word("sechs", &[LedRange::new(56, 60)]),
        word("sieben", &[LedRange::new(66, 71)]),
        word("acht", &[LedRange::new(78, 81)]),
        word("neun", &[LedRange::new(73, 76)]),
        word("zehn", &[LedRange::new(103, 106)]),
        word("elf", &[LedRange::new(107, 109)]),
    ],
    standalone_hours: &[(1, word("ein", &[LedRange::new(51, 53)]))],
    o_clock: Some(word("uhr", &[LedRange::new(99, 101)])),
};
