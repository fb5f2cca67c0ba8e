use super::{DialectTable, Word};
use crate::grid::LedRange;

const fn word(spelling: &'static str, spans: &'static [LedRange]) -> Word {
    Word::new(spelling, spans)
}

/// Alemannic plate
///
/// Hours carry the dialect's trailing "e" and the plate has no "uhr", so the
/// exact hour shows the hour word alone.
pub static ALEMANNIC: DialectTable = DialectTable {
    name: "dialekt",
    letters: [
        "HESCEISCHOS",
        "FÜNFZWANZIG",
        "VIERTELZEHN",
        "FVORLNOCHNS",
        "HALBHZWOANS",
        "DREIVSECHSE",
        "SIEBNEZNÜNE",
        "FÜNFEOACHTE",
        "VIERENZEHNE",
        "ELFEIZWÖLFE",
    ],
    prefix: word("Es isch", &[LedRange::new(1, 2), LedRange::new(5, 8)]),
    minutes: [
        word("fünf", &[LedRange::new(18, 21)]),
        word("zehn", &[LedRange::new(29, 32)]),
        word("viertel", &[LedRange::new(22, 28)]),
        word("zwanzig", &[LedRange::new(11, 17)]),
    ],
    connectors: [
        word("noch", &[LedRange::new(35, 38)]),
        word("vor", &[LedRange::new(40, 42)]),
        word("halb", &[LedRange::new(44, 47)]),
    ],
    hours: [
        word("zwölfe", &[LedRange::new(99, 104)]),
        word("oans", &[LedRange::new(51, 54)]),
        word("zwoa", &[LedRange::new(49, 52)]),
        word("drei", &[LedRange::new(62, 65)]),
        word("viere", &[LedRange::new(88, 92)]),
        word("fünfe", &[LedRange::new(83, 87)]),
        word("sechse", &[LedRange::new(55, 60)]),
        word("siebne", &[LedRange::new(66, 71)]),
        word("achte", &[LedRange::new(77, 81)]),
        word("nüne", &[LedRange::new(73, 76)]),
        word("zehne", &[LedRange::new(94, 98)]),
        word("elfe", &[LedRange::new(106, 109)]),
    ],
    standalone_hours: &[],
    o_clock: None,
};
