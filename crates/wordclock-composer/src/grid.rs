//! Physical layout of the word clock
//!
//! The letter matrix is 11 columns by 10 rows, wired as a serpentine strip:
//!
//! ```text
//!   0   1   2   3   4   5   6   7   8   9  10
//!  21  20  19  18  17  16  15  14  13  12  11
//!  22  23  24  25  26  27  28  29  30  31  32
//!  ...
//! 109 108 107 106 105 104 103 102 101 100  99
//!               110 111 112 113
//! ```
//!
//! The four minute dots follow the last row.

/// Letters per row
pub const GRID_COLUMNS: usize = 11;
/// Rows of letters
pub const GRID_ROWS: usize = 10;
/// Number of letter cells
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;
/// Index of the first minute dot
pub const MINUTE_DOT_START: usize = GRID_CELLS;
/// Number of minute dots
pub const MINUTE_DOT_COUNT: usize = 4;
/// Total number of addressable LEDs
pub const LED_COUNT: usize = GRID_CELLS + MINUTE_DOT_COUNT;

/// LED index of a letter cell
///
/// Returns `None` outside the letter matrix.
pub const fn cell_index(row: usize, column: usize) -> Option<usize> {
    if row >= GRID_ROWS || column >= GRID_COLUMNS {
        return None;
    }
    let base = row * GRID_COLUMNS;
    if row % 2 == 0 {
        Some(base + column)
    } else {
        Some(base + GRID_COLUMNS - 1 - column)
    }
}

/// Row and column of a letter cell
///
/// Returns `None` for minute dots and out-of-range indices.
pub const fn cell_position(index: usize) -> Option<(usize, usize)> {
    if index >= GRID_CELLS {
        return None;
    }
    let row = index / GRID_COLUMNS;
    let offset = index % GRID_COLUMNS;
    if row % 2 == 0 {
        Some((row, offset))
    } else {
        Some((row, GRID_COLUMNS - 1 - offset))
    }
}

/// Inclusive block of LED indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedRange {
    pub start: u8,
    pub end: u8,
}

impl LedRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Single LED
    pub const fn single(index: u8) -> Self {
        Self::new(index, index)
    }

    /// Number of LEDs, zero for a reversed range
    pub const fn len(self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start as usize && index <= self.end as usize
    }

    /// Whether both ranges share at least one LED
    pub const fn overlaps(self, other: LedRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether every index lies on the strip
    pub const fn is_on_strip(self) -> bool {
        (self.end as usize) < LED_COUNT
    }

    pub fn indices(self) -> impl Iterator<Item = usize> {
        self.start as usize..=self.end as usize
    }
}

/// Set of lit LEDs, one bit per index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LitSet(u128);

impl LitSet {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Light a single LED, indices off the strip are ignored
    pub fn insert(&mut self, index: usize) {
        if index < LED_COUNT {
            self.0 |= 1u128 << index;
        }
    }

    pub fn insert_range(&mut self, range: LedRange) {
        for index in range.indices() {
            self.insert(index);
        }
    }

    pub const fn contains(&self, index: usize) -> bool {
        index < LED_COUNT && self.0 & (1u128 << index) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_disjoint(&self, other: &LitSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Lit minute dots
    pub const fn minute_dots(&self) -> usize {
        (self.0 >> MINUTE_DOT_START).count_ones() as usize
    }

    /// Lit indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..LED_COUNT).filter(|index| self.contains(*index))
    }
}

impl FromIterator<usize> for LitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = LitSet::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}
