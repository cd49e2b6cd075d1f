//! Tiny fixed-pattern glyphs drawn at labeled ray tips.
//!
//! Each glyph is a 5x5 bitmap stored as one row byte per row, highest of the
//! low five bits being the leftmost cell. The vocabulary is closed: every
//! labeled ray carries one of [`LABELS`], and every label has a glyph.

use fnv::FnvHashMap;
use std::sync::OnceLock;

pub const GLYPH_ROWS: usize = 5;
pub const GLYPH_COLS: usize = 5;

/// Labels assigned to rays in order; also the glyph dictionary keys.
pub const LABELS: [&str; 6] = ["code", "art", "sound", "games", "notes", "about"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    /// Whether the cell at (row, col) is filled. Out-of-range cells are empty.
    #[inline]
    pub fn filled(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_ROWS || col >= GLYPH_COLS {
            return false;
        }
        (self.rows[row] >> (GLYPH_COLS - 1 - col)) & 1 == 1
    }
}

// Angle brackets.
const CODE: Glyph = Glyph {
    rows: [0b00000, 0b01010, 0b10001, 0b01010, 0b00000],
};
// Filled diamond.
const ART: Glyph = Glyph {
    rows: [0b00100, 0b01110, 0b11111, 0b01110, 0b00100],
};
// Rising equalizer bars.
const SOUND: Glyph = Glyph {
    rows: [0b00001, 0b00101, 0b10101, 0b10101, 0b10101],
};
// D-pad cross.
const GAMES: Glyph = Glyph {
    rows: [0b00100, 0b00100, 0b11111, 0b00100, 0b00100],
};
// Page with a dotted middle line.
const NOTES: Glyph = Glyph {
    rows: [0b11111, 0b10001, 0b10101, 0b10001, 0b11111],
};
// Stick figure.
const ABOUT: Glyph = Glyph {
    rows: [0b00100, 0b01110, 0b00100, 0b01010, 0b10001],
};

fn glyph_table() -> &'static FnvHashMap<&'static str, Glyph> {
    static TABLE: OnceLock<FnvHashMap<&'static str, Glyph>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = FnvHashMap::default();
        table.insert("code", CODE);
        table.insert("art", ART);
        table.insert("sound", SOUND);
        table.insert("games", GAMES);
        table.insert("notes", NOTES);
        table.insert("about", ABOUT);
        table
    })
}

/// Look up the glyph for a label. All of [`LABELS`] resolve to `Some`.
pub fn glyph_for(label: &str) -> Option<&'static Glyph> {
    glyph_table().get(label)
}
