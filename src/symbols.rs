//! The closed table of diagram symbols.
//!
//! Every renderable board element has a fixed numeric id. The position of a
//! name in [`SYMBOL_NAMES`] *is* its id, so the table order must never change:
//!
//! - `0` empty dark square, `1..=12` pieces on a dark square
//! - `13` empty light square, `14..=25` pieces on a light square
//! - `26..=33` plain frame pieces and corners
//! - `34..=41` left frame with rank glyph, `42..=49` bottom frame with file glyph

use std::fmt;

/// Total number of symbols a font definition can provide.
pub const SYMBOL_COUNT: usize = 50;

/// Section names of all symbols, indexed by [`SymbolId`].
#[rustfmt::skip]
pub const SYMBOL_NAMES: [&str; SYMBOL_COUNT] = [
    "BS",   "WPBS", "BPBS", "WNBS", "BNBS",
    "WBBS", "BBBS", "WRBS", "BRBS", "WQBS",
    "BQBS", "WKBS", "BKBS", "WS",   "WPWS",
    "BPWS", "WNWS", "BNWS", "WBWS", "BBWS",
    "WRWS", "BRWS", "WQWS", "BQWS", "WKWS",
    "BKWS", "TF",   "LF",   "RF",   "BF",
    "LFUC", "RFUC", "LFLC", "RFLC", "LFNA",
    "LFNB", "LFNC", "LFND", "LFNE", "LFNF",
    "LFNG", "LFNH", "BFNA", "BFNB", "BFNC",
    "BFND", "BFNE", "BFNF", "BFNG", "BFNH",
];

/// Identifier of one of the [`SYMBOL_COUNT`] fixed symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u8);

impl SymbolId {
    pub const DARK_SQUARE: SymbolId = SymbolId(0);
    pub const LIGHT_SQUARE: SymbolId = SymbolId(13);
    pub const TOP_FRAME: SymbolId = SymbolId(26);
    pub const LEFT_FRAME: SymbolId = SymbolId(27);
    pub const RIGHT_FRAME: SymbolId = SymbolId(28);
    pub const BOTTOM_FRAME: SymbolId = SymbolId(29);
    pub const UPPER_LEFT_CORNER: SymbolId = SymbolId(30);
    pub const UPPER_RIGHT_CORNER: SymbolId = SymbolId(31);
    pub const LOWER_LEFT_CORNER: SymbolId = SymbolId(32);
    pub const LOWER_RIGHT_CORNER: SymbolId = SymbolId(33);

    /// Looks up a section name. Names outside the table map to the empty light
    /// square, which is how stray sections in a font file are treated.
    pub fn from_name(name: &str) -> SymbolId {
        SYMBOL_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| SymbolId(index as u8))
            .unwrap_or(SymbolId::LIGHT_SQUARE)
    }

    /// Left frame piece carrying rank glyph `index` (0 = "A" variant).
    pub fn left_notation(index: usize) -> SymbolId {
        debug_assert!(index < 8);
        SymbolId(34 + index as u8)
    }

    /// Bottom frame piece carrying file glyph `index` (0 = "A" variant).
    pub fn bottom_notation(index: usize) -> SymbolId {
        debug_assert!(index < 8);
        SymbolId(42 + index as u8)
    }

    /// Square symbol for a piece letter on a light or dark square.
    ///
    /// Unrecognized characters (including the empty-square placeholder) give
    /// the bare square.
    pub fn square(light: bool, piece: char) -> SymbolId {
        let base = if light { 13 } else { 0 };
        let offset = match piece {
            'P' => 1,
            'p' => 2,
            'N' => 3,
            'n' => 4,
            'B' => 5,
            'b' => 6,
            'R' => 7,
            'r' => 8,
            'Q' => 9,
            'q' => 10,
            'K' => 11,
            'k' => 12,
            _ => 0,
        };
        SymbolId(base + offset)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The section name of this symbol in a font definition.
    pub fn name(self) -> &'static str {
        SYMBOL_NAMES[self.index()]
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flags recording which symbols a diagram actually uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSet([bool; SYMBOL_COUNT]);

impl Default for SymbolSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl SymbolSet {
    pub const fn empty() -> Self {
        SymbolSet([false; SYMBOL_COUNT])
    }

    /// The frame symbols every diagram needs.
    ///
    /// With notation the plain left and bottom frame pieces are replaced by
    /// their sixteen glyph-carrying variants.
    pub fn frames(notation: bool) -> Self {
        let mut set = Self::empty();
        for index in 26..34 {
            set.0[index] = true;
        }
        if notation {
            set.0[SymbolId::LEFT_FRAME.index()] = false;
            set.0[SymbolId::BOTTOM_FRAME.index()] = false;
            for index in 34..SYMBOL_COUNT {
                set.0[index] = true;
            }
        }
        set
    }

    pub fn insert(&mut self, id: SymbolId) {
        self.0[id.index()] = true;
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.0[id.index()]
    }

    /// Iterates the ids in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, used)| **used)
            .map(|(index, _)| SymbolId(index as u8))
    }
}
