//! Board positions decoded from FEN piece placement.

use crate::errors::PositionError;
use crate::render::RenderOptions;
use crate::symbols::{SymbolId, SymbolSet};

/// Squares on the board.
pub const SQUARES: usize = 64;

/// Separator between ranks in the piece placement field.
const RANK_SEPARATOR: u8 = b'/';
/// Stand-in for an empty square after digit expansion.
const EMPTY: u8 = b' ';

/// Expands the piece placement field of `line` into one byte per square.
///
/// Everything from the first space on is dropped (side to move, castling and
/// the other FEN fields), rank separators are removed and every digit `1`-`8`
/// becomes that many empty squares. Digits are expanded one at a time, so
/// `12` means three empty squares, not twelve. The line does not have to be
/// UTF-8; every byte that is not a separator or digit is one square.
pub fn expand_placement(line: impl AsRef<[u8]>) -> Result<Vec<u8>, PositionError> {
    let line = line.as_ref();
    let placement = match line.iter().position(|&b| b == b' ') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut squares = Vec::with_capacity(SQUARES);
    for &byte in placement {
        match byte {
            RANK_SEPARATOR => {}
            b'1'..=b'8' => {
                let run = (byte - b'0') as usize;
                squares.extend(std::iter::repeat_n(EMPTY, run));
            }
            other => squares.push(other),
        }
    }

    if squares.len() != SQUARES {
        return Err(PositionError::Malformed {
            length: squares.len(),
        });
    }
    Ok(squares)
}

/// A decoded position: one symbol per square plus the symbols it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [SymbolId; SQUARES],
    used: SymbolSet,
}

impl Board {
    /// Decodes a FEN line into board symbols.
    ///
    /// Squares are stored row-major from the top left of the diagram. With
    /// `reverse` the board is rotated by 180 degrees. The set of used symbols
    /// always contains the frame pieces for the notation mode.
    pub fn decode(line: impl AsRef<[u8]>, options: &RenderOptions) -> Result<Board, PositionError> {
        let placement = expand_placement(line)?;

        let mut squares = [SymbolId::DARK_SQUARE; SQUARES];
        let mut used = SymbolSet::frames(options.notation);
        for row in 0..8 {
            for col in 0..8 {
                let light = (row * 9 + col) % 2 == 0;
                let id = SymbolId::square(light, placement[row * 8 + col] as char);
                used.insert(id);
                let index = if options.reverse {
                    63 - row * 8 - col
                } else {
                    row * 8 + col
                };
                squares[index] = id;
            }
        }

        Ok(Board { squares, used })
    }

    /// Symbol on square `index` (row-major, top left first).
    pub fn square(&self, index: usize) -> SymbolId {
        self.squares[index]
    }

    /// Symbol at `row`, `col` of the diagram.
    pub fn at(&self, row: usize, col: usize) -> SymbolId {
        self.squares[row * 8 + col]
    }

    pub fn squares(&self) -> &[SymbolId; SQUARES] {
        &self.squares
    }

    /// Symbols the diagram of this board invokes.
    pub fn used(&self) -> &SymbolSet {
        &self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn options(notation: bool, reverse: bool) -> RenderOptions {
        RenderOptions { notation, reverse }
    }

    #[test]
    fn expands_digits_one_at_a_time() {
        let squares = expand_placement("12").unwrap_err();
        assert_eq!(squares, PositionError::Malformed { length: 3 });
        let squares = expand_placement("8/8/8/8/8/8/8/8").unwrap();
        assert!(squares.iter().all(|b| *b == EMPTY));
    }

    #[test]
    fn drops_trailing_fields() {
        let squares = expand_placement(START).unwrap();
        assert_eq!(&squares[..8], b"rnbqkbnr");
        assert_eq!(&squares[56..], b"RNBQKBNR");
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            expand_placement("8/8/8/8/8/8/8"),
            Err(PositionError::Malformed { length: 56 })
        );
        assert_eq!(
            expand_placement("8/8/8/8/8/8/8/9"),
            Err(PositionError::Malformed { length: 57 })
        );
        assert_eq!(expand_placement(""), Err(PositionError::Malformed { length: 0 }));
    }

    #[test]
    fn separators_are_optional() {
        let with = expand_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        let without = expand_placement("4k38888884K3").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn empty_board_alternates_colors() {
        let board = Board::decode("8/8/8/8/8/8/8/8", &options(false, false)).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                let expected = if (row * 9 + col) % 2 == 0 {
                    SymbolId::LIGHT_SQUARE
                } else {
                    SymbolId::DARK_SQUARE
                };
                assert_eq!(board.at(row, col), expected);
            }
        }
        let used: Vec<usize> = board.used().iter().map(SymbolId::index).collect();
        let mut expected = vec![0, 13];
        expected.extend(26..34);
        assert_eq!(used, expected);
    }

    #[test]
    fn empty_board_with_notation() {
        for reverse in [false, true] {
            let board = Board::decode("8/8/8/8/8/8/8/8", &options(true, reverse)).unwrap();
            let used: Vec<usize> = board.used().iter().map(SymbolId::index).collect();
            let mut expected = vec![0, 13, 26, 28, 30, 31, 32, 33];
            expected.extend(34..50);
            assert_eq!(used, expected);
        }
    }

    #[test]
    fn start_position() {
        let board = Board::decode(START, &options(true, false)).unwrap();
        assert_eq!(board.at(0, 0).name(), "BRWS");
        assert_eq!(board.at(0, 1).name(), "BNBS");
        assert_eq!(board.at(0, 4).name(), "BKWS");
        assert_eq!(board.at(7, 3).name(), "WQWS");
        assert_eq!(board.at(7, 4).name(), "WKBS");
        assert_eq!(board.at(6, 0).name(), "WPBS");
        assert!(board.used().contains(SymbolId::from_name("BQBS")));
        assert!(!board.used().contains(SymbolId::from_name("WQBS")));
    }

    #[test]
    fn reverse_is_a_point_reflection() {
        let normal = Board::decode(START, &options(true, false)).unwrap();
        let reversed = Board::decode(START, &options(true, true)).unwrap();
        for i in 0..SQUARES {
            assert_eq!(reversed.square(63 - i), normal.square(i));
        }
        assert_eq!(normal.used(), reversed.used());
    }

    #[test]
    fn unknown_letters_are_bare_squares() {
        let board = Board::decode("x7/8/8/8/8/8/8/8", &options(false, false)).unwrap();
        assert_eq!(board.at(0, 0), SymbolId::LIGHT_SQUARE);
    }

    #[test]
    fn non_utf8_bytes_are_one_square_each() {
        let board = Board::decode(b"\xe47/8/8/8/8/8/8/8", &options(false, false)).unwrap();
        assert_eq!(board.at(0, 0), SymbolId::LIGHT_SQUARE);
        assert!(expand_placement(b"caf\xe9 comment line").is_err());
    }
}
