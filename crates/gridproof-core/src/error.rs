//! Errors reported by grid construction.

/// Raw input does not have the shape of a grid.
///
/// This is the single error kind of the strict construction path
/// ([`Grid::from_rows`](crate::Grid::from_rows)): a grid must be exactly 9
/// rows of exactly 9 cells, every cell in the range 0-9. The variants carry
/// the structural context of the first failure; they do not distinguish
/// further kinds of malformedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// The input does not have exactly 9 rows.
    #[display("expected 9 rows, found {found}")]
    RowCount {
        /// Number of rows in the input.
        found: usize,
    },
    /// A row does not have exactly 9 cells.
    #[display("row {y} has {found} cells, expected 9")]
    RowLength {
        /// Index of the offending row.
        y: usize,
        /// Number of cells in that row.
        found: usize,
    },
    /// A cell value lies outside the range 0-9.
    #[display("cell ({x}, {y}) holds {value}, outside the range 0-9")]
    CellValue {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        y: usize,
        /// The out-of-range value.
        value: u8,
    },
}

/// The grid text form could not be parsed.
///
/// Reported by the [`FromStr`](std::str::FromStr) implementation of
/// [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character is neither a digit, an empty-cell marker, nor whitespace.
    #[display("invalid character {ch:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("grid text has {found} cells, expected 81")]
    CellCount {
        /// Number of cells described by the text.
        found: usize,
    },
}
