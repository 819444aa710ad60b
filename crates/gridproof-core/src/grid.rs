//! The 9x9 grid under validation.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, FormatError, House, ParseGridError, Position};

/// A derived nine-cell group: the cells of one row, column, or box.
///
/// Groups are transient values produced by extraction
/// ([`Grid::row`], [`Grid::column`], [`Grid::box_cells`], [`Grid::house`]);
/// they have no identity beyond the call that produced them.
pub type Group = [Cell; 9];

/// A 9x9 grid of cells, stored row-major.
///
/// A `Grid` can only be obtained through checked construction, so it is
/// well-formed by definition: exactly 81 cells, each empty or holding a
/// digit 1-9. Rule consistency (no repeated digit in a house) is a separate
/// question answered by the validator crate; a `Grid` may freely violate it.
///
/// Construction paths:
///
/// - [`Grid::from_rows`] — strict parse of raw row data, the entry point for
///   untrusted input.
/// - [`TryFrom<[[u8; 9]; 9]>`](#impl-TryFrom<%5B%5Bu8;+9%5D;+9%5D>-for-Grid)
///   — for input whose shape is already right, leaving only the range check.
/// - [`FromStr`] — the compact text form used in tests and diagnostics.
///
/// # Examples
///
/// ```
/// use gridproof_core::{Cell, Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.cell(Position::new(0, 0)), Cell::Filled(Digit::D5));
/// assert!(!grid.is_filled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Grid {
    /// The entirely empty grid.
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; 81],
    };

    /// Builds a grid from raw row data.
    ///
    /// This is the strict shape check: the input must contain exactly 9
    /// rows, each with exactly 9 cells, each cell in the range 0-9 (0 means
    /// empty). The first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] describing the first structural problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridproof_core::{FormatError, Grid};
    ///
    /// let rows = vec![vec![0u8; 9]; 9];
    /// assert!(Grid::from_rows(&rows).is_ok());
    ///
    /// let short = vec![vec![0u8; 9]; 8];
    /// assert_eq!(
    ///     Grid::from_rows(&short),
    ///     Err(FormatError::RowCount { found: 8 })
    /// );
    /// ```
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, FormatError> {
        if rows.len() != 9 {
            return Err(FormatError::RowCount { found: rows.len() });
        }
        let mut cells = [Cell::Empty; 81];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != 9 {
                return Err(FormatError::RowLength {
                    y,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                cells[y * 9 + x] =
                    Cell::from_raw(value).ok_or(FormatError::CellValue { x, y, value })?;
            }
        }
        Ok(Self { cells })
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[usize::from(pos.index())]
    }

    /// Returns the nine cells of the given house, in cell index order.
    ///
    /// This is the general form of group extraction; [`Grid::row`],
    /// [`Grid::column`], and [`Grid::box_cells`] delegate to it.
    #[must_use]
    pub fn house(&self, house: House) -> Group {
        let mut group = [Cell::Empty; 9];
        for (slot, pos) in group.iter_mut().zip(house.positions()) {
            *slot = self.cell(pos);
        }
        group
    }

    /// Returns the cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, y: u8) -> Group {
        self.house(House::Row { y })
    }

    /// Returns the cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, x: u8) -> Group {
        self.house(House::Column { x })
    }

    /// Returns the cells of the box at box coordinate (`box_row`,
    /// `box_col`), row-major within the box.
    ///
    /// Box (r, c) covers grid rows `3r..3r + 3` and columns `3c..3c + 3`.
    ///
    /// # Panics
    ///
    /// Panics if `box_row` or `box_col` is not in the range 0-2.
    #[must_use]
    pub fn box_cells(&self, box_row: u8, box_col: u8) -> Group {
        assert!(box_row < 3 && box_col < 3);
        self.house(House::Box {
            index: box_row * 3 + box_col,
        })
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.cells.iter().copied()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[usize::from(pos.index())]
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = FormatError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, FormatError> {
        let mut cells = [Cell::Empty; 81];
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                cells[y * 9 + x] =
                    Cell::from_raw(value).ok_or(FormatError::CellValue { x, y, value })?;
            }
        }
        Ok(Self { cells })
    }
}

impl FromStr for Grid {
    /// Parses the compact text form.
    ///
    /// Digits 1-9 are placed cells; `_`, `.`, and `0` are empty cells;
    /// whitespace is ignored. The text must describe exactly 81 cells.
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 81];
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = if matches!(ch, '_' | '.') {
                Cell::Empty
            } else {
                ch.to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Cell::from_raw)
                    .ok_or(ParseGridError::InvalidCharacter { ch })?
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::CellCount { found: count });
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    /// Renders the compact text form: nine lines of nine cells, a space
    /// between box columns, `_` for empty cells. Round-trips through the
    /// [`FromStr`] implementation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9u8 {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..9u8 {
                if x == 3 || x == 6 {
                    f.write_str(" ")?;
                }
                Display::fmt(&self.cell(Position::new(x, y)), f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Digit;

    fn canonical_rows() -> Vec<Vec<u8>> {
        vec![
            vec![5, 3, 4, 6, 7, 8, 9, 1, 2],
            vec![6, 7, 2, 1, 9, 5, 3, 4, 8],
            vec![1, 9, 8, 3, 4, 2, 5, 6, 7],
            vec![8, 5, 9, 7, 6, 1, 4, 2, 3],
            vec![4, 2, 6, 8, 5, 3, 7, 9, 1],
            vec![7, 1, 3, 9, 2, 4, 8, 5, 6],
            vec![9, 6, 1, 5, 3, 7, 2, 8, 4],
            vec![2, 8, 7, 4, 1, 9, 6, 3, 5],
            vec![3, 4, 5, 2, 8, 6, 1, 7, 9],
        ]
    }

    fn values(group: Group) -> [u8; 9] {
        group.map(Cell::value)
    }

    #[test]
    fn test_from_rows_accepts_canonical_grid() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)), Cell::Filled(Digit::D5));
        assert_eq!(grid.cell(Position::new(8, 8)), Cell::Filled(Digit::D9));
        assert!(grid.is_filled());
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![0u8; 9]; 8];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(FormatError::RowCount { found: 8 })
        );
        let rows = vec![vec![0u8; 9]; 10];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(FormatError::RowCount { found: 10 })
        );
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_length() {
        let mut rows = vec![vec![0u8; 9]; 9];
        rows[4] = vec![0u8; 8];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(FormatError::RowLength { y: 4, found: 8 })
        );
    }

    #[test]
    fn test_from_rows_rejects_out_of_range_cell() {
        let mut rows = vec![vec![0u8; 9]; 9];
        rows[2][7] = 10;
        assert_eq!(
            Grid::from_rows(&rows),
            Err(FormatError::CellValue {
                x: 7,
                y: 2,
                value: 10
            })
        );
    }

    #[test]
    fn test_row_extraction() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        assert_eq!(values(grid.row(0)), [5, 3, 4, 6, 7, 8, 9, 1, 2]);
        assert_eq!(values(grid.row(8)), [3, 4, 5, 2, 8, 6, 1, 7, 9]);
    }

    #[test]
    fn test_column_extraction() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        assert_eq!(values(grid.column(0)), [5, 6, 1, 8, 4, 7, 9, 2, 3]);
        assert_eq!(values(grid.column(8)), [2, 8, 7, 3, 1, 6, 4, 5, 9]);
    }

    #[test]
    fn test_box_extraction_is_row_major() {
        // Top-left box of the canonical grid, row by row
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        assert_eq!(values(grid.box_cells(0, 0)), [5, 3, 4, 6, 7, 2, 1, 9, 8]);
        assert_eq!(values(grid.box_cells(2, 2)), [2, 8, 4, 6, 3, 5, 1, 7, 9]);
    }

    #[test]
    fn test_house_matches_dedicated_extractors() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        assert_eq!(grid.house(House::Row { y: 4 }), grid.row(4));
        assert_eq!(grid.house(House::Column { x: 7 }), grid.column(7));
        assert_eq!(grid.house(House::Box { index: 5 }), grid.box_cells(1, 2));
    }

    #[test]
    fn test_extraction_does_not_mutate() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        let before = grid.clone();
        for house in House::ALL {
            let _ = grid.house(house);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty_grid() {
        assert!(!Grid::EMPTY.is_filled());
        assert!(Grid::EMPTY.cells().all(Cell::is_empty));
        assert_eq!(Grid::default(), Grid::EMPTY);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let text = "_________".repeat(4) + &".........".repeat(4) + "000000000";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid, Grid::EMPTY);
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let text = "x".repeat(81);
        assert_eq!(
            text.parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseGridError::CellCount { found: 3 })
        );
        let text = "1".repeat(82);
        assert_eq!(
            text.parse::<Grid>(),
            Err(ParseGridError::CellCount { found: 82 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_index_by_position() {
        let grid = Grid::from_rows(&canonical_rows()).unwrap();
        assert_eq!(grid[Position::new(2, 1)], Cell::Filled(Digit::D2));
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(
            rows in proptest::array::uniform9(proptest::array::uniform9(0u8..=9)),
        ) {
            let grid = Grid::try_from(rows).unwrap();
            let reparsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, grid);
        }

        #[test]
        fn prop_from_rows_accepts_in_range_values(
            rows in proptest::collection::vec(proptest::collection::vec(0u8..=9, 9), 9),
        ) {
            let grid = Grid::from_rows(&rows).unwrap();
            for (y, row) in rows.iter().enumerate() {
                for (x, &value) in row.iter().enumerate() {
                    let pos = Position::new(
                        u8::try_from(x).unwrap(),
                        u8::try_from(y).unwrap(),
                    );
                    prop_assert_eq!(grid.cell(pos).value(), value);
                }
            }
        }
    }
}
