//! Houses: the 27 groups a grid is checked against.

use crate::Position;

/// One of the 27 groups of a grid: a row, a column, or a 3x3 box.
///
/// Every house contains exactly nine cells, addressed by a cell index 0-8
/// via [`House::position_at`]. Boxes enumerate their cells row-major (top to
/// bottom, left to right within the box).
///
/// # Examples
///
/// ```
/// use gridproof_core::{House, Position};
///
/// let house = House::Box { index: 4 };
/// assert_eq!(house.position_at(0), Position::new(3, 3));
/// assert_eq!(house.position_at(8), Position::new(5, 5));
///
/// assert_eq!(House::ALL.len(), 27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    #[display("row {y}")]
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    #[display("column {x}")]
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    #[display("box {index}")]
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses: the nine rows, then the nine columns, then the nine
    /// boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into a board
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_at(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns an iterator over the nine positions of this house, in cell
    /// index order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_at(i))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[8], House::Row { y: 8 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[17], House::Column { x: 8 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_row_positions() {
        let house = House::Row { y: 3 };
        let positions: Vec<_> = house.positions().collect();
        assert_eq!(positions[0], Position::new(0, 3));
        assert_eq!(positions[8], Position::new(8, 3));
    }

    #[test]
    fn test_column_positions() {
        let house = House::Column { x: 6 };
        let positions: Vec<_> = house.positions().collect();
        assert_eq!(positions[0], Position::new(6, 0));
        assert_eq!(positions[8], Position::new(6, 8));
    }

    #[test]
    fn test_box_positions_row_major() {
        let house = House::Box { index: 2 };
        let positions: Vec<_> = house.positions().collect();
        assert_eq!(positions[0], Position::new(6, 0));
        assert_eq!(positions[1], Position::new(7, 0));
        assert_eq!(positions[3], Position::new(6, 1));
        assert_eq!(positions[8], Position::new(8, 2));
    }

    #[test]
    fn test_each_house_has_nine_distinct_cells() {
        for house in House::ALL {
            let distinct: BTreeSet<_> = house.positions().collect();
            assert_eq!(distinct.len(), 9, "{house}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", House::Row { y: 2 }), "row 2");
        assert_eq!(format!("{}", House::Column { x: 0 }), "column 0");
        assert_eq!(format!("{}", House::Box { index: 8 }), "box 8");
    }
}
