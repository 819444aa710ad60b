//! Core data structures for 9x9 grid validation.
//!
//! This crate provides the typed domain model shared by the gridproof
//! crates: digits, cells, board coordinates, houses (the 27 row/column/box
//! groups), and the grid itself. Construction is checked everywhere, so the
//! rule layer in `gridproof-validator` operates only on values that are
//! already shape- and range-correct.
//!
//! # Overview
//!
//! - [`Digit`]: a placed value 1-9; invalid digits are unrepresentable.
//! - [`Cell`]: one grid entry, empty or holding a [`Digit`]; carries the
//!   raw 0-9 encoding via [`Cell::from_raw`] and [`Cell::value`].
//! - [`Position`]: a checked (x, y) board coordinate.
//! - [`House`]: one of the 27 groups a grid is checked against, with
//!   [`House::ALL`] covering rows, columns, and boxes.
//! - [`Group`]: the nine cells extracted from one house.
//! - [`DigitSet`]: a 9-bit set of digits; its `insert` primitive drives the
//!   uniqueness scan.
//! - [`Grid`]: 81 cells with strict construction ([`Grid::from_rows`]
//!   reporting [`FormatError`]) and a compact text form for tests and
//!   diagnostics.
//!
//! # Examples
//!
//! ```
//! use gridproof_core::{Cell, Digit, Grid, House, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let top_row = grid.house(House::Row { y: 0 });
//! assert_eq!(top_row[0], Cell::Filled(Digit::D5));
//! assert_eq!(grid.cell(Position::new(4, 1)), Cell::Filled(Digit::D9));
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::{FormatError, ParseGridError},
    grid::{Grid, Group},
    house::House,
    position::Position,
};
