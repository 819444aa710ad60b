//! Rule checks and classification entry points.
//!
//! The uniqueness rule is one primitive, [`check_group`], applied to all 27
//! houses of a grid. Everything else here is orchestration: parsing raw rows
//! through [`Grid::from_rows`], short-circuiting over [`House::ALL`], and
//! folding the results into a [`Status`].

use gridproof_core::{Cell, Digit, DigitSet, FormatError, Grid, Group, House};

use crate::Status;

/// A uniqueness-rule failure: a digit occurring more than once in a house.
///
/// Produced by [`find_violation`]; the boolean and [`Status`] entry points
/// absorb this detail and report only pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("digit {digit} repeats in {house}")]
pub struct Violation {
    /// The house containing the repeat.
    pub house: House,
    /// The repeated digit.
    pub digit: Digit,
}

/// Checks one group against the uniqueness rule.
///
/// Empty cells are ignored; the remaining digits must be pairwise distinct.
/// A group with no digits at all is trivially valid.
///
/// This is the single rule primitive: full validation applies it to each of
/// the 27 houses of a grid.
///
/// # Examples
///
/// ```
/// use gridproof_core::{Cell, Digit};
/// use gridproof_validator::check_group;
///
/// let empty = [Cell::Empty; 9];
/// assert!(check_group(&empty));
///
/// let mut group = [Cell::Empty; 9];
/// group[0] = Cell::Filled(Digit::D4);
/// group[5] = Cell::Filled(Digit::D4);
/// assert!(!check_group(&group));
/// ```
#[must_use]
pub fn check_group(group: &Group) -> bool {
    let mut seen = DigitSet::new();
    group
        .iter()
        .copied()
        .filter_map(Cell::digit)
        .all(|digit| seen.insert(digit))
}

/// Returns `true` if every house of the grid passes [`check_group`].
///
/// Checks rows, then columns, then boxes, stopping at the first failing
/// house. The order is unobservable from the boolean result; no house's
/// outcome depends on another's.
#[must_use]
pub fn is_consistent(grid: &Grid) -> bool {
    House::ALL
        .iter()
        .all(|&house| check_group(&grid.house(house)))
}

/// Returns the first uniqueness-rule failure of the grid, if any.
///
/// Houses are scanned in [`House::ALL`] order (rows, columns, boxes) and
/// each house front to back, so the report is deterministic. Agrees with
/// [`is_consistent`]: one returns `Some` exactly when the other returns
/// `false`.
///
/// # Examples
///
/// ```
/// use gridproof_core::Grid;
/// use gridproof_validator::find_violation;
///
/// let grid: Grid = "
///     77_ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()
/// .unwrap();
///
/// let violation = find_violation(&grid).unwrap();
/// assert_eq!(violation.to_string(), "digit 7 repeats in row 0");
/// ```
#[must_use]
pub fn find_violation(grid: &Grid) -> Option<Violation> {
    House::ALL.iter().copied().find_map(|house| {
        let mut seen = DigitSet::new();
        grid.house(house)
            .into_iter()
            .filter_map(Cell::digit)
            .find(|&digit| !seen.insert(digit))
            .map(|digit| Violation { house, digit })
    })
}

/// Returns `true` if the raw rows have the shape of a grid.
///
/// A well-formed input has exactly 9 rows of exactly 9 cells, every cell in
/// the range 0-9. This is a pure shape check; it says nothing about the
/// uniqueness rule.
#[must_use]
pub fn is_well_formed(rows: &[Vec<u8>]) -> bool {
    Grid::from_rows(rows).is_ok()
}

/// Strictly validates raw rows against the uniqueness rule.
///
/// Returns `Ok(true)` if the input is well-formed and every house passes
/// [`check_group`], and `Ok(false)` if it is well-formed but breaks the
/// rule. This is the one entry point that distinguishes malformed input
/// from a rule-violating grid.
///
/// # Errors
///
/// Returns a [`FormatError`] if the input is not well-formed.
///
/// # Examples
///
/// ```
/// use gridproof_validator::is_valid_grid;
///
/// let empty = vec![vec![0u8; 9]; 9];
/// assert_eq!(is_valid_grid(&empty), Ok(true));
///
/// let short = vec![vec![0u8; 9]; 8];
/// assert!(is_valid_grid(&short).is_err());
/// ```
pub fn is_valid_grid(rows: &[Vec<u8>]) -> Result<bool, FormatError> {
    let grid = Grid::from_rows(rows)?;
    Ok(is_consistent(&grid))
}

/// Returns `true` if the raw rows form a well-formed grid with no empty
/// cells.
///
/// Malformed input yields `false`; completeness is a non-throwing query.
/// Note that a complete grid may still violate the uniqueness rule.
#[must_use]
pub fn is_complete(rows: &[Vec<u8>]) -> bool {
    Grid::from_rows(rows).is_ok_and(|grid| grid.is_filled())
}

/// Classifies raw rows as [`Invalid`](Status::Invalid),
/// [`Valid`](Status::Valid), or [`Solved`](Status::Solved).
///
/// Malformed input and rule violations both map to `Invalid`; the format
/// error is absorbed here, never surfaced.
///
/// # Examples
///
/// ```
/// use gridproof_validator::{Status, classify};
///
/// let empty = vec![vec![0u8; 9]; 9];
/// assert_eq!(classify(&empty), Status::Valid);
///
/// let short: Vec<Vec<u8>> = vec![];
/// assert_eq!(classify(&short), Status::Invalid);
/// ```
#[must_use]
pub fn classify(rows: &[Vec<u8>]) -> Status {
    match Grid::from_rows(rows) {
        Ok(grid) => classify_grid(&grid),
        Err(_) => Status::Invalid,
    }
}

/// Classifies an already-parsed grid.
///
/// The typed counterpart of [`classify`] for callers that hold a [`Grid`]
/// and do not need the shape check repeated.
#[must_use]
pub fn classify_grid(grid: &Grid) -> Status {
    if !is_consistent(grid) {
        Status::Invalid
    } else if grid.is_filled() {
        Status::Solved
    } else {
        Status::Valid
    }
}

/// Convenience form of [`is_valid_grid`] that reports malformed input as
/// `false` instead of an error.
#[must_use]
pub fn validate(rows: &[Vec<u8>]) -> bool {
    is_valid_grid(rows).unwrap_or(false)
}
