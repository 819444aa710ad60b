//! Rule checks and state classification for 9x9 grids.
//!
//! This crate judges grids built by [`gridproof_core`]: whether raw input
//! has the right shape, whether any digit repeats within a row, column, or
//! box, and whether the grid is finished. It performs no solving and no
//! generation; every function is a pure, deterministic query over its input.
//!
//! # Entry points
//!
//! Raw input (`&[Vec<u8>]`, cells 0-9 with 0 meaning empty):
//!
//! - [`is_well_formed`] — shape check only.
//! - [`is_valid_grid`] — strict validation; the only function that signals
//!   [`FormatError`](gridproof_core::FormatError) on malformed input.
//! - [`validate`] — same check, malformed input mapped to `false`.
//! - [`is_complete`] — well-formed and fully filled, non-throwing.
//! - [`classify`] — folds everything into a [`Status`].
//!
//! Typed input ([`Grid`](gridproof_core::Grid)):
//!
//! - [`check_group`] — the uniqueness primitive over one nine-cell group.
//! - [`is_consistent`] — the primitive applied to all 27 houses.
//! - [`find_violation`] — first repeated digit with its house, for
//!   diagnostics.
//! - [`classify_grid`] — classification without the shape re-check.
//!
//! # Examples
//!
//! ```
//! use gridproof_validator::{Status, classify, is_valid_grid};
//!
//! let mut rows = vec![vec![0u8; 9]; 9];
//! assert_eq!(classify(&rows), Status::Valid);
//!
//! // Two 4s in the top row break the rule
//! rows[0][0] = 4;
//! rows[0][8] = 4;
//! assert_eq!(is_valid_grid(&rows), Ok(false));
//! assert_eq!(classify(&rows), Status::Invalid);
//! ```

pub use self::{
    status::Status,
    validate::{
        Violation, check_group, classify, classify_grid, find_violation, is_complete,
        is_consistent, is_valid_grid, is_well_formed, validate,
    },
};

mod status;
mod validate;
