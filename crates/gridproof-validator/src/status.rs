//! Overall grid state classification.

/// The overall state of a grid.
///
/// The three states are disjoint and cover every possible input:
/// a grid is [`Invalid`](Status::Invalid) when it is malformed or breaks the
/// uniqueness rule, [`Solved`](Status::Solved) when it is rule-consistent
/// with every cell filled, and [`Valid`](Status::Valid) when it is
/// rule-consistent but still has empty cells.
///
/// # Examples
///
/// ```
/// use gridproof_validator::Status;
///
/// assert_eq!(Status::Solved.to_string(), "solved");
/// assert!(Status::Solved.is_solved());
/// assert!(!Status::Solved.is_invalid());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Status {
    /// The grid is malformed or violates the uniqueness rule.
    #[display("invalid")]
    Invalid,
    /// The grid is rule-consistent but contains at least one empty cell.
    #[display("valid")]
    Valid,
    /// The grid is rule-consistent and fully filled.
    #[display("solved")]
    Solved,
}
