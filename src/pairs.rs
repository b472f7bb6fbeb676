//! Backtracking over a completed alignment table.
//!
//! The walk starts at the bottom-right cell and moves toward the origin,
//! recording one [`IndexPair`] per diagonal (match) step. Output positions
//! are known up front from the table values, so each pair is written
//! directly at slot `table[x][y] - 1` and the result comes out in
//! increasing index order without a reverse pass.
//!
//! When a non-match cell offers two equal ways back,
//! `table[x-1][y] >= table[x][y-1]` decrements `x`, preferring to consume
//! the left sequence first. Several LCSs of equal length may exist; this
//! tie-break fixes which one callers observe and must stay as is.

use crate::cancel::CancellationToken;
use crate::error::LcsError;
use crate::table;

/// One matched element occurrence in an LCS: a position in `left` and the
/// position in `right` holding the equal element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexPair {
    /// Index into the left sequence.
    pub left: usize,
    /// Index into the right sequence.
    pub right: usize,
}

/// Reconstruct the LCS index pairs from a precomputed alignment table.
///
/// The table must have been built for exactly these two sequences (see
/// [`table::build`]). Its row count is validated up front; column bounds
/// are validated incrementally as the walk visits cells. Either mismatch
/// yields [`LcsError::ShapeMismatch`]. Cell *values* are trusted: a table
/// with the right shape but corrupt entries is a caller bug and may panic.
///
/// Pairs are returned in increasing `left` (equivalently `right`) order,
/// one per matched element, `table[|left|][|right|]` in total.
pub fn index_pairs_from_table<T: PartialEq>(
    left: &[T],
    right: &[T],
    table: &[Vec<usize>],
) -> Result<Vec<IndexPair>, LcsError> {
    if table.len() != left.len() + 1 {
        return Err(LcsError::ShapeMismatch(format!(
            "table has {} rows, expected {}",
            table.len(),
            left.len() + 1
        )));
    }

    let cell = |x: usize, y: usize| -> Result<usize, LcsError> {
        table[x].get(y).copied().ok_or_else(|| {
            LcsError::ShapeMismatch(format!(
                "row {x} has {} columns, column {y} out of bounds",
                table[x].len()
            ))
        })
    };

    let mut pairs = vec![IndexPair::default(); cell(left.len(), right.len())?];

    let (mut x, mut y) = (left.len(), right.len());
    while x > 0 && y > 0 {
        if left[x - 1] == right[y - 1] {
            pairs[cell(x, y)? - 1] = IndexPair {
                left: x - 1,
                right: y - 1,
            };
            x -= 1;
            y -= 1;
        } else if cell(x - 1, y)? >= cell(x, y - 1)? {
            x -= 1;
        } else {
            y -= 1;
        }
    }

    Ok(pairs)
}

/// Project index pairs back to element values, taken from `left` at each
/// pair's left index. Pure mapping.
#[must_use]
pub fn values_of<T: Clone>(left: &[T], pairs: &[IndexPair]) -> Vec<T> {
    pairs.iter().map(|p| left[p.left].clone()).collect()
}

/// Cancellable form of [`lcs`]: builds the alignment table, backtracks,
/// and projects values, without a persistent calculator instance.
pub fn lcs_with<T: PartialEq + Clone>(
    left: &[T],
    right: &[T],
    cancel: &CancellationToken,
) -> Result<Vec<T>, LcsError> {
    let table = table::build(left, right, cancel)?;
    let pairs = index_pairs_from_table(left, right, &table)?;
    Ok(values_of(left, &pairs))
}

/// One LCS of `left` and `right`, as a vector of cloned element values.
///
/// # Example
/// ```
/// assert_eq!(lcs_dp::lcs(&[1, 2, 3], &[2, 3]), vec![2, 3]);
/// ```
#[must_use]
pub fn lcs<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    // The token is private to this call, so the Cancelled arm cannot occur,
    // and a freshly built table always matches its own inputs.
    match lcs_with(left, right, &CancellationToken::new()) {
        Ok(values) => values,
        Err(_) => unreachable!("token is never cancelled"),
    }
}
