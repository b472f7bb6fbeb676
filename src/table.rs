//! Full alignment-table construction.
//!
//! `table[x][y]` is the LCS length of `left[0..x]` and `right[0..y]`, so the
//! grid has `left.len() + 1` rows and `right.len() + 1` columns with row 0
//! and column 0 pinned to zero. The bottom-right cell is the LCS length of
//! the whole inputs, and the grid is monotonic non-decreasing along both
//! axes.
//!
//! This is the only path that retains the full O(n·m) grid; it exists to
//! feed [`crate::pairs::index_pairs_from_table`]. Callers that only need the
//! length should use [`crate::length`] instead.

use crate::cancel::CancellationToken;
use crate::error::LcsError;

/// Build the alignment table for `left` and `right`.
///
/// Cancellation is polled once per column (outer `y` loop), so at most one
/// column of work happens after the token fires. On cancellation the
/// partially filled grid is dropped and `Err(LcsError::Cancelled)` is
/// returned.
pub fn build<T: PartialEq>(
    left: &[T],
    right: &[T],
    cancel: &CancellationToken,
) -> Result<Vec<Vec<usize>>, LcsError> {
    let rows = left.len() + 1;
    let cols = right.len() + 1;
    let mut table = vec![vec![0usize; cols]; rows];

    for y in 1..cols {
        cancel.check()?;
        for x in 1..rows {
            let hit = usize::from(left[x - 1] == right[y - 1]);
            table[x][y] = (table[x - 1][y - 1] + hit)
                .max(table[x - 1][y])
                .max(table[x][y - 1]);
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_ok<T: PartialEq>(left: &[T], right: &[T]) -> Vec<Vec<usize>> {
        build(left, right, &CancellationToken::new()).unwrap()
    }

    #[test]
    fn base_row_and_column_are_zero() {
        let table = build_ok(&[1, 2, 3], &[2, 3]);
        assert!(table[0].iter().all(|&c| c == 0));
        assert!(table.iter().all(|row| row[0] == 0));
    }

    #[test]
    fn dimensions_and_corner() {
        let left = [1, 2, 5, 3, 1, 1, 5, 8, 3];
        let right = [1, 2, 3, 3, 4, 4, 5, 1, 6];
        let table = build_ok(&left, &right);
        assert_eq!(table.len(), left.len() + 1);
        assert!(table.iter().all(|row| row.len() == right.len() + 1));
        assert_eq!(table[left.len()][right.len()], 4);
    }

    #[test]
    fn monotonic_along_both_axes() {
        let table = build_ok(b"TGAGTA".as_slice(), b"GATA".as_slice());
        for x in 1..table.len() {
            for y in 1..table[x].len() {
                assert!(table[x][y] >= table[x - 1][y]);
                assert!(table[x][y] >= table[x][y - 1]);
            }
        }
    }

    #[test]
    fn empty_inputs_yield_trivial_table() {
        let table = build_ok::<i32>(&[], &[]);
        assert_eq!(table, vec![vec![0]]);
    }

    #[test]
    fn fired_token_aborts_without_a_table() {
        let token = CancellationToken::new();
        token.cancel();
        let err = build(&[1, 2, 3], &[2, 3], &token).unwrap_err();
        assert_eq!(err, LcsError::Cancelled);
    }
}
