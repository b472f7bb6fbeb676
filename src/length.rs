//! Memory-optimized LCS length.
//!
//! Computes the bottom-right cell of the alignment table without
//! materializing it, using a single rolling row of size
//! `min(left.len(), right.len()) + 1` plus one scalar carrying the previous
//! diagonal value. This path cannot reconstruct index pairs; that
//! information is exactly what the rolling row discards.
//!
//! It is an independent implementation of the same recurrence as
//! [`crate::table::build`]; the two are cross-checked for agreement in the
//! property tests.

use crate::cancel::CancellationToken;
use crate::error::LcsError;

/// Cancellable form of [`length`].
///
/// The inputs are swapped so the rolling array is sized to the shorter
/// sequence. That is an optimization only; the recurrence is symmetric in
/// which sequence drives the outer loop. Cancellation is polled once per
/// outer iteration.
pub fn length_with<T: PartialEq>(
    left: &[T],
    right: &[T],
    cancel: &CancellationToken,
) -> Result<usize, LcsError> {
    let (outer, inner) = if right.len() > left.len() {
        (right, left)
    } else {
        (left, right)
    };
    let n = inner.len();
    let mut curr = vec![0usize; n + 1];

    for i in 0..=outer.len() {
        cancel.check()?;
        // `prev` carries table[i-1][j-1] as curr[j-1] gets overwritten.
        let mut prev = curr[0];
        for j in 0..=n {
            let backup = curr[j];
            if i == 0 || j == 0 {
                curr[j] = 0;
            } else if outer[i - 1] == inner[j - 1] {
                curr[j] = prev + 1;
            } else {
                curr[j] = curr[j].max(curr[j - 1]);
            }
            prev = backup;
        }
    }

    Ok(curr[n])
}

/// LCS length of `left` and `right` in O(min(n, m)) auxiliary space.
///
/// # Example
/// ```
/// assert_eq!(lcs_dp::length(b"TGAGTA", b"GATA"), 4);
/// ```
#[must_use]
pub fn length<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    // The token is private to this call, so the Cancelled arm cannot occur.
    match length_with(left, right, &CancellationToken::new()) {
        Ok(len) => len,
        Err(_) => unreachable!("token is never cancelled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_empty_side_gives_zero() {
        assert_eq!(length::<i32>(&[], &[]), 0);
        assert_eq!(length(&[], &[2, 5, 3]), 0);
        assert_eq!(length(&[3, 4], &[]), 0);
    }

    #[test]
    fn swap_keeps_the_answer() {
        // right longer than left exercises the swap branch
        assert_eq!(length(&[2, 3], &[1, 2, 3]), 2);
        assert_eq!(length(&[1, 2, 3], &[2, 3]), 2);
    }

    #[test]
    fn identical_inputs_score_full_length() {
        let a = [7, 7, 1, 9, 3];
        assert_eq!(length(&a, &a), a.len());
    }

    #[test]
    fn fired_token_reports_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let err = length_with(&[1, 2, 3], &[2, 3], &token).unwrap_err();
        assert_eq!(err, LcsError::Cancelled);
    }
}
