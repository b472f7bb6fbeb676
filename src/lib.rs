//! Longest Common Subsequence (LCS) over arbitrary comparable sequences.
//!
//! This crate computes the LCS of two slices of any element type with
//! structural equality (`T: PartialEq`): the subsequence length, the matched
//! index pairs in each input, and the subsequence values themselves.
//!
//! ## Core idea
//! 1. A classic O(n·m) dynamic program fills an alignment table of prefix
//!    LCS lengths ([`table::build`]).
//! 2. A backward walk over the completed table recovers one concrete LCS as
//!    a list of [`IndexPair`]s, with a fixed deterministic tie-break
//!    ([`index_pairs_from_table`]).
//! 3. When only the length is needed, a rolling-row variant computes it in
//!    O(min(n, m)) auxiliary space without materializing the table
//!    ([`length()`]).
//!
//! Long-running entry points come in two forms: a plain one, and a `_with`
//! form that polls a [`CancellationToken`] once per outer DP iteration and
//! bails out with [`LcsError::Cancelled`].
//!
//! ## Quick start
//! ```
//! use lcs_dp::LcsCalculator;
//!
//! let left = [1, 2, 5, 3, 1, 1, 5, 8, 3];
//! let right = [1, 2, 3, 3, 4, 4, 5, 1, 6];
//! let calc = LcsCalculator::new(&left, &right);
//! assert_eq!(calc.length(), 4);
//! assert_eq!(calc.values(), &[1, 2, 5, 1][..]);
//! ```
//!
//! [`LcsCalculator`] owns the two inputs for its lifetime and caches each
//! derived result (table, index pairs, values) the first time it is
//! computed. For one-shot use, the free functions [`lcs()`] and [`length()`]
//! avoid the instance entirely.

pub mod calculator;
pub mod cancel;
pub mod error;
pub mod length;
pub mod pairs;
pub mod table;

pub use crate::calculator::LcsCalculator;
pub use crate::cancel::CancellationToken;
pub use crate::error::LcsError;
pub use crate::length::{length, length_with};
pub use crate::pairs::{index_pairs_from_table, lcs, lcs_with, values_of, IndexPair};
