//! Stateful, caching LCS calculator.
//!
//! [`LcsCalculator`] borrows both input slices and lazily computes the
//! alignment table, the index pairs, and the values, each at most once.
//! Length is read off the cached table rather than the rolling-row path,
//! trading the O(n·m) grid for reuse by `index_pairs` and `values`.
//!
//! Caches live in [`std::cell::OnceCell`], so a calculator is `!Sync`:
//! sharing one instance across threads is ruled out at compile time, which
//! is the intended contract. Wrap it in external synchronization if you
//! need that, or give each thread its own instance.

use std::cell::OnceCell;

use crate::cancel::CancellationToken;
use crate::error::LcsError;
use crate::pairs::{self, IndexPair};
use crate::table;

/// LCS calculator over two borrowed sequences.
///
/// Construction does no work; each derived quantity is computed on first
/// access and cached for the lifetime of the instance. The inputs are never
/// mutated after construction, so caches are never invalidated.
pub struct LcsCalculator<'a, T> {
    left: &'a [T],
    right: &'a [T],
    table: OnceCell<Vec<Vec<usize>>>,
    index_pairs: OnceCell<Vec<IndexPair>>,
    values: OnceCell<Vec<T>>,
}

impl<'a, T: PartialEq> LcsCalculator<'a, T> {
    /// Create a calculator for `left` and `right`.
    #[must_use]
    pub fn new(left: &'a [T], right: &'a [T]) -> Self {
        Self {
            left,
            right,
            table: OnceCell::new(),
            index_pairs: OnceCell::new(),
            values: OnceCell::new(),
        }
    }

    /// The left input sequence, exactly as supplied.
    #[must_use]
    pub fn left(&self) -> &'a [T] {
        self.left
    }

    /// The right input sequence, exactly as supplied.
    #[must_use]
    pub fn right(&self) -> &'a [T] {
        self.right
    }

    /// Cancellable form of [`table`](Self::table). Builds the alignment
    /// table on first call and caches it; later calls return the cache
    /// without touching the token.
    pub fn table_with(&self, cancel: &CancellationToken) -> Result<&[Vec<usize>], LcsError> {
        if let Some(cached) = self.table.get() {
            return Ok(cached);
        }
        let built = table::build(self.left, self.right, cancel)?;
        Ok(self.table.get_or_init(|| built))
    }

    /// The full alignment table (built on first call, cached after).
    #[must_use]
    pub fn table(&self) -> &[Vec<usize>] {
        match self.table_with(&CancellationToken::new()) {
            Ok(cached) => cached,
            Err(_) => unreachable!("token is never cancelled"),
        }
    }

    /// Cancellable form of [`length`](Self::length).
    pub fn length_with(&self, cancel: &CancellationToken) -> Result<usize, LcsError> {
        let table = self.table_with(cancel)?;
        Ok(table[self.left.len()][self.right.len()])
    }

    /// LCS length, read from the cached table.
    ///
    /// Unlike the free function [`crate::length()`], this always materializes
    /// the full table, since the other accessors reuse it.
    #[must_use]
    pub fn length(&self) -> usize {
        match self.length_with(&CancellationToken::new()) {
            Ok(len) => len,
            Err(_) => unreachable!("token is never cancelled"),
        }
    }

    /// Cancellable form of [`index_pairs`](Self::index_pairs).
    pub fn index_pairs_with(&self, cancel: &CancellationToken) -> Result<&[IndexPair], LcsError> {
        if let Some(cached) = self.index_pairs.get() {
            return Ok(cached);
        }
        let table = self.table_with(cancel)?;
        let pairs = pairs::index_pairs_from_table(self.left, self.right, table)?;
        Ok(self.index_pairs.get_or_init(|| pairs))
    }

    /// The matched index pairs of one LCS, in increasing order on both
    /// sides (built on first call, cached after).
    #[must_use]
    pub fn index_pairs(&self) -> &[IndexPair] {
        match self.index_pairs_with(&CancellationToken::new()) {
            Ok(cached) => cached,
            Err(_) => unreachable!("token is never cancelled"),
        }
    }
}

impl<'a, T: PartialEq + Clone> LcsCalculator<'a, T> {
    /// Cancellable form of [`values`](Self::values).
    pub fn values_with(&self, cancel: &CancellationToken) -> Result<&[T], LcsError> {
        if let Some(cached) = self.values.get() {
            return Ok(cached);
        }
        let pairs = self.index_pairs_with(cancel)?;
        let values = pairs::values_of(self.left, pairs);
        Ok(self.values.get_or_init(|| values))
    }

    /// The LCS element values (built on first call, cached after).
    #[must_use]
    pub fn values(&self) -> &[T] {
        match self.values_with(&CancellationToken::new()) {
            Ok(cached) => cached,
            Err(_) => unreachable!("token is never cancelled"),
        }
    }
}
