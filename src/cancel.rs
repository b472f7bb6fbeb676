//! Cooperative cancellation for long-running DP loops.
//!
//! Cancellation is advisory and pull-based: the caller keeps a clone of the
//! token and fires it; the table and length loops poll it once per outer
//! iteration. That granularity bounds the extra work performed after a
//! cancellation signal to roughly one row or column, rather than
//! guaranteeing prompt cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::LcsError;

/// Cooperative cancellation token backed by a shared atomic flag.
///
/// # Example
/// ```
/// use lcs_dp::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token. It stays unfired until [`cancel`](Self::cancel)
    /// is called on it or on one of its clones.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation. Idempotent; affects all clones of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint form: returns `Err(LcsError::Cancelled)` once the token
    /// has fired.
    pub fn check(&self) -> Result<(), LcsError> {
        if self.is_cancelled() {
            Err(LcsError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
