//! Error type shared by all fallible entry points.

/// Error type for LCS computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LcsError {
    /// The caller's cancellation token fired before the computation
    /// finished. No partial result is retained; re-invoke with a fresh
    /// token to retry.
    #[error("computation cancelled")]
    Cancelled,

    /// A caller-supplied alignment table is inconsistent with the
    /// sequences it was paired with. This indicates a precondition
    /// violation on the caller's side, not a runtime fault.
    #[error("table shape mismatch: {0}")]
    ShapeMismatch(String),
}
