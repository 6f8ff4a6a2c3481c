//! Error types for the diff crate.

/// Errors that can occur while differencing two texts.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A backing reader failed before one of the input texts was fully
    /// consumed. Diffing truncated input would silently drop hunks, so
    /// construction aborts instead.
    #[error("failed to read input text: {0}")]
    InputRead(#[from] std::io::Error),

    /// The left and right unmatched-region lists had different lengths at
    /// hunk-generation time. The lists must stay pairwise aligned; a
    /// mismatch indicates an algorithmic bug, never a property of the input.
    #[error("unmatched region lists diverged: {left} blocks on the left, {right} on the right")]
    RegionMismatch { left: usize, right: usize },

    /// A matched line range was not covered by a single unmatched region.
    #[error("matched range [{start}, {end}) does not lie inside one unmatched region")]
    ClaimOutsideRegion { start: usize, end: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
