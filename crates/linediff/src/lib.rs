//! Block-greedy line diff engine.
//!
//! Computes a line-level difference between two text blobs, reporting an
//! ordered list of hunks -- regions where the two sides diverge -- with all
//! lines outside the hunks claimed by matching blocks.
//!
//! The matcher works from the longest candidate block length down to single
//! lines: at each length it claims identical line runs on both sides, so
//! long common blocks win over coincidental one-line matches. Right-side
//! search is restricted to the first still-open unmatched region, trading
//! detection of far-moved content for positional locality. The algorithm is
//! deliberately simple and quadratic in line count; it is meant for
//! editor-sized texts, not large-scale batch diffing.
//!
//! # Key Types
//!
//! - [`TextDifferencer`] -- one differencing run over a text pair
//! - [`DiffHunk`] -- one reported region of divergence
//! - [`MatchingBlock`] / [`UnmatchedBlock`] -- the runs the matcher tracks
//! - [`DiffError`] / [`DiffResult`] -- error taxonomy
//!
//! # Example
//!
//! ```
//! use linediff::diff_texts;
//!
//! let hunks = diff_texts("a\nb\nc", "a\nZ\nc").unwrap();
//! assert_eq!(hunks.len(), 1);
//! assert_eq!((hunks[0].left_start, hunks[0].left_count), (1, 1));
//! assert_eq!((hunks[0].right_start, hunks[0].right_count), (1, 1));
//! ```

pub mod differencer;
pub mod error;
pub mod lines;
pub mod regions;

pub use differencer::{diff_texts, DiffHunk, TextDifferencer};
pub use error::{DiffError, DiffResult};
pub use lines::split_lines;
pub use regions::{MatchingBlock, UnmatchedBlock};
