//! Unmatched-region tracking for one side of a differencing run.
//!
//! Each side starts as a single unmatched block spanning every line. As the
//! matcher claims line ranges, the containing block is split into the
//! portions before and after the claim. Zero-length sub-blocks are kept as
//! positional placeholders: each claim grows both sides' lists by exactly
//! one, which keeps the lists pairwise aligned for hunk generation.

use crate::error::{DiffError, DiffResult};

/// A contiguous half-open range `[start_line, start_line + num_lines)` of
/// lines not yet attributed to any matching block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmatchedBlock {
    /// First line of the range.
    pub start_line: usize,
    /// Number of lines in the range. May be zero (positional placeholder).
    pub num_lines: usize,
}

impl UnmatchedBlock {
    /// Create a block covering `[start_line, start_line + num_lines)`.
    pub fn new(start_line: usize, num_lines: usize) -> Self {
        Self {
            start_line,
            num_lines,
        }
    }

    /// One past the last line of the range.
    pub fn end_line(&self) -> usize {
        self.start_line + self.num_lines
    }

    /// Returns `true` if the block holds no lines.
    pub fn is_empty(&self) -> bool {
        self.num_lines == 0
    }
}

/// A discovered correspondence: `num_lines` consecutive lines that are
/// identical on both sides, starting at the given per-side offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingBlock {
    /// Start of the run in the left text.
    pub left_start: usize,
    /// Start of the run in the right text.
    pub right_start: usize,
    /// Length of the run.
    pub num_lines: usize,
}

/// Per-side tracker owning the ordered unmatched-block list and an explicit
/// per-line matched marker.
///
/// Invariant: every line index belongs either to a claimed (matched) range
/// or to exactly one unmatched block; the tracker never loses coverage.
#[derive(Clone, Debug)]
pub struct RegionTracker {
    blocks: Vec<UnmatchedBlock>,
    matched: Vec<bool>,
}

impl RegionTracker {
    /// Start with a single block spanning the full line range. An empty
    /// side still gets one degenerate block so the two sides' lists stay
    /// index-aligned.
    pub fn new(num_lines: usize) -> Self {
        Self {
            blocks: vec![UnmatchedBlock::new(0, num_lines)],
            matched: vec![false; num_lines],
        }
    }

    /// The current ordered unmatched-block list.
    pub fn blocks(&self) -> &[UnmatchedBlock] {
        &self.blocks
    }

    /// Total number of lines on this side.
    pub fn line_count(&self) -> usize {
        self.matched.len()
    }

    /// Returns `true` if no line in `[start, start + len)` has been claimed.
    pub fn is_unmatched(&self, start: usize, len: usize) -> bool {
        start + len <= self.matched.len() && !self.matched[start..start + len].contains(&true)
    }

    /// Returns `true` if a fully unmatched window of `len` lines exists
    /// anywhere on this side.
    pub fn has_window(&self, len: usize) -> bool {
        self.blocks.iter().any(|b| b.num_lines >= len)
    }

    /// The first unmatched block still holding at least one line.
    /// Zero-length placeholders are alignment artifacts, not candidates.
    pub fn first_open_block(&self) -> Option<UnmatchedBlock> {
        self.blocks.iter().copied().find(|b| !b.is_empty())
    }

    /// Claim `[start, start + len)` for a match: mark the lines matched and
    /// replace the containing block with the sub-blocks before and after
    /// the claim. Both sub-blocks are kept even when empty.
    ///
    /// `len` must be at least one line. A range not covered by a single
    /// unmatched block violates the coverage invariant and is reported as
    /// an error rather than patched over.
    pub fn claim(&mut self, start: usize, len: usize) -> DiffResult<()> {
        let end = start + len;
        let idx = self
            .blocks
            .iter()
            .position(|b| !b.is_empty() && b.start_line <= start && end <= b.end_line())
            .ok_or(DiffError::ClaimOutsideRegion { start, end })?;
        let block = self.blocks[idx];

        for mark in &mut self.matched[start..end] {
            *mark = true;
        }

        self.blocks[idx] = UnmatchedBlock::new(block.start_line, start - block.start_line);
        self.blocks
            .insert(idx + 1, UnmatchedBlock::new(end, block.end_line() - end));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_one_full_block() {
        let tracker = RegionTracker::new(5);
        assert_eq!(tracker.blocks(), &[UnmatchedBlock::new(0, 5)]);
        assert!(tracker.is_unmatched(0, 5));
        assert!(tracker.has_window(5));
        assert!(!tracker.has_window(6));
    }

    #[test]
    fn empty_side_keeps_a_placeholder_block() {
        let tracker = RegionTracker::new(0);
        assert_eq!(tracker.blocks().len(), 1);
        assert!(tracker.blocks()[0].is_empty());
        assert!(tracker.first_open_block().is_none());
        assert!(!tracker.has_window(1));
    }

    #[test]
    fn claim_splits_into_before_and_after() {
        let mut tracker = RegionTracker::new(10);
        tracker.claim(3, 4).unwrap();

        assert_eq!(
            tracker.blocks(),
            &[UnmatchedBlock::new(0, 3), UnmatchedBlock::new(7, 3)]
        );
        assert!(tracker.is_unmatched(0, 3));
        assert!(!tracker.is_unmatched(2, 2));
        assert!(tracker.is_unmatched(7, 3));
    }

    #[test]
    fn claim_at_block_edges_keeps_empty_placeholders() {
        let mut tracker = RegionTracker::new(4);
        tracker.claim(0, 4).unwrap();

        assert_eq!(
            tracker.blocks(),
            &[UnmatchedBlock::new(0, 0), UnmatchedBlock::new(4, 0)]
        );
        assert!(tracker.first_open_block().is_none());
    }

    #[test]
    fn each_claim_grows_the_list_by_one() {
        let mut tracker = RegionTracker::new(10);
        tracker.claim(4, 2).unwrap();
        assert_eq!(tracker.blocks().len(), 2);
        tracker.claim(0, 1).unwrap();
        assert_eq!(tracker.blocks().len(), 3);
        tracker.claim(8, 2).unwrap();
        assert_eq!(tracker.blocks().len(), 4);
    }

    #[test]
    fn first_open_block_skips_placeholders() {
        let mut tracker = RegionTracker::new(6);
        tracker.claim(0, 2).unwrap();

        let open = tracker.first_open_block().unwrap();
        assert_eq!(open, UnmatchedBlock::new(2, 4));
    }

    #[test]
    fn claim_spanning_matched_lines_is_an_error() {
        let mut tracker = RegionTracker::new(10);
        tracker.claim(4, 2).unwrap();

        let err = tracker.claim(3, 4).unwrap_err();
        assert!(matches!(
            err,
            DiffError::ClaimOutsideRegion { start: 3, end: 7 }
        ));
    }

    #[test]
    fn claim_past_the_end_is_an_error() {
        let mut tracker = RegionTracker::new(3);
        assert!(tracker.claim(2, 5).is_err());
    }

    #[test]
    fn window_queries_track_claims() {
        let mut tracker = RegionTracker::new(8);
        assert!(tracker.has_window(8));

        tracker.claim(3, 2).unwrap();
        assert!(!tracker.has_window(4));
        assert!(tracker.has_window(3));
        assert!(tracker.is_unmatched(0, 3));
        assert!(!tracker.is_unmatched(3, 1));
    }
}
