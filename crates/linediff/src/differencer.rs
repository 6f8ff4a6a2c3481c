//! The differencing engine: block matching and hunk generation.
//!
//! One [`TextDifferencer`] owns one run over a text pair. The matcher scans
//! candidate block lengths from `max(left, right)` line count down to one,
//! claiming identical windows as it finds them, so long common blocks always
//! win over coincidental single-line matches. Whatever stays unclaimed on
//! both sides pairs up positionally into [`DiffHunk`]s.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiffError, DiffResult};
use crate::lines::{read_lines, split_lines};
use crate::regions::{MatchingBlock, RegionTracker};

/// One reported region of divergence between the two texts.
///
/// Covers `left_count` lines starting at `left_start` on the left and
/// `right_count` lines starting at `right_start` on the right. Either count
/// may be zero (a pure insertion or deletion), never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    /// First diverging line in the left text.
    pub left_start: usize,
    /// First diverging line in the right text.
    pub right_start: usize,
    /// Number of diverging lines on the left.
    pub left_count: usize,
    /// Number of diverging lines on the right.
    pub right_count: usize,
}

impl DiffHunk {
    /// One past the last diverging line on the left.
    pub fn left_end(&self) -> usize {
        self.left_start + self.left_count
    }

    /// One past the last diverging line on the right.
    pub fn right_end(&self) -> usize {
        self.right_start + self.right_count
    }

    /// Returns `true` if the hunk only adds lines on the right.
    pub fn is_insertion(&self) -> bool {
        self.left_count == 0
    }

    /// Returns `true` if the hunk only removes lines from the left.
    pub fn is_deletion(&self) -> bool {
        self.right_count == 0
    }
}

/// A completed line-level differencing run over one text pair.
///
/// Construction runs the whole algorithm synchronously; a value of this
/// type always holds a finished result. Runs are single-threaded and own
/// all their state, so independent instances may be used from any number
/// of threads. A new text pair needs a new differencer.
#[derive(Clone, Debug)]
pub struct TextDifferencer {
    left: Vec<String>,
    right: Vec<String>,
    matches: Vec<MatchingBlock>,
    left_regions: RegionTracker,
    right_regions: RegionTracker,
    diffs: Vec<DiffHunk>,
}

impl TextDifferencer {
    /// Difference two in-memory texts.
    pub fn new(left_text: &str, right_text: &str) -> DiffResult<Self> {
        Self::from_lines(split_lines(left_text), split_lines(right_text))
    }

    /// Difference two streamed texts. A read failure on either side aborts
    /// construction; a truncated side is never diffed as if complete.
    pub fn from_readers<L: BufRead, R: BufRead>(left: L, right: R) -> DiffResult<Self> {
        Self::from_lines(read_lines(left)?, read_lines(right)?)
    }

    fn from_lines(left: Vec<String>, right: Vec<String>) -> DiffResult<Self> {
        let mut differencer = Self {
            left_regions: RegionTracker::new(left.len()),
            right_regions: RegionTracker::new(right.len()),
            matches: Vec::new(),
            diffs: Vec::new(),
            left,
            right,
        };
        differencer.run()?;
        Ok(differencer)
    }

    /// The ordered hunk list. Empty means the texts are line-for-line
    /// identical under the matcher's locality policy.
    pub fn diffs(&self) -> &[DiffHunk] {
        &self.diffs
    }

    /// Consume the differencer, keeping only the hunk list.
    pub fn into_diffs(self) -> Vec<DiffHunk> {
        self.diffs
    }

    /// Returns `true` if no divergence was found.
    pub fn is_identical(&self) -> bool {
        self.diffs.is_empty()
    }

    /// The discovered common blocks, ascending by left start line.
    pub fn matching_blocks(&self) -> &[MatchingBlock] {
        &self.matches
    }

    /// Number of lines in the left text.
    pub fn left_line_count(&self) -> usize {
        self.left.len()
    }

    /// Number of lines in the right text.
    pub fn right_line_count(&self) -> usize {
        self.right.len()
    }

    fn run(&mut self) -> DiffResult<()> {
        let max_len = self.left.len().max(self.right.len());
        for num_lines in (1..=max_len).rev() {
            self.find_matches(num_lines)?;
        }
        self.generate_diffs()?;

        debug!(
            left_lines = self.left.len(),
            right_lines = self.right.len(),
            matches = self.matches.len(),
            hunks = self.diffs.len(),
            "computed line diff"
        );
        Ok(())
    }

    /// One pass at a fixed candidate length: try every still-unmatched left
    /// window, leftmost first.
    fn find_matches(&mut self, num_lines: usize) -> DiffResult<()> {
        if num_lines > self.left.len() || !self.right_regions.has_window(num_lines) {
            return Ok(());
        }

        for x in 0..=(self.left.len() - num_lines) {
            if !self.left_regions.is_unmatched(x, num_lines) {
                continue;
            }
            if let Some(found) = self.find_right_match(x, num_lines) {
                self.record_match(found)?;
            }
        }
        Ok(())
    }

    /// Search for a right-side window equal to the left window at
    /// `left_start`.
    ///
    /// The search is restricted to the first open right-side unmatched
    /// block: a match far from its original position would not line up
    /// positionally with the surrounding text, so distant candidates are
    /// ignored. If that block holds fewer than `num_lines` lines the window
    /// stays unmatched at this length and is revisited at smaller ones.
    fn find_right_match(&self, left_start: usize, num_lines: usize) -> Option<MatchingBlock> {
        let block = self.right_regions.first_open_block()?;
        if block.num_lines < num_lines {
            return None;
        }

        for y in block.start_line..=(block.end_line() - num_lines) {
            if self.left[left_start..left_start + num_lines]
                == self.right[y..y + num_lines]
            {
                return Some(MatchingBlock {
                    left_start,
                    right_start: y,
                    num_lines,
                });
            }
        }
        None
    }

    /// Record a discovered match: insert it in left-start order and claim
    /// the line ranges on both sides.
    fn record_match(&mut self, found: MatchingBlock) -> DiffResult<()> {
        let at = self
            .matches
            .partition_point(|m| m.left_start < found.left_start);
        self.matches.insert(at, found);

        self.left_regions.claim(found.left_start, found.num_lines)?;
        self.right_regions.claim(found.right_start, found.num_lines)?;

        debug!(
            num_lines = found.num_lines,
            left = found.left_start,
            right = found.right_start,
            "recorded matching block"
        );
        Ok(())
    }

    /// Pair the residual unmatched blocks index-by-index into hunks.
    ///
    /// The two lists grow in lockstep (one claim per side per match), so a
    /// length mismatch here is an algorithmic fault and is surfaced rather
    /// than truncated away; truncation would silently drop hunks.
    fn generate_diffs(&mut self) -> DiffResult<()> {
        let left_blocks = self.left_regions.blocks();
        let right_blocks = self.right_regions.blocks();
        if left_blocks.len() != right_blocks.len() {
            return Err(DiffError::RegionMismatch {
                left: left_blocks.len(),
                right: right_blocks.len(),
            });
        }

        let mut diffs = Vec::new();
        for (left_block, right_block) in left_blocks.iter().zip(right_blocks) {
            // Both sides empty means perfect alignment at this position.
            if left_block.is_empty() && right_block.is_empty() {
                continue;
            }
            diffs.push(DiffHunk {
                left_start: left_block.start_line,
                right_start: right_block.start_line,
                left_count: left_block.num_lines,
                right_count: right_block.num_lines,
            });
        }
        self.diffs = diffs;
        Ok(())
    }
}

/// Difference two texts and return just the hunk list.
pub fn diff_texts(left: &str, right: &str) -> DiffResult<Vec<DiffHunk>> {
    Ok(TextDifferencer::new(left, right)?.into_diffs())
}
