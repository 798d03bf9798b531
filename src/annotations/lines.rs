//! Per-line offset reduction
//!
//! Reduces the annotation set to one source address per listing line, for
//! address-gutter display and comment generation. A line's address comes
//! from the first offset annotation (in insertion order) whose range lies
//! entirely within that line; lines with no such annotation get
//! [`NO_OFFSET`].

use std::ops::Range;

use tracing::debug;

use super::store::AnnotatedCode;
use super::types::{Annotation, AnnotationKind};

/// Sentinel address for lines with no associated offset annotation
pub const NO_OFFSET: u64 = u64::MAX;

/// Iterate over the byte range of every line of `text`
///
/// A line's range runs from its first byte to one past its `\n`, so the
/// terminator belongs to the line; the final line ends at `text.len()`.
/// Empty text is a single empty line. Concatenating the ranges reproduces
/// the text exactly.
pub(crate) fn line_ranges(text: &str) -> LineRanges<'_> {
    LineRanges {
        text,
        cur: 0,
        done: false,
    }
}

pub(crate) struct LineRanges<'a> {
    text: &'a str,
    cur: usize,
    done: bool,
}

impl Iterator for LineRanges<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.cur;
        let end = match self.text[start..].find('\n') {
            Some(i) => start + i + 1,
            None => self.text.len(),
        };
        self.cur = end;
        if end >= self.text.len() {
            self.done = true;
        }
        Some(start..end)
    }
}

impl AnnotatedCode {
    /// Derive one source address per listing line
    ///
    /// Returns exactly one entry per line of the listing: the address of the
    /// first fully-line-contained offset annotation in insertion order, or
    /// [`NO_OFFSET`] when the line has none. Annotations crossing a line
    /// boundary never contribute.
    pub fn line_offsets(&self) -> Vec<u64> {
        let offsets: Vec<u64> = self
            .line_offset_annotations()
            .into_iter()
            .map(|found| found.and_then(Annotation::offset).unwrap_or(NO_OFFSET))
            .collect();
        debug!(
            lines = offsets.len(),
            resolved = offsets.iter().filter(|&&o| o != NO_OFFSET).count(),
            "derived per-line offset table"
        );
        offsets
    }

    /// The winning offset annotation per line, if any
    ///
    /// The scan is a stable linear scan in insertion order; reordering it
    /// would silently change which annotation wins under ties.
    pub(crate) fn line_offset_annotations(&self) -> Vec<Option<&Annotation>> {
        line_ranges(self.code())
            .map(|line| {
                self.annotations().iter().find(|a| {
                    matches!(a.kind, AnnotationKind::Offset { .. })
                        && a.start >= line.start
                        && a.start < line.end
                        && a.end <= line.end
                })
            })
            .collect()
    }
}
