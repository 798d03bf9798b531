//! In-memory annotation store
//!
//! [`AnnotatedCode`] owns one immutable decompiled listing and an
//! append-only sequence of annotations over it. Insertion order is
//! preserved and is part of the contract: queries report matches in store
//! order, and the line-offset reduction resolves ties by first insertion.

use super::types::{Annotation, AnnotationKind};

/// A decompiled listing together with its annotations
///
/// The listing is set once at construction and never mutated; callers
/// replace the whole structure rather than editing text in place.
/// Annotations may be appended at any time.
#[derive(Debug, Clone)]
pub struct AnnotatedCode {
    code: String,
    annotations: Vec<Annotation>,
}

impl AnnotatedCode {
    /// Create a store for the given listing with no annotations
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            annotations: Vec::new(),
        }
    }

    /// The annotated listing
    pub fn code(&self) -> &str {
        &self.code
    }

    /// All annotations, in insertion order
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Append an annotation
    ///
    /// The range must satisfy `start <= end <= code.len()`; this is a
    /// caller contract, checked only in debug builds.
    pub fn add(&mut self, annotation: Annotation) {
        debug_assert!(
            annotation.start <= annotation.end,
            "annotation range is inverted: [{}, {})",
            annotation.start,
            annotation.end
        );
        debug_assert!(
            annotation.end <= self.code.len(),
            "annotation end {} exceeds listing length {}",
            annotation.end,
            self.code.len()
        );
        self.annotations.push(annotation);
    }

    /// All annotations whose range contains the byte offset
    /// (`start <= offset < end`), in insertion order
    ///
    /// Offsets past the end of the listing match nothing.
    pub fn annotations_in(&self, offset: usize) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.contains(offset))
            .collect()
    }

    /// All annotations whose range overlaps `[range_start, range_end)`,
    /// in insertion order
    ///
    /// An annotation overlaps when `start < range_end && end > range_start`;
    /// ranges that merely touch at a boundary do not overlap. Degenerate
    /// queries (`range_start >= range_end`) match nothing — without this
    /// guard the overlap inequalities would admit annotations strictly
    /// containing an inverted range.
    pub fn annotations_range(&self, range_start: usize, range_end: usize) -> Vec<&Annotation> {
        if range_start >= range_end {
            return Vec::new();
        }
        self.annotations
            .iter()
            .filter(|a| a.overlaps(range_start, range_end))
            .collect()
    }

    /// The address of the first offset annotation containing the byte
    /// offset, if any
    ///
    /// This is the "address under the cursor" lookup: reference annotations
    /// also carry addresses, but only offset annotations map a range back to
    /// the instruction it was decompiled from.
    pub fn offset_at(&self, offset: usize) -> Option<u64> {
        self.annotations
            .iter()
            .find(|a| matches!(a.kind, AnnotationKind::Offset { .. }) && a.contains(offset))
            .and_then(Annotation::offset)
    }
}
