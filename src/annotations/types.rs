//! Annotation types for decompiled listings
//!
//! An annotation binds a half-open byte range `[start, end)` of the listing
//! to one semantic fact: the source address the range was decompiled from,
//! the syntax class it should be highlighted as, or the symbol it names.
//!
//! The serialized form of an annotation is part of the JSON output contract
//! (see `render::json`): the kind tag and its payload fields flatten next to
//! `start`/`end` under stable key names.

use serde::{Deserialize, Serialize};

/// Syntax classes a highlight annotation can assign to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxHighlightKind {
    Keyword,
    Comment,
    Datatype,
    FunctionName,
    FunctionParameter,
    LocalVariable,
    ConstantVariable,
    GlobalVariable,
}

impl SyntaxHighlightKind {
    /// Stable lowercase name of this class, as used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxHighlightKind::Keyword => "keyword",
            SyntaxHighlightKind::Comment => "comment",
            SyntaxHighlightKind::Datatype => "datatype",
            SyntaxHighlightKind::FunctionName => "function_name",
            SyntaxHighlightKind::FunctionParameter => "function_parameter",
            SyntaxHighlightKind::LocalVariable => "local_variable",
            SyntaxHighlightKind::ConstantVariable => "constant_variable",
            SyntaxHighlightKind::GlobalVariable => "global_variable",
        }
    }
}

/// The kind of fact an annotation attaches to its range
///
/// Reference kinds (`FunctionName`, `GlobalVariable`, `ConstantVariable`)
/// name a symbol together with its address; variable kinds
/// (`LocalVariable`, `FunctionParameter`) name a binding with no address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotationKind {
    /// The range was decompiled from this source address
    Offset { offset: u64 },
    /// The range belongs to this syntax class
    SyntaxHighlight {
        syntax_highlight: SyntaxHighlightKind,
    },
    /// The range names a function
    FunctionName { name: String, offset: u64 },
    /// The range names a global variable
    GlobalVariable { name: String, offset: u64 },
    /// The range names a constant
    ConstantVariable { name: String, offset: u64 },
    /// The range names a local variable
    LocalVariable { name: String },
    /// The range names a function parameter
    FunctionParameter { name: String },
}

/// One annotation over a listing: a byte range plus the fact attached to it
///
/// `start` and `end` are byte offsets into the owning listing, with
/// `start <= end`; the annotation covers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// The attached fact
    #[serde(flatten)]
    pub kind: AnnotationKind,
}

impl Annotation {
    /// Create a new offset annotation
    pub fn new_offset(start: usize, end: usize, offset: u64) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::Offset { offset },
        }
    }

    /// Create a new syntax-highlight annotation
    pub fn new_syntax_highlight(
        start: usize,
        end: usize,
        syntax_highlight: SyntaxHighlightKind,
    ) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::SyntaxHighlight { syntax_highlight },
        }
    }

    /// Create a new function-name reference annotation
    pub fn new_function_name(start: usize, end: usize, name: &str, offset: u64) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::FunctionName {
                name: name.to_string(),
                offset,
            },
        }
    }

    /// Create a new global-variable reference annotation
    pub fn new_global_variable(start: usize, end: usize, name: &str, offset: u64) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::GlobalVariable {
                name: name.to_string(),
                offset,
            },
        }
    }

    /// Create a new constant reference annotation
    pub fn new_constant_variable(start: usize, end: usize, name: &str, offset: u64) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::ConstantVariable {
                name: name.to_string(),
                offset,
            },
        }
    }

    /// Create a new local-variable annotation
    pub fn new_local_variable(start: usize, end: usize, name: &str) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::LocalVariable {
                name: name.to_string(),
            },
        }
    }

    /// Create a new function-parameter annotation
    pub fn new_function_parameter(start: usize, end: usize, name: &str) -> Self {
        Self {
            start,
            end,
            kind: AnnotationKind::FunctionParameter {
                name: name.to_string(),
            },
        }
    }

    /// Check if this annotation references a named symbol with an address
    /// (function name, global variable, or constant)
    pub fn is_reference(&self) -> bool {
        matches!(
            self.kind,
            AnnotationKind::FunctionName { .. }
                | AnnotationKind::GlobalVariable { .. }
                | AnnotationKind::ConstantVariable { .. }
        )
    }

    /// Check if this annotation names a function-local binding
    /// (local variable or function parameter)
    pub fn is_variable(&self) -> bool {
        matches!(
            self.kind,
            AnnotationKind::LocalVariable { .. } | AnnotationKind::FunctionParameter { .. }
        )
    }

    /// Get the symbol or binding name if this kind carries one
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            AnnotationKind::FunctionName { name, .. }
            | AnnotationKind::GlobalVariable { name, .. }
            | AnnotationKind::ConstantVariable { name, .. }
            | AnnotationKind::LocalVariable { name }
            | AnnotationKind::FunctionParameter { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Get the source address if this kind carries one
    pub fn offset(&self) -> Option<u64> {
        match &self.kind {
            AnnotationKind::Offset { offset }
            | AnnotationKind::FunctionName { offset, .. }
            | AnnotationKind::GlobalVariable { offset, .. }
            | AnnotationKind::ConstantVariable { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Get the syntax class if this is a highlight annotation
    pub fn syntax_highlight(&self) -> Option<SyntaxHighlightKind> {
        match &self.kind {
            AnnotationKind::SyntaxHighlight { syntax_highlight } => Some(*syntax_highlight),
            _ => None,
        }
    }

    /// Check if the annotation's range contains the byte offset
    ///
    /// The range is half-open: `start <= offset < end`. A zero-length
    /// annotation contains no offset.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if the annotation's range overlaps the query range
    /// `[range_start, range_end)`
    ///
    /// Both inequalities are strict: an annotation ending exactly where the
    /// query starts (or starting exactly where it ends) does not overlap.
    pub fn overlaps(&self, range_start: usize, range_end: usize) -> bool {
        self.start < range_end && self.end > range_start
    }
}
