//! Glosa - annotation index for decompiled code
//!
//! Glosa binds byte ranges of a decompiled listing to structured metadata:
//! source addresses, syntax-highlight classes, and named symbol references.
//! On top of that index it answers point and range containment queries,
//! derives one address per listing line, and renders the annotated listing
//! in several output forms.
//!
//! # Modules
//!
//! - `annotations`: the annotation model, the store, and the line-offset
//!   reduction
//! - `render`: output formatters (plain/gutter text, JSON, comment-command
//!   scripts)
//! - `error`: error types

pub mod annotations;
pub mod error;
pub mod render;

// Re-export commonly used types
pub use annotations::{AnnotatedCode, Annotation, AnnotationKind, SyntaxHighlightKind, NO_OFFSET};
pub use error::RenderError;
pub use render::{render_comment_commands, render_json, render_text};
