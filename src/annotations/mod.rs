//! Annotation model and store for decompiled listings
//!
//! An [`AnnotatedCode`] owns one immutable listing and an append-only,
//! insertion-ordered sequence of [`Annotation`]s over it. Queries return
//! borrows in store order; [`AnnotatedCode::line_offsets`] reduces the
//! annotation set to one source address per listing line.
//!
//! # Annotation kinds
//!
//! - `Offset` - maps a range back to the address it was decompiled from
//! - `SyntaxHighlight` - assigns a syntax class to a range
//! - `FunctionName` / `GlobalVariable` / `ConstantVariable` - reference
//!   annotations: a named symbol plus its address
//! - `LocalVariable` / `FunctionParameter` - variable annotations: a named
//!   binding with no address

mod lines;
mod store;
mod types;

pub use lines::NO_OFFSET;
pub use store::AnnotatedCode;
pub use types::{Annotation, AnnotationKind, SyntaxHighlightKind};

pub(crate) use lines::line_ranges;
