//! Error types for Glosa

use thiserror::Error;

/// Errors produced by the renderers
///
/// Queries are infallible by contract: malformed offsets and ranges match
/// nothing instead of failing. Serialization is the only fallible surface.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
