//! Output formatters for annotated listings
//!
//! Three independent renderers consume an annotation store without mutating
//! it:
//!
//! - [`render_text`]: the listing verbatim, or line-by-line behind a
//!   fixed-width address gutter
//! - [`render_json`]: the pinned JSON wire format for UI consumers
//! - [`render_comment_commands`]: address-tagged comment commands for a
//!   downstream command interpreter

mod commands;
mod json;
mod text;

pub use commands::render_comment_commands;
pub use json::render_json;
pub use text::render_text;
