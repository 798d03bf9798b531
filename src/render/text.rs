//! Plain and address-gutter text rendering
//!
//! Without a line-offset table the listing is reproduced verbatim. With one,
//! every line is prefixed by a fixed-width gutter column so downstream
//! pagers can align output:
//!
//! ```text
//!                   |{
//!     0x00001158    |    sym.imp.puts("Hello, World!");
//! ```
//!
//! The gutter is 19 bytes: four spaces, the address as `0x`-prefixed
//! lowercase hex zero-padded to 8 digits (wider addresses grow the column),
//! four spaces, and a pipe; or 18 spaces and a pipe when the line has no
//! address.

use tracing::debug;

use crate::annotations::{line_ranges, AnnotatedCode, NO_OFFSET};

const BLANK_GUTTER: &str = "                  |";

/// Render the listing, with an address gutter if a line-offset table is
/// given
///
/// `line_offsets` is the table produced by
/// [`AnnotatedCode::line_offsets`]; entries beyond its length render as
/// having no address. Line terminators are reproduced verbatim, so the
/// output minus gutters equals the listing.
pub fn render_text(code: &AnnotatedCode, line_offsets: Option<&[u64]>) -> String {
    let offsets = match line_offsets {
        Some(offsets) => offsets,
        None => return code.code().to_string(),
    };

    let text = code.code();
    let mut out = String::with_capacity(text.len() + (offsets.len() + 1) * BLANK_GUTTER.len());
    let mut lines = 0usize;
    for (idx, line) in line_ranges(text).enumerate() {
        match offsets.get(idx).copied().unwrap_or(NO_OFFSET) {
            NO_OFFSET => out.push_str(BLANK_GUTTER),
            offset => out.push_str(&format!("    {:#010x}    |", offset)),
        }
        out.push_str(&text[line]);
        lines += 1;
    }
    debug!(lines, "rendered listing with address gutter");
    out
}
