//! Comment-command script rendering
//!
//! Emits one comment command per listing line that resolved to a source
//! address, in line order:
//!
//! ```text
//! CCu base64:c3ltLmltcC5wdXRzKCJIZWxsbywgV29ybGQhIik= @ 0x1158
//! ```
//!
//! The payload is the text covered by the line's winning offset annotation
//! (the same annotation the line-offset reduction chose), whitespace-trimmed
//! and base64-coded with the standard alphabet so it survives the command
//! interpreter unquoted. Lines with no resolved address, or whose trimmed
//! payload is empty, emit nothing.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::debug;

use crate::annotations::AnnotatedCode;

/// Render the listing's resolved lines as comment commands
pub fn render_comment_commands(code: &AnnotatedCode) -> String {
    let mut out = String::new();
    let mut commands = 0usize;
    for (annotation, offset) in code
        .line_offset_annotations()
        .into_iter()
        .flatten()
        .filter_map(|a| a.offset().map(|offset| (a, offset)))
    {
        let payload = code.code()[annotation.start..annotation.end].trim();
        if payload.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "CCu base64:{} @ {:#x}\n",
            BASE64.encode(payload),
            offset
        ));
        commands += 1;
    }
    debug!(commands, "rendered comment commands");
    out
}
