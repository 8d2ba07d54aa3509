//! Message formatting for the call-site macros
//!
//! `format!` panics when a `Display` implementation reports an error. The
//! macros route through `render_message` instead so that a misbehaving
//! argument degrades the message to its raw template rather than failing the
//! logging call.

use std::fmt;

/// Render `args`, falling back to `template` if any argument fails to format
pub fn render_message(args: fmt::Arguments<'_>, template: &str) -> String {
    if let Some(text) = args.as_str() {
        return text.to_string();
    }

    let mut out = String::new();
    match fmt::write(&mut out, args) {
        Ok(()) => out,
        Err(_) => template.to_string(),
    }
}
