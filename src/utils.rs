//! Utility helpers shared across the WASM frontend.

use crate::constants::{
    DIFFICULTY_ADVANCED_COLOR, DIFFICULTY_BEGINNER_COLOR, DIFFICULTY_INTERMEDIATE_COLOR,
};

/// Escape text for interpolation into `innerHTML`.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Badge colour for a course difficulty.  Anything that is not Beginner or
/// Intermediate is shown as advanced.
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty {
        "Beginner" => DIFFICULTY_BEGINNER_COLOR,
        "Intermediate" => DIFFICULTY_INTERMEDIATE_COLOR,
        _ => DIFFICULTY_ADVANCED_COLOR,
    }
}

/// Local wall-clock time in the format used by export footers.
pub fn export_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
