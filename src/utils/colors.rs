/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const CYAN: &str = "\x1b[36m";

/// Placeholder shown for missing clock values.
pub const EMPTY_CLOCK: &str = "--:--";

/// Placeholder shown when an aggregate has no result.
pub const NO_RESULT: &str = "-";

/// Grey out placeholder cells, leave real values untouched.
///
/// `colorize_optional("--:--  ")` → "<grey>--:--  <reset>"
pub fn colorize_optional(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == EMPTY_CLOCK || trimmed == NO_RESULT {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
