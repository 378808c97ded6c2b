/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Completion color:
/// 100% → green
/// \>= 50% → yellow
/// otherwise → grey (mostly still ahead)
pub fn color_for_completion(percentage: f64) -> &'static str {
    if percentage >= 100.0 {
        GREEN
    } else if percentage >= 50.0 {
        YELLOW
    } else {
        GREY
    }
}

/// Alive → green, down → red.
pub fn color_for_alive(alive: bool) -> &'static str {
    if alive { GREEN } else { RED }
}

/// Wraps `value` in `color` unless colors are disabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
