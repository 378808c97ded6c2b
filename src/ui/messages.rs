use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

/// Warnings go to stderr so they never pollute exported data on stdout.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Section header, plain when colors are disabled.
pub fn header<T: fmt::Display>(msg: T, colors: bool) {
    if colors {
        println!("{}{}== {}{}", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("== {}", msg);
    }
}
