/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Green background badge for "Open Now", grey for "Closed".
pub fn badge(label: &str, open: bool) -> String {
    if open {
        format!("\x1b[42;97;1m {label} {RESET}")
    } else {
        format!("\x1b[100;97m {label} {RESET}")
    }
}

/// Plain bracketed badge (floor labels).
pub fn tag(label: &str) -> String {
    format!("{CYAN}[{label}]{RESET}")
}

pub fn colorize_outcome(message: &str, is_error: bool) -> String {
    if is_error {
        format!("{RED}{message}{RESET}")
    } else {
        format!("{GREEN}{message}{RESET}")
    }
}
