//! User-facing notifications (the CLI counterpart of toast messages).

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

fn emit(level: Level, line: String) {
    match level {
        Level::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

/// Fire-and-forget notification with a title and an optional description.
pub fn notify<T: fmt::Display>(level: Level, title: T, description: Option<&str>) {
    let (color, icon) = level.style();
    let mut line = format!("{}{}{} {}{}", color, BOLD, icon, title, RESET);
    if let Some(desc) = description {
        line.push_str(&format!(" {}{}{}", DIM, desc, RESET));
    }
    emit(level, line);
}

pub fn info<T: fmt::Display>(msg: T) {
    notify(Level::Info, msg, None);
}

pub fn success<T: fmt::Display>(msg: T) {
    notify(Level::Success, msg, None);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notify(Level::Warning, msg, None);
}

pub fn error<T: fmt::Display>(msg: T) {
    notify(Level::Error, msg, None);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", FG_BLUE, BOLD, msg, RESET);
}
