//! Formatting utilities used for CLI card and table outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad to a display width (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Wrap `text` at `width` columns and keep at most `max_lines` lines,
/// marking a cut with "…".
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if max_lines == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let wrapped: Vec<String> = textwrap::wrap(text.trim(), width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    if wrapped.len() <= max_lines {
        return wrapped;
    }

    let mut kept: Vec<String> = wrapped.into_iter().take(max_lines).collect();
    if let Some(last) = kept.last_mut() {
        // leave room for the ellipsis on the last kept line
        while UnicodeWidthStr::width(last.as_str()) + 1 > width && last.pop().is_some() {}
        last.push('…');
    }
    kept
}
