//! Text normalizer: trims lines, drops blank lines and decorative separators.

/// A line containing any of these is decoration, whatever else it holds.
pub const SEPARATORS: [&str; 2] = ["\u{2500}\u{2500}", "\u{2550}\u{2550}"];

pub fn is_separator_line(line: &str) -> bool {
    SEPARATORS.iter().any(|sep| line.contains(sep))
}

/// Trim every line, drop blank and separator lines, rejoin with `\n`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_separator_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
