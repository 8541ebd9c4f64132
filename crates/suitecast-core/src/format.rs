//! Pure formatting helpers (no I/O, no state).

/// Separator between inline items (defect summaries, footer links).
pub const BAR_SEPARATOR: &str = " ｜ ";

/// Marker appended to truncated text.
pub const TRUNCATION_MARKER: &str = "...";

/// Whole-number pass percentage; `total == 0` yields 0.
pub fn percentage(passed: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((passed as f64 / total as f64) * 100.0).round() as u64
}

/// `HH:MM:SS`; hours are not wrapped at 24.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Cut `text` to `max_chars` characters and append the marker when longer.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Slack-style `<url|text>` link token.
pub fn link_token(url: &str, text: &str) -> String {
    format!("<{}|{}>", url, text)
}

/// `*text*`
pub fn bold(text: &str) -> String {
    format!("*{}*", text)
}
