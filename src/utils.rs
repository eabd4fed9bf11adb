use chrono::DateTime;

/// Render a server timestamp for display. Falls back to the raw string
/// when the server sends something that is not RFC 3339.
pub fn format_created_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn truncate_middle(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len || max_len < 5 {
        return s.to_string();
    }

    let keep = max_len - 3;
    let head = keep / 2;
    let tail = keep - head;

    let mut out = String::new();
    out.extend(&chars[..head]);
    out.push_str("...");
    out.extend(&chars[chars.len() - tail..]);
    out
}
