//! Display formatting for durations and fares.
//!
//! Formatting is a pure projection applied only after all numeric work is
//! done; nothing in the planner ever reads a formatted string back except
//! `parse_fare`, the test-visible inverse of `format_fare`.

/// Format a duration in seconds as e.g. `"2h 5m 30s"`.
///
/// Zero-valued leading units are omitted; seconds are always shown.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if minutes > 0 || hours > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    out.push_str(&format!("{seconds}s"));
    out
}

/// Format a fare as a thousands-grouped amount, e.g. `"1,250 won"`.
pub fn format_fare(fare: u64) -> String {
    format!("{} won", group_thousands(fare))
}

/// Parse a fare string produced by [`format_fare`] back to its integer
/// value. Returns `None` for anything else.
pub fn parse_fare(s: &str) -> Option<u64> {
    let digits: String = s
        .strip_suffix(" won")?
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Insert a comma every three digits from the right.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
