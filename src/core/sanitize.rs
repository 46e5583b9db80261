// src/core/sanitize.rs

/// Remove every occurrence of `marker`, then trim.
/// "LeBron James Headshot" → "LeBron James"
pub fn strip_marker(line: &str, marker: &str) -> String {
    line.replace(marker, "").trim().to_string()
}

/// Digits-only cell → number. Anything else (empty, "G-23", "00x", overflow) → None.
/// Only ASCII digits count; other scripts' digits are left as text.
pub fn parse_jersey(cell: &str) -> Option<u32> {
    let t = cell.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_marker_variants() {
        assert_eq!(strip_marker("LeBron James Headshot", "Headshot"), "LeBron James");
        assert_eq!(strip_marker("Headshot  Nikola Jokić", "Headshot"), "Nikola Jokić");
        assert_eq!(strip_marker("Headshot", "Headshot"), "");
    }

    #[test]
    fn jersey_digits_only() {
        assert_eq!(parse_jersey("23"), Some(23));
        assert_eq!(parse_jersey(" 0 "), Some(0));
        assert_eq!(parse_jersey("00"), Some(0));
        assert_eq!(parse_jersey("G-23"), None);
        assert_eq!(parse_jersey("-5"), None);
        assert_eq!(parse_jersey(""), None);
        assert_eq!(parse_jersey("99999999999"), None);
    }

    #[test]
    fn jersey_non_ascii_digits_stay_none() {
        assert_eq!(parse_jersey("٢٣"), None);
        assert_eq!(parse_jersey("²³"), None);
        assert_eq!(parse_jersey("２３"), None);
    }
}
