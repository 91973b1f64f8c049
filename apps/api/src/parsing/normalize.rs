//! Record normalisation helpers: default substitution, truncation, and sub-value coercion.

use std::sync::LazyLock;

use regex::Regex;

/// `#` followed by six hex digits. Longer codes (`#RRGGBBAA`) keep their `#RRGGBB` prefix.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").unwrap());

/// Palette used when a `Colors:` line yields no hex codes.
pub const DEFAULT_COLORS: [&str; 2] = ["#3B82F6", "#10B981"];

const ELLIPSIS: &str = "...";

/// Returns the extracted value, or `default` when it is absent or empty.
pub fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Hard-cuts `value` to at most `max_chars` characters, ending in `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split mid code point.
pub fn truncate_with_ellipsis(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Default substitution followed by truncation.
pub fn bounded(value: Option<&str>, default: &str, max_chars: usize) -> String {
    truncate_with_ellipsis(&or_default(value, default), max_chars)
}

/// Extracts every hex colour code from `value`, falling back to [`DEFAULT_COLORS`].
pub fn extract_hex_colors(value: Option<&str>) -> Vec<String> {
    let found: Vec<String> = value
        .map(|v| {
            HEX_COLOR_RE
                .find_iter(v)
                .map(|m| m.as_str().to_string())
                .collect()
        })
        .unwrap_or_default();

    if found.is_empty() {
        default_colors()
    } else {
        found
    }
}

pub fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

/// Parses the leading run of ASCII digits, returning 0 when there is none.
/// Runs too long for `u32` saturate to `u32::MAX`.
///
/// `"8/10"` → 8, `"7 - solid"` → 7, `"high"` → 0.
pub fn parse_leading_int(value: Option<&str>) -> u32 {
    let Some(value) = value else { return 0 };
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default_substitutes_missing_and_empty() {
        assert_eq!(or_default(None, "fallback"), "fallback");
        assert_eq!(or_default(Some(""), "fallback"), "fallback");
        assert_eq!(or_default(Some("   "), "fallback"), "fallback");
        assert_eq!(or_default(Some("value"), "fallback"), "value");
    }

    #[test]
    fn test_truncate_leaves_short_values() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_cuts_to_limit_with_ellipsis() {
        let long = "a".repeat(150);
        let cut = truncate_with_ellipsis(&long, 120);
        assert_eq!(cut.chars().count(), 120);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..117], &long[..117]);
    }

    #[test]
    fn test_truncate_respects_multibyte_characters() {
        let text = "é".repeat(20);
        let cut = truncate_with_ellipsis(&text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.starts_with("ééééééé"));
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_hex_colors_extracts_all_tokens() {
        let colors = extract_hex_colors(Some("#FFFFFF, #000000 and #1a2B3c"));
        assert_eq!(colors, vec!["#FFFFFF", "#000000", "#1a2B3c"]);
    }

    #[test]
    fn test_hex_colors_single_token() {
        assert_eq!(extract_hex_colors(Some("Navy (#1E3A8A)")), vec!["#1E3A8A"]);
    }

    #[test]
    fn test_hex_colors_default_when_none_found() {
        assert_eq!(extract_hex_colors(Some("blue and green")), default_colors());
        assert_eq!(extract_hex_colors(None), default_colors());
    }

    #[test]
    fn test_hex_colors_rejects_malformed_tokens() {
        // 3-digit shorthand and non-hex letters are rejected.
        let colors = extract_hex_colors(Some("#FFF, #GGGGGG, #12345"));
        assert_eq!(colors, default_colors());
    }

    #[test]
    fn test_hex_colors_keeps_rgb_prefix_of_longer_codes() {
        let colors = extract_hex_colors(Some("#AA1122FF, #223344cc"));
        assert_eq!(colors, vec!["#AA1122", "#223344"]);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int(Some("8")), 8);
        assert_eq!(parse_leading_int(Some("8/10")), 8);
        assert_eq!(parse_leading_int(Some(" 7 - solid")), 7);
        assert_eq!(parse_leading_int(Some("high")), 0);
        assert_eq!(parse_leading_int(Some("")), 0);
        assert_eq!(parse_leading_int(None), 0);
    }

    #[test]
    fn test_parse_leading_int_saturates_on_overflow() {
        assert_eq!(parse_leading_int(Some("99999999999")), u32::MAX);
    }
}
