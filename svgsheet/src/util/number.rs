use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Parses the numeric prefix of an attribute value, ignoring any trailing unit (`"24px"` -> `24.0`).
pub fn parse_leading_number(value: &str) -> Option<f32> {
    LEADING_NUMBER
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses a whitespace and/or comma separated list of numbers, as found in a `viewBox`.
/// Returns an empty list if any of the entries is not a number.
pub fn parse_number_list(value: &str) -> Vec<f32> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<f32>)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_number_ignores_units() {
        assert_eq!(parse_leading_number("24px"), Some(24.0));
        assert_eq!(parse_leading_number(" -1.5e1"), Some(-15.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("auto"), None);
    }

    #[test]
    fn number_list_accepts_commas() {
        assert_eq!(parse_number_list("0,0 200, 80"), vec![0.0, 0.0, 200.0, 80.0]);
        assert!(parse_number_list("0 0 a b").is_empty());
    }
}
