use once_cell::sync::Lazy;
use regex::Regex;

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("integer prefix regex should compile"));

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("float prefix regex should compile")
});

/// Leading integer of `raw`, or 0 when there is none.
///
/// Trailing junk is ignored, so "12.5" reads as 12 and "40 (est)" as 40.
/// Digit runs too long for an `i64` saturate.
pub fn parse_count(raw: &str) -> i64 {
    let Some(m) = INT_PREFIX.find(raw.trim_start()) else {
        return 0;
    };
    let digits = m.as_str();
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Leading decimal number of `raw`, or 0.0 when there is none.
pub fn parse_score(raw: &str) -> f64 {
    FLOAT_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1234"), 1234);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("   "), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("12.5"), 12);
        assert_eq!(parse_count(" 40 (est)"), 40);
        assert_eq!(parse_count("-7"), -7);
        assert_eq!(parse_count("+3"), 3);
        assert_eq!(parse_count("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_count("-99999999999999999999999"), i64::MIN);
        assert_eq!(parse_count("9223372036854775807"), i64::MAX);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("12.5"), 12.5);
        assert_eq!(parse_score("-2.1"), -2.1);
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("n/a"), 0.0);
        assert_eq!(parse_score(".5"), 0.5);
        assert_eq!(parse_score("3."), 3.0);
        assert_eq!(parse_score("1e3"), 1000.0);
        assert_eq!(parse_score("1e"), 1.0);
        assert_eq!(parse_score("4.25xyz"), 4.25);
        assert_eq!(parse_score("-"), 0.0);
    }
}
