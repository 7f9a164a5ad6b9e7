/// Price strings on the page carry thousands separators and stray
/// whitespace; FUTBIN uses both `,` and `.` depending on locale.
pub(crate) fn clean_price_text(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ',' | '.') && !c.is_whitespace())
        .collect()
}

/// Loose `parseInt`-style integer parse: leading digits only, trailing
/// garbage ignored. Empty or non-numeric input yields `None`.
pub(crate) fn parse_leading_u64(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Parses an on-page price. Only positive values count; anything else is
/// treated as "no price here", never an error.
pub(crate) fn parse_price(text: &str) -> Option<u64> {
    parse_leading_u64(&clean_price_text(text)).filter(|price| *price > 0)
}

/// Ratings parse loosely too; zero is treated as missing.
pub(crate) fn parse_rating(text: &str) -> Option<u64> {
    parse_leading_u64(text.trim()).filter(|rating| *rating > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_stripped_before_parsing() {
        assert_eq!(parse_price("1,234,567"), Some(1_234_567));
        assert_eq!(parse_price("1.234.567"), Some(1_234_567));
        assert_eq!(parse_price(" 12 500 "), Some(12_500));
    }

    #[test]
    fn non_numeric_prices_are_absent_not_zero() {
        assert_eq!(parse_price("N/A"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("0"), None);
    }

    #[test]
    fn leading_digits_win_over_trailing_garbage() {
        assert_eq!(parse_price("1,234 coins"), Some(1_234));
        assert_eq!(parse_leading_u64("89 OVR"), Some(89));
        assert_eq!(parse_leading_u64("OVR 89"), None);
    }

    #[test]
    fn zero_rating_counts_as_missing() {
        assert_eq!(parse_rating("0"), None);
        assert_eq!(parse_rating("89"), Some(89));
    }
}
