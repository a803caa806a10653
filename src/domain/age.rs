//! Conversion of free-text ages into whole weeks.
//!
//! Catalog ages are written as `"<count> <unit>"`. Anything that does not fit
//! that shape resolves to zero weeks rather than an error so the catalog always
//! renders.

/// Weeks counted per month when normalizing ages.
pub const WEEKS_PER_MONTH: u32 = 4;

/// Parses an age description such as `"10 weeks"` or `"3 months"` into weeks.
///
/// Returns `0` when the input is missing, has fewer than two tokens, starts with
/// a non-numeric token, or uses an unknown unit. Negative counts also yield `0`.
pub fn parse_age_weeks(age: Option<&str>) -> u32 {
    let Some(age) = age else {
        return 0;
    };

    let mut tokens = age.split_whitespace();
    let (Some(count), Some(unit)) = (tokens.next(), tokens.next()) else {
        return 0;
    };

    let Some(count) = parse_leading_integer(count) else {
        return 0;
    };
    let count = u32::try_from(count).unwrap_or(0);

    let unit = unit.to_lowercase();
    if unit.contains("week") {
        count
    } else if unit.contains("month") {
        count.saturating_mul(WEEKS_PER_MONTH)
    } else {
        0
    }
}

/// Reads an optionally signed run of leading decimal digits, ignoring any suffix.
///
/// `"12"`, `"12.5"` and `"12wk"` all yield `12`; `"wk12"` yields `None`.
fn parse_leading_integer(token: &str) -> Option<i64> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate absurdly long digit runs instead of failing.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_are_returned_as_is() {
        for n in [0, 1, 8, 12, 52] {
            assert_eq!(parse_age_weeks(Some(&format!("{n} weeks"))), n);
        }
        assert_eq!(parse_age_weeks(Some("1 week")), 1);
    }

    #[test]
    fn months_are_multiplied_by_four() {
        for n in [1, 3, 6, 12] {
            assert_eq!(parse_age_weeks(Some(&format!("{n} months"))), n * 4);
        }
        assert_eq!(parse_age_weeks(Some("1 month")), 4);
    }

    #[test]
    fn unit_match_is_case_insensitive_substring() {
        assert_eq!(parse_age_weeks(Some("10 Weeks")), 10);
        assert_eq!(parse_age_weeks(Some("2 MONTHS old")), 8);
        assert_eq!(parse_age_weeks(Some("  9   weeks ")), 9);
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(parse_age_weeks(None), 0);
        assert_eq!(parse_age_weeks(Some("")), 0);
        assert_eq!(parse_age_weeks(Some("10")), 0);
        assert_eq!(parse_age_weeks(Some("ten weeks")), 0);
        assert_eq!(parse_age_weeks(Some("10 years")), 0);
        assert_eq!(parse_age_weeks(Some("-3 weeks")), 0);
    }

    #[test]
    fn leading_integer_ignores_trailing_garbage() {
        assert_eq!(parse_age_weeks(Some("12.5 weeks")), 12);
        assert_eq!(parse_age_weeks(Some("8wk weeks")), 8);
        assert_eq!(parse_age_weeks(Some("+3 months")), 12);
        assert_eq!(parse_leading_integer("wk12"), None);
        assert_eq!(parse_leading_integer("-"), None);
    }
}
