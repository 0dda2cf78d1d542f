//! Summation over a delimiter-split number list
//!
//! The engine tokenizes the numeric body with the resolved delimiter
//! specification, parses each token with leading-integer semantics, and
//! folds the valid values into a total:
//!
//! - values in `[0, 1000]` are added;
//! - values above 1000 are silently excluded;
//! - non-numeric tokens are silently excluded;
//! - any negative value invalidates the whole input.
//!
//! A negative value does not stop the pass: every token is still visited,
//! and the invalidation is applied to the final result. No failure path
//! surfaces to the caller; every outcome is a plain integer, with 0 covering
//! both "nothing to sum" and "invalid input".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::calc::delimiter::resolve;

/// Largest value that still participates in the sum.
const MAX_SUMMABLE: i64 = 1000;

/// Longest leading run of an optionally signed integer. ASCII digits only:
/// `\d` would also match Unicode decimal digits, which are not numeric input.
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

/// Sum the numbers in the input, or 0 when the input is absent or invalid.
///
/// This is the public operation of the crate. It never panics and never
/// returns a negative value.
pub fn sum(input: Option<&str>) -> i64 {
    let raw = match input {
        Some(raw) => raw,
        None => return 0,
    };

    let (spec, body) = resolve(raw);

    let mut total = 0;
    let mut valid = true;
    for token in spec.split(body) {
        match parse_leading_int(token.trim()) {
            Some(value) if value < 0 => {
                log::warn!("negatives not allowed: {}", value);
                valid = false;
            }
            Some(value) if value <= MAX_SUMMABLE => total += value,
            // Values above the ceiling and non-numeric tokens contribute
            // nothing and raise no error.
            Some(_) | None => {}
        }
    }

    if valid {
        total
    } else {
        0
    }
}

/// Parse the longest valid leading integer of a token.
///
/// Trailing non-numeric characters are ignored (`"3abc"` parses as 3); a
/// token with no leading digits yields `None`. Magnitudes beyond `i64`
/// saturate, which is exact for the policy: only the sign and the 1000
/// ceiling are ever inspected.
fn parse_leading_int(token: &str) -> Option<i64> {
    let matched = LEADING_INT.find(token)?.as_str();
    match matched.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => Some(if matched.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_input_is_zero() {
        assert_eq!(sum(None), 0);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(sum(Some("")), 0);
    }

    #[test]
    fn test_single_number() {
        assert_eq!(sum(Some("1")), 1);
    }

    #[test]
    fn test_empty_tokens_are_ignored() {
        assert_eq!(sum(Some("1,,2")), 3);
    }

    #[test]
    fn test_tokens_are_trimmed_before_parsing() {
        assert_eq!(sum(Some("10 , 200")), 210);
    }

    #[test]
    fn test_leading_integer_semantics() {
        // Trailing junk in a token is ignored, like the longest leading run.
        assert_eq!(sum(Some("3abc,4")), 7);
        assert_eq!(sum(Some("1\n2,3")), 4);
    }

    #[test]
    fn test_non_numeric_tokens_are_ignored() {
        assert_eq!(sum(Some("abc,5,?")), 5);
    }

    #[test]
    fn test_value_at_ceiling_is_summed() {
        assert_eq!(sum(Some("1000,1")), 1001);
    }

    #[test]
    fn test_value_above_ceiling_is_excluded() {
        assert_eq!(sum(Some("1001,2")), 2);
    }

    #[test]
    fn test_negative_invalidates_the_whole_input() {
        assert_eq!(sum(Some("1,-10")), 0);
    }

    #[test]
    fn test_negative_does_not_stop_the_pass() {
        // A token after the negative that cannot parse must still be
        // visited without effect on the invalidated result.
        assert_eq!(sum(Some("-1,abc,2")), 0);
    }

    #[test]
    fn test_oversized_negative_still_invalidates() {
        assert_eq!(sum(Some("1,-99999999999999999999")), 0);
    }

    #[test]
    fn test_oversized_positive_is_excluded() {
        assert_eq!(sum(Some("99999999999999999999,2")), 2);
    }

    #[test]
    fn test_unicode_digits_are_not_numeric() {
        // '٣' is an Arabic-Indic digit: it ends the leading run rather
        // than extending it, and alone it is junk, not a number.
        assert_eq!(sum(Some("12٣,5")), 17);
        assert_eq!(sum(Some("٣,4")), 4);
        assert_eq!(sum(Some("-٣,4")), 4);
    }

    #[test]
    fn test_parse_leading_int_reads_longest_run() {
        assert_eq!(parse_leading_int("123abc"), Some(123));
        assert_eq!(parse_leading_int("-7x"), Some(-7));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_leading_int_stops_at_unicode_digit() {
        assert_eq!(parse_leading_int("12٣"), Some(12));
        assert_eq!(parse_leading_int("٣"), None);
        assert_eq!(parse_leading_int("-٣"), None);
    }
}
