//! Strict integer identifier validation.

use crate::error::FactsError;

/// Validate an identifier token before any data is loaded.
///
/// Accepts exactly an optional leading minus sign followed by one or more
/// decimal digits; decimals, exponents, signs other than `-`, whitespace,
/// and empty tokens are all rejected. Range checking is deliberately left
/// to the selector, so a well-formed negative id reports downstream as
/// not-found rather than bad format.
pub fn parse_id(token: &str) -> Result<i64, FactsError> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FactsError::InvalidId { token: token.to_string() });
    }
    // Tokens beyond the i64 range are syntactically valid; saturate so the
    // selector's range check rejects them as out of bounds.
    Ok(token.parse::<i64>().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(token: &str) {
        assert!(
            matches!(parse_id(token), Err(FactsError::InvalidId { .. })),
            "expected {token:?} to be rejected"
        );
    }

    #[test]
    fn accepts_non_negative_integers() {
        assert_eq!(parse_id("0").unwrap(), 0);
        assert_eq!(parse_id("5").unwrap(), 5);
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
    }

    #[test]
    fn accepts_negative_integers_as_well_formed() {
        // Negative ids pass format validation; the selector rejects them.
        assert_eq!(parse_id("-1").unwrap(), -1);
        assert_eq!(parse_id("-0").unwrap(), 0);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert_invalid("invalid");
        assert_invalid("abc");
        assert_invalid("");
    }

    #[test]
    fn rejects_decimals_and_exponents() {
        assert_invalid("1.5");
        assert_invalid("1e3");
        assert_invalid(".5");
    }

    #[test]
    fn rejects_mixed_and_padded_tokens() {
        assert_invalid("123abc");
        assert_invalid(" 5");
        assert_invalid("5 ");
        assert_invalid("+5");
        assert_invalid("--1");
        assert_invalid("-");
    }

    #[test]
    fn saturates_tokens_beyond_i64() {
        assert_eq!(parse_id("99999999999999999999").unwrap(), i64::MAX);
        assert_eq!(parse_id("-99999999999999999999").unwrap(), i64::MIN);
    }
}
