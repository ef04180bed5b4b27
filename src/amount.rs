//! Balance normalization
//!
//! Raw on-chain amounts are unscaled integers; presentation divides by
//! `10^decimals`, truncates toward zero at six fractional digits, and strips
//! trailing zeros. The division is done by shifting a decimal point through
//! the digit string itself, so amounts of any magnitude are handled exactly.
//!
//! Fallback policy: a raw amount that fails to parse renders as the literal
//! `"0"` on every path. Only strictly-positive amounts reach the normalizer,
//! so a `"0"` in output flags a malformed upstream value rather than a real
//! balance.

/// Decimals assumed for EVM native assets and tokens without metadata
pub const DEFAULT_EVM_DECIMALS: u32 = 18;

/// Fractional digits kept in output
const DISPLAY_SCALE: usize = 6;

/// Decimal counts come from untrusted metadata; anything past this bound
/// is treated as malformed
const MAX_DECIMALS: u32 = 256;

/// Normalize a raw integer amount under an explicit decimal count
pub fn normalize(raw: &str, decimals: u32) -> String {
    scale_down(raw, decimals).unwrap_or_else(|| "0".to_string())
}

/// Decimals implied by a Cosmos denom's naming convention
///
/// `u`-prefixed denoms carry 6 decimals (uatom, uosmo, ...), `a`-prefixed
/// denoms carry 18 (aevmos, adym, ...); anything else is unscaled.
pub fn denom_decimals(denom: &str) -> u32 {
    if denom.starts_with('u') {
        6
    } else if denom.starts_with('a') {
        18
    } else {
        0
    }
}

/// Normalize a Cosmos amount by denom naming convention
pub fn normalize_by_denom(denom: &str, raw: &str) -> String {
    normalize(raw, denom_decimals(denom))
}

/// True when `raw` is a non-zero unsigned integer string
///
/// Magnitude-independent: works for amounts wider than any machine integer.
pub fn is_positive(raw: &str) -> bool {
    let digits = raw.trim();
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}

/// Shift the decimal point left by `decimals` places and format
///
/// Returns `None` when `raw` is not an unsigned integer string.
fn scale_down(raw: &str, decimals: u32) -> Option<String> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let decimals = decimals as usize;
    // Pad so there is at least one integer digit left of the point
    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let split = padded.len() - decimals;
    let (int_part, frac_part) = padded.split_at(split);

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    // Truncate toward zero, never round up
    let frac = &frac_part[..frac_part.len().min(DISPLAY_SCALE)];
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        Some(int_part.to_string())
    } else {
        Some(format!("{}.{}", int_part, frac))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_one_ether() {
        assert_eq!(normalize("1000000000000000000", 18), "1");
    }

    #[test]
    fn test_normalize_strips_trailing_zeros() {
        assert_eq!(normalize("1500000000000000000", 18), "1.5");
        assert_eq!(normalize("100000000000000000", 18), "0.1");
    }

    #[test]
    fn test_normalize_truncates_toward_zero() {
        // 1.999999999... keeps six digits without rounding up
        assert_eq!(normalize("1999999999999999999", 18), "1.999999");
    }

    #[test]
    fn test_normalize_token_decimals() {
        assert_eq!(normalize("5000000", 6), "5");
        assert_eq!(normalize("5", 6), "0.000005");
    }

    #[test]
    fn test_normalize_zero_decimals() {
        assert_eq!(normalize("7", 0), "7");
        assert_eq!(normalize("007", 0), "7");
    }

    #[test]
    fn test_normalize_wider_than_u128() {
        // 10^40 raw units at 18 decimals = 10^22
        let raw = format!("1{}", "0".repeat(40));
        assert_eq!(normalize(&raw, 18), format!("1{}", "0".repeat(22)));
    }

    #[test]
    fn test_absurd_decimal_counts_are_malformed() {
        assert_eq!(normalize("1000", u32::MAX), "0");
        assert_eq!(normalize("1000", 257), "0");
    }

    #[test]
    fn test_normalize_parse_failure_falls_back_to_zero() {
        assert_eq!(normalize("not-a-number", 18), "0");
        assert_eq!(normalize("1.5", 18), "0");
        assert_eq!(normalize("-5", 18), "0");
        assert_eq!(normalize("", 18), "0");
    }

    #[test]
    fn test_denom_micro_convention() {
        assert_eq!(normalize_by_denom("uatom", "2500000"), "2.5");
        assert_eq!(normalize_by_denom("uosmo", "1000000"), "1");
    }

    #[test]
    fn test_denom_atto_convention() {
        assert_eq!(normalize_by_denom("aevmos", "1000000000000000000"), "1");
    }

    #[test]
    fn test_denom_without_convention_is_unscaled() {
        assert_eq!(normalize_by_denom("someunprefixeddenom", "7"), "7");
    }

    #[test]
    fn test_denom_parse_failure_falls_back_to_zero() {
        assert_eq!(normalize_by_denom("uatom", "garbage"), "0");
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive("1"));
        assert!(is_positive(" 42 "));
        assert!(is_positive(&format!("1{}", "0".repeat(60))));
        assert!(!is_positive("0"));
        assert!(!is_positive("000"));
        assert!(!is_positive(""));
        assert!(!is_positive("0.5"));
        assert!(!is_positive("-1"));
        assert!(!is_positive("abc"));
    }
}
