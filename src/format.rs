//! Number, percentage and currency formatting for the dashboard.
//!
//! Numbers use Korean locale grouping (`,` every three integer digits).
//! Currency amounts are scaled to the Korean myriad units `만` (1e4),
//! `억` (1e8) and `조` (1e12).
//!
//! Fixed-decimal output rounds exact ties away from zero, so `1.25` at one
//! decimal is `"1.3"`. `format!("{:.1}")` would give `"1.2"`.

const JO: f64 = 1e12;
const EOK: f64 = 1e8;
const MAN: f64 = 1e4;

/// Most fraction digits [`format_number`] keeps.
const MAX_FRACTION_DIGITS: usize = 3;

/// Digits rendered beyond the requested precision before rounding by hand.
const GUARD_DIGITS: usize = 20;

/// Formats `num` with locale grouping and up to three fraction digits.
///
/// ```rust
/// use etf_mts_view::format_number;
///
/// assert_eq!(format_number(500.0), "500");
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(-9876.54321), "-9,876.543");
/// assert_eq!(format_number(0.5), "0.5");
/// ```
pub fn format_number(num: f64) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Locale formatting rounds the shortest round-trip decimal, not the
    // exact binary value: 2.0005 becomes "2.001".
    let fixed = round_decimal(&num.abs().to_string(), MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if num.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats `num` as a percentage with `decimals` fraction digits.
///
/// Non-negative values carry an explicit `+`; negative values keep their own
/// `-`.
///
/// ```rust
/// use etf_mts_view::format_percent;
///
/// assert_eq!(format_percent(3.456, 2), "+3.46%");
/// assert_eq!(format_percent(-1.2, 1), "-1.2%");
/// assert_eq!(format_percent(0.0, 2), "+0.00%");
/// ```
pub fn format_percent(num: f64, decimals: usize) -> String {
    let sign = if num >= 0.0 { "+" } else { "" };
    format!("{}{}%", sign, to_fixed(num, decimals))
}

/// [`format_percent`] with two decimals.
pub fn format_percent_default(num: f64) -> String {
    format_percent(num, 2)
}

/// Formats a won amount using the largest Korean unit it reaches.
///
/// Amounts of at least 1e12, 1e8 and 1e4 are divided down and printed with
/// one decimal followed by `조`, `억` or `만`. Smaller amounts, and negative
/// amounts, fall through to [`format_number`].
///
/// The `만` band covers everything from 1e4 up to just under 1e8, so
/// 50,000,000 is `"5000.0만"`, not `"0.5억"`; `억` starts at exactly 1e8.
///
/// ```rust
/// use etf_mts_view::format_currency;
///
/// assert_eq!(format_currency(1_250_000_000_000.0), "1.3조");
/// assert_eq!(format_currency(350_000_000.0), "3.5억");
/// assert_eq!(format_currency(12_000.0), "1.2만");
/// assert_eq!(format_currency(50_000_000.0), "5000.0만");
/// assert_eq!(format_currency(500.0), "500");
/// ```
pub fn format_currency(num: f64) -> String {
    if num >= JO {
        format!("{}조", to_fixed(num / JO, 1))
    } else if num >= EOK {
        format!("{}억", to_fixed(num / EOK, 1))
    } else if num >= MAN {
        format!("{}만", to_fixed(num / MAN, 1))
    } else {
        format_number(num)
    }
}

/// Fixed-point notation with exact ties rounded away from zero.
///
/// `-0.0` prints without a sign; other negative values keep their `-` even
/// when they round to zero.
fn to_fixed(num: f64, digits: usize) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = round_fixed(num.abs(), digits);
    if num < 0.0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Rounds a non-negative finite value to `digits` fraction digits, half up
/// on its exact binary value.
///
/// The value is printed with extra guard digits (exact for any value a
/// dashboard shows) and then rounded as a decimal string.
fn round_fixed(value: f64, digits: usize) -> String {
    round_decimal(&format!("{:.*}", digits + GUARD_DIGITS, value), digits)
}

/// Rounds a plain decimal string (`123.456`, no sign or exponent) to
/// `digits` fraction digits, half up, padding with zeros when shorter.
fn round_decimal(decimal: &str, digits: usize) -> String {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 1);
    out.extend(kept[..int_len].iter().map(|d| char::from(*d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|d| char::from(*d)));
    }
    out
}

/// Inserts `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(123456789.0), "123,456,789");
        assert_eq!(format_number(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_number_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.1234), "0.123");
        assert_eq!(format_number(2.0005), "2.001");
        assert_eq!(format_number(1.9999), "2");
        assert_eq!(format_number(999.9999), "1,000");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_percent_sign() {
        assert_eq!(format_percent(3.456, 2), "+3.46%");
        assert_eq!(format_percent(-1.2, 1), "-1.2%");
        assert_eq!(format_percent(0.0, 2), "+0.00%");
        assert_eq!(format_percent(-0.0, 2), "+0.00%");
        assert_eq!(format_percent(12.0, 0), "+12%");
    }

    #[test]
    fn test_format_percent_small_negative_keeps_sign() {
        assert_eq!(format_percent(-0.001, 2), "-0.00%");
    }

    #[test]
    fn test_format_percent_default_two_decimals() {
        assert_eq!(format_percent_default(1.0), "+1.00%");
        assert_eq!(format_percent_default(-2.346), "-2.35%");
    }

    #[test]
    fn test_format_currency_units() {
        assert_eq!(format_currency(1_250_000_000_000.0), "1.3조");
        assert_eq!(format_currency(1_000_000_000_000.0), "1.0조");
        assert_eq!(format_currency(150_000_000.0), "1.5억");
        assert_eq!(format_currency(12_000.0), "1.2만");
        assert_eq!(format_currency(10_000.0), "1.0만");
        assert_eq!(format_currency(9_999.0), "9,999");
        assert_eq!(format_currency(500.0), "500");
    }

    #[test]
    fn test_format_currency_below_eok_stays_in_man() {
        assert_eq!(format_currency(50_000_000.0), "5000.0만");
        assert_eq!(format_currency(99_999_999.0), "10000.0만");
    }

    #[test]
    fn test_format_currency_large_jo_not_grouped() {
        assert_eq!(format_currency(12_345_000_000_000_000.0), "12345.0조");
    }

    #[test]
    fn test_format_currency_negative_falls_through() {
        assert_eq!(format_currency(-50_000.0), "-50,000");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        assert_eq!(to_fixed(1.25, 1), "1.3");
        assert_eq!(to_fixed(-1.25, 1), "-1.3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.95, 1), "9.9"); // 9.95 is stored just below the tie
    }

    #[test]
    fn test_to_fixed_carry() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_round_decimal_pads_and_carries() {
        assert_eq!(round_decimal("1.5", 3), "1.500");
        assert_eq!(round_decimal("7", 2), "7.00");
        assert_eq!(round_decimal("0.9995", 3), "1.000");
        assert_eq!(round_decimal("12.34", 0), "12");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
