//! Turns raw cell values into display strings based on the column's role.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::row::CellValue;

use super::columns::ColumnRole;

/// Shown for null or missing values.
pub const PLACEHOLDER: &str = "-";

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The length of a `YYYY-MM-DD` prefix.
const DATE_PREFIX_LEN: usize = 10;

/// Format `value` for display in the column called `column`.
///
/// Amounts get thousands separators and at most three fraction digits, dates
/// are cut down to their `YYYY-MM-DD` prefix, and anything that does not look
/// like its column's type is shown as is.
pub fn format_cell(column: &str, value: Option<&CellValue>) -> String {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return PLACEHOLDER.to_owned();
    };

    match ColumnRole::of(column) {
        ColumnRole::Amount => match value.as_f64() {
            Some(amount) => format_amount(amount),
            None => {
                tracing::debug!(
                    "Could not parse amount {value:?} in column {column}, showing it as is"
                );
                value.to_string()
            }
        },
        ColumnRole::Date => format_date(value),
        _ => value.to_string(),
    }
}

/// The most fraction digits shown for an amount.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format `amount` with `,` thousands separators and up to three decimal
/// places, dropping trailing zeros, e.g. `1234567.0` as "1,234,567".
///
/// Extra fraction digits are rounded half away from zero. The grouping is the
/// same for every UI language and never switches to scientific notation.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    // `Display` writes the shortest digits that round-trip and never an exponent.
    let digits = amount.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((&digits, ""));
    let (integer, fraction) = round_fraction(integer, fraction, MAX_FRACTION_DIGITS);

    let grouped = group_thousands(&integer);
    let fraction = fraction.trim_end_matches('0');
    let formatted = if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    };

    if amount < 0.0 && formatted != "0" {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Round the decimal `integer.fraction` to at most `max_digits` fraction digits.
fn round_fraction(integer: &str, fraction: &str, max_digits: usize) -> (String, String) {
    if fraction.len() <= max_digits {
        return (integer.to_owned(), fraction.to_owned());
    }

    let mut kept: Vec<char> = integer
        .chars()
        .chain(fraction.chars().take(max_digits))
        .collect();

    if fraction.chars().nth(max_digits).is_some_and(|digit| digit >= '5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, '1');
        }
    }

    let split = kept.len() - max_digits;
    (
        kept[..split].iter().collect(),
        kept[split..].iter().collect(),
    )
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

fn format_date(value: &CellValue) -> String {
    let text = value.to_string();

    let is_date = text
        .get(..DATE_PREFIX_LEN)
        .is_some_and(|prefix| Date::parse(prefix, DATE_FORMAT).is_ok());

    if is_date {
        text[..DATE_PREFIX_LEN].to_owned()
    } else {
        tracing::debug!("{text:?} does not start with a date, showing it as is");
        text
    }
}

#[cfg(test)]
mod format_amount_tests {
    use super::format_amount;

    #[test]
    fn adds_thousands_separators() {
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
    }

    #[test]
    fn keeps_up_to_three_decimals_without_trailing_zeros() {
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(1.25), "1.25");
        assert_eq!(format_amount(12.0), "12");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-1500.0), "-1,500");
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-0.0), "0");
    }

    #[test]
    fn extra_decimals_are_rounded_half_away_from_zero() {
        assert_eq!(format_amount(1234.5678), "1,234.568");
        assert_eq!(format_amount(1.0005), "1.001");
        assert_eq!(format_amount(-2.0625), "-2.063");
        assert_eq!(format_amount(999_999.9999), "1,000,000");
    }

    #[test]
    fn large_amounts_are_never_scientific() {
        assert_eq!(format_amount(1e15), "1,000,000,000,000,000");
        assert_eq!(format_amount(1e21), "1,000,000,000,000,000,000,000");
        assert_eq!(format_amount(-123_456_789_012.5), "-123,456,789,012.5");
    }

    #[test]
    fn tiny_amounts_round_to_zero_or_keep_three_decimals() {
        assert_eq!(format_amount(0.0004), "0");
        assert_eq!(format_amount(-0.0004), "0");
        assert_eq!(format_amount(0.0005), "0.001");
        assert_eq!(format_amount(0.012), "0.012");
    }
}
