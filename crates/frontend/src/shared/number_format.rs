//! Money formatting in the es-AR convention: `$ 1.234.567,89`

use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts `.` every three digits of a non-negative integer string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Number with two decimals, `.` for thousands and `,` for decimals
pub fn format_number(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!(
        "{}{},{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

/// Currency amount: `$ 1.234,50`
pub fn format_money(value: Decimal) -> String {
    format!("$ {}", format_number(value))
}

/// Change in an amount with an explicit sign: `+ $ 1.000,00`, `- $ 1.000,00`
pub fn format_money_delta(value: Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "+" };
    format!("{} {}", sign, format_money(value.abs()))
}

/// Percentage without trailing zeros: `12.5` -> `12,5%`
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize().to_string().replace('.', ","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec("1234.5")), "$ 1.234,50");
        assert_eq!(format_money(dec("1234567.89")), "$ 1.234.567,89");
        assert_eq!(format_money(dec("0")), "$ 0,00");
        assert_eq!(format_money(dec("999")), "$ 999,00");
    }

    #[test]
    fn test_format_negative_and_rounding() {
        assert_eq!(format_number(dec("-1500")), "-1.500,00");
        assert_eq!(format_number(dec("10.005")), "10,01");
        assert_eq!(format_number(dec("-0.001")), "0,00");
    }

    #[test]
    fn test_format_money_delta() {
        assert_eq!(format_money_delta(dec("1000")), "+ $ 1.000,00");
        assert_eq!(format_money_delta(dec("-1000")), "- $ 1.000,00");
        assert_eq!(format_money_delta(dec("0")), "+ $ 0,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec("12.50")), "12,5%");
        assert_eq!(format_percent(dec("30")), "30%");
    }
}
