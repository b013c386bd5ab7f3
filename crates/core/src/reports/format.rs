//! Display formatting for report amounts.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with thousands separators and two decimals.
///
/// `1234567.891` becomes `"1,234,567.89"`. Rounding is half-to-even.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Parses a string produced by [`format_amount`] back into a decimal.
///
/// # Errors
///
/// Returns an error if the text is not a number once separators are removed.
pub fn parse_amount(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(&text.replace(',', ""))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(dec!(0), "0.00")]
    #[case(dec!(5), "5.00")]
    #[case(dec!(150), "150.00")]
    #[case(dec!(999.999), "1,000.00")]
    #[case(dec!(1000), "1,000.00")]
    #[case(dec!(12345.6), "12,345.60")]
    #[case(dec!(1234567.891), "1,234,567.89")]
    #[case(dec!(100000000), "100,000,000.00")]
    #[case(dec!(-1234.5), "-1,234.50")]
    #[case(dec!(-0.001), "0.00")]
    #[case(dec!(2.675), "2.68")]
    #[case(dec!(2.665), "2.66")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
        assert_eq!(parse_amount("-50.00").unwrap(), dec!(-50));
        assert!(parse_amount("n/a").is_err());
    }

    proptest! {
        #[test]
        fn prop_format_round_trips_to_two_decimals(cents in -10_000_000_000i64..10_000_000_000i64, extra in 0i64..10) {
            // A third decimal digit forces rounding on most inputs.
            let amount = Decimal::new(cents * 10 + extra, 3);
            let formatted = format_amount(amount);
            let parsed = parse_amount(&formatted).unwrap();

            prop_assert_eq!(
                parsed,
                amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
            );
        }

        #[test]
        fn prop_separators_every_three_digits(units in 0i64..1_000_000_000_000i64) {
            let formatted = format_amount(Decimal::from(units));
            let int_part = formatted.split('.').next().unwrap();

            for group in int_part.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
            prop_assert!(int_part.split(',').next().unwrap().len() <= 3);
        }
    }
}
