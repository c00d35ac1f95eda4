//! Display formatting for money amounts and coin quantities.
//!
//! Notification texts and validation messages render values exactly the way
//! the exchange UI does: dollar amounts with two fixed decimals, quantities
//! with trailing zeros trimmed.

use rust_decimal::{Decimal, RoundingStrategy};

fn round2(value: &Decimal) -> Decimal {
    // Half-away-from-zero, matching how the exchange UI rounds for display.
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a dollar amount with exactly two decimal places, e.g. `$50.00`.
pub fn usd(amount: &Decimal) -> String {
    format!("${:.2}", round2(amount))
}

/// Format a coin quantity the way a user typed it: `5`, `2.5`, `0.25`.
pub fn qty(amount: &Decimal) -> String {
    amount.normalize().to_string()
}

/// Format a percentage with two decimal places and an explicit `+` on
/// non-negative values, e.g. `+3.41%` / `-0.92%`.
pub fn percent(value: &Decimal) -> String {
    let rounded = round2(value);
    if rounded.is_sign_negative() {
        format!("{rounded:.2}%")
    } else {
        format!("+{rounded:.2}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usd_two_decimals() {
        assert_eq!(usd(&dec!(50)), "$50.00");
        assert_eq!(usd(&dec!(10.5)), "$10.50");
        assert_eq!(usd(&dec!(0)), "$0.00");
    }

    #[test]
    fn test_usd_rounds_sub_cent() {
        assert_eq!(usd(&dec!(12.345)), "$12.35");
        assert_eq!(usd(&dec!(12.344)), "$12.34");
    }

    #[test]
    fn test_qty_trims_trailing_zeros() {
        assert_eq!(qty(&dec!(5)), "5");
        assert_eq!(qty(&dec!(5.00)), "5");
        assert_eq!(qty(&dec!(2.50)), "2.5");
        assert_eq!(qty(&dec!(0.25)), "0.25");
    }

    #[test]
    fn test_percent_signed() {
        assert_eq!(percent(&dec!(3.412)), "+3.41%");
        assert_eq!(percent(&dec!(-0.915)), "-0.92%");
        assert_eq!(percent(&dec!(0)), "+0.00%");
    }
}
