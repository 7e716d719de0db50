//! Price display formatting.

use rust_decimal::Decimal;

/// Format an amount as a USD display string with two decimal places.
///
/// Rounding happens only here, at presentation time. Cart totals accumulate
/// as exact decimals and must not be rounded before display.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_two_places() {
        assert_eq!(format_usd(Decimal::new(1099, 2)), "$10.99");
    }

    #[test]
    fn test_format_usd_pads_whole_amounts() {
        assert_eq!(format_usd(Decimal::from(10)), "$10.00");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }
}
