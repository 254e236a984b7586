//! Length.
//!
//! ```rust
//! use mensura_core::length::{Meter, Meters};
//! use rust_decimal_macros::dec;
//!
//! let span = Meters::parse("1.25 km").unwrap();
//! assert_eq!(span.value(), dec!(1250));
//! assert_eq!(span.value_in(Meter::CENTI), Some(dec!(125000)));
//! ```

use crate::policy::NonNegative;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Metre, the SI unit of length.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "m", repr = Decimal, policy = NonNegative)]
#[scale(MILLI, symbol = "mm", exponent = -3)]
#[scale(CENTI, symbol = "cm", exponent = -2)]
#[scale(KILO, symbol = "km", exponent = 3)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn longest_suffix_wins() {
        assert_eq!(Meters::parse("5 mm").unwrap().value(), dec!(0.005));
        assert_eq!(Meters::parse("5 cm").unwrap().value(), dec!(0.05));
        assert_eq!(Meters::parse("5 km").unwrap().value(), dec!(5000));
        assert_eq!(Meters::parse("5 m").unwrap().value(), dec!(5));
        assert_eq!(Meters::parse("5").unwrap().value(), dec!(5));
    }

    #[test]
    fn whitespace_is_optional_and_trimmed() {
        assert_eq!(Meters::parse("  12.5km\t").unwrap().value(), dec!(12500));
    }

    #[test]
    fn grammar_violations() {
        for text in ["", "km", "1,5 km", "1e3 m", "five m", "5 Km", ". m"] {
            assert!(Meters::parse(text).unwrap_err().is_invalid_format(), "{text:?}");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Clamping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn negative_clamps() {
        assert_eq!(Meters::from_parts(-5, None).unwrap(), Meters::ZERO);
        assert_eq!(Meters::parse("-5 km").unwrap(), Meters::ZERO);
    }

    #[test]
    fn difference_floors_at_zero() {
        let short = Meters::parse("20 cm").unwrap();
        let long = Meters::parse("1 m").unwrap();
        assert_eq!(short - long, Meters::ZERO);
        assert_eq!((long - short).to_string(), "0.8 m");
    }

    proptest! {
        #[test]
        fn prop_kilo_consistency(n in 0i64..1_000_000_000) {
            prop_assert_eq!(
                Meters::from_scaled(n, Meter::KILO).unwrap(),
                Meters::from_scaled(n * 1000, Meter::BASE).unwrap()
            );
        }

        #[test]
        fn prop_value_in_inverts_from_scaled(n in 0i64..1_000_000_000) {
            let m = Meters::from_scaled(n, Meter::MILLI).unwrap();
            prop_assert_eq!(m.value_in(Meter::MILLI), Some(Decimal::from(n)));
        }
    }
}
