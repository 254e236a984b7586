//! Electric current.
//!
//! ```rust
//! use mensura_core::current::{Ampere, Amperes};
//! use rust_decimal_macros::dec;
//!
//! let i = Amperes::parse("1.5 kA").unwrap();
//! assert_eq!(i.value(), dec!(1500));
//! assert_eq!(i.value_in(Ampere::KILO), Some(dec!(1.5)));
//! ```

use crate::policy::Unrestricted;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Ampere, the SI unit of electric current.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "A", repr = Decimal, policy = Unrestricted)]
#[scale(MILLI, symbol = "mA", exponent = -3)]
#[scale(KILO, symbol = "kA", aliases = ["KA"], exponent = 3)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_each_scale() {
        assert_eq!(Amperes::parse("12 A").unwrap().value(), dec!(12));
        assert_eq!(Amperes::parse("250mA").unwrap().value(), dec!(0.25));
        assert_eq!(Amperes::parse("2 kA").unwrap().value(), dec!(2000));
        assert_eq!(Amperes::parse("2 KA").unwrap().value(), dec!(2000));
    }

    #[test]
    fn kilo_is_applied_once() {
        let i = Amperes::from_scaled(1, Ampere::KILO).unwrap();
        assert_eq!(i.value(), dec!(1000));
    }

    #[test]
    fn negative_current_is_allowed() {
        assert_eq!(Amperes::parse("-3 mA").unwrap().value(), dec!(-0.003));
    }

    #[test]
    fn unknown_suffix_rejected() {
        let err = Amperes::parse("3 Amp").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(Amperes::try_parse("3 ka").is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic and display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilo_plus_base() {
        let sum = Amperes::from_scaled(1, Ampere::KILO).unwrap()
            + Amperes::from_scaled(500, Ampere::BASE).unwrap();
        assert_eq!(sum.value(), dec!(1500));
        assert_eq!(sum.to_string(), "1500 A");
    }

    #[test]
    fn metadata() {
        assert_eq!(Ampere::NAME, "Ampere");
        assert_eq!(Ampere::SYMBOL, "A");
        assert_eq!(Ampere::SCALES.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_display_roundtrip(n in any::<i64>(), scale in 0u32..8) {
            let i = Amperes::new(Decimal::new(n, scale)).unwrap();
            prop_assert_eq!(Amperes::parse(&i.to_string()).unwrap(), i);
        }

        #[test]
        fn prop_milli_consistency(n in -1_000_000i64..1_000_000) {
            let milli = Amperes::from_scaled(n, Ampere::MILLI).unwrap();
            let base = Amperes::new(Decimal::new(n, 3)).unwrap();
            prop_assert_eq!(milli, base);
        }
    }
}
