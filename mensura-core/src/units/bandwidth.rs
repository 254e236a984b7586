//! Data rate.
//!
//! Bandwidth is the one unrestricted quantity stored as `f64`: link rates span many orders of magnitude and do not
//! need decimal exactness.
//!
//! ```rust
//! use mensura_core::bandwidth::{BitPerSecond, BitsPerSecond};
//!
//! let link = BitsPerSecond::parse("1.5 Gbps").unwrap();
//! assert_eq!(link.value_in(BitPerSecond::MEGA), Some(1500.0));
//! ```

use crate::policy::Unrestricted;
use crate::Quantity;
use mensura_derive::Unit;

/// Bit per second.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "bps", aliases = ["bit/s"], repr = f64, policy = Unrestricted)]
#[scale(KILO, symbol = "kbps", aliases = ["kbit/s", "Kbps"], exponent = 3)]
#[scale(MEGA, symbol = "Mbps", aliases = ["Mbit/s"], exponent = 6)]
#[scale(GIGA, symbol = "Gbps", aliases = ["Gbit/s"], exponent = 9)]
pub struct BitPerSecond;
/// A quantity measured in bits per second.
pub type BitsPerSecond = Quantity<BitPerSecond>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn scales_and_aliases() {
        for (text, expected) in [
            ("512 bps", 512.0),
            ("512 bit/s", 512.0),
            ("64 kbps", 64_000.0),
            ("64 Kbps", 64_000.0),
            ("64 kbit/s", 64_000.0),
            ("100 Mbps", 100_000_000.0),
            ("100 Mbit/s", 100_000_000.0),
            ("10 Gbps", 10_000_000_000.0),
            ("10 Gbit/s", 10_000_000_000.0),
        ] {
            assert_relative_eq!(BitsPerSecond::parse(text).unwrap().value(), expected);
        }
    }

    #[test]
    fn fractional_scaled_value() {
        let r = BitsPerSecond::parse("2.5 Mbps").unwrap();
        assert_relative_eq!(r.value(), 2_500_000.0);
        assert_eq!(r.to_string(), "2500000 bps");
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(BitsPerSecond::new(f64::INFINITY).unwrap_err().is_out_of_range());
        assert!(BitsPerSecond::try_new(f64::NAN).is_none());
    }

    #[test]
    fn negative_zero_is_zero() {
        let z = BitsPerSecond::new(-0.0).unwrap();
        assert_eq!(z, BitsPerSecond::ZERO);
        assert_eq!(z.to_string(), "0 bps");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn total_order() {
        let mut rates = [
            BitsPerSecond::parse("1 Gbps").unwrap(),
            BitsPerSecond::parse("-5 bps").unwrap(),
            BitsPerSecond::parse("300 kbps").unwrap(),
        ];
        rates.sort();
        assert_relative_eq!(rates[0].value(), -5.0);
        assert_relative_eq!(rates[2].value(), 1e9);
    }

    proptest! {
        #[test]
        fn prop_display_roundtrip(v in -1e15f64..1e15) {
            let r = BitsPerSecond::new(v).unwrap();
            prop_assert_eq!(BitsPerSecond::parse(&r.to_string()).unwrap(), r);
        }
    }
}
