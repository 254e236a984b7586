//! Frequency.
//!
//! Frequencies are non-negative: a negative input is clamped to zero rather than rejected.
//!
//! ```rust
//! use mensura_core::frequency::{Frequency, Hertz};
//!
//! assert_eq!(Frequency::parse("2.4 GHz").unwrap().value_in(Hertz::MEGA).unwrap().to_string(), "2400");
//! assert_eq!(Frequency::from_parts(-10, None).unwrap(), Frequency::ZERO);
//! ```

use crate::policy::NonNegative;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Hertz, the SI unit of frequency.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Hz", repr = Decimal, policy = NonNegative)]
#[scale(KILO, symbol = "kHz", aliases = ["KHz"], exponent = 3)]
#[scale(MEGA, symbol = "MHz", exponent = 6)]
#[scale(GIGA, symbol = "GHz", exponent = 9)]
pub struct Hertz;
/// A quantity measured in hertz.
pub type Frequency = Quantity<Hertz>;
