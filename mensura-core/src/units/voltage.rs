//! Electric potential.
//!
//! ```rust
//! use mensura_core::voltage::{Volt, Volts};
//! use rust_decimal_macros::dec;
//!
//! let v = Volts::parse_in("11", Volt::KILO).unwrap();
//! assert_eq!(v.to_string(), "11000 V");
//! ```

use crate::policy::Unrestricted;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Volt, the SI unit of electric potential.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "V", repr = Decimal, policy = Unrestricted)]
#[scale(MILLI, symbol = "mV", exponent = -3)]
#[scale(KILO, symbol = "kV", aliases = ["KV"], exponent = 3)]
#[scale(MEGA, symbol = "MV", exponent = 6)]
pub struct Volt;
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;
