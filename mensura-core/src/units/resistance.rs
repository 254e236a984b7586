//! Resistance and its reciprocal, conductance.
//!
//! ```rust
//! use mensura_core::resistance::{Conductance, Ohm, Ohms};
//!
//! let r = Ohms::parse("4.7 kΩ").unwrap();
//! assert_eq!(r.to_string(), "4700 Ω");
//! assert_eq!(Conductance::parse("20 mS").unwrap().to_string(), "0.02 S");
//! ```

use crate::policy::Unrestricted;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Ohm, the SI unit of electrical resistance.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Ω", aliases = ["Ohm", "ohm"], repr = Decimal, policy = Unrestricted)]
#[scale(KILO, symbol = "kΩ", aliases = ["kOhm", "KOhm"], exponent = 3)]
#[scale(MEGA, symbol = "MΩ", aliases = ["MOhm"], exponent = 6)]
pub struct Ohm;
/// A quantity measured in ohms.
pub type Ohms = Quantity<Ohm>;

/// Siemens, the SI unit of electrical conductance.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "S", repr = Decimal, policy = Unrestricted)]
#[scale(MILLI, symbol = "mS", exponent = -3)]
#[scale(MICRO, symbol = "µS", aliases = ["uS", "μS"], exponent = -6)]
pub struct Siemens;
/// A quantity measured in siemens.
pub type Conductance = Quantity<Siemens>;
