//! Mass.
//!
//! Two independent mass quantities are provided: [`Kilograms`] for everyday masses and [`Tonnes`] for bulk
//! quantities (freight, emissions). They are separate types; there is no implicit conversion between them.
//!
//! ```rust
//! use mensura_core::mass::{Kilogram, Kilograms, Tonnes};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(Kilograms::parse("250 g").unwrap().value(), dec!(0.25));
//! assert_eq!(Kilograms::parse("2 t").unwrap().value_in(Kilogram::GRAM), Some(dec!(2000000)));
//! assert_eq!(Tonnes::parse("1.2 Mt").unwrap().to_string(), "1200000 t");
//! ```

use crate::policy::NonNegative;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Kilogram, the SI base unit of mass.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "kg", repr = Decimal, policy = NonNegative)]
#[scale(MILLI, symbol = "mg", exponent = -6)]
#[scale(GRAM, symbol = "g", exponent = -3)]
#[scale(TONNE, symbol = "t", exponent = 3)]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;

/// Metric tonne.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "t", repr = Decimal, policy = NonNegative)]
#[scale(KILO, symbol = "kt", exponent = 3)]
#[scale(MEGA, symbol = "Mt", exponent = 6)]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes = Quantity<Tonne>;
