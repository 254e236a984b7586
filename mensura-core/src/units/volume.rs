//! Volume.

use crate::policy::NonNegative;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "m³", aliases = ["m3"], repr = Decimal, policy = NonNegative)]
#[scale(LITRE, symbol = "L", aliases = ["l"], exponent = -3)]
#[scale(CUBIC_CENTI, symbol = "cm³", aliases = ["cm3"], exponent = -6)]
pub struct CubicMeter;
/// A quantity measured in cubic metres.
pub type CubicMeters = Quantity<CubicMeter>;
