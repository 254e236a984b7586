//! Area.

use crate::policy::NonNegative;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Square metre.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "m²", aliases = ["m2"], repr = Decimal, policy = NonNegative)]
#[scale(SQUARE_CENTI, symbol = "cm²", aliases = ["cm2"], exponent = -4)]
#[scale(HECTARE, symbol = "ha", exponent = 4)]
#[scale(SQUARE_KILO, symbol = "km²", aliases = ["km2"], exponent = 6)]
pub struct SquareMeter;
/// A quantity measured in square metres.
pub type SquareMeters = Quantity<SquareMeter>;
