//! Percentages.
//!
//! Five flavours share the `%` symbol and differ in representation and bounds:
//!
//! | Quantity | Representation | Range |
//! |---|---|---|
//! | [`Percentage`] | `Decimal` | `[0, 100]` |
//! | [`PercentageDouble`] | `f64` | `[0, 100]` |
//! | [`PercentageInt`] | `i32` | `[0, 100]` |
//! | [`PercentageByte`] | `u8` | `[0, 100]` |
//! | [`SignedPercentage`] | `Decimal` | `[-100, 100]` |
//!
//! Out-of-range values are rejected on construction, while `+` and `-` saturate at the bounds.
//!
//! ```rust
//! use mensura_core::percentage::Percentage;
//!
//! let a = Percentage::parse("70 %").unwrap();
//! let b = Percentage::parse("45%").unwrap();
//! assert_eq!((a + b).to_string(), "100 %");
//! assert_eq!((b - a).to_string(), "0 %");
//! assert!(Percentage::try_parse("101 %").is_none());
//! ```

use crate::policy::{PercentRange, SignedPercentRange};
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Percent, stored as a decimal.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "%", repr = Decimal, policy = PercentRange)]
pub struct Percent;
/// A percentage in `[0, 100]`.
pub type Percentage = Quantity<Percent>;

/// Percent, stored as a float.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "%", repr = f64, policy = PercentRange)]
pub struct PercentDouble;
/// A floating-point percentage in `[0, 100]`.
pub type PercentageDouble = Quantity<PercentDouble>;

/// Percent, stored as a 32-bit integer.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "%", repr = i32, policy = PercentRange)]
pub struct PercentInt;
/// A whole-number percentage in `[0, 100]`.
pub type PercentageInt = Quantity<PercentInt>;

/// Percent, stored as a byte.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "%", repr = u8, policy = PercentRange)]
pub struct PercentByte;
/// A whole-number percentage in `[0, 100]`, one byte wide.
pub type PercentageByte = Quantity<PercentByte>;

/// Signed percent, stored as a decimal.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "%", repr = Decimal, policy = SignedPercentRange)]
pub struct SignedPercent;
/// A percentage change in `[-100, 100]`.
pub type SignedPercentage = Quantity<SignedPercent>;
