//! Active, apparent and reactive power, plus the current/voltage relation.
//!
//! Power is the only quantity in this crate that relates to others: `Watts / Volts` yields [`Amperes`] and
//! `Amperes * Volts` yields [`Watts`].
//!
//! ```rust
//! use mensura_core::current::Amperes;
//! use mensura_core::power::Watts;
//! use mensura_core::voltage::Volts;
//! use rust_decimal_macros::dec;
//!
//! let p = Watts::new(230).unwrap();
//! let v = Volts::new(230).unwrap();
//! let i: Amperes = (p / v).unwrap();
//! assert_eq!(i.value(), dec!(1));
//! assert_eq!(i * v, p);
//! ```

use core::ops::{Div, Mul};

use crate::current::{Ampere, Amperes};
use crate::error::{QuantityError, QuantityResult};
use crate::policy::{Policy, Unrestricted};
use crate::voltage::Volts;
use crate::{Quantity, Unit};
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Watt, the SI unit of (active) power.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "W", repr = Decimal, policy = Unrestricted)]
#[scale(MILLI, symbol = "mW", exponent = -3)]
#[scale(KILO, symbol = "kW", aliases = ["KW"], exponent = 3)]
#[scale(MEGA, symbol = "MW", exponent = 6)]
#[scale(GIGA, symbol = "GW", exponent = 9)]
pub struct Watt;
/// A quantity measured in watts.
pub type Watts = Quantity<Watt>;

/// Volt-ampere, the unit of apparent power.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "VA", repr = Decimal, policy = Unrestricted)]
#[scale(KILO, symbol = "kVA", aliases = ["KVA"], exponent = 3)]
#[scale(MEGA, symbol = "MVA", exponent = 6)]
pub struct VoltAmpere;
/// A quantity measured in volt-amperes.
pub type VoltAmperes = Quantity<VoltAmpere>;

/// Volt-ampere reactive, the unit of reactive power.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "var", aliases = ["VAR"], repr = Decimal, policy = Unrestricted)]
#[scale(KILO, symbol = "kvar", aliases = ["kVAr", "kVAR"], exponent = 3)]
#[scale(MEGA, symbol = "Mvar", aliases = ["MVAr", "MVAR"], exponent = 6)]
pub struct VoltAmpereReactive;
/// A quantity measured in volt-amperes reactive.
pub type VoltAmperesReactive = Quantity<VoltAmpereReactive>;

impl Div<Volts> for Watts {
    type Output = QuantityResult<Amperes>;

    /// `I = P / V`. A zero divisor is an error rather than an infinite current.
    fn div(self, rhs: Volts) -> Self::Output {
        if rhs.value().is_zero() {
            return Err(QuantityError::DivisionByZero { quantity: Watt::NAME });
        }
        let current = self.value().checked_div(rhs.value()).ok_or_else(|| {
            QuantityError::out_of_range(
                Ampere::NAME,
                format_args!("{} / {}", self, rhs),
                Unrestricted::RANGE,
            )
        })?;
        Amperes::new(current)
    }
}

impl Mul<Volts> for Amperes {
    type Output = Watts;

    /// `P = I × V`, saturating at the bounds of the representation.
    fn mul(self, rhs: Volts) -> Watts {
        Watts::saturating(self.value().saturating_mul(rhs.value()))
    }
}

impl Mul<Amperes> for Volts {
    type Output = Watts;

    fn mul(self, rhs: Amperes) -> Watts {
        rhs * self
    }
}
