//! Numeric representations a quantity magnitude can be stored in.
//!
//! Every quantity picks one representation through its unit: [`Decimal`] for most electrical and physical
//! quantities, `f64` for rates and one percentage flavour, `i32`/`u8` for the integer percentages.
//!
//! Text always goes through the same invariant-culture grammar, `[+-]?digits(.digits)?`: no thousands
//! separators, no exponent notation, `.` as the only decimal point.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Numeric storage for a quantity magnitude.
///
/// All operations are total: anything that could overflow, lose integrality or leave the finite range
/// returns `None` instead of panicking.
pub trait Repr: Copy + Debug + Display + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;

    /// Converts a small policy bound (such as `100` or `-100`) into this representation, clamping to the
    /// representation's own range.
    fn from_small(n: i8) -> Self;

    /// Parses text that already matched the plain-number grammar.
    fn parse_plain(text: &str) -> Option<Self>;

    /// Multiplies by `10^exponent`.
    fn shift(self, exponent: i32) -> Option<Self>;

    /// Canonical form used for storage, so equality, ordering and formatting agree.
    fn canonical(self) -> Self {
        self
    }

    /// Whether the value is a finite number.
    fn is_finite(self) -> bool {
        true
    }

    /// Total order over the representation.
    fn cmp_total(&self, other: &Self) -> Ordering;

    /// Addition saturating at the bounds of the representation.
    fn add_saturating(self, rhs: Self) -> Self;

    /// Subtraction saturating at the bounds of the representation.
    fn sub_saturating(self, rhs: Self) -> Self;

    /// Lossy view of the value as a plain `f64`.
    fn as_f64(self) -> f64;
}

/// Checks `text` against the plain-number grammar and returns it without a leading `+`.
pub(crate) fn plain_number(text: &str) -> Option<&str> {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if all_digits(int) && frac.map_or(true, all_digits) {
        Some(text.strip_prefix('+').unwrap_or(text))
    } else {
        None
    }
}

#[inline]
fn pow10(exp: i32) -> Option<Decimal> {
    match exp {
        0..=28 => Some(Decimal::from_i128_with_scale(10i128.pow(exp.unsigned_abs()), 0)),
        -28..=-1 => Some(Decimal::new(1, exp.unsigned_abs())),
        _ => None,
    }
}

#[inline]
fn pow10_f64(exp: u32) -> f64 {
    #[cfg(feature = "std")]
    {
        10f64.powi(exp.min(i32::MAX as u32) as i32)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(10.0, f64::from(exp))
    }
}

impl Repr for Decimal {
    const ZERO: Self = Decimal::ZERO;

    fn from_small(n: i8) -> Self {
        Decimal::from(n)
    }

    fn parse_plain(text: &str) -> Option<Self> {
        Decimal::from_str(text).ok()
    }

    fn shift(self, exponent: i32) -> Option<Self> {
        if exponent == 0 || self.is_zero() {
            return Some(self);
        }
        pow10(exponent).and_then(|factor| self.checked_mul(factor))
    }

    fn canonical(self) -> Self {
        self.normalize()
    }

    fn cmp_total(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn add_saturating(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    fn sub_saturating(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or_default()
    }
}

/// Pins an overflowed sum of two finite floats at the largest finite magnitude.
fn saturate_f64(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else if value.is_sign_positive() {
        f64::MAX
    } else {
        f64::MIN
    }
}

impl Repr for f64 {
    const ZERO: Self = 0.0;

    fn from_small(n: i8) -> Self {
        f64::from(n)
    }

    fn parse_plain(text: &str) -> Option<Self> {
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn shift(self, exponent: i32) -> Option<Self> {
        if exponent == 0 || self == 0.0 {
            return Some(self);
        }
        let factor = pow10_f64(exponent.unsigned_abs());
        let shifted = if exponent > 0 {
            self * factor
        } else {
            self / factor
        };
        shifted.is_finite().then_some(shifted)
    }

    fn canonical(self) -> Self {
        // -0.0 and 0.0 must compare equal under the total order
        if self == 0.0 {
            0.0
        } else {
            self
        }
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn cmp_total(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn add_saturating(self, rhs: Self) -> Self {
        saturate_f64(self + rhs)
    }

    fn sub_saturating(self, rhs: Self) -> Self {
        saturate_f64(self - rhs)
    }

    fn as_f64(self) -> f64 {
        self
    }
}

/// Implements [`Repr`] for a primitive integer type.
///
/// Text is parsed as a decimal first so that overflow and fractional input are rejected rather than wrapped or
/// truncated; negative exponents only succeed when the division is exact.
macro_rules! integer_repr {
    ($t:ty, $narrow:ident) => {
        impl Repr for $t {
            const ZERO: Self = 0;

            fn from_small(n: i8) -> Self {
                <$t>::try_from(n).unwrap_or(0)
            }

            fn parse_plain(text: &str) -> Option<Self> {
                let d = Decimal::from_str(text).ok()?;
                if !d.fract().is_zero() {
                    return None;
                }
                d.$narrow()
            }

            fn shift(self, exponent: i32) -> Option<Self> {
                if exponent == 0 || self == 0 {
                    return Some(self);
                }
                let factor = <$t>::checked_pow(10, exponent.unsigned_abs())?;
                if exponent > 0 {
                    self.checked_mul(factor)
                } else if self % factor == 0 {
                    Some(self / factor)
                } else {
                    None
                }
            }

            fn cmp_total(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn add_saturating(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            fn sub_saturating(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }

            fn as_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

integer_repr!(i32, to_i32);
integer_repr!(u8, to_u8);
