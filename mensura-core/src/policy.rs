//! Value-domain policies.
//!
//! A policy decides what happens to a magnitude on its way into a [`Quantity`](crate::Quantity):
//!
//! | Policy | Construction | `+` / `-` |
//! |---|---|---|
//! | [`Unrestricted`] | accepted | accepted |
//! | [`NonNegative`] | negative input clamps to zero | clamps to zero |
//! | [`PercentRange`] | outside `[0, 100]` is rejected | saturates into `[0, 100]` |
//! | [`SignedPercentRange`] | outside `[-100, 100]` is rejected | saturates into `[-100, 100]` |
//!
//! Clamping is silent (logged at `trace`); rejection surfaces as
//! [`QuantityError::OutOfRange`](crate::QuantityError::OutOfRange).

use core::cmp::Ordering;

use crate::repr::Repr;

/// Rule applied to every magnitude entering a quantity.
pub trait Policy: 'static {
    /// Accepted range, for error messages.
    const RANGE: &'static str;

    /// Applied on construction and parsing. `None` rejects the value.
    fn admit<R: Repr>(value: R) -> Option<R>;

    /// Applied to the result of `+` and `-`. Never rejects.
    fn saturate<R: Repr>(value: R) -> R;
}

fn clamp<R: Repr>(value: R, lo: R, hi: R) -> R {
    if value.cmp_total(&lo) == Ordering::Less {
        lo
    } else if value.cmp_total(&hi) == Ordering::Greater {
        hi
    } else {
        value
    }
}

fn within<R: Repr>(value: R, lo: R, hi: R) -> bool {
    value.cmp_total(&lo) != Ordering::Less && value.cmp_total(&hi) != Ordering::Greater
}

fn at_least_zero<R: Repr>(value: R) -> R {
    if value.cmp_total(&R::ZERO) == Ordering::Less {
        log::trace!("clamping negative magnitude {} to zero", value);
        R::ZERO
    } else {
        value
    }
}

/// No bound at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unrestricted {}

impl Policy for Unrestricted {
    const RANGE: &'static str = "unrestricted";

    #[inline]
    fn admit<R: Repr>(value: R) -> Option<R> {
        Some(value)
    }

    #[inline]
    fn saturate<R: Repr>(value: R) -> R {
        value
    }
}

/// `value ≥ 0`; negative magnitudes are silently clamped to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonNegative {}

impl Policy for NonNegative {
    const RANGE: &'static str = "[0, ∞)";

    #[inline]
    fn admit<R: Repr>(value: R) -> Option<R> {
        Some(at_least_zero(value))
    }

    #[inline]
    fn saturate<R: Repr>(value: R) -> R {
        at_least_zero(value)
    }
}

/// `0 ≤ value ≤ 100`; rejected on construction, saturated by arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PercentRange {}

impl Policy for PercentRange {
    const RANGE: &'static str = "[0, 100]";

    fn admit<R: Repr>(value: R) -> Option<R> {
        within(value, R::ZERO, R::from_small(100)).then_some(value)
    }

    fn saturate<R: Repr>(value: R) -> R {
        clamp(value, R::ZERO, R::from_small(100))
    }
}

/// `-100 ≤ value ≤ 100`; rejected on construction, saturated by arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignedPercentRange {}

impl Policy for SignedPercentRange {
    const RANGE: &'static str = "[-100, 100]";

    fn admit<R: Repr>(value: R) -> Option<R> {
        within(value, R::from_small(-100), R::from_small(100)).then_some(value)
    }

    fn saturate<R: Repr>(value: R) -> R {
        clamp(value, R::from_small(-100), R::from_small(100))
    }
}
