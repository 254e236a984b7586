//! Unit types and traits.

use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;

use crate::policy::Policy;
use crate::repr::Repr;

/// Trait implemented by every **unit** marker type.
///
/// A unit fixes everything about a quantity except its magnitude:
///
/// * `Repr` is the numeric representation the magnitude is stored in.
/// * `Policy` is the value-domain rule applied on construction and arithmetic.
/// * `SYMBOL` is the base-unit symbol (e.g. `"W"`). Magnitudes are always stored in the base unit, and
///   [`core::fmt::Display`] renders `"{value} {SYMBOL}"`.
/// * `ALIASES` are other accepted spellings of the base unit.
/// * `SCALES` are the recognised scaled suffixes (e.g. `kW` = 10³ W).
///
/// Implement it with `#[derive(Unit)]` rather than by hand.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - Every suffix (symbol, aliases, scaled symbols and their aliases) is unique within a unit.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Numeric representation of the magnitude.
    type Repr: Repr;

    /// Value-domain policy.
    type Policy: Policy;

    /// Name of the quantity, used in error messages.
    const NAME: &'static str;

    /// Base-unit symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Additional spellings of the base unit accepted by the parsers.
    const ALIASES: &'static [&'static str];

    /// Scaled suffixes, each bound to a power-of-ten multiplier.
    const SCALES: &'static [Scale<Self>];

    /// The base unit itself, as a scale with exponent zero.
    const BASE: Scale<Self> = Scale::new(Self::SYMBOL, Self::ALIASES, 0);
}

/// A textual unit suffix bound to a power-of-ten multiplier of `U`'s base unit.
///
/// Scales are typed by their unit, so a `Scale<Watt>` cannot be used to parse a `Volts` value.
pub struct Scale<U> {
    symbol: &'static str,
    aliases: &'static [&'static str],
    exponent: i32,
    unit: PhantomData<U>,
}

impl<U> Scale<U> {
    /// Creates a new scale. `exponent` is the power of ten relative to the base unit.
    pub const fn new(symbol: &'static str, aliases: &'static [&'static str], exponent: i32) -> Self {
        Self {
            symbol,
            aliases,
            exponent,
            unit: PhantomData,
        }
    }

    /// Canonical suffix.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Alternative spellings of the suffix.
    #[inline]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Power of ten relative to the base unit.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Every spelling of this scale, canonical symbol first.
    pub fn suffixes(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.symbol).chain(self.aliases.iter().copied())
    }

    /// Strips the longest of this scale's suffixes from the end of `text`.
    pub fn strip<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.suffixes()
            .filter(|suffix| text.ends_with(suffix))
            .max_by_key(|suffix| suffix.len())
            .map(|suffix| &text[..text.len() - suffix.len()])
    }
}

impl<U> Clone for Scale<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Scale<U> {}

impl<U> PartialEq for Scale<U> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.exponent == other.exponent
    }
}

impl<U> Eq for Scale<U> {}

impl<U> Debug for Scale<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Scale")
            .field("symbol", &self.symbol)
            .field("aliases", &self.aliases)
            .field("exponent", &self.exponent)
            .finish()
    }
}

/// Every scale of `U`, base unit first.
pub(crate) fn scales_of<U: Unit>() -> impl Iterator<Item = Scale<U>> {
    core::iter::once(U::BASE).chain(U::SCALES.iter().copied())
}

/// The scale of `U` that `suffix` spells exactly, if any.
#[cfg_attr(not(feature = "serde"), allow(dead_code))]
pub(crate) fn scale_for_suffix<U: Unit>(suffix: &str) -> Option<Scale<U>> {
    scales_of::<U>().find(|scale| scale.suffixes().any(|s| s == suffix))
}

/// Splits `text` into its number part and the exponent of the longest matching suffix of `U`.
///
/// Text that ends in none of the suffixes is read in the base unit.
pub(crate) fn split_suffix<U: Unit>(text: &str) -> (&str, i32) {
    scales_of::<U>()
        .filter_map(|scale| {
            scale
                .strip(text)
                .map(|number| (number, scale.exponent()))
        })
        .min_by_key(|(number, _)| number.len())
        .unwrap_or((text, 0))
}
