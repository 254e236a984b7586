//! Quantity type and its implementations.

use core::any::Any;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::{Add, Sub};
use core::str::FromStr;

use crate::error::{QuantityError, QuantityResult};
use crate::policy::Policy;
use crate::repr::{plain_number, Repr};
use crate::unit::{split_suffix, Scale, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude tagged with its unit `U`.
///
/// The magnitude is stored in `U`'s base unit, in `U::Repr`, and always satisfies `U::Policy`. The field is private:
/// every value comes from [`Quantity::new`], the parse family, the numeric-parts family or arithmetic, and each of
/// them runs the policy.
///
/// # Examples
///
/// ```rust
/// use mensura_core::power::{Watt, Watts};
/// use rust_decimal_macros::dec;
///
/// let a = Watts::parse("1.5 kW").unwrap();
/// let b = Watts::from_scaled(500, Watt::BASE).unwrap();
/// assert_eq!((a + b).value(), dec!(2000));
/// assert_eq!((a + b).to_string(), "2000 W");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit>(U::Repr, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// The zero value of this quantity.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// assert_eq!(Meters::ZERO.to_string(), "0 m");
    /// ```
    pub const ZERO: Self = Self(<U::Repr as Repr>::ZERO, PhantomData);

    /// Creates a quantity from a magnitude in the base unit.
    ///
    /// Non-negative quantities clamp negative input to zero; percentages reject values outside their range with
    /// [`QuantityError::OutOfRange`].
    ///
    /// ```rust
    /// use mensura_core::frequency::Frequency;
    /// use mensura_core::percentage::Percentage;
    ///
    /// assert_eq!(Frequency::new(-10).unwrap(), Frequency::ZERO);
    /// assert!(Percentage::new(150).unwrap_err().is_out_of_range());
    /// ```
    pub fn new(value: impl Into<U::Repr>) -> QuantityResult<Self> {
        let value = value.into();
        if !value.is_finite() {
            return Err(Self::out_of_range(value));
        }
        U::Policy::admit(value)
            .map(|admitted| Self(admitted.canonical(), PhantomData))
            .ok_or_else(|| Self::out_of_range(value))
    }

    /// Creates a quantity from `number × 10^exponent`; a missing exponent means the base unit.
    ///
    /// ```rust
    /// use mensura_core::power::Watts;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Watts::from_parts(25, Some(2)).unwrap().value(), dec!(2500));
    /// assert_eq!(Watts::from_parts(25, None).unwrap().value(), dec!(25));
    /// ```
    pub fn from_parts(number: impl Into<U::Repr>, exponent: Option<i32>) -> QuantityResult<Self> {
        let number = number.into();
        let value = number
            .shift(exponent.unwrap_or(0))
            .ok_or_else(|| Self::out_of_range(number))?;
        Self::new(value)
    }

    /// Creates a quantity from a number expressed in `scale`.
    ///
    /// ```rust
    /// use mensura_core::power::{Watt, Watts};
    ///
    /// assert_eq!(
    ///     Watts::from_scaled(2, Watt::KILO).unwrap(),
    ///     Watts::from_scaled(2000, Watt::BASE).unwrap(),
    /// );
    /// ```
    pub fn from_scaled(number: impl Into<U::Repr>, scale: Scale<U>) -> QuantityResult<Self> {
        Self::from_parts(number, Some(scale.exponent()))
    }

    /// Parses text such as `"2.5 kW"`, `"-3mA"` or `"42"`.
    ///
    /// The text is trimmed and the longest recognised suffix selects the scale; text without a suffix is read in the
    /// base unit. Suffix matching is case-sensitive.
    ///
    /// ```rust
    /// use mensura_core::current::Amperes;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Amperes::parse(" 250 mA ").unwrap().value(), dec!(0.25));
    /// assert!(Amperes::parse("250 parsecs").unwrap_err().is_invalid_format());
    /// ```
    pub fn parse(text: &str) -> QuantityResult<Self> {
        let (number, exponent) = split_suffix::<U>(text.trim());
        Self::parse_number(text, number, exponent)
    }

    /// Parses a number expressed in `scale`, written bare or followed by one of that scale's suffixes.
    ///
    /// ```rust
    /// use mensura_core::power::{Watt, Watts};
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Watts::parse_in("2.5kW", Watt::KILO).unwrap().value(), dec!(2500));
    /// assert_eq!(Watts::parse_in("2.5", Watt::KILO).unwrap().value(), dec!(2500));
    /// assert!(Watts::parse_in("2.5 MW", Watt::KILO).is_err());
    /// ```
    pub fn parse_in(text: &str, scale: Scale<U>) -> QuantityResult<Self> {
        let trimmed = text.trim();
        let number = scale.strip(trimmed).unwrap_or(trimmed);
        Self::parse_number(text, number, scale.exponent())
    }

    /// Like [`Quantity::new`], returning `None` instead of an error.
    pub fn try_new(value: impl Into<U::Repr>) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Like [`Quantity::from_parts`], returning `None` instead of an error.
    ///
    /// ```rust
    /// use mensura_core::percentage::Percentage;
    /// assert!(Percentage::try_from_parts(101, None).is_none());
    /// ```
    pub fn try_from_parts(number: impl Into<U::Repr>, exponent: Option<i32>) -> Option<Self> {
        Self::from_parts(number, exponent).ok()
    }

    /// Like [`Quantity::from_scaled`], returning `None` instead of an error.
    pub fn try_from_scaled(number: impl Into<U::Repr>, scale: Scale<U>) -> Option<Self> {
        Self::from_scaled(number, scale).ok()
    }

    /// Like [`Quantity::parse`], returning `None` instead of an error.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Like [`Quantity::parse_in`], returning `None` instead of an error.
    pub fn try_parse_in(text: &str, scale: Scale<U>) -> Option<Self> {
        Self::parse_in(text, scale).ok()
    }

    /// Magnitude in the base unit.
    #[inline]
    pub fn value(self) -> U::Repr {
        self.0
    }

    /// Magnitude read in another unit of the same quantity.
    ///
    /// Returns `None` only when the representation cannot hold the rescaled value.
    ///
    /// ```rust
    /// use mensura_core::resistance::{Ohm, Ohms};
    /// use rust_decimal_macros::dec;
    ///
    /// let r = Ohms::parse("4700 Ω").unwrap();
    /// assert_eq!(r.value_in(Ohm::KILO), Some(dec!(4.7)));
    /// ```
    pub fn value_in(self, scale: Scale<U>) -> Option<U::Repr> {
        self.0.shift(-scale.exponent()).map(Repr::canonical)
    }

    /// Magnitude in the base unit as a plain `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.as_f64()
    }

    /// Compares against a quantity whose type is only known at runtime.
    ///
    /// ```rust
    /// use mensura_core::current::Amperes;
    /// use mensura_core::power::Watts;
    /// use core::cmp::Ordering;
    ///
    /// let a = Amperes::new(2).unwrap();
    /// assert_eq!(a.try_cmp(&Amperes::new(3).unwrap()), Ok(Ordering::Less));
    /// assert!(a.try_cmp(&Watts::new(2).unwrap()).is_err());
    /// ```
    pub fn try_cmp(&self, other: &dyn DynQuantity) -> QuantityResult<Ordering> {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map(|other| self.cmp(other))
            .ok_or(QuantityError::TypeMismatch {
                expected: U::NAME,
                found: other.unit_name(),
            })
    }

    /// Builds a value that is already known to be finite, running the policy's arithmetic rule.
    pub(crate) fn saturating(value: U::Repr) -> Self {
        Self(U::Policy::saturate(value).canonical(), PhantomData)
    }

    fn parse_number(text: &str, number: &str, exponent: i32) -> QuantityResult<Self> {
        let value = plain_number(number.trim())
            .and_then(<U::Repr as Repr>::parse_plain)
            .ok_or_else(|| {
                log::debug!("rejecting {} text {:?}", U::NAME, text);
                QuantityError::invalid_format(U::NAME, text)
            })?;
        Self::from_parts(value, Some(exponent))
    }

    fn out_of_range(value: U::Repr) -> QuantityError {
        log::debug!("rejecting {} value {}", U::NAME, value);
        QuantityError::out_of_range(U::NAME, value, U::Policy::RANGE)
    }
}

/// Object-safe view of a quantity, for comparisons across types only known at runtime.
pub trait DynQuantity: Any {
    /// Name of the quantity's unit marker.
    fn unit_name(&self) -> &'static str;

    /// Upcast for downcasting back to the concrete quantity.
    fn as_any(&self) -> &dyn Any;
}

impl<U: Unit> DynQuantity for Quantity<U> {
    fn unit_name(&self) -> &'static str {
        U::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Equality and ordering
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> PartialEq for Quantity<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> PartialOrd for Quantity<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Unit> Ord for Quantity<U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_total(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::saturating(self.0.add_saturating(rhs.0))
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::saturating(self.0.sub_saturating(rhs.0))
    }
}

impl<U: Unit> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, U: Unit> Sum<&'a Quantity<U>> for Quantity<U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)?;
        write!(f, " {}", U::SYMBOL)
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U>
where
    U::Repr: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U>
where
    U::Repr: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = U::Repr::deserialize(deserializer)?;
        Quantity::new(value).map_err(serde::de::Error::custom)
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit symbol in serialized data. On the way in,
/// the `unit` field may name any recognised suffix of the quantity; scaled suffixes are applied to the value.
///
/// # Examples
///
/// ```rust
/// use mensura_core::power::Watts;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Feeder {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     rated: Watts, // {"value": "2500", "unit": "W"}
///
///     measured: Watts, // "2410" (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use crate::unit::scale_for_suffix;
    use alloc::string::String;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": "2500", "unit": "W"}
    /// ```
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        U::Repr: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A missing `unit` means the base unit. A `unit` that is not a suffix of `U` is an error.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        U::Repr: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U> Visitor<'de> for QuantityVisitor<U>
        where
            U: Unit,
            U::Repr: Deserialize<'de>,
        {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<U::Repr> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let scale = match unit {
                    None => U::BASE,
                    Some(unit) => scale_for_suffix::<U>(&unit).ok_or_else(|| {
                        de::Error::custom(alloc::format!(
                            "unit mismatch: expected a {} unit such as '{}', found '{}'",
                            U::NAME,
                            U::SYMBOL,
                            unit
                        ))
                    })?,
                };

                Quantity::from_scaled(value, scale).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}
