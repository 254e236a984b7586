//! Values paired with their standard deviation.

use core::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::QuantityResult;
use crate::quantity::Quantity;
use crate::unit::{Scale, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A measured value together with its standard deviation, both of type `T`.
///
/// `StdDev` is a plain immutable pair: it carries no arithmetic. For quantities, the constructors parse both
/// components through the quantity's own rules and fail as a unit.
///
/// ```rust
/// use mensura_core::bandwidth::{BitPerSecond, BitsPerSecond};
/// use mensura_core::StdDev;
///
/// let rate = StdDev::<BitsPerSecond>::from_scaled(100.0, 5.0, BitPerSecond::BASE).unwrap();
/// assert_eq!(rate.value().value(), 100.0);
/// assert_eq!(rate.standard_deviation().value(), 5.0);
/// assert_eq!(rate.to_string(), "100 bps ± 5 bps");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct StdDev<T> {
    value: T,
    standard_deviation: T,
}

impl<T> StdDev<T> {
    /// Pairs a value with its standard deviation.
    pub const fn new(value: T, standard_deviation: T) -> Self {
        Self {
            value,
            standard_deviation,
        }
    }

    /// The measured value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The standard deviation of the measurement.
    pub fn standard_deviation(&self) -> &T {
        &self.standard_deviation
    }

    /// Splits the pair into `(value, standard_deviation)`.
    pub fn into_parts(self) -> (T, T) {
        (self.value, self.standard_deviation)
    }

    /// Applies `f` to both components.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::StdDev;
    ///
    /// let d = StdDev::new(Meters::parse("2 km").unwrap(), Meters::parse("15 m").unwrap());
    /// assert_eq!(d.map(|m| m.to_f64()), StdDev::new(2000.0, 15.0));
    /// ```
    pub fn map<V>(self, mut f: impl FnMut(T) -> V) -> StdDev<V> {
        StdDev::new(f(self.value), f(self.standard_deviation))
    }
}

impl<U: Unit> StdDev<Quantity<U>> {
    /// Builds the pair from `number × 10^number_exponent` and `stddev × 10^stddev_exponent`.
    pub fn parse(
        number: impl Into<U::Repr>,
        stddev: impl Into<U::Repr>,
        number_exponent: Option<i32>,
        stddev_exponent: Option<i32>,
    ) -> QuantityResult<Self> {
        Ok(Self::new(
            Quantity::from_parts(number, number_exponent)?,
            Quantity::from_parts(stddev, stddev_exponent)?,
        ))
    }

    /// Builds the pair from two numbers expressed in the same `scale`.
    pub fn from_scaled(
        number: impl Into<U::Repr>,
        stddev: impl Into<U::Repr>,
        scale: Scale<U>,
    ) -> QuantityResult<Self> {
        Ok(Self::new(
            Quantity::from_scaled(number, scale)?,
            Quantity::from_scaled(stddev, scale)?,
        ))
    }

    /// Parses both components from text, each with its own unit suffix.
    ///
    /// ```rust
    /// use mensura_core::voltage::Volts;
    /// use mensura_core::StdDev;
    /// use rust_decimal_macros::dec;
    ///
    /// let v = StdDev::<Volts>::parse_str("11 kV", "150 V").unwrap();
    /// assert_eq!(v.value().value(), dec!(11000));
    /// assert!(StdDev::<Volts>::parse_str("11 kV", "lots").is_err());
    /// ```
    pub fn parse_str(value_text: &str, stddev_text: &str) -> QuantityResult<Self> {
        Ok(Self::new(
            Quantity::parse(value_text)?,
            Quantity::parse(stddev_text)?,
        ))
    }

    /// Like [`StdDev::parse`], returning `None` instead of an error.
    pub fn try_parse(
        number: impl Into<U::Repr>,
        stddev: impl Into<U::Repr>,
        number_exponent: Option<i32>,
        stddev_exponent: Option<i32>,
    ) -> Option<Self> {
        Self::parse(number, stddev, number_exponent, stddev_exponent).ok()
    }

    /// Like [`StdDev::from_scaled`], returning `None` instead of an error.
    pub fn try_from_scaled(
        number: impl Into<U::Repr>,
        stddev: impl Into<U::Repr>,
        scale: Scale<U>,
    ) -> Option<Self> {
        Self::from_scaled(number, stddev, scale).ok()
    }

    /// Like [`StdDev::parse_str`], returning `None` instead of an error.
    pub fn try_parse_str(value_text: &str, stddev_text: &str) -> Option<Self> {
        Self::parse_str(value_text, stddev_text).ok()
    }
}

impl<T: Display> Display for StdDev<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ± {}", self.value, self.standard_deviation)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for StdDev<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.value, &self.standard_deviation).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for StdDev<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (value, standard_deviation) = <(T, T)>::deserialize(deserializer)?;
        Ok(Self::new(value, standard_deviation))
    }
}

/// Serde helper module for `StdDev<Quantity<U>>` as a `[value, stddev, unit]` array.
///
/// ```rust
/// use mensura_core::power::Watts;
/// use mensura_core::StdDev;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "mensura_core::stddev_with_unit")]
///     load: StdDev<Watts>, // ["2500", "40", "W"]
/// }
/// ```
#[cfg(feature = "serde")]
pub mod stddev_with_unit {
    use super::*;
    use crate::unit::scale_for_suffix;
    use alloc::string::String;
    use serde::de;

    /// Serializes the pair as `[value, stddev, unit]` with magnitudes in the base unit.
    pub fn serialize<U, S>(pair: &StdDev<Quantity<U>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        U::Repr: Serialize,
        S: Serializer,
    {
        (pair.value.value(), pair.standard_deviation.value(), U::SYMBOL).serialize(serializer)
    }

    /// Deserializes a `[value, stddev, unit]` array; `unit` may be any suffix of `U` and scales both components.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<StdDev<Quantity<U>>, D::Error>
    where
        U: Unit,
        U::Repr: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let (value, stddev, unit) = <(U::Repr, U::Repr, String)>::deserialize(deserializer)?;
        let scale = scale_for_suffix::<U>(&unit).ok_or_else(|| {
            de::Error::custom(alloc::format!(
                "unit mismatch: expected a {} unit such as '{}', found '{}'",
                U::NAME,
                U::SYMBOL,
                unit
            ))
        })?;
        StdDev::from_scaled(value, stddev, scale).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandwidth::{BitPerSecond, BitsPerSecond};
    use crate::percentage::Percentage;
    use crate::power::{Watt, Watts};
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_scaled_base_bandwidth() {
        let s = StdDev::<BitsPerSecond>::from_scaled(100.0, 5.0, BitPerSecond::BASE).unwrap();
        assert_relative_eq!(s.value().value(), 100.0);
        assert_relative_eq!(s.standard_deviation().value(), 5.0);
    }

    #[test]
    fn from_scaled_applies_scale_to_both() {
        let s = StdDev::<Watts>::from_scaled(2, dec!(0.1), Watt::KILO).unwrap();
        assert_eq!(s.value().value(), dec!(2000));
        assert_eq!(s.standard_deviation().value(), dec!(100));
    }

    #[test]
    fn parse_with_independent_exponents() {
        let s = StdDev::<Watts>::parse(3, 25, Some(6), Some(3)).unwrap();
        assert_eq!(s.value().value(), dec!(3000000));
        assert_eq!(s.standard_deviation().value(), dec!(25000));
    }

    #[test]
    fn parse_str_mixes_scales() {
        let s = StdDev::<Watts>::parse_str("1.2 MW", "500 kW").unwrap();
        assert_eq!(s.value().value(), dec!(1200000));
        assert_eq!(s.standard_deviation().value(), dec!(500000));
    }

    #[test]
    fn pair_fails_as_a_unit() {
        assert!(StdDev::<Percentage>::try_parse(50, 150, None, None).is_none());
        assert!(StdDev::<Percentage>::try_parse_str("50 %", "oops").is_none());
        assert!(StdDev::<Percentage>::try_from_scaled(150, 5, crate::percentage::Percent::BASE).is_none());
        assert!(StdDev::<Percentage>::parse_str("bad", "5 %")
            .unwrap_err()
            .is_invalid_format());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Accessors and formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn into_parts_and_map() {
        let s = StdDev::new(Watts::new(10).unwrap(), Watts::new(1).unwrap());
        let (v, sd) = s.into_parts();
        assert_eq!(v.value(), dec!(10));
        assert_eq!(sd.value(), dec!(1));
        assert_eq!(s.map(|w| w.to_f64()), StdDev::new(10.0, 1.0));
    }

    #[test]
    fn display_uses_plus_minus() {
        let s = StdDev::<Watts>::parse_str("230 W", "2 W").unwrap();
        assert_eq!(format!("{}", s), "230 W ± 2 W");
        assert_eq!(format!("{}", StdDev::new(1, 2)), "1 ± 2");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serializes_as_pair() {
            let s = StdDev::<BitsPerSecond>::from_scaled(100.0, 5.0, BitPerSecond::BASE).unwrap();
            assert_eq!(serde_json::to_string(&s).unwrap(), "[100.0,5.0]");
            let back: StdDev<BitsPerSecond> = serde_json::from_str("[100.0,5.0]").unwrap();
            assert_eq!(back, s);
        }

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Reading {
            #[serde(with = "crate::stddev_with_unit")]
            load: StdDev<Watts>,
        }

        #[test]
        fn with_unit_serializes_triple() {
            let r = Reading {
                load: StdDev::<Watts>::parse_str("2.5 kW", "40 W").unwrap(),
            };
            let json = serde_json::to_string(&r).unwrap();
            assert_eq!(json, r#"{"load":["2500","40","W"]}"#);
            let back: Reading = serde_json::from_str(&json).unwrap();
            assert_eq!(back, r);
        }

        #[test]
        fn with_unit_applies_scaled_suffix() {
            let r: Reading = serde_json::from_str(r#"{"load":["2.5","0.04","kW"]}"#).unwrap();
            assert_eq!(r.load.value().value(), dec!(2500));
            assert_eq!(r.load.standard_deviation().value(), dec!(40));
        }

        #[test]
        fn with_unit_rejects_foreign_unit() {
            let err = serde_json::from_str::<Reading>(r#"{"load":["1","0","V"]}"#).unwrap_err();
            assert!(err.to_string().contains("unit mismatch"));
        }
    }
}
