//! Core type system for strongly typed, policy-bounded physical quantities.
//!
//! `mensura-core` provides one generic construct and the data that instantiates it:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], usually through `#[derive(Unit)]`. It fixes the
//!   numeric representation ([`Repr`]), the value-domain [`Policy`], the base-unit symbol and the table of scaled
//!   suffixes ([`Scale`]).
//! - A value tagged with a unit is a [`Quantity<U>`]. Its magnitude is stored in the base unit and always satisfies
//!   the unit's policy.
//! - [`StdDev<T>`] pairs a value with its standard deviation.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Parsing text such as `"2.5 kW"`, `"250mA"` or `"47 kΩ"` into a typed value, with the longest recognised suffix
//!   selecting the scale.
//! - Keeping values inside their domain: non-negative quantities clamp, percentages reject out-of-range input and
//!   saturate under arithmetic.
//! - Exact decimal magnitudes for electrical and physical quantities (`rust_decimal`), `f64` where range matters more
//!   than exactness.
//! - Round-trip formatting: `Quantity::parse(&q.to_string()) == Ok(q)`.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between unrelated dimensions. The only cross-quantity relation is `Watts / Volts = Amperes` (and
//!   `Amperes * Volts = Watts`).
//! - Precision beyond what the representation type holds.
//! - Localised number formats: the grammar is `[+-]?digits(.digits)?` only.
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::power::{Watt, Watts};
//! use mensura_core::voltage::Volts;
//! use rust_decimal_macros::dec;
//!
//! let p = Watts::parse_in("2.5kW", Watt::KILO).unwrap();
//! assert_eq!(p.to_string(), "2500 W");
//!
//! let i = (p / Volts::parse("250 V").unwrap()).unwrap();
//! assert_eq!(i.value(), dec!(10));
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! `alloc` is still required (error messages carry the offending text). Powers of ten for `f64` come from `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support. `Quantity<U>` serializes as its raw magnitude and deserializes through the
//!   unit's policy; [`serde_with_unit`] keeps the unit symbol; `StdDev<T>` serializes as `[value, stddev]` and
//!   [`stddev_with_unit`] as `[value, stddev, unit]`.
//!
//! # Panics and errors
//!
//! Nothing in this crate panics on bad input. Fallible constructors return [`QuantityResult`]; every one of them has a
//! `try_*` mirror returning `Option`. Clamping and saturation are silent (logged at `trace` level through `log`);
//! rejected input is logged at `debug` level.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod policy;
mod quantity;
mod repr;
mod stddev;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{QuantityError, QuantityResult};
pub use policy::{NonNegative, PercentRange, Policy, SignedPercentRange, Unrestricted};
pub use quantity::{DynQuantity, Quantity};
pub use repr::Repr;
pub use stddev::StdDev;
pub use unit::{Scale, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;
#[cfg(feature = "serde")]
pub use stddev::stddev_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules.
///
/// These are defined in `mensura-core` so the derive's `crate::` paths resolve and the cross-quantity operators can be
/// implemented without running into Rust's orphan rules.
pub mod units;

pub use units::area;
pub use units::bandwidth;
pub use units::current;
pub use units::energy;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::percentage;
pub use units::power;
pub use units::resistance;
pub use units::voltage;
pub use units::volume;
