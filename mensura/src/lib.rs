//! Strongly typed, policy-bounded physical quantities.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core` plus every
//! predefined unit (current, voltage, power, energy, resistance, frequency, bandwidth, length, area, volume, mass and
//! percentages).
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a zero-sized type describing the unit. The unit
//! decides how the magnitude is stored (`Decimal`, `f64`, `i32` or `u8`), which values are allowed, and which textual
//! suffixes are understood.
//!
//! # What this crate solves
//!
//! - Prevents mixing unrelated quantities (you can't add watts to volts).
//! - Parses human-written values (`"2.5 kW"`, `"250mA"`, `"47 kΩ"`, `"12 %"`) with a strict, culture-independent
//!   number grammar.
//! - Keeps values in their domain: lengths, masses and frequencies never go negative; percentages stay in
//!   `[0, 100]` (or `[-100, 100]` for [`SignedPercentage`]).
//!
//! # What this crate does not try to solve
//!
//! - A unit-conversion graph between dimensions. `Watts / Volts = Amperes` is the one relation provided.
//! - Locale-aware parsing (`1.000,5`), exponent notation (`1e3`) or thousands separators.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{Amperes, Frequency, Percentage, Volts, Watt, Watts};
//!
//! let load = Watts::parse_in("2.5kW", Watt::KILO).unwrap();
//! assert_eq!(load.to_string(), "2500 W");
//!
//! let current: Amperes = (load / Volts::parse("250 V").unwrap()).unwrap();
//! assert_eq!(current.to_string(), "10 A");
//!
//! assert!(Percentage::try_from_parts(101, None).is_none());
//! assert_eq!(Frequency::from_parts(-10, None).unwrap(), Frequency::ZERO);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Volts, Watts};
//!
//! let p = Watts::parse("1 W").unwrap();
//! let v = Volts::parse("1 V").unwrap();
//! let _ = p + v; // cannot add different quantities
//! ```
//!
//! # Modules
//!
//! Units are grouped by quantity under modules (also re-exported at the crate root for convenience):
//!
//! - `mensura::current`, `mensura::voltage`, `mensura::power`, `mensura::energy`, `mensura::resistance`
//! - `mensura::frequency`, `mensura::bandwidth`
//! - `mensura::length`, `mensura::area`, `mensura::volume`, `mensura::mass`
//! - `mensura::percentage`
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mensura-core`.
//! - `serde`: enables `serde` support; see [`serde_with_unit`](crate::serde_with_unit) and
//!   [`stddev_with_unit`](crate::stddev_with_unit).
//!
//! Disable default features for `no_std` (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! mensura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`QuantityResult`] with a [`QuantityError`]; each constructor has a `try_*` mirror
//! returning `Option` for untrusted input. Nothing panics on bad input.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Decimal type used by most predefined quantities.
pub use rust_decimal::Decimal;

pub use mensura_core::units::area::*;
pub use mensura_core::units::bandwidth::*;
pub use mensura_core::units::current::*;
pub use mensura_core::units::energy::*;
pub use mensura_core::units::frequency::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass::*;
pub use mensura_core::units::percentage::*;
pub use mensura_core::units::power::*;
pub use mensura_core::units::resistance::*;
pub use mensura_core::units::voltage::*;
pub use mensura_core::units::volume::*;
