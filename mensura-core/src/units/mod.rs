//! Predefined unit modules grouped by quantity.
//!
//! `mensura-core` ships the built-in units so that the derive (which expands to `crate::Unit`) and the cross-quantity
//! operators can live next to the generic machinery without running into Rust’s orphan rules.
//!
//! ## Modules
//!
//! - [`current`]: amperes.
//! - [`voltage`]: volts.
//! - [`power`]: watts, volt-amperes, volt-amperes reactive, and `Watts / Volts = Amperes`.
//! - [`energy`]: watt-hours.
//! - [`resistance`]: ohms and siemens.
//! - [`frequency`]: hertz (non-negative).
//! - [`bandwidth`]: bits per second (`f64`).
//! - [`length`], [`area`], [`volume`]: metres, square metres, cubic metres (non-negative).
//! - [`mass`]: kilograms and tonnes (non-negative).
//! - [`percentage`]: the bounded percentage family.

pub mod area;
pub mod bandwidth;
pub mod current;
pub mod energy;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod percentage;
pub mod power;
pub mod resistance;
pub mod voltage;
pub mod volume;
