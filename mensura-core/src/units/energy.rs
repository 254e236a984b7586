//! Energy, in watt-hours.

use crate::policy::Unrestricted;
use crate::Quantity;
use mensura_derive::Unit;
use rust_decimal::Decimal;

/// Watt-hour, the customary unit of metered electrical energy.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(symbol = "Wh", repr = Decimal, policy = Unrestricted)]
#[scale(KILO, symbol = "kWh", aliases = ["KWh"], exponent = 3)]
#[scale(MEGA, symbol = "MWh", exponent = 6)]
#[scale(GIGA, symbol = "GWh", exponent = 9)]
pub struct WattHour;
/// A quantity measured in watt-hours.
pub type WattHours = Quantity<WattHour>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn scales() {
        assert_eq!(WattHours::parse("3.2 kWh").unwrap().value(), dec!(3200));
        assert_eq!(WattHours::parse("3.2 KWh").unwrap().value(), dec!(3200));
        assert_eq!(WattHours::parse("1 MWh").unwrap().value(), dec!(1000000));
        assert_eq!(WattHours::parse("1 GWh").unwrap().value(), dec!(1000000000));
    }

    #[test]
    fn consumption_can_be_negative() {
        let exported = WattHours::parse("-500 Wh").unwrap();
        let imported = WattHours::parse("2 kWh").unwrap();
        assert_eq!((imported + exported).to_string(), "1500 Wh");
    }

    #[test]
    fn value_in_kilo() {
        let e = WattHours::parse("12345 Wh").unwrap();
        assert_eq!(e.value_in(WattHour::KILO), Some(dec!(12.345)));
    }
}
