//! Minimal end-to-end example: parse readings from a feeder, derive the current and check the utilisation.

use mensura::{Amperes, Frequency, Percentage, StdDev, Volts, Watt, Watts};

fn main() {
    let load = Watts::parse_in("2.5kW", Watt::KILO).unwrap();
    let supply = Volts::parse("250 V").unwrap();
    let current: Amperes = (load / supply).unwrap();
    println!("{load} at {supply} draws {current}");

    let readings = ["1.2 kW", "800 W", "not a number", "0.5 kW"];
    let total: Watts = readings.iter().filter_map(|r| Watts::try_parse(r)).sum();
    println!("total of valid readings: {total}");

    let utilisation = Percentage::parse("70 %").unwrap() + Percentage::parse("45 %").unwrap();
    println!("utilisation saturates at {utilisation}");

    let grid = Frequency::from_parts(-10, None).unwrap();
    println!("a negative frequency clamps to {grid}");

    let noisy = StdDev::<Watts>::parse_str("2.5 kW", "40 W").unwrap();
    println!("measured {noisy}");
}
