//! Example demonstrating the serde_with_unit and stddev_with_unit helper modules.
//!
//! This shows how to use #[serde(with = "mensura::serde_with_unit")] to keep unit information in serialized data on
//! a per-field basis, and how scaled units are accepted on the way back in.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use mensura::{Frequency, Percentage, StdDev, VoltAmperes, Watts};
    use serde::{Deserialize, Serialize};

    println!("=== Using serde_with_unit Helper ===\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct Transformer {
        // Serialized WITH unit information
        #[serde(with = "mensura::serde_with_unit")]
        rating: VoltAmperes,

        // Default (compact) serialization: the raw magnitude
        load: Percentage,

        #[serde(with = "mensura::serde_with_unit")]
        frequency: Frequency,

        // [value, stddev, unit]
        #[serde(with = "mensura::stddev_with_unit")]
        losses: StdDev<Watts>,
    }

    let unit = Transformer {
        rating: VoltAmperes::parse("630 kVA").unwrap(),
        load: Percentage::parse("72.5 %").unwrap(),
        frequency: Frequency::parse("50 Hz").unwrap(),
        losses: StdDev::parse_str("6.5 kW", "120 W").unwrap(),
    };

    let json = serde_json::to_string_pretty(&unit).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: Transformer = serde_json::from_str(&json).unwrap();
    println!("Deserialized: {:?}\n", restored);

    println!("=== Scaled units on input ===\n");

    let scaled = r#"{
        "rating": {"value": "0.63", "unit": "MVA"},
        "load": "72.5",
        "frequency": {"value": "0.05", "unit": "kHz"},
        "losses": ["6.5", "0.12", "kW"]
    }"#;
    let parsed: Transformer = serde_json::from_str(scaled).unwrap();
    println!("rating:    {}", parsed.rating);
    println!("frequency: {}", parsed.frequency);
    println!("losses:    {}\n", parsed.losses);

    println!("=== Rejections ===\n");

    let wrong_unit = r#"{
        "rating": {"value": "630", "unit": "kW"},
        "load": "72.5",
        "frequency": {"value": "50"},
        "losses": ["6500", "120", "W"]
    }"#;
    match serde_json::from_str::<Transformer>(wrong_unit) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("wrong unit:       {e}"),
    }

    let out_of_range = r#"{
        "rating": {"value": "630000"},
        "load": "120",
        "frequency": {"value": "50"},
        "losses": ["6500", "120", "W"]
    }"#;
    match serde_json::from_str::<Transformer>(out_of_range) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("out-of-range load: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
