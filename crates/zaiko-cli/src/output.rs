//! Output formatting module

use zaiko_types::{Car, OutputFormat, Result};

/// Render a list of cars to stdout in the requested format
pub fn output_cars(output_format: OutputFormat, cars: &[&Car]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(cars)?;
        println!("{}", content);
    } else {
        println!();
        println!(
            "{:<15} {:<20} {:>6} {:>12} {:<9}",
            "Make", "Model", "Year", "Price", "Status"
        );
        println!("{}", "-".repeat(66));
        for car in cars {
            println!(
                "{:<15} {:<20} {:>6} {:>12.2} {:<9}",
                car.make,
                car.model,
                car.year,
                car.price,
                car.status.label()
            );
        }
        println!();
        println!("{} car(s)", cars.len());
    }

    Ok(())
}
