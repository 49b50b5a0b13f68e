//! Output formatting module

use estaciona_types::{OutputFormat, Result, Vehicle};

pub fn print_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicles)?;
        println!("{}", content);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No hay vehículos registrados");
        return Ok(());
    }

    println!("{:<16} {:<20} {}", "ID", "APODO", "MATRÍCULA");
    for vehicle in vehicles {
        println!(
            "{:<16} {:<20} {}",
            vehicle.id, vehicle.nickname, vehicle.license_plate
        );
    }

    Ok(())
}
