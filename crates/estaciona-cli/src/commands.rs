//! Command handlers

use crate::cli::{Cli, Commands, VehicleCommands};
use crate::output::print_vehicles;
use estaciona_app::config::Config;
use estaciona_app::mail;
use estaciona_store::{LastUsedStore, VehicleStore};
use estaciona_types::{
    normalize_plate, Error, OutputFormat, ParkingRequest, Result, Vehicle,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match &cli.command {
        Commands::Park {
            vehicle,
            minutes,
            yes,
            dry_run,
        } => cmd_park(&config, vehicle.clone(), *minutes, *yes, *dry_run),

        Commands::Vehicle { command } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_vehicle(&config, command, output_format)
        }

        Commands::Config {
            show,
            set_store_dir,
            set_output,
            reset,
        } => cmd_config(*show, set_store_dir.clone(), *set_output, *reset),
    }
}

fn cmd_park(
    config: &Config,
    selector: Option<String>,
    minutes: u32,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    let store_dir = config.store_dir()?;
    let store = VehicleStore::open(store_dir.clone())?;
    let last_used = LastUsedStore::open(store_dir)?;

    let vehicle = resolve_vehicle(&store, &last_used, selector.as_deref())?.clone();
    let request = ParkingRequest::new(vehicle.license_plate.clone(), minutes);

    if dry_run {
        println!("{}", mail::mailto_url(&request));
        return Ok(());
    }

    println!(
        "Solicitar estacionamiento para {} ({}) por {} minutos",
        vehicle.nickname, vehicle.license_plate, minutes
    );

    if !yes && !confirm_on_stdin()? {
        println!("Cancelado.");
        return Ok(());
    }

    mail::send(&request)?;
    last_used.set(&vehicle.id);
    println!("Solicitud de estacionamiento enviada");
    Ok(())
}

/// Pick the vehicle to park: an explicit id/nickname/plate selector, else
/// the last used vehicle if it still exists, else the first registered one.
fn resolve_vehicle<'a>(
    store: &'a VehicleStore,
    last_used: &LastUsedStore,
    selector: Option<&str>,
) -> Result<&'a Vehicle> {
    if let Some(selector) = selector {
        return store
            .get(selector)
            .or_else(|| store.find_by_nickname(selector))
            .or_else(|| store.find_by_plate(&normalize_plate(selector)))
            .ok_or_else(|| Error::VehicleNotFound(selector.to_string()));
    }

    if let Some(id) = last_used.get() {
        if let Some(vehicle) = store.get(&id) {
            return Ok(vehicle);
        }
    }

    store.load().first().ok_or(Error::NoVehicles)
}

fn confirm_on_stdin() -> Result<bool> {
    print!("¿Confirmar? [s/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "s" || answer == "si" || answer == "sí")
}

fn cmd_vehicle(
    config: &Config,
    command: &VehicleCommands,
    output_format: OutputFormat,
) -> Result<()> {
    let mut store = VehicleStore::open(config.store_dir()?)?;

    match command {
        VehicleCommands::Add { nickname, plate } => {
            let vehicle = Vehicle::new(nickname, plate);
            if vehicle.nickname.is_empty() || vehicle.license_plate.is_empty() {
                return Err(Error::InvalidInput(
                    "nickname and plate must not be empty".to_string(),
                ));
            }
            let id = store.add(vehicle);
            println!("Vehículo agregado ({})", id);
        }

        VehicleCommands::List => {
            print_vehicles(output_format, store.load())?;
        }

        VehicleCommands::Edit { id, nickname, plate } => {
            let mut vehicle = store
                .get(id)
                .cloned()
                .ok_or_else(|| Error::VehicleNotFound(id.clone()))?;
            if let Some(nickname) = nickname {
                vehicle.nickname = nickname.trim().to_string();
            }
            if let Some(plate) = plate {
                vehicle.license_plate = normalize_plate(plate);
            }
            if vehicle.nickname.is_empty() || vehicle.license_plate.is_empty() {
                return Err(Error::InvalidInput(
                    "nickname and plate must not be empty".to_string(),
                ));
            }
            store.update(vehicle);
            println!("Vehículo actualizado");
        }

        VehicleCommands::Remove { id } => {
            if store.remove(id) {
                println!("Vehículo eliminado");
            } else {
                return Err(Error::VehicleNotFound(id.clone()));
            }
        }
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    let mut config = if reset {
        Config::default()
    } else {
        Config::load()?
    };

    let mut changed = reset;

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("store_dir:     {}", config.store_dir()?.display());
        println!("output_format: {}", config.output_format);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            store_dir: Some(dir.to_path_buf()),
            output_format: OutputFormat::Table,
        }
    }

    #[test]
    fn add_rejects_empty_fields() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        let result = cmd_vehicle(
            &config,
            &VehicleCommands::Add {
                nickname: "  ".to_string(),
                plate: "ABC123".to_string(),
            },
            OutputFormat::Table,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn edit_rejects_empty_fields_and_keeps_the_record() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        cmd_vehicle(
            &config,
            &VehicleCommands::Add {
                nickname: "Auto".to_string(),
                plate: "abc123".to_string(),
            },
            OutputFormat::Table,
        )
        .unwrap();

        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        let id = store.load()[0].id.clone();
        drop(store);

        let result = cmd_vehicle(
            &config,
            &VehicleCommands::Edit {
                id: id.clone(),
                nickname: None,
                plate: Some("   ".to_string()),
            },
            OutputFormat::Table,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        // The stored record is untouched
        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get(&id).unwrap().license_plate, "ABC123");
        assert_eq!(store.get(&id).unwrap().nickname, "Auto");
    }

    #[test]
    fn edit_applies_normalized_fields() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        cmd_vehicle(
            &config,
            &VehicleCommands::Add {
                nickname: "Auto".to_string(),
                plate: "ABC123".to_string(),
            },
            OutputFormat::Table,
        )
        .unwrap();

        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        let id = store.load()[0].id.clone();
        drop(store);

        cmd_vehicle(
            &config,
            &VehicleCommands::Edit {
                id: id.clone(),
                nickname: None,
                plate: Some(" def456 ".to_string()),
            },
            OutputFormat::Table,
        )
        .unwrap();

        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get(&id).unwrap().license_plate, "DEF456");
    }
}
