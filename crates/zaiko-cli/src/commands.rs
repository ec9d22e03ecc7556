//! Command handlers

use std::path::PathBuf;

use zaiko_app::{open_inventory, open_inventory_at, Config};
use zaiko_store::{Inventory, SearchFilter};
use zaiko_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::output_cars;
use crate::selection::Selection;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;

    // CLI format beats the configured default
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Add {
            make,
            model,
            year,
            price,
        } => {
            let mut inventory = open(&cli, &config)?;
            cmd_add(&mut inventory, make, model, year, price, output_format)
        }

        Commands::Remove { models } => {
            let mut inventory = open(&cli, &config)?;
            cmd_remove(&mut inventory, models, output_format)
        }

        Commands::Toggle { models } => {
            let mut inventory = open(&cli, &config)?;
            cmd_toggle(&mut inventory, models, output_format)
        }

        Commands::Search {
            make,
            min_price,
            max_price,
            min_year,
        } => {
            let inventory = open(&cli, &config)?;
            cmd_search(
                &inventory,
                make.clone(),
                *min_price,
                *max_price,
                *min_year,
                output_format,
            )
        }

        Commands::List => {
            let inventory = open(&cli, &config)?;
            cmd_list(&inventory, output_format)
        }

        Commands::Config {
            show,
            set_file,
            set_output,
            reset,
        } => cmd_config(*show, set_file.clone(), *set_output, *reset),
    }
}

/// Open the inventory, `--file` beating the configured location
fn open(cli: &Cli, config: &Config) -> Result<Inventory> {
    match cli.file {
        Some(ref path) => open_inventory_at(path.clone()),
        None => open_inventory(config),
    }
}

/// Reject blank input before it reaches the store
fn require_non_empty(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::EmptyField(field));
    }
    Ok(())
}

fn cmd_add(
    inventory: &mut Inventory,
    make: &str,
    model: &str,
    year: &str,
    price: &str,
    output_format: OutputFormat,
) -> Result<()> {
    require_non_empty(make, "make")?;
    require_non_empty(model, "model")?;
    require_non_empty(year, "year")?;
    require_non_empty(price, "price")?;

    let car = inventory.add_car(make, model, year, price)?;
    println!("Added {} {} ({})", car.make, car.model, car.year);

    render_all(inventory, output_format)
}

fn cmd_remove(inventory: &mut Inventory, models: &[String], output_format: OutputFormat) -> Result<()> {
    let selection = Selection::from_keys(models.iter().cloned());

    let mut removed = 0;
    for key in selection.keys() {
        removed += inventory.remove_car(key)?;
    }

    if removed == 0 {
        eprintln!("No cars matched the given model(s)");
    } else {
        println!("Removed {} car(s)", removed);
    }

    render_all(inventory, output_format)
}

fn cmd_toggle(inventory: &mut Inventory, models: &[String], output_format: OutputFormat) -> Result<()> {
    let selection = Selection::from_keys(models.iter().cloned());

    let mut toggled = 0;
    for key in selection.keys() {
        toggled += inventory.toggle_status(key)?;
    }

    if toggled == 0 {
        eprintln!("No cars matched the given model(s)");
    } else {
        println!("Toggled status on {} car(s)", toggled);
    }

    render_all(inventory, output_format)
}

fn cmd_search(
    inventory: &Inventory,
    make: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_year: Option<i32>,
    output_format: OutputFormat,
) -> Result<()> {
    let filter = SearchFilter {
        make,
        min_price,
        max_price,
        min_year,
    };

    let results = inventory.search(&filter);
    if results.is_empty() {
        eprintln!("No cars matched the search filters");
    }
    output_cars(output_format, &results)
}

fn cmd_list(inventory: &Inventory, output_format: OutputFormat) -> Result<()> {
    render_all(inventory, output_format)
}

fn render_all(inventory: &Inventory, output_format: OutputFormat) -> Result<()> {
    let cars: Vec<_> = inventory.cars().iter().collect();
    output_cars(output_format, &cars)
}

fn cmd_config(
    show: bool,
    set_file: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_file {
        config.inventory_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
