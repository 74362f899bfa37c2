use clap::{Parser, ValueEnum};
use dealerlib::{
    config::DealershipConfig,
    error::{DealerError, Result},
    factory::Factory,
    formats::{csv::Csv, json::Json},
    traits::{ReadFormat, VehicleSource, WriteFormat},
    FleetManager,
};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
}

#[derive(Clone, Debug)]
struct TestDrive {
    year: i32,
    make: String,
    model: String,
}

#[derive(Parser, Debug)]
#[command(name = "dealer", version, about = "Run one business day at a car dealership")]
struct Cli {
    /// Factory manifest of vehicles on offer (stdin by default)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Where to write the closing lot inventory (stdout by default)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Manifest format
    #[arg(long = "in-format", value_enum, default_value_t = Fmt::Csv)]
    in_format: Fmt,

    /// Inventory report format
    #[arg(long = "out-format", value_enum, default_value_t = Fmt::Csv)]
    out_format: Fmt,

    /// Dealership name
    #[arg(long)]
    name: Option<String>,

    /// Opening cash balance
    #[arg(long)]
    balance: Option<Decimal>,

    /// Spending limit for the factory order
    #[arg(long)]
    budget: Option<Decimal>,

    /// VIN to sell once the lot is stocked (repeatable)
    #[arg(long = "sell")]
    sell: Vec<String>,

    /// Vehicle to prepare for a test drive, as YEAR:MAKE:MODEL
    #[arg(long = "test-drive", value_parser = parse_test_drive)]
    test_drive: Option<TestDrive>,

    /// Reject manifest entries whose VIN is not a 17-character ISO VIN
    #[arg(long = "strict-vin")]
    strict_vin: bool,

    /// Log per-vehicle decisions
    #[arg(short, long)]
    verbose: bool,
}

fn parse_test_drive(s: &str) -> std::result::Result<TestDrive, String> {
    let mut parts = s.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(make), Some(model)) if !make.is_empty() && !model.is_empty() => {
            Ok(TestDrive {
                year: year.trim().parse().map_err(|e| format!("year {year:?}: {e}"))?,
                make: make.trim().to_string(),
                model: model.trim().to_string(),
            })
        }
        _ => Err(format!("expected YEAR:MAKE:MODEL, got {s:?}")),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let defaults = DealershipConfig::default();
    let cfg = DealershipConfig {
        name: cli.name.unwrap_or(defaults.name),
        starting_balance: cli.balance.unwrap_or(defaults.starting_balance),
        acquisition_budget: cli.budget.unwrap_or(defaults.acquisition_budget),
    };

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let stock = match cli.in_format {
        Fmt::Csv => Csv::read(br),
        Fmt::Json => Json::read(br),
    }?;
    if cli.strict_vin {
        for v in &stock {
            v.validate_iso_vin()?;
        }
    }
    let mut factory = Factory::with_vehicles("factory", stock);
    info!(factory = factory.name(), on_offer = factory.ready_to_ship().len(), "manifest loaded");

    let mut dealership = FleetManager::from_config(&cfg);
    let purchased = dealership.acquire_vehicles(&mut factory, cfg.acquisition_budget);
    dealership.add_to_lot(purchased);

    dealership.check_insurance();
    dealership.check_maintenance();

    match dealership.pick_random_vehicle() {
        Ok(v) => info!("{}", dealership.sales_pitch(v)),
        Err(DealerError::EmptyInventory) => warn!("nothing on the lot to pitch"),
        Err(e) => return Err(e),
    }

    if let Some(td) = &cli.test_drive {
        dealership.select_for_test_drive(td.year, &td.make, &td.model);
    }

    for vin in &cli.sell {
        dealership.sell_vehicle(vin);
    }
    for sale in dealership.sales_history() {
        info!("{sale}");
    }
    info!(
        dealership = dealership.name(),
        balance = %dealership.balance().round_dp(2),
        on_lot = dealership.car_lot().len(),
        "closing for the day"
    );

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        Fmt::Csv => Csv::write(&mut writer, dealership.car_lot()),
        Fmt::Json => Json::write(&mut writer, dealership.car_lot()),
    }?;

    writer.flush().map_err(DealerError::from)
}
