//! Demo command handler: a scripted voyage across the configured fleet.
//!
//! The voyage prepares one container of every variant, provokes the hazard
//! alerts and refusals the model guards against, then loads, replaces,
//! transfers and unloads containers between the first two ships. Refused
//! operations are recorded and the voyage carries on.

use std::fmt::Display;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::warn;

use harbormaster_cli::output::{
    format_events_text, format_fleet_status_text, format_rejections_text, render_json,
    OutputFormat,
};
use harbormaster_cli::terminal::ColorPalette;
use harbormaster_lib::container::constants::DEFAULT_STANDARD_CAPACITY_KG;
use harbormaster_lib::{
    CargoEvent, Container, ContainerConfig, ContainerDimensions, EventLog, EventSink, Fleet,
    GasContainer, LiquidContainer, ProductCatalog, RandomSerials, RefrigeratedContainer,
    SerialNumber, SerialSource, ShipCatalog, ShipStatus, StandardContainer, TracingSink,
};

use super::products::load_product_catalog;
use super::ships::load_ship_catalog;
use crate::GlobalOptions;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Seed for container serial numbers (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Capacity of standard containers in kilograms.
    #[arg(long, default_value_t = DEFAULT_STANDARD_CAPACITY_KG)]
    pub standard_capacity: f64,
}

/// Everything observed during a voyage.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub events: Vec<CargoEvent>,
    pub rejections: Vec<String>,
    pub fleet: Vec<ShipStatus>,
}

/// Handle the demo subcommand.
pub fn handle_demo(options: &GlobalOptions, args: &DemoArgs) -> Result<()> {
    let products = load_product_catalog(options.products.as_deref())?;
    let ships = load_ship_catalog(options.fleet.as_deref())?;
    let config = ContainerConfig {
        standard_capacity_kg: args.standard_capacity,
    };
    config.validate().context("invalid --standard-capacity")?;

    let mut serials = match args.seed {
        Some(seed) => RandomSerials::seeded(seed),
        None => RandomSerials::new(),
    };
    let mut report = run_voyage(products, &ships, &mut serials, &config)?;
    report.seed = args.seed;

    match options.format {
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Text => print!("{}", format_report_text(&report)),
    }
    Ok(())
}

fn format_report_text(report: &DemoReport) -> String {
    let palette = ColorPalette::detect();
    let mut out = String::new();
    if let Some(seed) = report.seed {
        out.push_str(&format!("Serial seed: {seed}\n"));
    }
    out.push_str("Voyage events:\n");
    out.push_str(&format_events_text(&report.events, &palette));
    if !report.rejections.is_empty() {
        out.push_str("Rejected operations:\n");
        out.push_str(&format_rejections_text(&report.rejections, &palette));
    }
    out.push_str("Fleet status:\n");
    out.push_str(&format_fleet_status_text(&report.fleet, &palette));
    out
}

/// Records events for the report and forwards them to the log.
#[derive(Debug, Default)]
struct VoyageLog {
    events: EventLog,
    tracing: TracingSink,
}

impl EventSink for VoyageLog {
    fn emit(&mut self, event: CargoEvent) {
        self.tracing.emit(event.clone());
        self.events.emit(event);
    }
}

/// Keep the value of a successful step, or note why it was refused.
fn record<T, E: Display>(
    rejections: &mut Vec<String>,
    outcome: std::result::Result<T, E>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            reject(rejections, &err);
            None
        }
    }
}

fn reject(rejections: &mut Vec<String>, err: &dyn Display) {
    warn!(%err, "operation rejected");
    rejections.push(err.to_string());
}

/// Run the scripted voyage against a fleet built from `ships`.
pub fn run_voyage(
    products: Arc<ProductCatalog>,
    ships: &ShipCatalog,
    serials: &mut dyn SerialSource,
    config: &ContainerConfig,
) -> Result<DemoReport> {
    let mut fleet = Fleet::from_catalog(ships)?;
    let names: Vec<String> = fleet.ships().map(|ship| ship.name().to_string()).collect();
    let [first, second, ..] = names.as_slice() else {
        bail!("the demo needs at least two ships, found {}", names.len());
    };

    let mut log = VoyageLog::default();
    let mut rejections = Vec::new();

    // Cargo is loaded into containers before they go aboard.
    let mut general = StandardContainer::new(
        ContainerDimensions::new(200.0, 250.0, 200.0, 600.0),
        config,
        serials,
    )?;
    record(&mut rejections, general.load_cargo(500.0, &mut log));
    let general_serial = general.serial();

    let tank_dimensions = ContainerDimensions::new(1_000.0, 200.0, 1_000.0, 250.0);
    let mut tank = LiquidContainer::new(tank_dimensions, false, serials)?;
    record(&mut rejections, tank.load_cargo(20_000.0, &mut log));

    let mut fuel = LiquidContainer::new(tank_dimensions, true, serials)?;
    record(&mut rejections, fuel.load_cargo(5_000.0, &mut log));
    record(&mut rejections, fuel.load_cargo(30_000.0, &mut log));
    let fuel_serial = fuel.serial();

    let mut gas = GasContainer::new(
        ContainerDimensions::new(500.0, 200.0, 500.0, 100.0),
        serials,
    )?;
    record(&mut rejections, gas.load_cargo(300.0, &mut log));
    record(&mut rejections, gas.load_cargo(400.0, &mut log));
    let gas_serial = gas.serial();

    let mut cargo: Vec<Box<dyn Container>> =
        vec![Box::new(general), Box::new(tank), Box::new(fuel), Box::new(gas)];

    let reefer_dimensions = ContainerDimensions::new(2_000.0, 250.0, 2_000.0, 300.0);
    record(
        &mut rejections,
        RefrigeratedContainer::new(reefer_dimensions, "Bananna", Arc::clone(&products), serials),
    );
    let reefer = RefrigeratedContainer::new(reefer_dimensions, "Bananas", products, serials);
    if let Some(mut reefer) = record(&mut rejections, reefer) {
        record(&mut rejections, reefer.load_cargo(12_000.0, &mut log));
        record(
            &mut rejections,
            reefer.change_product_type("Ice cream", &mut log),
        );
        reefer.unload_cargo(&mut log);
        record(
            &mut rejections,
            reefer.change_product_type("Ice cream", &mut log),
        );
        record(&mut rejections, reefer.load_cargo(8_000.0, &mut log));
        cargo.push(Box::new(reefer));
    }

    let mut spare = StandardContainer::new(
        ContainerDimensions::new(150.0, 250.0, 150.0, 600.0),
        config,
        serials,
    )?;
    record(&mut rejections, spare.load_cargo(250.0, &mut log));

    // Fill the first ship; whatever it refuses goes to the second.
    for container in cargo {
        let outcome = fleet.require_mut(first)?.load_container(container, &mut log);
        if let Err(rejected) = outcome {
            reject(&mut rejections, &rejected);
            record(
                &mut rejections,
                fleet
                    .require_mut(second)?
                    .load_container(rejected.into_container(), &mut log),
            );
        }
    }

    if let Some(name) = carrier(&fleet, general_serial) {
        record(
            &mut rejections,
            fleet
                .require_mut(&name)?
                .replace_container(general_serial, Box::new(spare), &mut log),
        );
    }

    if let Some(from) = carrier(&fleet, gas_serial) {
        let to = if &from == first { second } else { first };
        record(
            &mut rejections,
            fleet.transfer(&from, to, gas_serial, &mut log),
        );
    }

    if let Some(name) = carrier(&fleet, fuel_serial) {
        record(
            &mut rejections,
            fleet
                .require_mut(&name)?
                .unload_container(fuel_serial, &mut log),
        );
    }

    Ok(DemoReport {
        seed: None,
        events: log.events.drain(),
        rejections,
        fleet: fleet.status(),
    })
}

/// Name of the ship currently carrying `serial`.
fn carrier(fleet: &Fleet, serial: SerialNumber) -> Option<String> {
    fleet.locate(serial).map(|ship| ship.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use harbormaster_lib::SequentialSerials;

    fn fixture_fleet() -> ShipCatalog {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/fleet.csv");
        ShipCatalog::from_path(&path).expect("fixture fleet present")
    }

    fn voyage() -> DemoReport {
        run_voyage(
            ProductCatalog::builtin(),
            &fixture_fleet(),
            &mut SequentialSerials::new(),
            &ContainerConfig::default(),
        )
        .expect("voyage runs")
    }

    fn serials(status: &ShipStatus) -> Vec<String> {
        status
            .containers
            .iter()
            .map(|c| c.serial.to_string())
            .collect()
    }

    #[test]
    fn voyage_ends_with_expected_fleet() {
        let report = voyage();
        let [aurora, borealis, cygnus] = report.fleet.as_slice() else {
            panic!("expected three ships, got {:?}", report.fleet);
        };

        assert_eq!(serials(aurora), vec!["KON-S-6", "KON-L-2"]);
        assert_eq!(aurora.total_mass_kg, 21_400.0);
        assert_eq!(serials(borealis), vec!["KON-C-5", "KON-G-4"]);
        assert_eq!(borealis.total_mass_kg, 10_800.0);
        assert_eq!(borealis.containers[0].product.as_deref(), Some("Ice cream"));
        let pressure = borealis.containers[1].pressure.expect("gas reports pressure");
        assert!((pressure - 1.6).abs() < 1e-9);
        assert_eq!(cygnus.container_count, 0);
    }

    #[test]
    fn voyage_records_alerts_and_refusals() {
        let report = voyage();

        let alerts: Vec<String> = report
            .events
            .iter()
            .filter(|e| e.is_hazard_alert())
            .map(|e| e.serial().to_string())
            .collect();
        assert_eq!(alerts, vec!["KON-L-3", "KON-G-4"]);

        assert_eq!(report.rejections.len(), 5, "{:#?}", report.rejections);
        assert!(report.rejections[2].contains("Did you mean 'Bananas'?"));
        assert!(report.rejections[3].contains("while loaded"));
        assert!(report.rejections[4].contains("ship Aurora cannot accept container KON-C-5"));

        let tail: Vec<&CargoEvent> = report.events.iter().rev().take(3).collect();
        assert!(matches!(tail[2], CargoEvent::ContainerReplaced { .. }));
        assert!(matches!(tail[1], CargoEvent::ContainerTransferred { .. }));
        assert!(matches!(tail[0], CargoEvent::ContainerUnloaded { .. }));
    }

    #[test]
    fn voyage_needs_two_ships() {
        let csv = "name,max_speed_knots,max_containers,max_weight_kg\nSolo,10,4,100000\n";
        let catalog = ShipCatalog::from_reader(csv.as_bytes()).unwrap();
        let err = run_voyage(
            ProductCatalog::builtin(),
            &catalog,
            &mut SequentialSerials::new(),
            &ContainerConfig::default(),
        )
        .expect_err("one ship is not enough");
        assert!(err.to_string().contains("at least two ships"));
    }

    #[test]
    fn small_standard_capacity_refuses_general_cargo() {
        let report = run_voyage(
            ProductCatalog::builtin(),
            &fixture_fleet(),
            &mut SequentialSerials::new(),
            &ContainerConfig {
                standard_capacity_kg: 600.0,
            },
        )
        .expect("voyage runs");

        assert!(report.rejections[0].contains("cannot load 500kg into container KON-S-1"));
        assert_eq!(report.fleet[0].total_mass_kg, 21_400.0);
    }
}
