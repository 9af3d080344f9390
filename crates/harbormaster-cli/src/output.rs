//! Output formatting for catalogs, cargo events, and fleet status.
//!
//! Text formatters return `String`s so they can be tested without capturing
//! stdout; [`render_json`] writes any serializable value as pretty JSON.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use harbormaster_lib::{CargoEvent, ContainerSummary, Product, ShipAttributes, ShipStatus};

use crate::terminal::{format_with_separators, ColorPalette};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and event lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render any serializable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Product table, one row per product.
pub fn format_products_text(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products available in catalog.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Available products ({}):", products.len());
    let _ = writeln!(out, "{:<16} {:>8}", "Name", "Temp (C)");
    for product in products {
        let _ = writeln!(out, "{:<16} {:>8.1}", product.name, product.temperature_c);
    }
    out
}

/// Ship catalog table with slot and weight limits.
pub fn format_ships_text(ships: &[&ShipAttributes]) -> String {
    if ships.is_empty() {
        return "No ships available in catalog.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Available ships ({}):", ships.len());
    let _ = writeln!(
        out,
        "{:<16} {:>10} {:>6} {:>16}",
        "Name", "Speed (kn)", "Slots", "Max Weight (kg)"
    );
    for ship in ships {
        let _ = writeln!(
            out,
            "{:<16} {:>10.1} {:>6} {:>16}",
            ship.name,
            ship.max_speed_knots,
            ship.max_containers,
            format_with_separators(ship.max_weight_kg.round() as u64)
        );
    }
    out
}

/// One line per event; hazard alerts get a badge.
pub fn format_events_text(events: &[CargoEvent], palette: &ColorPalette) -> String {
    let mut out = String::new();
    for event in events {
        if event.is_hazard_alert() {
            let _ = writeln!(
                out,
                "{} ALERT {} {}",
                palette.tag_hazard,
                palette.reset,
                event.message()
            );
        } else {
            let _ = writeln!(out, "  {}", event.message());
        }
    }
    out
}

/// Operations that were refused, with their reasons.
pub fn format_rejections_text(rejections: &[String], palette: &ColorPalette) -> String {
    let mut out = String::new();
    for reason in rejections {
        let _ = writeln!(out, "  {}rejected{}: {}", palette.yellow, palette.reset, reason);
    }
    out
}

/// Per-ship status line followed by the containers on board.
pub fn format_fleet_status_text(statuses: &[ShipStatus], palette: &ColorPalette) -> String {
    let mut out = String::new();
    for status in statuses {
        let _ = writeln!(out, "{}{}{}", palette.white_bold, status, palette.reset);
        for container in &status.containers {
            let _ = writeln!(
                out,
                "  {}- {}{}",
                palette.gray,
                format_container_line(container, palette),
                palette.reset
            );
        }
    }
    out
}

fn format_container_line(container: &ContainerSummary, palette: &ColorPalette) -> String {
    let mut line = format!(
        "{} {} {}kg/{}kg",
        container.serial, container.kind, container.mass_kg, container.max_capacity_kg
    );
    if container.hazardous == Some(true) {
        line.push_str(", hazardous");
    }
    if let Some(pressure) = container.pressure {
        let _ = write!(line, ", pressure {pressure:.2}");
    }
    if let (Some(product), Some(temperature)) = (&container.product, container.temperature_c) {
        let _ = write!(
            line,
            ", {product} at {}{temperature}C{}",
            palette.cyan, palette.reset
        );
    }
    line
}
