//! Ships command handler for listing available ships.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use harbormaster_cli::output::{format_ships_text, render_json, OutputFormat};
use harbormaster_lib::ShipCatalog;

use crate::GlobalOptions;

/// Environment variable naming an alternative ship catalog CSV.
pub const FLEET_DATA_ENV: &str = "HARBORMASTER_FLEET_DATA";

/// Fleet shipped with the binary, used when no catalog is configured.
const BUNDLED_FLEET: &str = include_str!("../../../../docs/fixtures/fleet.csv");

/// Handle the ships subcommand.
pub fn handle_list_ships(options: &GlobalOptions) -> Result<()> {
    let catalog = load_ship_catalog(options.fleet.as_deref())?;
    let ships = catalog.ships_sorted();

    match options.format {
        OutputFormat::Text => print!("{}", format_ships_text(&ships)),
        OutputFormat::Json => render_json(&ships)?,
    }
    Ok(())
}

/// Load the ship catalog.
///
/// Resolution order:
/// 1. Explicit `--fleet` path
/// 2. HARBORMASTER_FLEET_DATA environment variable
/// 3. The bundled fleet
pub fn load_ship_catalog(path: Option<&Path>) -> Result<ShipCatalog> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(FLEET_DATA_ENV).map(PathBuf::from));

    let Some(path) = path else {
        debug!("using bundled fleet catalog");
        return ShipCatalog::from_reader(BUNDLED_FLEET.as_bytes())
            .context("bundled fleet catalog is invalid");
    };

    let catalog = ShipCatalog::from_path(&path)
        .with_context(|| format!("failed to load ship data from {}", path.display()))?;
    debug!(path = %path.display(), ships = catalog.len(), "loaded ship catalog");
    Ok(catalog)
}
