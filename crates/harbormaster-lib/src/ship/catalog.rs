//! Ship catalog loading and management.
//!
//! This module handles loading ship definitions from CSV files and provides
//! catalog lookup functionality.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};

use super::attributes::ShipAttributes;

/// Collection of ship definitions loaded from a CSV file.
#[derive(Debug, Clone, Default)]
pub struct ShipCatalog {
    ships: HashMap<String, ShipAttributes>,
    source: Option<PathBuf>,
}

impl ShipCatalog {
    /// Load a ship catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a ship catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::ShipDataValidation {
                message: format!("failed to read ship catalog headers: {err}"),
            })?
            .clone();

        // Helper to normalize header strings for robust matching.
        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };

        let normalized_headers: Vec<String> = headers.iter().map(normalize).collect();

        // Mapping of canonical field name -> possible header synonyms (normalized)
        let synonyms: &[(&str, &[&str])] = &[
            ("name", &["name", "shipname", "ship_name", "ship"]),
            (
                "max_speed_knots",
                &["max_speed_knots", "max_speed", "maxspeed", "speed_knots", "speed"],
            ),
            (
                "max_containers",
                &[
                    "max_containers",
                    "maxcontainers",
                    "container_slots",
                    "slots",
                    "capacity",
                ],
            ),
            (
                "max_weight_kg",
                &["max_weight_kg", "max_weight", "maxweight", "weight_kg", "weight"],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(i) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h.as_str() == *alt))
            {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|c| !index_map.contains_key(c))
            .collect();

        if !missing.is_empty() {
            return Err(Error::ShipDataValidation {
                message: format!(
                    "ship catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut ships = HashMap::new();

        let mut row_num: usize = 1; // header is line 1
        for result in csv_reader.records() {
            row_num += 1;
            let record = result.map_err(|e| Error::ShipDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> String {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            };

            let name = get("name");
            let parse_f64 = |field: &str| -> Result<f64> {
                get(field).parse::<f64>().map_err(|e| Error::ShipDataValidation {
                    message: format!("invalid {field} for ship '{name}' at row {row_num}: {e}"),
                })
            };

            let max_speed_knots = parse_f64("max_speed_knots")?;
            let max_weight_kg = parse_f64("max_weight_kg")?;
            let max_containers =
                get("max_containers")
                    .parse::<usize>()
                    .map_err(|e| Error::ShipDataValidation {
                        message: format!(
                            "invalid max_containers for ship '{name}' at row {row_num}: {e}"
                        ),
                    })?;

            let ship = ShipAttributes {
                name: name.clone(),
                max_speed_knots,
                max_containers,
                max_weight_kg,
            };

            ship.validate()?;

            let key = normalize_name(&ship.name);
            if ships.contains_key(&key) {
                return Err(Error::DuplicateShipName { name: key });
            }
            ships.insert(key, ship);
        }

        Ok(Self {
            ships,
            source: None,
        })
    }

    /// Get a ship by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&ShipAttributes> {
        self.ships.get(&normalize_name(name))
    }

    /// Get a sorted list of all ship names.
    pub fn ship_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ships.values().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all ships sorted by name.
    pub fn ships_sorted(&self) -> Vec<&ShipAttributes> {
        let mut ships: Vec<&ShipAttributes> = self.ships.values().collect();
        ships.sort_by(|a, b| a.name.cmp(&b.name));
        ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a ship name for case-insensitive lookup.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
