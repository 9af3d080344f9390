//! A named collection of ships and transfers between them.

use tracing::debug;

use crate::error::{Error, Result};
use crate::events::EventSink;
use crate::serial::SerialNumber;
use crate::ship::catalog::normalize_name;
use crate::ship::{Ship, ShipCatalog, ShipStatus};

/// Similarity threshold for ship name suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Ships in the order they joined the fleet, addressed by case-insensitive name.
#[derive(Debug, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty ship per catalog entry, sorted by name.
    pub fn from_catalog(catalog: &ShipCatalog) -> Result<Self> {
        let mut fleet = Self::new();
        for attributes in catalog.ships_sorted() {
            fleet.add_ship(Ship::new(attributes.clone())?)?;
        }
        Ok(fleet)
    }

    pub fn add_ship(&mut self, ship: Ship) -> Result<()> {
        if self.index_of(ship.name()).is_some() {
            return Err(Error::DuplicateShipName {
                name: normalize_name(ship.name()),
            });
        }
        debug!(ship = %ship.name(), "ship joined fleet");
        self.ships.push(ship);
        Ok(())
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.index_of(name).map(|i| &self.ships[i])
    }

    pub fn ship_mut(&mut self, name: &str) -> Option<&mut Ship> {
        let index = self.index_of(name)?;
        Some(&mut self.ships[index])
    }

    /// Mutable access to a ship, failing with suggestions when it is unknown.
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Ship> {
        let index = self.require_index(name)?;
        Ok(&mut self.ships[index])
    }

    /// Find which ship currently carries `serial`.
    pub fn locate(&self, serial: SerialNumber) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.contains(serial))
    }

    /// Move a container between two ships of this fleet.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        serial: SerialNumber,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        let source = self.require_index(from)?;
        let destination = self.require_index(to)?;
        if source == destination {
            return Err(Error::InvalidArgument {
                message: format!("cannot transfer container {serial} from {from} to itself"),
            });
        }

        let (source, destination) = if source < destination {
            let (head, tail) = self.ships.split_at_mut(destination);
            (&mut head[source], &mut tail[0])
        } else {
            let (head, tail) = self.ships.split_at_mut(source);
            (&mut tail[0], &mut head[destination])
        };
        source.transfer_container(serial, destination, sink)
    }

    pub fn status(&self) -> Vec<ShipStatus> {
        self.ships.iter().map(Ship::status).collect()
    }

    pub fn total_mass_kg(&self) -> f64 {
        self.ships.iter().map(Ship::total_mass_kg).sum()
    }

    pub fn container_count(&self) -> usize {
        self.ships.iter().map(Ship::len).sum()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.ships
            .iter()
            .position(|ship| normalize_name(ship.name()) == key)
    }

    fn require_index(&self, name: &str) -> Result<usize> {
        self.index_of(name).ok_or_else(|| {
            let key = normalize_name(name);
            let mut suggestions: Vec<String> = self
                .ships
                .iter()
                .filter(|ship| {
                    strsim::jaro_winkler(&key, &normalize_name(ship.name())) >= SUGGESTION_THRESHOLD
                })
                .map(|ship| ship.name().to_string())
                .collect();
            suggestions.sort();
            Error::UnknownShip {
                name: name.to_string(),
                suggestions,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::events::EventLog;
    use crate::ship::ShipAttributes;

    fn fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet
            .add_ship(Ship::new(ShipAttributes::new("Aurora", 20.0, 2, 5_000.0)).unwrap())
            .unwrap();
        fleet
            .add_ship(Ship::new(ShipAttributes::new("Borealis", 18.0, 2, 5_000.0)).unwrap())
            .unwrap();
        fleet
    }

    #[test]
    fn rejects_duplicate_names_case_insensitive() {
        let mut fleet = fleet();
        let err = fleet
            .add_ship(Ship::new(ShipAttributes::new("aurora", 1.0, 1, 1.0)).unwrap())
            .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateShipName { ref name } if name == "aurora"));
        assert_eq!(fleet.len(), 2);
    }

    #[test]
    fn unknown_ship_suggests_similar_names() {
        let mut fleet = fleet();
        let err = fleet.require_mut("Aurura").expect_err("typo");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Did you mean 'Aurora'?"));
    }

    #[test]
    fn transfer_to_same_ship_is_invalid() {
        let mut fleet = fleet();
        let mut log = EventLog::new();
        let serial = "KON-S-1".parse().unwrap();
        let err = fleet
            .transfer("Aurora", "AURORA", serial, &mut log)
            .expect_err("same ship");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
