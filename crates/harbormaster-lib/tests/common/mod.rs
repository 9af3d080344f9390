//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use harbormaster_lib::container::{
    ContainerConfig, ContainerDimensions, GasContainer, LiquidContainer, RefrigeratedContainer,
    StandardContainer,
};
use harbormaster_lib::product::ProductCatalog;
use harbormaster_lib::serial::SequentialSerials;
use harbormaster_lib::ship::{Ship, ShipAttributes, ShipCatalog};

/// Path to fixtures directory used by tests (product table, fleet catalog).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fleet_catalog() -> ShipCatalog {
    ShipCatalog::from_path(&fixtures_dir().join("fleet.csv")).expect("load fixture fleet.csv")
}

/// Empty ship with the given limits.
#[allow(dead_code)]
pub fn ship(name: &str, max_containers: usize, max_weight_kg: f64) -> Ship {
    Ship::new(ShipAttributes::new(name, 20.0, max_containers, max_weight_kg)).expect("valid ship")
}

/// Builds containers with deterministic serials.
#[allow(dead_code)]
pub struct ContainerFactory {
    pub serials: SequentialSerials,
}

#[allow(dead_code)]
impl ContainerFactory {
    pub fn new() -> Self {
        Self {
            serials: SequentialSerials::new(),
        }
    }

    /// Standard container weighing `mass_kg` with the default 1000 kg capacity.
    pub fn standard(&mut self, mass_kg: f64) -> StandardContainer {
        StandardContainer::new(
            ContainerDimensions::new(mass_kg, 250.0, mass_kg, 600.0),
            &ContainerConfig::default(),
            &mut self.serials,
        )
        .expect("valid standard container")
    }

    /// 500 x 200 liquid tank: 90 000 kg capacity, or 50 000 kg when hazardous.
    pub fn liquid(&mut self, hazardous: bool) -> LiquidContainer {
        LiquidContainer::new(
            ContainerDimensions::new(0.0, 200.0, 0.0, 500.0),
            hazardous,
            &mut self.serials,
        )
        .expect("valid liquid container")
    }

    /// 100 x 200 gas tank: 1 000 kg capacity.
    pub fn gas(&mut self) -> GasContainer {
        GasContainer::new(
            ContainerDimensions::new(0.0, 200.0, 0.0, 100.0),
            &mut self.serials,
        )
        .expect("valid gas container")
    }

    /// 300 x 250 reefer with a 2 000 kg tare: 60 000 kg capacity.
    pub fn refrigerated(&mut self, product: &str) -> RefrigeratedContainer {
        RefrigeratedContainer::new(
            ContainerDimensions::new(2_000.0, 250.0, 2_000.0, 300.0),
            product,
            ProductCatalog::builtin(),
            &mut self.serials,
        )
        .expect("valid refrigerated container")
    }
}

impl Default for ContainerFactory {
    fn default() -> Self {
        Self::new()
    }
}
