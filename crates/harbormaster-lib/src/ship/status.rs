//! Read-only projection of a ship's load state.

use std::fmt;

use serde::Serialize;

use crate::container::ContainerSummary;

/// Snapshot of a ship's slot and weight usage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipStatus {
    pub name: String,
    pub container_count: usize,
    pub max_containers: usize,
    pub total_mass_kg: f64,
    pub max_weight_kg: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<ContainerSummary>,
}

impl ShipStatus {
    pub fn free_slots(&self) -> usize {
        self.max_containers.saturating_sub(self.container_count)
    }

    pub fn remaining_weight_kg(&self) -> f64 {
        (self.max_weight_kg - self.total_mass_kg).max(0.0)
    }
}

impl fmt::Display for ShipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {}: {}/{} containers, {}kg/{}kg",
            self.name,
            self.container_count,
            self.max_containers,
            self.total_mass_kg,
            self.max_weight_kg
        )
    }
}
