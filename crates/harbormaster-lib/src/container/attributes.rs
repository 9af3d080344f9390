//! Container type tags, physical dimensions, and construction configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::DEFAULT_STANDARD_CAPACITY_KG;

/// Domain discriminator for the container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    Standard,
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerType {
    /// One-letter code embedded in serial numbers.
    pub fn code(self) -> char {
        match self {
            ContainerType::Standard => 'S',
            ContainerType::Liquid => 'L',
            ContainerType::Gas => 'G',
            ContainerType::Refrigerated => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'S' => Some(ContainerType::Standard),
            'L' => Some(ContainerType::Liquid),
            'G' => Some(ContainerType::Gas),
            'C' => Some(ContainerType::Refrigerated),
            _ => None,
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            ContainerType::Standard => "Standard",
            ContainerType::Liquid => "Liquid",
            ContainerType::Gas => "Gas",
            ContainerType::Refrigerated => "Refrigerated",
        }
    }
}

impl std::fmt::Display for ContainerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical description supplied when constructing any container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerDimensions {
    /// Initial gross mass in kilograms.
    pub mass_kg: f64,
    pub height: f64,
    /// Tare mass; an unloaded container weighs exactly this much.
    pub net_mass_kg: f64,
    pub depth: f64,
}

impl ContainerDimensions {
    pub fn new(mass_kg: f64, height: f64, net_mass_kg: f64, depth: f64) -> Self {
        Self {
            mass_kg,
            height,
            net_mass_kg,
            depth,
        }
    }

    /// Validate dimensions for correctness.
    pub fn validate(&self) -> Result<()> {
        for (value, field) in [(self.height, "height"), (self.depth, "depth")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDimensions {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        for (value, field) in [(self.mass_kg, "mass_kg"), (self.net_mass_kg, "net_mass_kg")] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidDimensions {
                    message: format!("{field} must be finite and non-negative"),
                });
            }
        }

        Ok(())
    }

    /// Depth × height, the base every volumetric capacity formula scales.
    pub fn footprint(&self) -> f64 {
        self.depth * self.height
    }
}

/// Configuration shared by container constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerConfig {
    /// Fixed capacity of a standard container in kilograms.
    pub standard_capacity_kg: f64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            standard_capacity_kg: DEFAULT_STANDARD_CAPACITY_KG,
        }
    }
}

impl ContainerConfig {
    /// Validate the container configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.standard_capacity_kg.is_finite() || self.standard_capacity_kg < 0.0 {
            return Err(Error::InvalidArgument {
                message: format!(
                    "standard_capacity_kg must be finite and non-negative, got {}",
                    self.standard_capacity_kg
                ),
            });
        }
        Ok(())
    }
}
