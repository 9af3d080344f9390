//! State shared by every container variant and the [`Container`] contract.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::events::{CargoEvent, EventSink};
use crate::serial::{SerialNumber, SerialSource};

use super::attributes::{ContainerDimensions, ContainerType};

/// Mass bookkeeping and identity common to all containers.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerBody {
    serial: SerialNumber,
    mass_kg: f64,
    height: f64,
    net_mass_kg: f64,
    depth: f64,
    max_capacity_kg: f64,
}

impl ContainerBody {
    /// Validate `dimensions` against the variant's capacity and assign a
    /// serial. The serial source is only consulted once validation has passed.
    ///
    /// The initial mass must lie between the tare and the capacity.
    pub(crate) fn new(
        kind: ContainerType,
        dimensions: &ContainerDimensions,
        max_capacity_kg: f64,
        serials: &mut dyn SerialSource,
    ) -> Result<Self> {
        dimensions.validate()?;
        if dimensions.mass_kg < dimensions.net_mass_kg {
            return Err(Error::InvalidDimensions {
                message: format!(
                    "mass_kg {}kg is below net_mass_kg {}kg",
                    dimensions.mass_kg, dimensions.net_mass_kg
                ),
            });
        }
        if dimensions.mass_kg > max_capacity_kg {
            return Err(Error::InvalidDimensions {
                message: format!(
                    "mass_kg {}kg exceeds the {} container capacity of {max_capacity_kg}kg",
                    dimensions.mass_kg,
                    kind.label().to_lowercase()
                ),
            });
        }

        let serial = serials.assign(kind);
        debug!(%serial, max_capacity_kg, "constructed container");

        Ok(Self {
            serial,
            mass_kg: dimensions.mass_kg,
            height: dimensions.height,
            net_mass_kg: dimensions.net_mass_kg,
            depth: dimensions.depth,
            max_capacity_kg,
        })
    }

    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn net_mass_kg(&self) -> f64 {
        self.net_mass_kg
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn max_capacity_kg(&self) -> f64 {
        self.max_capacity_kg
    }

    /// Capacity left before the container is full.
    pub fn headroom_kg(&self) -> f64 {
        (self.max_capacity_kg - self.mass_kg).max(0.0)
    }

    /// True when no cargo beyond the tare mass is aboard.
    pub fn is_empty(&self) -> bool {
        self.mass_kg <= self.net_mass_kg
    }

    /// Check whether `amount_kg` could be loaded without mutating anything.
    pub fn check_load(&self, amount_kg: f64) -> Result<()> {
        if !amount_kg.is_finite() || amount_kg < 0.0 {
            return Err(Error::InvalidArgument {
                message: format!("cargo amount must be finite and non-negative, got {amount_kg}"),
            });
        }

        if self.mass_kg + amount_kg > self.max_capacity_kg {
            return Err(Error::Overfill {
                serial: self.serial,
                amount_kg,
                mass_kg: self.mass_kg,
                max_capacity_kg: self.max_capacity_kg,
            });
        }

        Ok(())
    }

    /// Add cargo that has already passed [`ContainerBody::check_load`].
    pub(crate) fn apply_load(&mut self, amount_kg: f64, sink: &mut dyn EventSink) {
        self.mass_kg += amount_kg;
        debug!(serial = %self.serial, amount_kg, mass_kg = self.mass_kg, "cargo loaded");
        sink.emit(CargoEvent::CargoLoaded {
            serial: self.serial,
            amount_kg,
            mass_kg: self.mass_kg,
        });
    }

    pub(crate) fn load(&mut self, amount_kg: f64, sink: &mut dyn EventSink) -> Result<()> {
        self.check_load(amount_kg)?;
        self.apply_load(amount_kg, sink);
        Ok(())
    }

    pub(crate) fn unload(&mut self, sink: &mut dyn EventSink) {
        self.mass_kg = self.net_mass_kg;
        debug!(serial = %self.serial, mass_kg = self.mass_kg, "cargo unloaded");
        sink.emit(CargoEvent::CargoUnloaded {
            serial: self.serial,
            mass_kg: self.mass_kg,
        });
    }

    pub(crate) fn summary(&self) -> ContainerSummary {
        ContainerSummary {
            serial: self.serial,
            kind: self.serial.kind(),
            mass_kg: self.mass_kg,
            net_mass_kg: self.net_mass_kg,
            max_capacity_kg: self.max_capacity_kg,
            height: self.height,
            depth: self.depth,
            hazardous: None,
            pressure: None,
            product: None,
            temperature_c: None,
        }
    }
}

/// Serializable snapshot of a container, including variant-specific state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSummary {
    pub serial: SerialNumber,
    pub kind: ContainerType,
    pub mass_kg: f64,
    pub net_mass_kg: f64,
    pub max_capacity_kg: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazardous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
}

/// Behaviour every container variant provides.
///
/// Variants expose their [`ContainerBody`] and inherit the base load/unload
/// behaviour, overriding [`Container::load_cargo`] where they add checks.
pub trait Container: fmt::Debug + Send + Sync {
    fn body(&self) -> &ContainerBody;

    fn body_mut(&mut self) -> &mut ContainerBody;

    fn kind(&self) -> ContainerType {
        self.body().serial().kind()
    }

    fn serial(&self) -> SerialNumber {
        self.body().serial()
    }

    fn mass_kg(&self) -> f64 {
        self.body().mass_kg()
    }

    fn net_mass_kg(&self) -> f64 {
        self.body().net_mass_kg()
    }

    fn max_capacity_kg(&self) -> f64 {
        self.body().max_capacity_kg()
    }

    /// Add `amount_kg` of cargo. Fails with [`Error::Overfill`] when the
    /// resulting mass would exceed the container's capacity.
    fn load_cargo(&mut self, amount_kg: f64, sink: &mut dyn EventSink) -> Result<()> {
        self.body_mut().load(amount_kg, sink)
    }

    /// Empty the container back to its net mass.
    fn unload_cargo(&mut self, sink: &mut dyn EventSink) {
        self.body_mut().unload(sink);
    }

    fn summary(&self) -> ContainerSummary {
        self.body().summary()
    }
}

impl fmt::Display for dyn Container + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Container {} - Type: {}, Mass: {}kg, Capacity: {}kg",
            self.serial(),
            self.kind(),
            self.mass_kg(),
            self.max_capacity_kg()
        )
    }
}
