use crate::error::Result;
use crate::events::EventSink;
use crate::serial::SerialSource;

use super::attributes::{ContainerDimensions, ContainerType};
use super::body::{Container, ContainerBody, ContainerSummary};
use super::constants::{GAS_CAPACITY_FACTOR, GAS_INITIAL_PRESSURE, GAS_PRESSURE_GAIN};
use super::hazard::{check_load_or_alert, HazardNotifier};

/// Pressurised gas container.
///
/// Pressure rises with every successful load and is not relieved by unloading.
#[derive(Debug, Clone, PartialEq)]
pub struct GasContainer {
    body: ContainerBody,
    pressure: f64,
}

impl GasContainer {
    pub fn new(dimensions: ContainerDimensions, serials: &mut dyn SerialSource) -> Result<Self> {
        let capacity = Self::compute_capacity(&dimensions);
        let body = ContainerBody::new(ContainerType::Gas, &dimensions, capacity, serials)?;
        Ok(Self {
            body,
            pressure: GAS_INITIAL_PRESSURE,
        })
    }

    pub fn compute_capacity(dimensions: &ContainerDimensions) -> f64 {
        GAS_CAPACITY_FACTOR * dimensions.footprint()
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

impl Container for GasContainer {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }

    fn load_cargo(&mut self, amount_kg: f64, sink: &mut dyn EventSink) -> Result<()> {
        check_load_or_alert(self, amount_kg, sink)?;
        // check_load_or_alert rejects any positive amount when capacity is zero
        if self.body.max_capacity_kg() > 0.0 {
            self.pressure += (amount_kg / self.body.max_capacity_kg()) * GAS_PRESSURE_GAIN;
        }
        self.body.apply_load(amount_kg, sink);
        Ok(())
    }

    fn summary(&self) -> ContainerSummary {
        ContainerSummary {
            pressure: Some(self.pressure),
            ..self.body.summary()
        }
    }
}

impl HazardNotifier for GasContainer {
    fn hazard_message(&self) -> String {
        format!(
            "HAZARD ALERT: Dangerous pressure levels in gas container {}!",
            self.body.serial()
        )
    }
}
