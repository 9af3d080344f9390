use crate::error::Result;
use crate::serial::SerialSource;

use super::attributes::{ContainerConfig, ContainerDimensions, ContainerType};
use super::body::{Container, ContainerBody};

/// General-purpose container with a fixed, configured capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardContainer {
    body: ContainerBody,
}

impl StandardContainer {
    pub fn new(
        dimensions: ContainerDimensions,
        config: &ContainerConfig,
        serials: &mut dyn SerialSource,
    ) -> Result<Self> {
        config.validate()?;
        let capacity = Self::compute_capacity(config);
        let body = ContainerBody::new(ContainerType::Standard, &dimensions, capacity, serials)?;
        Ok(Self { body })
    }

    pub fn compute_capacity(config: &ContainerConfig) -> f64 {
        config.standard_capacity_kg
    }
}

impl Container for StandardContainer {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }
}
