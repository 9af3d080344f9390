//! Ship container management.
//!
//! A [`Ship`] owns its containers and guarantees that the number of
//! containers never exceeds `max_containers` and that their combined mass never
//! exceeds `max_weight_kg`. Every operation either succeeds completely or
//! leaves the ship untouched.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::container::Container;
use crate::error::{CapacityLimit, Error, ErrorKind, Result};
use crate::events::{CargoEvent, EventSink};
use crate::serial::SerialNumber;

use super::attributes::ShipAttributes;
use super::status::ShipStatus;

/// A container a ship refused, handed back to the caller with the reason.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct LoadRejected {
    pub error: Error,
    pub container: Box<dyn Container>,
}

impl LoadRejected {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Recover the refused container.
    pub fn into_container(self) -> Box<dyn Container> {
        self.container
    }
}

impl From<LoadRejected> for Error {
    fn from(rejected: LoadRejected) -> Self {
        rejected.error
    }
}

/// A ship and the containers it currently carries, in load order.
///
/// Containers on board are read-only: cargo must be loaded before a container
/// is put on a ship, so the weight ceiling cannot be bypassed.
pub struct Ship {
    attributes: ShipAttributes,
    containers: Vec<Box<dyn Container>>,
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ship")
            .field("name", &self.attributes.name)
            .field("containers", &self.containers.len())
            .field("total_mass_kg", &self.total_mass_kg())
            .finish()
    }
}

impl Ship {
    pub fn new(attributes: ShipAttributes) -> Result<Self> {
        attributes.validate()?;
        Ok(Self {
            attributes,
            containers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn attributes(&self) -> &ShipAttributes {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Containers in load order.
    pub fn containers(&self) -> impl Iterator<Item = &dyn Container> {
        self.containers.iter().map(|c| c.as_ref())
    }

    pub fn serials(&self) -> Vec<SerialNumber> {
        self.containers.iter().map(|c| c.serial()).collect()
    }

    /// Look up a container on board. With duplicate serials the earliest
    /// loaded container wins.
    pub fn container(&self, serial: SerialNumber) -> Option<&dyn Container> {
        self.position(serial).map(|i| self.containers[i].as_ref())
    }

    pub fn contains(&self, serial: SerialNumber) -> bool {
        self.position(serial).is_some()
    }

    pub fn total_mass_kg(&self) -> f64 {
        self.containers.iter().map(|c| c.mass_kg()).sum()
    }

    /// Check whether the ship could take `container` right now.
    pub fn check_admission(&self, container: &dyn Container) -> Result<()> {
        self.check_admission_after_removal(container, None)
    }

    /// Admission check pretending the container at `freed` is already gone.
    fn check_admission_after_removal(
        &self,
        container: &dyn Container,
        freed: Option<usize>,
    ) -> Result<()> {
        let count = self.containers.len() - usize::from(freed.is_some());

        let limit = if count >= self.attributes.max_containers {
            Some(CapacityLimit::Slots)
        } else if self.mass_with(container, freed) > self.attributes.max_weight_kg {
            Some(CapacityLimit::Weight)
        } else {
            None
        };

        match limit {
            Some(limit) => {
                warn!(
                    ship = %self.attributes.name,
                    serial = %container.serial(),
                    %limit,
                    "container rejected"
                );
                Err(Error::CapacityExceeded {
                    ship: self.attributes.name.clone(),
                    serial: container.serial(),
                    limit,
                })
            }
            None => Ok(()),
        }
    }

    /// Put a container on board.
    ///
    /// On failure the ship is unchanged and the container is returned inside
    /// the [`LoadRejected`].
    pub fn load_container(
        &mut self,
        container: Box<dyn Container>,
        sink: &mut dyn EventSink,
    ) -> std::result::Result<(), LoadRejected> {
        if let Err(error) = self.check_admission(container.as_ref()) {
            return Err(LoadRejected { error, container });
        }

        let serial = container.serial();
        let mass_kg = container.mass_kg();
        self.containers.push(container);
        let total_mass_kg = self.total_mass_kg();
        debug!(ship = %self.attributes.name, %serial, total_mass_kg, "container loaded");
        sink.emit(CargoEvent::ContainerLoaded {
            ship: self.attributes.name.clone(),
            serial,
            mass_kg,
            total_mass_kg,
        });
        Ok(())
    }

    /// Box and load a concrete container.
    pub fn load<C>(
        &mut self,
        container: C,
        sink: &mut dyn EventSink,
    ) -> std::result::Result<(), LoadRejected>
    where
        C: Container + 'static,
    {
        self.load_container(Box::new(container), sink)
    }

    /// Take a container off the ship and hand it to the caller.
    pub fn unload_container(
        &mut self,
        serial: SerialNumber,
        sink: &mut dyn EventSink,
    ) -> Result<Box<dyn Container>> {
        let index = self.require_position(serial)?;
        let container = self.containers.remove(index);
        let total_mass_kg = self.total_mass_kg();
        debug!(ship = %self.attributes.name, %serial, total_mass_kg, "container unloaded");
        sink.emit(CargoEvent::ContainerUnloaded {
            ship: self.attributes.name.clone(),
            serial,
            mass_kg: container.mass_kg(),
            total_mass_kg,
        });
        Ok(container)
    }

    /// Swap the container `serial` for `replacement`, keeping its position in
    /// load order, and return the container taken off.
    ///
    /// The replacement is checked as if the old container had already left.
    /// If the serial is missing or the replacement does not fit, nothing
    /// changes and the replacement is handed back.
    pub fn replace_container(
        &mut self,
        serial: SerialNumber,
        replacement: Box<dyn Container>,
        sink: &mut dyn EventSink,
    ) -> std::result::Result<Box<dyn Container>, LoadRejected> {
        let index = match self.require_position(serial) {
            Ok(index) => index,
            Err(error) => {
                return Err(LoadRejected {
                    error,
                    container: replacement,
                })
            }
        };

        if let Err(error) = self.check_admission_after_removal(replacement.as_ref(), Some(index)) {
            return Err(LoadRejected {
                error,
                container: replacement,
            });
        }

        let added = replacement.serial();
        let removed = std::mem::replace(&mut self.containers[index], replacement);
        let total_mass_kg = self.total_mass_kg();
        debug!(ship = %self.attributes.name, %serial, %added, total_mass_kg, "container replaced");
        sink.emit(CargoEvent::ContainerReplaced {
            ship: self.attributes.name.clone(),
            removed: serial,
            added,
            total_mass_kg,
        });
        Ok(removed)
    }

    /// Move a container to `destination`.
    ///
    /// The destination is checked before anything moves, so on failure the
    /// container stays exactly where it was.
    pub fn transfer_container(
        &mut self,
        serial: SerialNumber,
        destination: &mut Ship,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        let index = self.require_position(serial)?;
        destination.check_admission(self.containers[index].as_ref())?;

        let container = self.containers.remove(index);
        let mass_kg = container.mass_kg();
        destination.containers.push(container);
        debug!(
            from = %self.attributes.name,
            to = %destination.attributes.name,
            %serial,
            "container transferred"
        );
        sink.emit(CargoEvent::ContainerTransferred {
            from: self.attributes.name.clone(),
            to: destination.attributes.name.clone(),
            serial,
            mass_kg,
        });
        Ok(())
    }

    /// Current slot and weight usage, with a summary of every container.
    pub fn status(&self) -> ShipStatus {
        ShipStatus {
            name: self.attributes.name.clone(),
            container_count: self.containers.len(),
            max_containers: self.attributes.max_containers,
            total_mass_kg: self.total_mass_kg(),
            max_weight_kg: self.attributes.max_weight_kg,
            containers: self.containers.iter().map(|c| c.summary()).collect(),
        }
    }

    /// Total mass the ship would report with `incoming` in the slot at
    /// `replacing`, or appended when `replacing` is `None`.
    ///
    /// Summed in load order so the result matches [`Ship::total_mass_kg`]
    /// after the change to the last bit.
    fn mass_with(&self, incoming: &dyn Container, replacing: Option<usize>) -> f64 {
        let aboard = self.containers.iter().enumerate().map(|(i, c)| {
            if Some(i) == replacing {
                incoming.mass_kg()
            } else {
                c.mass_kg()
            }
        });
        match replacing {
            Some(_) => aboard.sum(),
            None => aboard.chain(std::iter::once(incoming.mass_kg())).sum(),
        }
    }

    fn position(&self, serial: SerialNumber) -> Option<usize> {
        self.containers.iter().position(|c| c.serial() == serial)
    }

    fn require_position(&self, serial: SerialNumber) -> Result<usize> {
        self.position(serial).ok_or_else(|| Error::ContainerNotFound {
            ship: self.attributes.name.clone(),
            serial,
        })
    }
}
