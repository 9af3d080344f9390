//! Harbormaster library entry points.
//!
//! This crate models cargo containers and the ships that carry them: the
//! container variants with their capacity and safety rules, and the ship
//! operations (load, unload, replace, transfer) that keep slot and weight
//! limits intact. Higher-level consumers (the CLI) should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod events;
pub mod fleet;
pub mod product;
pub mod serial;
pub mod ship;

pub use container::{
    Container, ContainerConfig, ContainerDimensions, ContainerSummary, ContainerType,
    GasContainer, HazardNotifier, LiquidContainer, RefrigeratedContainer, StandardContainer,
};
pub use error::{CapacityLimit, Error, ErrorKind, Result};
pub use events::{CargoEvent, EventLog, EventSink, TracingSink};
pub use fleet::Fleet;
pub use product::{Product, ProductCatalog};
pub use serial::{RandomSerials, SequentialSerials, SerialNumber, SerialSource};
pub use ship::{LoadRejected, Ship, ShipAttributes, ShipCatalog, ShipStatus};
