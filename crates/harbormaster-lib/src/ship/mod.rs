//! Ships, their container holds, and ship catalog management.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - Ship limits (slots, weight, speed)
//! - [`vessel`] - The [`Ship`] and its load/unload/replace/transfer operations
//! - [`status`] - Read-only status projection
//! - [`catalog`] - Ship catalog loading and management
//!
//! # Example
//!
//! ```
//! use harbormaster_lib::container::{Container, ContainerDimensions, GasContainer};
//! use harbormaster_lib::events::EventLog;
//! use harbormaster_lib::serial::SequentialSerials;
//! use harbormaster_lib::ship::{Ship, ShipAttributes};
//!
//! let mut serials = SequentialSerials::new();
//! let mut events = EventLog::new();
//! let mut aurora = Ship::new(ShipAttributes::new("Aurora", 20.0, 2, 10_000.0)).unwrap();
//! let mut borealis = Ship::new(ShipAttributes::new("Borealis", 18.0, 2, 10_000.0)).unwrap();
//!
//! let dims = ContainerDimensions::new(800.0, 250.0, 800.0, 300.0);
//! let tank = GasContainer::new(dims, &mut serials).unwrap();
//! let serial = tank.serial();
//! aurora.load(tank, &mut events).unwrap();
//! aurora.transfer_container(serial, &mut borealis, &mut events).unwrap();
//!
//! assert!(borealis.contains(serial));
//! assert!(aurora.is_empty());
//! ```

pub mod attributes;
pub mod catalog;
pub mod status;
pub mod vessel;

pub use attributes::ShipAttributes;
pub use catalog::ShipCatalog;
pub use status::ShipStatus;
pub use vessel::{LoadRejected, Ship};
