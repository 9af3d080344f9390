//! Container types, capacity rules, and load/unload behaviour.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - Type discriminator, dimensions, and construction config
//! - [`body`] - Shared container state and the [`Container`] trait
//! - [`hazard`] - Hazard notification capability
//! - [`standard`], [`liquid`], [`gas`], [`refrigerated`] - Container variants
//! - [`constants`] - Capacity factors and pressure constants
//!
//! # Example
//!
//! ```
//! use harbormaster_lib::container::{Container, ContainerDimensions, LiquidContainer};
//! use harbormaster_lib::events::EventLog;
//! use harbormaster_lib::serial::SequentialSerials;
//!
//! let mut serials = SequentialSerials::new();
//! let mut events = EventLog::new();
//!
//! let dims = ContainerDimensions::new(0.0, 200.0, 0.0, 500.0);
//! let mut tank = LiquidContainer::new(dims, false, &mut serials).unwrap();
//! assert_eq!(tank.max_capacity_kg(), 90_000.0);
//!
//! tank.load_cargo(300.0, &mut events).unwrap();
//! assert!(tank.load_cargo(90_001.0, &mut events).is_err());
//! ```

pub mod attributes;
pub mod body;
pub mod constants;
pub mod gas;
pub mod hazard;
pub mod liquid;
pub mod refrigerated;
pub mod standard;

pub use attributes::{ContainerConfig, ContainerDimensions, ContainerType};
pub use body::{Container, ContainerBody, ContainerSummary};
pub use gas::GasContainer;
pub use hazard::HazardNotifier;
pub use liquid::LiquidContainer;
pub use refrigerated::RefrigeratedContainer;
pub use standard::StandardContainer;
