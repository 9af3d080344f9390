//! Structured events emitted by container and ship operations.
//!
//! The library never prints. Every observable side effect is a [`CargoEvent`]
//! handed to an [`EventSink`] supplied by the caller, which decides how (or
//! whether) to render it.

use serde::Serialize;

use crate::container::ContainerType;
use crate::serial::SerialNumber;

/// Something observable happened to a container or ship.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CargoEvent {
    CargoLoaded {
        serial: SerialNumber,
        amount_kg: f64,
        mass_kg: f64,
    },
    CargoUnloaded {
        serial: SerialNumber,
        mass_kg: f64,
    },
    HazardAlert {
        serial: SerialNumber,
        kind: ContainerType,
        message: String,
    },
    ProductChanged {
        serial: SerialNumber,
        product: String,
        temperature_c: f64,
    },
    ContainerLoaded {
        ship: String,
        serial: SerialNumber,
        mass_kg: f64,
        total_mass_kg: f64,
    },
    ContainerUnloaded {
        ship: String,
        serial: SerialNumber,
        mass_kg: f64,
        total_mass_kg: f64,
    },
    ContainerReplaced {
        ship: String,
        removed: SerialNumber,
        added: SerialNumber,
        total_mass_kg: f64,
    },
    ContainerTransferred {
        from: String,
        to: String,
        serial: SerialNumber,
        mass_kg: f64,
    },
}

impl CargoEvent {
    /// The container the event is about. Replacements report the new container.
    pub fn serial(&self) -> SerialNumber {
        match self {
            CargoEvent::CargoLoaded { serial, .. }
            | CargoEvent::CargoUnloaded { serial, .. }
            | CargoEvent::HazardAlert { serial, .. }
            | CargoEvent::ProductChanged { serial, .. }
            | CargoEvent::ContainerLoaded { serial, .. }
            | CargoEvent::ContainerUnloaded { serial, .. }
            | CargoEvent::ContainerTransferred { serial, .. } => *serial,
            CargoEvent::ContainerReplaced { added, .. } => *added,
        }
    }

    /// Resulting mass in kilograms, where the event carries one.
    pub fn mass_kg(&self) -> Option<f64> {
        match self {
            CargoEvent::CargoLoaded { mass_kg, .. }
            | CargoEvent::CargoUnloaded { mass_kg, .. }
            | CargoEvent::ContainerLoaded { mass_kg, .. }
            | CargoEvent::ContainerUnloaded { mass_kg, .. }
            | CargoEvent::ContainerTransferred { mass_kg, .. } => Some(*mass_kg),
            CargoEvent::ContainerReplaced { total_mass_kg, .. } => Some(*total_mass_kg),
            CargoEvent::HazardAlert { .. } | CargoEvent::ProductChanged { .. } => None,
        }
    }

    pub fn is_hazard_alert(&self) -> bool {
        matches!(self, CargoEvent::HazardAlert { .. })
    }

    /// Human-readable one-line description.
    pub fn message(&self) -> String {
        match self {
            CargoEvent::CargoLoaded {
                serial,
                amount_kg,
                mass_kg,
            } => format!("Loaded {amount_kg}kg to container {serial}. Current mass: {mass_kg}kg"),
            CargoEvent::CargoUnloaded { serial, mass_kg } => {
                format!("Container {serial} unloaded. Current mass: {mass_kg}kg")
            }
            CargoEvent::HazardAlert { message, .. } => message.clone(),
            CargoEvent::ProductChanged {
                serial,
                product,
                temperature_c,
            } => format!(
                "Container {serial} changed product type to {product}. Temperature: {temperature_c}C"
            ),
            CargoEvent::ContainerLoaded {
                ship,
                serial,
                total_mass_kg,
                ..
            } => format!("Container {serial} loaded onto {ship}. Ship cargo: {total_mass_kg}kg"),
            CargoEvent::ContainerUnloaded {
                ship,
                serial,
                total_mass_kg,
                ..
            } => format!("Container {serial} removed from {ship}. Ship cargo: {total_mass_kg}kg"),
            CargoEvent::ContainerReplaced {
                ship,
                removed,
                added,
                total_mass_kg,
            } => format!(
                "Container {removed} on {ship} replaced by {added}. Ship cargo: {total_mass_kg}kg"
            ),
            CargoEvent::ContainerTransferred {
                from, to, serial, ..
            } => format!("Container {serial} transferred from {from} to {to}"),
        }
    }
}

/// Receiver for [`CargoEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: CargoEvent);
}

impl EventSink for Vec<CargoEvent> {
    fn emit(&mut self, event: CargoEvent) {
        self.push(event);
    }
}

/// Records every event in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<CargoEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CargoEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn hazard_alerts(&self) -> impl Iterator<Item = &CargoEvent> {
        self.events.iter().filter(|e| e.is_hazard_alert())
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<CargoEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: CargoEvent) {
        self.events.push(event);
    }
}

/// Forwards events to `tracing`. Hazard alerts are logged at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: CargoEvent) {
        let serial = event.serial();
        if event.is_hazard_alert() {
            tracing::warn!(%serial, "{}", event.message());
        } else {
            tracing::info!(%serial, mass_kg = ?event.mass_kg(), "{}", event.message());
        }
    }
}
