//! Container-related constants used across capacity and pressure calculations.

/// Capacity factor (per unit of depth × height) of a non-hazardous liquid container.
pub const LIQUID_CAPACITY_FACTOR: f64 = 0.9;

/// Capacity factor of a liquid container carrying hazardous cargo.
pub const HAZARDOUS_LIQUID_CAPACITY_FACTOR: f64 = 0.5;

/// Capacity factor of a gas container.
pub const GAS_CAPACITY_FACTOR: f64 = 0.05;

/// Capacity factor of a refrigerated container.
pub const REFRIGERATED_CAPACITY_FACTOR: f64 = 0.8;

/// Default fixed capacity of a standard container in kilograms.
pub const DEFAULT_STANDARD_CAPACITY_KG: f64 = 1000.0;

/// Pressure of a freshly constructed gas container.
pub const GAS_INITIAL_PRESSURE: f64 = 1.0;

/// Pressure gained per full capacity of gas loaded.
///
/// A load of `amount` raises pressure by `(amount / capacity) * GAS_PRESSURE_GAIN`.
pub const GAS_PRESSURE_GAIN: f64 = 2.0;
