use std::path::PathBuf;

use thiserror::Error;

use crate::serial::SerialNumber;

/// Convenient result alias for the Harbormaster library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which ship ceiling a rejected load would have broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLimit {
    Slots,
    Weight,
}

impl std::fmt::Display for CapacityLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityLimit::Slots => f.write_str("container slot limit"),
            CapacityLimit::Weight => f.write_str("maximum weight"),
        }
    }
}

/// Coarse classification of library errors, used by callers that only care
/// about the category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Overfill,
    CapacityExceeded,
    NotFound,
    InvalidArgument,
    Io,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when loading cargo would push a container past its capacity.
    #[error(
        "cannot load {amount_kg}kg into container {serial}: current mass {mass_kg}kg, maximum capacity is {max_capacity_kg}kg"
    )]
    Overfill {
        serial: SerialNumber,
        amount_kg: f64,
        mass_kg: f64,
        max_capacity_kg: f64,
    },

    /// Raised when a ship cannot take another container.
    #[error("ship {ship} cannot accept container {serial}: {limit} exceeded")]
    CapacityExceeded {
        ship: String,
        serial: SerialNumber,
        limit: CapacityLimit,
    },

    /// Raised when a ship holds no container with the given serial.
    #[error("container {serial} not found on ship {ship}")]
    ContainerNotFound { ship: String, serial: SerialNumber },

    /// Raised when a fleet has no ship with the given name.
    #[error("unknown ship name: {name}{}", format_suggestions(.suggestions))]
    UnknownShip {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a refrigerated product is missing from the product catalog.
    #[error("invalid product type: {name}{}", format_suggestions(.suggestions))]
    UnknownProduct {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when switching the product of a container that still holds cargo.
    #[error(
        "cannot change product type of container {serial} while loaded ({mass_kg}kg exceeds net mass {net_mass_kg}kg)"
    )]
    ProductChangeWhileLoaded {
        serial: SerialNumber,
        mass_kg: f64,
        net_mass_kg: f64,
    },

    /// Raised when an argument is outside the accepted domain.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Raised when container dimensions fail validation.
    #[error("invalid container dimensions: {message}")]
    InvalidDimensions { message: String },

    /// Raised when ship data fails validation.
    #[error("invalid ship data: {message}")]
    ShipDataValidation { message: String },

    /// Raised when product data fails validation.
    #[error("invalid product data: {message}")]
    ProductDataValidation { message: String },

    /// Raised when duplicate ship names are encountered.
    #[error("duplicate ship name encountered: {name}")]
    DuplicateShipName { name: String },

    /// Raised when duplicate product names are encountered during catalog load.
    #[error("duplicate product name encountered: {name}")]
    DuplicateProduct { name: String },

    /// Raised when a catalog file could not be read.
    #[error("failed to read catalog from {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Map the error onto its domain category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Overfill { .. } => ErrorKind::Overfill,
            Error::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Error::ContainerNotFound { .. } | Error::UnknownShip { .. } => ErrorKind::NotFound,
            Error::UnknownProduct { .. }
            | Error::ProductChangeWhileLoaded { .. }
            | Error::InvalidArgument { .. }
            | Error::InvalidDimensions { .. }
            | Error::ShipDataValidation { .. }
            | Error::ProductDataValidation { .. }
            | Error::DuplicateShipName { .. }
            | Error::DuplicateProduct { .. } => ErrorKind::InvalidArgument,
            Error::CatalogRead { .. } => ErrorKind::Io,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
