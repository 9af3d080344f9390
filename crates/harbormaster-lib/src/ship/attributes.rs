//! Ship attributes.
//!
//! This module contains the static description of a ship: its name and the
//! ceilings its container hold must respect.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ship limits, as loaded from the ship catalog or built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipAttributes {
    pub name: String,
    /// Informational only; no operation depends on speed.
    pub max_speed_knots: f64,
    pub max_containers: usize,
    pub max_weight_kg: f64,
}

impl ShipAttributes {
    pub fn new(
        name: impl Into<String>,
        max_speed_knots: f64,
        max_containers: usize,
        max_weight_kg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_speed_knots,
            max_containers,
            max_weight_kg,
        }
    }

    /// Validate ship attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ShipDataValidation {
                message: "ship name must not be empty".to_string(),
            });
        }

        let fields = [
            (self.max_speed_knots, "max_speed_knots"),
            (self.max_weight_kg, "max_weight_kg"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ShipDataValidation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        if self.max_containers == 0 {
            return Err(Error::ShipDataValidation {
                message: "max_containers must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        let err = ShipAttributes::new("  ", 10.0, 5, 1000.0)
            .validate()
            .expect_err("blank name");
        assert!(err.to_string().contains("ship name"));
    }

    #[test]
    fn rejects_zero_slots_and_non_finite_limits() {
        assert!(ShipAttributes::new("Aurora", 10.0, 0, 1000.0)
            .validate()
            .is_err());
        assert!(ShipAttributes::new("Aurora", f64::INFINITY, 3, 1000.0)
            .validate()
            .is_err());
        assert!(ShipAttributes::new("Aurora", 10.0, 3, -1.0)
            .validate()
            .is_err());
        assert!(ShipAttributes::new("Aurora", 10.0, 3, 1000.0)
            .validate()
            .is_ok());
    }
}
