use crate::error::Result;
use crate::events::EventSink;
use crate::serial::SerialSource;

use super::attributes::{ContainerDimensions, ContainerType};
use super::body::{Container, ContainerBody, ContainerSummary};
use super::constants::{HAZARDOUS_LIQUID_CAPACITY_FACTOR, LIQUID_CAPACITY_FACTOR};
use super::hazard::{check_load_or_alert, HazardNotifier};

/// Container for liquid cargo. Hazardous liquids may only fill half the volume.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidContainer {
    body: ContainerBody,
    hazardous: bool,
}

impl LiquidContainer {
    pub fn new(
        dimensions: ContainerDimensions,
        hazardous: bool,
        serials: &mut dyn SerialSource,
    ) -> Result<Self> {
        let capacity = Self::compute_capacity(&dimensions, hazardous);
        let body = ContainerBody::new(ContainerType::Liquid, &dimensions, capacity, serials)?;
        Ok(Self { body, hazardous })
    }

    pub fn compute_capacity(dimensions: &ContainerDimensions, hazardous: bool) -> f64 {
        let factor = if hazardous {
            HAZARDOUS_LIQUID_CAPACITY_FACTOR
        } else {
            LIQUID_CAPACITY_FACTOR
        };
        factor * dimensions.footprint()
    }

    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }
}

impl Container for LiquidContainer {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }

    fn load_cargo(&mut self, amount_kg: f64, sink: &mut dyn EventSink) -> Result<()> {
        check_load_or_alert(self, amount_kg, sink)?;
        self.body.apply_load(amount_kg, sink);
        Ok(())
    }

    fn summary(&self) -> ContainerSummary {
        ContainerSummary {
            hazardous: Some(self.hazardous),
            ..self.body.summary()
        }
    }
}

impl HazardNotifier for LiquidContainer {
    fn hazard_message(&self) -> String {
        format!(
            "HAZARD ALERT: Dangerous operation detected on liquid container {}!",
            self.body.serial()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::events::{CargoEvent, EventLog};
    use crate::serial::SequentialSerials;

    fn liquid(hazardous: bool) -> LiquidContainer {
        let mut serials = SequentialSerials::new();
        LiquidContainer::new(
            ContainerDimensions::new(0.0, 200.0, 0.0, 500.0),
            hazardous,
            &mut serials,
        )
        .expect("valid liquid container")
    }

    #[test]
    fn capacity_depends_on_hazard_flag() {
        assert_eq!(liquid(false).max_capacity_kg(), 90_000.0);
        assert_eq!(liquid(true).max_capacity_kg(), 50_000.0);
        assert!(liquid(true).is_hazardous());
    }

    #[test]
    fn loads_within_capacity_and_rejects_overfill() {
        let mut container = liquid(false);
        let mut log = EventLog::new();

        container.load_cargo(300.0, &mut log).expect("fits");
        assert_eq!(container.mass_kg(), 300.0);

        let err = container
            .load_cargo(90_001.0, &mut log)
            .expect_err("overfill");
        assert!(matches!(err, Error::Overfill { .. }));
        assert_eq!(container.mass_kg(), 300.0);
    }

    #[test]
    fn overfill_alerts_once_before_failing() {
        let mut container = liquid(true);
        let mut log = EventLog::new();

        assert!(container.load_cargo(50_001.0, &mut log).is_err());

        assert_eq!(log.len(), 1);
        match &log.events()[0] {
            CargoEvent::HazardAlert { serial, kind, message } => {
                assert_eq!(*serial, container.serial());
                assert_eq!(*kind, ContainerType::Liquid);
                assert!(message.contains("liquid container KON-L-1"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn invalid_amount_does_not_alert() {
        let mut container = liquid(false);
        let mut log = EventLog::new();

        let err = container.load_cargo(-5.0, &mut log).expect_err("negative");
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(log.is_empty());
    }

    #[test]
    fn summary_reports_hazard_flag() {
        let summary = liquid(true).summary();
        assert_eq!(summary.hazardous, Some(true));
        assert_eq!(summary.kind, ContainerType::Liquid);
        assert_eq!(summary.pressure, None);
    }
}
