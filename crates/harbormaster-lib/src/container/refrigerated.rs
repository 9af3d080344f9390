use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::events::{CargoEvent, EventSink};
use crate::product::ProductCatalog;
use crate::serial::SerialSource;

use super::attributes::{ContainerDimensions, ContainerType};
use super::body::{Container, ContainerBody, ContainerSummary};
use super::constants::REFRIGERATED_CAPACITY_FACTOR;

/// Temperature-controlled container for a single product type.
///
/// The temperature always follows the product's entry in the injected
/// [`ProductCatalog`]; it cannot be set independently.
#[derive(Debug, Clone)]
pub struct RefrigeratedContainer {
    body: ContainerBody,
    product: String,
    temperature_c: f64,
    catalog: Arc<ProductCatalog>,
}

impl RefrigeratedContainer {
    pub fn new(
        dimensions: ContainerDimensions,
        product: &str,
        catalog: Arc<ProductCatalog>,
        serials: &mut dyn SerialSource,
    ) -> Result<Self> {
        let entry = catalog.require(product)?;
        let (product, temperature_c) = (entry.name.clone(), entry.temperature_c);

        let capacity = Self::compute_capacity(&dimensions);
        let body = ContainerBody::new(ContainerType::Refrigerated, &dimensions, capacity, serials)?;

        Ok(Self {
            body,
            product,
            temperature_c,
            catalog,
        })
    }

    pub fn compute_capacity(dimensions: &ContainerDimensions) -> f64 {
        REFRIGERATED_CAPACITY_FACTOR * dimensions.footprint()
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Switch the container to another product from its catalog.
    ///
    /// Only allowed while the container holds no cargo beyond its net mass.
    /// Requesting the current product is a no-op.
    pub fn change_product_type(&mut self, product: &str, sink: &mut dyn EventSink) -> Result<()> {
        let entry = self.catalog.require(product)?;
        if entry.name == self.product {
            return Ok(());
        }

        if self.body.mass_kg() > self.body.net_mass_kg() {
            return Err(Error::ProductChangeWhileLoaded {
                serial: self.body.serial(),
                mass_kg: self.body.mass_kg(),
                net_mass_kg: self.body.net_mass_kg(),
            });
        }

        self.product = entry.name.clone();
        self.temperature_c = entry.temperature_c;
        debug!(serial = %self.body.serial(), product = %self.product, "product type changed");
        sink.emit(CargoEvent::ProductChanged {
            serial: self.body.serial(),
            product: self.product.clone(),
            temperature_c: self.temperature_c,
        });
        Ok(())
    }
}

impl Container for RefrigeratedContainer {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }

    fn summary(&self) -> ContainerSummary {
        ContainerSummary {
            product: Some(self.product.clone()),
            temperature_c: Some(self.temperature_c),
            ..self.body.summary()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventLog;
    use crate::product::Product;
    use crate::serial::SequentialSerials;

    fn reefer(product: &str) -> RefrigeratedContainer {
        let mut serials = SequentialSerials::new();
        RefrigeratedContainer::new(
            ContainerDimensions::new(500.0, 250.0, 500.0, 600.0),
            product,
            ProductCatalog::builtin(),
            &mut serials,
        )
        .expect("valid refrigerated container")
    }

    #[test]
    fn temperature_is_derived_from_catalog() {
        let container = reefer("bananas");
        assert_eq!(container.product(), "Bananas");
        assert_eq!(container.temperature_c(), 13.3);
        assert_eq!(container.max_capacity_kg(), 120_000.0);
    }

    #[test]
    fn rejects_unknown_product_without_consuming_a_serial() {
        let mut serials = SequentialSerials::new();
        let err = RefrigeratedContainer::new(
            ContainerDimensions::new(0.0, 1.0, 0.0, 1.0),
            "Durian",
            ProductCatalog::builtin(),
            &mut serials,
        )
        .expect_err("unknown product");
        assert!(matches!(err, Error::UnknownProduct { .. }));
        assert_eq!(serials.next_number(), 1);
    }

    #[test]
    fn product_change_requires_empty_container() {
        let mut container = reefer("Fish");
        let mut log = EventLog::new();

        container.load_cargo(1_000.0, &mut log).expect("fits");
        let err = container
            .change_product_type("Meat", &mut log)
            .expect_err("loaded container");
        assert!(matches!(err, Error::ProductChangeWhileLoaded { .. }));
        assert_eq!(container.product(), "Fish");

        container.unload_cargo(&mut log);
        log.drain();
        container
            .change_product_type("Ice cream", &mut log)
            .expect("empty container");
        assert_eq!(container.product(), "Ice cream");
        assert_eq!(container.temperature_c(), -18.0);
        assert_eq!(
            log.events(),
            &[CargoEvent::ProductChanged {
                serial: container.serial(),
                product: "Ice cream".to_string(),
                temperature_c: -18.0,
            }]
        );
    }

    #[test]
    fn same_product_is_a_no_op_even_when_loaded() {
        let mut container = reefer("Cheese");
        let mut log = EventLog::new();
        container.load_cargo(10.0, &mut log).expect("fits");
        log.drain();

        container
            .change_product_type("CHEESE", &mut log)
            .expect("same product");
        assert!(log.is_empty());
    }

    #[test]
    fn unknown_product_change_is_rejected_first() {
        let mut container = reefer("Eggs");
        let mut log = EventLog::new();
        let err = container
            .change_product_type("Durian", &mut log)
            .expect_err("unknown");
        assert!(matches!(err, Error::UnknownProduct { .. }));
    }

    #[test]
    fn uses_injected_catalog() {
        let catalog = Arc::new(
            ProductCatalog::from_products([Product::new("Vaccines", 4.0)]).expect("catalog"),
        );
        let mut serials = SequentialSerials::new();
        let container = RefrigeratedContainer::new(
            ContainerDimensions::new(0.0, 10.0, 0.0, 10.0),
            "vaccines",
            catalog,
            &mut serials,
        )
        .expect("known in custom catalog");
        assert_eq!(container.temperature_c(), 4.0);
        assert_eq!(container.summary().product.as_deref(), Some("Vaccines"));
    }
}
