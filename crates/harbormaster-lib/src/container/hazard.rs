//! Hazard notification capability for containers carrying dangerous cargo.

use tracing::warn;

use crate::error::{Error, Result};
use crate::events::{CargoEvent, EventSink};

use super::body::Container;

/// Containers that raise an alert when an unsafe load is attempted.
pub trait HazardNotifier: Container {
    /// Alert text describing the dangerous operation.
    fn hazard_message(&self) -> String;

    /// Emit a [`CargoEvent::HazardAlert`] for this container.
    fn notify_hazard(&self, sink: &mut dyn EventSink) {
        let serial = self.serial();
        let message = self.hazard_message();
        warn!(%serial, "{message}");
        sink.emit(CargoEvent::HazardAlert {
            serial,
            kind: self.kind(),
            message,
        });
    }
}

/// Run the base load check, alerting before reporting an overfill.
///
/// The alert is emitted even though the load is refused.
pub(crate) fn check_load_or_alert<C>(
    container: &C,
    amount_kg: f64,
    sink: &mut dyn EventSink,
) -> Result<()>
where
    C: HazardNotifier + ?Sized,
{
    match container.body().check_load(amount_kg) {
        Err(err @ Error::Overfill { .. }) => {
            container.notify_hazard(sink);
            Err(err)
        }
        other => other,
    }
}
