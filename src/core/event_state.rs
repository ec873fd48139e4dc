use super::gate::EventGate;
use crate::errors::{AppError, AppResult};
use crate::models::{EventConfig, EventSetup};

/// Setup rule: overwrite configuration and activate, keeping the running
/// total. Refuses a capacity that the already admitted members exceed.
fn plan_setup(current: &EventConfig, setup: &EventSetup) -> AppResult<EventConfig> {
    if setup.capacity < current.total {
        return Err(AppError::InvalidInput(format!(
            "capacity {} is below the {} members already checked in",
            setup.capacity, current.total
        )));
    }

    let mut next = current.clone();
    next.apply_setup(setup);
    Ok(next)
}

impl EventGate {
    /// Consistent snapshot of the event record.
    pub fn try_get_event(&self) -> AppResult<EventConfig> {
        self.store().load_event()
    }

    /// Snapshot for display. When the backend cannot answer, the safe
    /// default (inactive, zero capacity) is returned instead of an error.
    pub fn get_event(&self) -> EventConfig {
        match self.try_get_event() {
            Ok(ev) => ev,
            Err(e) => {
                tracing::warn!(backend = self.backend(), error = %e, "event state unavailable, reporting inactive");
                EventConfig::default()
            }
        }
    }

    /// Set name, capacity and member password, and activate the event.
    /// Calling it again overwrites the configuration; `total` survives.
    pub fn configure_and_activate(&self, setup: &EventSetup) -> AppResult<EventConfig> {
        if setup.name.is_empty() {
            return Err(AppError::InvalidInput("event name is required".into()));
        }

        let event = self
            .store()
            .configure(&|current: &EventConfig| plan_setup(current, setup))?;

        tracing::info!(
            event = %event.name,
            capacity = event.capacity,
            total = event.total,
            "event configured and active"
        );
        Ok(event)
    }

    /// Deactivate and zero the event and clear the ledger.
    pub fn reset(&self) -> AppResult<()> {
        self.store().reset()?;
        tracing::info!(backend = self.backend(), "event reset");
        Ok(())
    }
}
