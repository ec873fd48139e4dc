use super::gate::EventGate;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckInRequest, EventConfig, LedgerEntry};
use chrono::{DateTime, Local};

/// Admission rule, evaluated against the record the store read under its
/// lock. Pure: the store applies the returned entry or nothing.
pub(crate) fn decide(
    event: &EventConfig,
    req: &CheckInRequest,
    now: DateTime<Local>,
) -> AppResult<LedgerEntry> {
    if !event.active {
        return Err(AppError::EventNotActive);
    }

    let new_total = event
        .total
        .checked_add(req.members)
        .filter(|t| *t <= event.capacity)
        .ok_or_else(|| AppError::CapacityExceeded {
            event: event.name.clone(),
            capacity: event.capacity,
        })?;

    Ok(LedgerEntry {
        time: now,
        name: req.name.clone(),
        category: req.category.clone(),
        members: req.members,
        running_total: new_total,
    })
}

impl EventGate {
    /// Admit `req` if it fits in the remaining capacity.
    ///
    /// The capacity check, the total update and the ledger append happen
    /// in the store's serialization point, so concurrent callers can never
    /// admit more than `capacity` between them. On rejection nothing is
    /// written.
    pub fn attempt_check_in(&self, req: &CheckInRequest) -> AppResult<LedgerEntry> {
        let outcome = self
            .store()
            .admit(&|event: &EventConfig| decide(event, req, Local::now()));

        match &outcome {
            Ok(entry) => tracing::info!(
                member = %entry.name,
                category = %entry.category,
                members = entry.members,
                total = entry.running_total,
                "check-in admitted"
            ),
            Err(e) if e.is_rejection() => tracing::info!(
                member = %req.name,
                members = req.members,
                reason = %e,
                "check-in rejected"
            ),
            Err(e) => tracing::error!(error = %e, "check-in failed"),
        }

        outcome
    }

    /// Raw atomic increment: admit `delta` members under a generic label
    /// and return the new total.
    pub fn apply_admission(&self, delta: u32) -> AppResult<u32> {
        let req = CheckInRequest::new("admission", "admission", delta)?;
        Ok(self.attempt_check_in(&req)?.running_total)
    }
}
