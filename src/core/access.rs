//! Session-level authorization around the gate.
//!
//! Passwords are opaque strings compared for equality. A member
//! authorization covers exactly one successful check-in; an admin
//! authorization lasts until `logout`.

use super::gate::EventGate;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckInRequest, EventConfig, LedgerEntry};

#[derive(Debug, Default)]
pub struct MemberSession {
    authorized: bool,
}

impl MemberSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Verify the member password of the active event.
    pub fn authenticate(&mut self, event: &EventConfig, password: &str) -> AppResult<()> {
        if !event.active {
            return Err(AppError::EventNotActive);
        }
        if password != event.member_password {
            return Err(AppError::Unauthorized("wrong member password".into()));
        }
        self.authorized = true;
        Ok(())
    }

    /// Check in through `gate`. The authorization is spent only when the
    /// check-in is admitted; after a rejection the member may try again.
    pub fn check_in(&mut self, gate: &EventGate, req: &CheckInRequest) -> AppResult<LedgerEntry> {
        if !self.authorized {
            return Err(AppError::Unauthorized("member login required".into()));
        }

        let entry = gate.attempt_check_in(req)?;
        self.authorized = false;
        Ok(entry)
    }
}

#[derive(Debug, Default)]
pub struct AdminSession {
    authorized: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, expected: &str, given: &str) -> AppResult<()> {
        if given != expected {
            self.authorized = false;
            return Err(AppError::Unauthorized("wrong admin password".into()));
        }
        self.authorized = true;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.authorized = false;
    }

    /// Guard for admin-only operations.
    pub fn require(&self) -> AppResult<()> {
        if self.authorized {
            Ok(())
        } else {
            Err(AppError::Unauthorized("admin login required".into()))
        }
    }
}
