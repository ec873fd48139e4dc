pub mod checkin;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod reset;
pub mod setup;
pub mod status;

use crate::config::Config;
use crate::core::{AdminSession, EventGate};
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open the configured storage. In-memory storage does not outlive the
/// command, so mutating commands warn about it.
pub(crate) fn open_gate(cfg: &Config, mutating: bool) -> AppResult<EventGate> {
    let locator = cfg.locator()?;

    if mutating && !locator.is_persistent() {
        warning("Storage is in-memory: this change is lost when the command exits (run `checkgate init` or pass --store).");
    }

    EventGate::open(&locator)
}

/// Admin login for the duration of one command.
pub(crate) fn admin_login(cfg: &Config, given: &str) -> AppResult<AdminSession> {
    let mut session = AdminSession::new();
    session.login(&cfg.admin_password, given)?;
    Ok(session)
}
