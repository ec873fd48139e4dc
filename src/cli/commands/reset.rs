use crate::cli::commands::{admin_login, open_gate};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset {
        admin_password,
        yes,
    } = cmd
    {
        let mut admin = admin_login(cfg, admin_password)?;
        admin.require()?;

        let gate = open_gate(cfg, true)?;
        let event = gate.get_event();

        let prompt = format!(
            "Reset event '{}'? The ledger ({} members) is deleted and the event deactivated. This action is irreversible.",
            event.name, event.total
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        gate.reset()?;
        admin.logout();

        success("Event reset: ledger cleared, check-ins closed.");
    }

    Ok(())
}
