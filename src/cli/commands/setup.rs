use crate::cli::commands::{admin_login, open_gate};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EventSetup;
use crate::ui::messages::{info, success};

/// Handle the `setup` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Setup {
        name,
        capacity,
        member_password,
        admin_password,
    } = cmd
    {
        let admin = admin_login(cfg, admin_password)?;
        admin.require()?;

        let gate = open_gate(cfg, true)?;
        let event = gate.configure_and_activate(&EventSetup::new(name, *capacity, member_password))?;

        success(format!(
            "Event '{}' is active with capacity {}.",
            event.name, event.capacity
        ));
        if event.total > 0 {
            info(format!(
                "{} members already checked in, {} places left.",
                event.total,
                event.remaining()
            ));
        }
    }

    Ok(())
}
