use crate::cli::commands::open_gate;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::MemberSession;
use crate::errors::AppResult;
use crate::models::CheckInRequest;
use crate::ui::messages::success;

/// Handle the `checkin` command: member login, then one admission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        password,
        name,
        category,
        members,
    } = cmd
    {
        let gate = open_gate(cfg, true)?;

        let mut session = MemberSession::new();
        session.authenticate(&gate.try_get_event()?, password)?;

        let req = CheckInRequest::parse(name, category, members)?;
        let entry = session.check_in(&gate, &req)?;

        success(format!(
            "Welcome {}! {} member(s) checked in at {} (total {}).",
            entry.name,
            entry.members,
            entry.time_str(&cfg.time_format)?,
            entry.running_total
        ));
    }

    Ok(())
}
