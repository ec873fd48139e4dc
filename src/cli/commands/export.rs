use crate::cli::commands::{admin_login, open_gate};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        admin_password,
        format,
        file,
        force,
    } = cmd
    {
        let admin = admin_login(cfg, admin_password)?;
        admin.require()?;

        let gate = open_gate(cfg, false)?;
        let path = expand_tilde(file.as_deref().unwrap_or(DEFAULT_EXPORT_FILE));

        ExportLogic::export(&gate, format, &path, *force, &cfg.time_format)?;
    }
    Ok(())
}
