use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let locator = cfg.locator()?;
        let Some(path) = locator.sqlite_path() else {
            warning(format!(
                "The audit log is kept by sqlite storage only (current: {}).",
                locator
            ));
            return Ok(());
        };

        let mut pool = DbPool::open(path)?;
        pool.with_conn(|conn| init_db(conn))?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
