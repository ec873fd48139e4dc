use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{FileStore, GateStore, StorageLocator};
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the storage named by --store, or the default SQLite database
///  - the SQLite schema, when the storage is SQLite
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::for_init(cli.store.as_deref())?;
    let locator = cfg.locator()?;

    info("Initializing checkgate…");

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        success(format!("Config file : {}", path.display()));
    }

    match &locator {
        StorageLocator::Sqlite(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }

            let mut pool = DbPool::open(path)?;
            pool.with_conn(|conn| init_db(conn))?;

            // Non-blocking: a failed audit line does not fail init.
            if let Err(e) = log::ttlog(
                &pool.conn,
                "init",
                "",
                &format!("Database initialized at {}", path.display()),
            ) {
                warning(format!("Failed to write audit log: {}", e));
            }

            success(format!("Database    : {}", path.display()));
        }
        StorageLocator::File(path) => {
            let store = FileStore::new(path);
            if !path.exists() {
                store.reset()?;
            }
            // Parse once so a corrupt document is reported now.
            store.load()?;
            success(format!("State file  : {}", path.display()));
        }
        StorageLocator::Memory => {
            warning("In-memory storage has nothing to initialize.");
        }
    }

    success("checkgate initialization completed!");
    Ok(())
}
