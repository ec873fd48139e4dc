//! checkgate library root.
//! Exposes the admission core (`core`, `store`, `models`), the CLI parser
//! and the high-level run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

pub use crate::core::{AdminSession, EventGate, MemberSession};
pub use errors::{AppError, AppResult};
pub use models::{CheckInRequest, EventConfig, EventSetup, GateState, LedgerEntry};
pub use store::{GateStore, StorageLocator};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Setup { .. } => cli::commands::setup::handle(&cli.command, cfg),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; RUST_LOG wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line storage override
    if let Some(custom) = &cli.store {
        cfg.storage = custom.clone();
    }

    init_tracing(&cfg.log_level);

    // `config` stays usable so a broken file can still be printed and edited
    if !matches!(cli.command, Commands::Config { .. }) {
        cfg.validate()?;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
