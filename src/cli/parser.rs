use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for checkgate
#[derive(Parser)]
#[command(
    name = "checkgate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Event check-in gate: admit members up to a fixed capacity and keep a ledger",
    long_about = None
)]
pub struct Cli {
    /// Override the storage locator (memory, file:PATH, sqlite:PATH)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the storage
    Init,

    /// Configure the event and open it for check-ins (keeps the running total)
    Setup {
        #[arg(long, help = "Event name")]
        name: String,

        #[arg(long, help = "Maximum number of members the event admits")]
        capacity: u32,

        #[arg(long = "member-password", help = "Password members use to check in")]
        member_password: String,

        #[arg(long = "admin-password")]
        admin_password: String,
    },

    /// Check in a party of members
    Checkin {
        #[arg(long, help = "Member password of the active event")]
        password: String,

        #[arg(long, help = "Name of the person checking in")]
        name: String,

        #[arg(long = "type", help = "Free-text label for the party (e.g. guest, family)")]
        category: String,

        #[arg(long, help = "Number of members in the party")]
        members: String,
    },

    /// Show the dashboard: event state and ledger, newest first
    Status {
        #[arg(long = "admin-password")]
        admin_password: String,
    },

    /// Export the ledger, oldest first
    Export {
        #[arg(long = "admin-password")]
        admin_password: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: event_entries.csv)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Clear the ledger and deactivate the event
    Reset {
        #[arg(long = "admin-password")]
        admin_password: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the audit log (sqlite storage only)
    Log {
        #[arg(long = "print", help = "Print rows from the audit log table")]
        print: bool,
    },
}
