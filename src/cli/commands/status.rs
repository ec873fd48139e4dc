use crate::cli::commands::{admin_login, open_gate};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_fill};
use crate::utils::formatting::{bold, fill_summary};
use crate::utils::table::{Column, Table};

/// Handle the `status` command (admin dashboard)
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { admin_password } = cmd {
        let admin = admin_login(cfg, admin_password)?;
        admin.require()?;

        let gate = open_gate(cfg, false)?;

        // Dashboard reads never fail hard: an unreachable backend shows as inactive.
        let event = gate.get_event();

        header("Event");
        if event.active {
            println!("Name     : {}", bold(&event.name));
        } else {
            println!("Name     : {} (inactive)", event.name);
        }
        println!(
            "Checked  : {}{}{}",
            color_for_fill(event.total, event.capacity),
            fill_summary(event.total, event.capacity),
            RESET
        );
        println!("Remaining: {}", event.remaining());
        println!("Password : {}", event.member_password);
        println!("Storage  : {}", gate.backend());
        println!();

        let entries = match gate.list_all() {
            Ok(e) => e,
            Err(e) => {
                warning(format!("Ledger unavailable: {}", e));
                return Ok(());
            }
        };

        header("Ledger");
        if entries.is_empty() {
            info("No check-ins yet.");
            return Ok(());
        }

        let name_w = entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(4)
            .clamp(4, 40);
        let type_w = entries
            .iter()
            .map(|e| e.category.chars().count())
            .max()
            .unwrap_or(4)
            .clamp(4, 20);

        let mut table = Table::new(vec![
            Column::new("Time", 20),
            Column::new("Name", name_w),
            Column::new("Type", type_w),
            Column::new("Members", 7),
            Column::new("Total", 0),
        ]);

        for e in &entries {
            table.add_row(vec![
                e.time_str(&cfg.time_format)?,
                e.name.clone(),
                e.category.clone(),
                e.members.to_string(),
                e.running_total.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
