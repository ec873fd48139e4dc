use crate::db::pool::DbPool;
use crate::db::queries::{LogRow, load_log};
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RED, WHITE, YELLOW};
use crate::utils::table::{Column, Table};

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "checkin" => GREEN,
        "reset" => RED,
        "setup" => YELLOW,
        "migration_applied" => MAGENTA,
        "init" => BLUE,
        _ => WHITE,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("No audit entries.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .clamp(10, 60);

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Date", 25),
            Column::new("Operation", op_w),
            Column::new("Message", 0),
        ]);

        for r in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| r.date.clone());

            table.add_colored_row(
                vec![
                    r.id.to_string(),
                    date,
                    op_target(r),
                    r.message.clone(),
                ],
                color_for_operation(&r.operation),
            );
        }

        print!("{}", table.render());
        Ok(())
    }
}
