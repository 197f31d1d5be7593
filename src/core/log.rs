use crate::db::log::load_entries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::pad_right;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 48;

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                // migrations store SQLite datetime('now'), everything else RFC 3339
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (
                    e.id.to_string(),
                    date,
                    truncate(&op_target, MAX_OP_WIDTH),
                    e.message,
                )
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(10);

        header("Internal log");

        for (id, date, op_target, message) in rows {
            let op = op_target.split(' ').next().unwrap_or_default().to_string();
            let painted = color_for_operation(&op).paint(pad_right(&op_target, op_w));
            println!(
                "{:>id_w$}  {}  {}  {}",
                id,
                pad_right(&date, date_w),
                painted,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
