use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite catalog and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_display = db_path.display().to_string();

    println!("⚙️  Initializing rFacility…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Catalog     : {}", db_display);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "",
        &format!("Catalog initialized at {}", db_display),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Catalog initialized at {}", db_display));
    Ok(())
}
