use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::locate::{AddressSearch, CatalogSearch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let found = CatalogSearch::new(&mut pool).search(query)?;

        if found.is_empty() {
            info(format!("No known address matches '{}'.", query));
            return Ok(());
        }

        let mut table = Table::new([
            "Building",
            "Block",
            "Road",
            "Address",
            "Postal code",
            "Lat",
            "Lon",
        ]);
        for a in found {
            table.add_row(vec![
                a.building,
                a.block,
                a.road,
                a.address,
                a.postal_code,
                format!("{:.6}", a.latitude),
                format!("{:.6}", a.longitude),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
