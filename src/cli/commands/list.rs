use crate::cli::commands::add::parse_facility_type;
use crate::cli::parser::{Commands, OriginArgs};
use crate::config::Config;
use crate::core::hours::clock::SystemClock;
use crate::core::list::{FacilityCard, ListLogic, ListOptions};
use crate::core::locate::{ConfiguredPosition, PositionProvider};
use crate::db::pool::DbPool;
use crate::db::queries::load_facilities;
use crate::errors::AppResult;
use crate::models::location::Coordinates;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{badge, tag};
use crate::utils::formatting::{bold, clamp_lines, italic};
use crate::utils::geo::format_distance;

const CARD_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        origin,
        open_now,
        exact,
        facility_type,
        json,
    } = cmd
    {
        let type_filter = facility_type.as_deref().map(parse_facility_type).transpose()?;
        let opts = ListOptions {
            origin: resolve_origin(origin, cfg)?,
            open_now_only: *open_now,
            exact: *exact,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let facilities = load_facilities(&mut pool, type_filter)?;
        let cards = ListLogic::cards(&facilities, &opts, &SystemClock)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&cards)?);
            return Ok(());
        }

        if cards.is_empty() {
            info("No facilities found.");
            return Ok(());
        }

        for card in &cards {
            print_card(card, opts.exact, cfg);
        }
    }
    Ok(())
}

fn resolve_origin(origin: &OriginArgs, cfg: &Config) -> AppResult<Option<Coordinates>> {
    if let Some(near) = &origin.near {
        return Coordinates::parse(near).map(Some);
    }

    if origin.here {
        return match ConfiguredPosition::from_config(cfg).current_position() {
            Ok(pos) => Ok(Some(pos)),
            Err(e) => {
                warning("Unable to retrieve your location. Please try again.");
                Err(e)
            }
        };
    }

    Ok(None)
}

fn print_card(card: &FacilityCard, exact: bool, cfg: &Config) {
    let mut head = format!("#{} {} {}", card.id, card.glyph, bold(&card.title));
    if let Some(floor) = &card.floor {
        head.push(' ');
        head.push_str(&tag(floor));
    }
    if let Some(status) = card.status {
        head.push(' ');
        head.push_str(&badge(status.label(), status.is_open()));
    }
    println!("{}", head);

    if let Some(desc) = &card.description {
        for line in clamp_lines(desc, CARD_WIDTH, cfg.description_lines) {
            println!("    {}", italic(&line));
        }
    }

    let mut footer = Vec::new();
    if let Some(km) = card.distance_km {
        footer.push(format!("📍 {}", format_distance(km, cfg.distance_decimals)));
    }
    if let Some(hours) = &card.hours {
        let open = card.status.is_some_and(|s| s.is_open());
        let icon = if exact || open { "⏱" } else { "⏹" };
        footer.push(format!("{} {}", icon, hours));
    }
    if !footer.is_empty() {
        println!("    {}", footer.join(" · "));
    }
    println!();
}
