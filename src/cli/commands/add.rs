use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::form::FacilityForm;
use crate::core::hours::validator::{Constraints, ValidationWatch};
use crate::core::locate::{AddressSearch, CatalogSearch, ConfiguredPosition};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::facility_type::FacilityType;
use crate::models::location::Coordinates;
use crate::models::time_range::TimeRange;
use crate::ui::messages::{error, info, success, warning};

pub(crate) fn parse_facility_type(input: &str) -> AppResult<FacilityType> {
    FacilityType::from_input(input).ok_or_else(|| {
        let codes: Vec<&str> = FacilityType::ALL.iter().map(|t| t.code()).collect();
        AppError::InvalidFacilityType(format!("'{}'. Use one of: {}", input, codes.join(", ")))
    })
}

/// Add a facility to the catalog.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        facility_type,
        floor,
        description,
        building,
        block,
        road,
        address,
        postal_code,
        lat,
        lon,
        here,
        from_search,
        opens,
        closes,
    } = cmd
    {
        //
        // 1. Facility type (mandatory)
        //
        let mut form = FacilityForm::new();
        form.set_facility_type(parse_facility_type(facility_type)?);

        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 2. Location source: current position or a known address
        //
        if *here {
            form.use_current_location(&ConfiguredPosition::from_config(cfg))?;
        }

        if let Some(query) = from_search {
            let found = CatalogSearch::new(&mut pool).search(query)?;
            match found.first() {
                Some(hit) => {
                    form.set_location(hit);
                    info(format!("Using known location: {}", hit.address));
                }
                None => {
                    warning(format!("No known address matches '{}'.", query));
                    return Err(AppError::IncompleteForm(format!(
                        "no location found for '{}'",
                        query
                    )));
                }
            }
        }

        //
        // 3. Explicit fields win over placeholders and search results
        //
        if let Some(v) = building {
            form.set_building(v.as_str());
        }
        if let Some(v) = block {
            form.set_block(v.as_str());
        }
        if let Some(v) = road {
            form.set_road(v.as_str());
        }
        if let Some(v) = address {
            form.set_address(v.as_str());
        }
        if let Some(v) = postal_code {
            form.set_postal_code(v.as_str());
        }
        if let (Some(lat), Some(lon)) = (lat, lon) {
            form.set_coordinates(Coordinates::new(*lat, *lon)?);
        }
        if let Some(v) = floor {
            form.set_floor(v.as_str());
        }
        if let Some(v) = description {
            form.set_description(v.as_str());
        }

        //
        // 4. Opening hours, validated on the configured step
        //
        form.set_opening_hours(TimeRange::new(opens.clone(), closes.clone()));

        let constraints =
            Constraints::new().with_minutes_step(f64::from(cfg.opening_hours_step_minutes));
        let mut watch = ValidationWatch::new(constraints).on_error(|(start, end)| {
            for (label, outcome) in [("Opening time", start), ("Closing time", end)] {
                if let Some(msg) = outcome.message() {
                    error(format!("{}: {}", label, msg));
                }
            }
        });

        let facility = form.finish(&mut watch)?;

        //
        // 5. Store
        //
        let id = AddLogic::apply(&mut pool, &facility)?;
        success(format!(
            "Facility #{} added: {} at {}",
            id,
            facility.facility_type.name(),
            facility.address.title()
        ));
    }

    Ok(())
}
