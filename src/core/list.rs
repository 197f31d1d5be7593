//! Facility cards: what a listing shows for each facility.

use crate::core::hours::clock::Clock;
use crate::core::hours::evaluator::{OpenStatus, open_status, operating_hours};
use crate::errors::AppResult;
use crate::models::facility::Facility;
use crate::models::facility_type::FacilityType;
use crate::models::location::Coordinates;
use crate::utils::geo::distance_km;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize)]
pub struct FacilityCard {
    pub id: i64,
    pub facility_type: FacilityType,
    #[serde(skip)]
    pub glyph: &'static str,
    pub title: String,
    pub floor: Option<String>,
    pub description: Option<String>,
    pub distance_km: Option<f64>,
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
    /// `None` when the opening hours are incomplete.
    pub status: Option<OpenStatus>,
    pub hours: Option<String>,
}

impl FacilityCard {
    pub fn build<C: Clock + ?Sized>(
        facility: &Facility,
        origin: Option<Coordinates>,
        exact: bool,
        clock: &C,
    ) -> AppResult<Self> {
        let loc = &facility.location;
        let hours = loc.opening_hours();

        Ok(Self {
            id: facility.id,
            facility_type: facility.facility_type,
            glyph: facility.facility_type.glyph(),
            title: loc.title(),
            floor: facility.floor.clone(),
            description: facility.description.clone(),
            distance_km: origin.map(|o| distance_km(o, loc.coordinates())),
            opens_at: loc.opens_at.clone(),
            closes_at: loc.closes_at.clone(),
            status: open_status(&hours, clock),
            hours: operating_hours(&hours, exact, clock)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Sort by distance from here when set.
    pub origin: Option<Coordinates>,
    pub open_now_only: bool,
    pub exact: bool,
}

pub struct ListLogic;

impl ListLogic {
    /// Cards nearest first (when an origin is given), otherwise in catalog order.
    pub fn cards<C: Clock + ?Sized>(
        facilities: &[Facility],
        opts: &ListOptions,
        clock: &C,
    ) -> AppResult<Vec<FacilityCard>> {
        let mut cards = Vec::with_capacity(facilities.len());
        for f in facilities {
            let card = FacilityCard::build(f, opts.origin, opts.exact, clock)?;
            if opts.open_now_only && card.status != Some(OpenStatus::Open) {
                continue;
            }
            cards.push(card);
        }

        cards.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        });

        Ok(cards)
    }
}
