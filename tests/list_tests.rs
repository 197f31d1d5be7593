mod common;
use common::clock_at;

use rfacility::core::list::{FacilityCard, ListLogic, ListOptions};
use rfacility::errors::AppError;
use rfacility::models::facility::Facility;
use rfacility::models::facility_type::FacilityType;
use rfacility::models::location::{Coordinates, Location};
use rfacility::utils::formatting::clamp_lines;
use rfacility::utils::geo::{distance_km, format_distance};

fn location(id: i64, lat: f64, lon: f64, hours: Option<(&str, &str)>) -> Location {
    Location {
        id,
        building: String::new(),
        block: String::new(),
        road: String::new(),
        address: format!("{} Test Road", id),
        postal_code: String::new(),
        latitude: lat,
        longitude: lon,
        opens_at: hours.map(|h| h.0.to_string()),
        closes_at: hours.map(|h| h.1.to_string()),
    }
}

fn facility(id: i64, loc: Location) -> Facility {
    Facility {
        id,
        facility_type: FacilityType::DiaperChangingStation,
        floor: None,
        description: None,
        location: loc,
        created_at: "2026-10-16T09:00:00+08:00".into(),
    }
}

#[test]
fn test_location_title_rules() {
    let mut loc = location(1, 0.0, 0.0, None);
    assert_eq!(loc.title(), "1 Test Road");
    loc.block = "Blk 5".into();
    loc.road = "Bishan St 11".into();
    assert_eq!(loc.title(), "Blk 5 Bishan St 11");
    loc.building = "Junction 8".into();
    assert_eq!(loc.title(), "Junction 8");
}

#[test]
fn test_distance_and_formatting() {
    let a = Coordinates::new(0.0, 0.0).unwrap();
    let b = Coordinates::new(0.0, 1.0).unwrap();
    let d = distance_km(a, b);
    assert!((d - 111.19).abs() < 0.01, "got {}", d);
    assert_eq!(distance_km(a, a), 0.0);
    assert_eq!(format_distance(1.26, 1), "1.3 km");
    assert_eq!(format_distance(0.04, 1), "0.0 km");
}

#[test]
fn test_coordinates_parse() {
    let c = Coordinates::parse("1.3040, 103.8318").unwrap();
    assert_eq!((c.latitude, c.longitude), (1.3040, 103.8318));
    assert!(Coordinates::parse("-33.86,151.2").is_ok());
    assert!(matches!(
        Coordinates::parse("91,0"),
        Err(AppError::InvalidCoordinate(_))
    ));
    assert!(Coordinates::parse("1.3").is_err());
    assert!(Coordinates::parse("a,b").is_err());
}

#[test]
fn test_cards_sorted_by_distance() {
    let facilities = vec![
        facility(1, location(1, 1.40, 103.80, None)),
        facility(2, location(2, 1.30, 103.80, None)),
        facility(3, location(3, 1.35, 103.80, None)),
    ];
    let opts = ListOptions {
        origin: Some(Coordinates::new(1.30, 103.80).unwrap()),
        ..Default::default()
    };

    let cards = ListLogic::cards(&facilities, &opts, &clock_at(12, 0, 0)).unwrap();
    let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(cards[0].distance_km, Some(0.0));
}

#[test]
fn test_cards_keep_catalog_order_without_origin() {
    let facilities = vec![
        facility(7, location(7, 1.40, 103.80, None)),
        facility(8, location(8, 1.30, 103.80, None)),
    ];
    let cards = ListLogic::cards(&facilities, &ListOptions::default(), &clock_at(12, 0, 0)).unwrap();
    let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7, 8]);
    assert!(cards.iter().all(|c| c.distance_km.is_none()));
}

#[test]
fn test_open_now_filter() {
    let facilities = vec![
        facility(1, location(1, 1.3, 103.8, Some(("09:00:00", "17:00:00")))),
        facility(2, location(2, 1.3, 103.8, Some(("18:00:00", "22:00:00")))),
        facility(3, location(3, 1.3, 103.8, None)),
    ];
    let opts = ListOptions {
        open_now_only: true,
        ..Default::default()
    };

    let cards = ListLogic::cards(&facilities, &opts, &clock_at(12, 0, 0)).unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, 1);
    assert_eq!(cards[0].hours.as_deref(), Some("Open until 5 PM"));
}

#[test]
fn test_card_without_hours_has_no_status() {
    let f = facility(3, location(3, 1.3, 103.8, None));
    let card = FacilityCard::build(&f, None, false, &clock_at(12, 0, 0)).unwrap();
    assert_eq!(card.status, None);
    assert_eq!(card.hours, None);
    assert_eq!(card.glyph, "🚼");

    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["facility_type"], "Diaper Changing Station");
    assert!(json["status"].is_null());
}

#[test]
fn test_card_with_malformed_stored_hours_fails_loudly() {
    let f = facility(4, location(4, 1.3, 103.8, Some(("9am", "17:00:00"))));
    let err = FacilityCard::build(&f, None, true, &clock_at(12, 0, 0)).unwrap_err();
    assert!(matches!(err, AppError::MalformedCanonicalTime(_)));
}

#[test]
fn test_clamp_lines() {
    let text = "Quiet nursing room with a sofa, a sink and a hot water dispenser near the lifts";
    let lines = clamp_lines(text, 20, 2);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with('…'));
    assert!(clamp_lines("", 20, 2).is_empty());
    assert_eq!(clamp_lines("short", 20, 2), vec!["short".to_string()]);
}

#[test]
fn test_facility_type_input() {
    assert_eq!(FacilityType::from_input("MENS"), Some(FacilityType::RestroomMens));
    assert_eq!(
        FacilityType::from_input("restroom (family)"),
        Some(FacilityType::RestroomFamily)
    );
    assert_eq!(FacilityType::from_input("sauna"), None);
    for t in FacilityType::ALL {
        assert_eq!(FacilityType::from_db_str(t.name()), Some(t));
    }
}
