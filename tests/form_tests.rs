use rfacility::core::form::FacilityForm;
use rfacility::core::hours::validator::{Constraints, ValidationWatch};
use rfacility::core::locate::PositionProvider;
use rfacility::errors::{AppError, AppResult};
use rfacility::models::facility_type::FacilityType;
use rfacility::models::location::{Address, Coordinates};
use rfacility::models::time_range::TimeRange;
use rfacility::models::validation::ValidationOutcome as V;
use std::cell::RefCell;

struct FakePosition(Option<Coordinates>);

impl PositionProvider for FakePosition {
    fn current_position(&self) -> AppResult<Coordinates> {
        self.0
            .ok_or_else(|| AppError::PositionUnavailable("denied".into()))
    }
}

fn step_30() -> ValidationWatch<'static> {
    ValidationWatch::new(Constraints::new().with_minutes_step(30.0))
}

fn orchard() -> Address {
    Address {
        building: "ION Orchard".into(),
        block: String::new(),
        road: "Orchard Turn".into(),
        address: "2 Orchard Turn".into(),
        postal_code: "238801".into(),
        latitude: 1.3040,
        longitude: 103.8318,
    }
}

fn complete_form() -> FacilityForm {
    let mut form = FacilityForm::new();
    form.set_facility_type(FacilityType::LactationRoom);
    form.set_location(&orchard());
    form
}

#[test]
fn test_finish_requires_type_and_location() {
    let mut form = FacilityForm::new();
    let err = form.finish(&mut step_30()).unwrap_err();
    assert!(matches!(err, AppError::IncompleteForm(ref m) if m.contains("type")));

    form.set_facility_type(FacilityType::BabyRoom);
    assert_eq!(form.facility_type(), Some(FacilityType::BabyRoom));
    let err = form.finish(&mut step_30()).unwrap_err();
    assert!(matches!(err, AppError::IncompleteForm(ref m) if m.contains("location")));

    form.set_coordinates(Coordinates::new(1.3, 103.8).unwrap());
    let err = form.finish(&mut step_30()).unwrap_err();
    assert!(matches!(err, AppError::IncompleteForm(ref m) if m.contains("address")));
}

#[test]
fn test_finish_canonicalizes_opening_hours() {
    let mut form = complete_form();
    form.set_floor("  L3 ");
    form.set_description("");
    form.set_opening_hours(TimeRange::from_raw("9:00 AM", "5:30 PM"));

    // the form keeps what was typed; only the finished facility is canonical
    assert_eq!(form.opening_hours().start(), Some("9:00 AM"));

    let facility = form.finish(&mut step_30()).unwrap();
    assert_eq!(facility.opening_hours.start(), Some("09:00:00"));
    assert_eq!(facility.opening_hours.end(), Some("17:30:00"));
    assert_eq!(facility.floor.as_deref(), Some("L3"));
    assert_eq!(facility.description, None);
    assert_eq!(facility.address, orchard());
}

#[test]
fn test_finish_accepts_missing_opening_hours() {
    let facility = complete_form().finish(&mut step_30()).unwrap();
    assert_eq!(facility.opening_hours, TimeRange::unset());
}

#[test]
fn test_finish_rejects_invalid_hours_and_notifies_observer() {
    let seen = RefCell::new(Vec::new());
    let mut watch = ValidationWatch::new(Constraints::new().with_minutes_step(30.0))
        .on_error(|pair| seen.borrow_mut().push(pair));

    let mut form = complete_form();
    form.set_opening_hours(TimeRange::from_raw("09:15", "17:00"));
    let err = form.finish(&mut watch).unwrap_err();
    assert!(
        matches!(err, AppError::InvalidOpeningHours(ref m) if m == "start: not aligned to step")
    );

    form.set_opening_hours(TimeRange::from_raw("18:00", "09:00"));
    let err = form.finish(&mut watch).unwrap_err();
    assert!(
        matches!(err, AppError::InvalidOpeningHours(ref m) if m == "end: end must be after start")
    );

    drop(watch);
    assert_eq!(
        seen.into_inner(),
        vec![(V::Step, V::None), (V::None, V::InvalidRange)]
    );
}

#[test]
fn test_use_current_location_fills_placeholders() {
    let mut form = FacilityForm::new();
    form.use_current_location(&FakePosition(Some(Coordinates::new(1.35, 103.9).unwrap())))
        .unwrap();

    let a = form.to_address();
    assert_eq!(a.building, "Your building");
    assert_eq!(a.block, "Your block");
    assert_eq!(a.road, "Your road");
    assert_eq!(a.address, "Your address");
    assert_eq!(a.postal_code, "Your postal code");
    assert_eq!((a.latitude, a.longitude), (1.35, 103.9));
}

#[test]
fn test_use_current_location_failure_leaves_form_untouched() {
    let mut form = FacilityForm::new();
    let err = form.use_current_location(&FakePosition(None)).unwrap_err();
    assert!(matches!(err, AppError::PositionUnavailable(_)));
    assert!(form.coordinates().is_none());
    assert_eq!(form.to_address(), Address::default());
}

#[test]
fn test_explicit_fields_override_selected_location() {
    let mut form = complete_form();
    form.set_building("");
    form.set_block("Blk 123");

    let a = form.to_address();
    assert_eq!(a.building, "");
    assert_eq!(a.title(), "Blk 123 Orchard Turn");
}
