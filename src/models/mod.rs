pub mod facility;
pub mod facility_type;
pub mod location;
pub mod time_of_day;
pub mod time_range;
pub mod validation;
