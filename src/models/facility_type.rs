use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityType {
    LactationRoom,
    DiaperChangingStation,
    BabyRoom,
    RestroomAccessible,
    RestroomFamily,
    RestroomLadies,
    RestroomMens,
    RestroomUnisex,
}

impl FacilityType {
    pub const ALL: [FacilityType; 8] = [
        FacilityType::LactationRoom,
        FacilityType::DiaperChangingStation,
        FacilityType::BabyRoom,
        FacilityType::RestroomAccessible,
        FacilityType::RestroomFamily,
        FacilityType::RestroomLadies,
        FacilityType::RestroomMens,
        FacilityType::RestroomUnisex,
    ];

    /// Display name, also the value stored in the `facilities.facility_type` column.
    pub fn name(&self) -> &'static str {
        match self {
            FacilityType::LactationRoom => "Lactation Room",
            FacilityType::DiaperChangingStation => "Diaper Changing Station",
            FacilityType::BabyRoom => "Baby Room",
            FacilityType::RestroomAccessible => "Restroom (Accessible)",
            FacilityType::RestroomFamily => "Restroom (Family)",
            FacilityType::RestroomLadies => "Restroom (Ladies)",
            FacilityType::RestroomMens => "Restroom (Men's)",
            FacilityType::RestroomUnisex => "Restroom (Unisex)",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            FacilityType::LactationRoom => "lactation",
            FacilityType::DiaperChangingStation => "diaper",
            FacilityType::BabyRoom => "baby",
            FacilityType::RestroomAccessible => "accessible",
            FacilityType::RestroomFamily => "family",
            FacilityType::RestroomLadies => "ladies",
            FacilityType::RestroomMens => "mens",
            FacilityType::RestroomUnisex => "unisex",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            FacilityType::LactationRoom => "🍼",
            FacilityType::DiaperChangingStation => "🚼",
            FacilityType::BabyRoom => "👶",
            FacilityType::RestroomAccessible => "♿",
            FacilityType::RestroomFamily => "👪",
            FacilityType::RestroomLadies => "🚺",
            FacilityType::RestroomMens => "🚹",
            FacilityType::RestroomUnisex => "🚻",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == s)
    }

    /// Helper: accept either the short code or the full name, any case.
    pub fn from_input(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL.into_iter().find(|t| {
            t.code().eq_ignore_ascii_case(needle) || t.name().eq_ignore_ascii_case(needle)
        })
    }
}

impl Serialize for FacilityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
