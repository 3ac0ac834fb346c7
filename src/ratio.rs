use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Staff-to-patient ratio. `patients` is always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    staff: u32,
    patients: u32,
}

impl Ratio {
    /// Ratio used for codes with no configured or built-in default.
    pub const FALLBACK: Ratio = Ratio {
        staff: 1,
        patients: 4,
    };

    pub fn new(staff: u32, patients: u32) -> Result<Self, ValidationError> {
        if patients == 0 {
            return Err(ValidationError::format(
                "Ratio patient count must be greater than zero",
            ));
        }
        Ok(Ratio { staff, patients })
    }

    pub fn staff(&self) -> u32 {
        self.staff
    }

    pub fn patients(&self) -> u32 {
        self.patients
    }

    /// Staff needed to cover `census` patients: `ceil(census / patients)`.
    pub fn required_staff(&self, census: u32) -> u32 {
        census.div_ceil(self.patients)
    }
}

fn parse_part(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Ratio {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ValidationError::format("Ratio must be in format 'number:number'");

        let (staff, patients) = s.split_once(':').ok_or_else(bad)?;
        let staff = parse_part(staff).ok_or_else(bad)?;
        let patients = parse_part(patients).ok_or_else(bad)?;

        Ratio::new(staff, patients)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.staff, self.patients)
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
