use serde::{Deserialize, Serialize};

use crate::ratio::Ratio;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaffType {
    pub id: i64,
    pub title: String,
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStaffType {
    pub title: String,
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStaffType {
    pub id: i64,
    pub title: String,
    pub code: String,
}

/// Where a calculator row came from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RowSource {
    /// Generated from a registered staff type.
    Registry,
    /// Added directly in the calculator; not backed by the registry.
    Manual,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRow {
    pub id: i64,
    /// Set for registry rows, `None` for manual rows.
    pub staff_type_id: Option<i64>,
    pub title: String,
    pub ratio: Ratio,
    pub census: Option<u32>,
    pub required_staff: Option<u32>,
    pub source: RowSource,
    pub badge: Badge,
}

impl StaffingRow {
    pub fn set_census(&mut self, census: Option<u32>) {
        self.census = census;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.required_staff = self.census.map(|c| self.ratio.required_staff(c));
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStaffingRow {
    pub title: String,
    pub ratio: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCensus {
    pub row_id: i64,
    pub value: String,
}

/// Staff-type codes the console knows defaults for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StaffCode {
    Rn,
    Lpn,
    Cna,
    Uc,
    Ma,
    Other(String),
}

impl StaffCode {
    pub fn parse(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "RN" => StaffCode::Rn,
            "LPN" => StaffCode::Lpn,
            "CNA" => StaffCode::Cna,
            "UC" => StaffCode::Uc,
            "MA" => StaffCode::Ma,
            other => StaffCode::Other(other.to_string()),
        }
    }

    /// Built-in ratio for the code, `None` when the fallback applies.
    pub fn default_ratio(&self) -> Option<Ratio> {
        let (staff, patients) = match self {
            StaffCode::Rn => (1, 1),
            StaffCode::Lpn => (1, 2),
            StaffCode::Cna => (1, 3),
            StaffCode::Uc => (1, 50),
            StaffCode::Ma => (1, 4),
            StaffCode::Other(_) => return None,
        };
        Ratio::new(staff, patients).ok()
    }

    pub fn badge(&self) -> Badge {
        match self {
            StaffCode::Rn => Badge::Blue,
            StaffCode::Lpn => Badge::Green,
            StaffCode::Cna => Badge::Purple,
            StaffCode::Uc => Badge::Orange,
            StaffCode::Ma => Badge::Yellow,
            StaffCode::Other(_) => Badge::Gray,
        }
    }
}

/// Display color for a staff-code badge.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
    Gray,
}

impl Badge {
    pub fn classes(&self) -> &'static str {
        match self {
            Badge::Blue => "bg-blue-100 text-blue-800",
            Badge::Green => "bg-green-100 text-green-800",
            Badge::Purple => "bg-purple-100 text-purple-800",
            Badge::Orange => "bg-orange-100 text-orange-800",
            Badge::Yellow => "bg-yellow-100 text-yellow-800",
            Badge::Gray => "bg-gray-100 text-gray-800",
        }
    }
}
