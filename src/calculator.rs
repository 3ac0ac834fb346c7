//! Staffing calculator: one row per registered staff type, each carrying a
//! ratio, an operator-entered census and the staff count derived from them.
//!
//! Rows are rebuilt as a whole whenever the registry changes. Required staff
//! is never stored on its own; every census or ratio change recomputes it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{RowSource, StaffCode, StaffType, StaffingRow};
use crate::ratio::Ratio;
use crate::sorting::{sort_by_column, SortDirection, SortState, StaffingColumn};

/// What happens to entered census values when rows are regenerated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CensusPolicy {
    /// Keep census per staff-type id; required staff is recomputed.
    #[default]
    Carry,
    /// Start every regeneration with empty census values.
    Reset,
}

/// Code → ratio lookup used when generating rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioTable {
    overrides: HashMap<String, Ratio>,
    fallback: Ratio,
}

impl Default for RatioTable {
    fn default() -> Self {
        RatioTable {
            overrides: HashMap::new(),
            fallback: Ratio::FALLBACK,
        }
    }
}

impl RatioTable {
    pub fn new(overrides: HashMap<String, Ratio>, fallback: Ratio) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(code, ratio)| (code.trim().to_ascii_uppercase(), ratio))
            .collect();
        RatioTable { overrides, fallback }
    }

    pub fn resolve(&self, code: &str) -> Ratio {
        let code = code.to_ascii_uppercase();
        self.overrides
            .get(&code)
            .copied()
            .or_else(|| StaffCode::parse(&code).default_ratio())
            .unwrap_or(self.fallback)
    }
}

/// Parse an operator census entry. Blank clears the census.
pub fn parse_census(raw: &str) -> Result<Option<u32>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::number(
            "Census must be a whole number of 0 or more",
        ));
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::number("Census is too large"))
}

#[derive(Debug, Clone)]
pub struct StaffingCalculator {
    ratios: RatioTable,
    policy: CensusPolicy,
    /// Natural order: registry rows first, then manual rows as added.
    rows: Vec<StaffingRow>,
    /// Row ids in display order.
    view: Vec<i64>,
    sort: SortState<StaffingColumn>,
}

impl StaffingCalculator {
    pub fn new(ratios: RatioTable, policy: CensusPolicy) -> Self {
        StaffingCalculator {
            ratios,
            policy,
            rows: Vec::new(),
            view: Vec::new(),
            sort: SortState::unsorted(StaffingColumn::Id),
        }
    }

    pub fn policy(&self) -> CensusPolicy {
        self.policy
    }

    pub fn sort_state(&self) -> SortState<StaffingColumn> {
        self.sort
    }

    /// Rows in display order.
    pub fn rows(&self) -> Vec<StaffingRow> {
        self.view.iter().filter_map(|id| self.row(*id).cloned()).collect()
    }

    pub fn row(&self, id: i64) -> Option<&StaffingRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Rebuild the full row set from `types`. Manual rows are dropped and the
    /// sort resets to natural order.
    pub fn regenerate(&mut self, types: &[StaffType]) {
        let previous: HashMap<i64, u32> = match self.policy {
            CensusPolicy::Carry => self
                .rows
                .iter()
                .filter_map(|r| Some((r.staff_type_id?, r.census?)))
                .collect(),
            CensusPolicy::Reset => HashMap::new(),
        };

        self.rows = types
            .iter()
            .map(|t| {
                let mut row = StaffingRow {
                    id: t.id,
                    staff_type_id: Some(t.id),
                    title: t.code.clone(),
                    ratio: self.ratios.resolve(&t.code),
                    census: None,
                    required_staff: None,
                    source: RowSource::Registry,
                    badge: StaffCode::parse(&t.code).badge(),
                };
                row.set_census(previous.get(&t.id).copied());
                row
            })
            .collect();
        self.view = self.rows.iter().map(|r| r.id).collect();
        self.sort = SortState::unsorted(StaffingColumn::Id);

        debug!(
            rows = self.rows.len(),
            carried = previous.len(),
            "regenerated staffing rows"
        );
    }

    pub fn set_census(&mut self, row_id: i64, raw: &str) -> Result<StaffingRow, ValidationError> {
        let census = parse_census(raw)?;
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == row_id)
            .ok_or(ValidationError::NotFound(row_id))?;

        row.set_census(census);
        Ok(row.clone())
    }

    /// Add a calculator-local row that the registry does not know about.
    pub fn add_row(&mut self, title: &str, ratio: &str) -> Result<StaffingRow, ValidationError> {
        let title = title.trim();
        let ratio = ratio.trim();

        if title.is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if ratio.is_empty() {
            return Err(ValidationError::MissingField("Ratio"));
        }
        let ratio: Ratio = ratio.parse()?;

        let lower = title.to_lowercase();
        if self.rows.iter().any(|r| r.title.to_lowercase() == lower) {
            return Err(ValidationError::duplicate("This staff type already exists"));
        }

        let id = self.rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let row = StaffingRow {
            id,
            staff_type_id: None,
            title: title.to_string(),
            ratio,
            census: None,
            required_staff: None,
            source: RowSource::Manual,
            badge: StaffCode::parse(title).badge(),
        };
        self.rows.push(row.clone());
        self.view.push(id);

        Ok(row)
    }

    pub fn sort(&mut self, column: StaffingColumn) -> Option<SortDirection> {
        let direction = self.sort.toggle(column);
        match direction {
            Some(direction) => {
                let mut shown = self.rows();
                sort_by_column(&mut shown, column, direction);
                self.view = shown.iter().map(|r| r.id).collect();
            }
            None => self.view = self.rows.iter().map(|r| r.id).collect(),
        }
        debug!(?column, ?direction, "sorted staffing rows");
        direction
    }
}
