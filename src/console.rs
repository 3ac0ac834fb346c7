//! The console state container.
//!
//! [`Console`] is the single owner of the staff-type registry and the
//! staffing calculator. Commands validate before they mutate; a successful
//! command regenerates calculator rows when the registry changed, bumps the
//! revision and then calls every subscriber before returning. Rejected
//! commands leave state untouched and notify nobody.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::calculator::StaffingCalculator;
use crate::config::{ConfigError, ConsoleConfig};
use crate::error::ValidationError;
use crate::models::{StaffType, StaffingRow};
use crate::registry::StaffTypeRegistry;
use crate::sorting::{
    sort_by_column, SortDirection, SortState, StaffTypeColumn, StaffingColumn,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RosterChange {
    StaffTypeAdded { staff_type: StaffType },
    StaffTypeUpdated { staff_type: StaffType },
    StaffingRowAdded { row: StaffingRow },
    CensusChanged { row: StaffingRow },
    StaffTypesSorted {
        column: StaffTypeColumn,
        direction: Option<SortDirection>,
    },
    StaffingRowsSorted {
        column: StaffingColumn,
        direction: Option<SortDirection>,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEvent {
    pub revision: u64,
    pub at: DateTime<Utc>,
    pub change: RosterChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&RosterEvent) + Send + 'static>;

pub struct Console {
    registry: StaffTypeRegistry,
    calculator: StaffingCalculator,
    staff_type_view: Vec<i64>,
    staff_type_sort: SortState<StaffTypeColumn>,
    revision: u64,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConfigError> {
        let mut registry = StaffTypeRegistry::new();
        for seed in &config.staff_types {
            registry
                .add(&seed.title, &seed.code)
                .map_err(|source| ConfigError::Seed {
                    title: seed.title.clone(),
                    source,
                })?;
        }

        let mut calculator =
            StaffingCalculator::new(config.ratio_table(), config.census_on_regenerate);
        calculator.regenerate(registry.list());

        info!(
            staff_types = registry.len(),
            policy = ?config.census_on_regenerate,
            "console ready"
        );

        Ok(Console {
            staff_type_view: registry.list().iter().map(|t| t.id).collect(),
            registry,
            calculator,
            staff_type_sort: SortState::unsorted(StaffTypeColumn::Id),
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn registry(&self) -> &StaffTypeRegistry {
        &self.registry
    }

    pub fn calculator(&self) -> &StaffingCalculator {
        &self.calculator
    }

    /// Staff types in display order.
    pub fn staff_types(&self) -> Vec<StaffType> {
        self.staff_type_view
            .iter()
            .filter_map(|id| self.registry.get(*id).cloned())
            .collect()
    }

    /// Calculator rows in display order.
    pub fn staffing_rows(&self) -> Vec<StaffingRow> {
        self.calculator.rows()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&RosterEvent) + Send + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn add_staff_type(&mut self, title: &str, code: &str) -> Result<StaffType, ValidationError> {
        let staff_type = self
            .registry
            .add(title, code)
            .inspect_err(|e| warn!(%e, title, code, "staff type rejected"))?;

        self.staff_type_view.push(staff_type.id);
        self.calculator.regenerate(self.registry.list());
        info!(id = staff_type.id, code = %staff_type.code, "staff type added");

        self.publish(RosterChange::StaffTypeAdded {
            staff_type: staff_type.clone(),
        });
        Ok(staff_type)
    }

    pub fn update_staff_type(
        &mut self,
        id: i64,
        title: &str,
        code: &str,
    ) -> Result<StaffType, ValidationError> {
        let staff_type = self
            .registry
            .update(id, title, code)
            .inspect_err(|e| warn!(%e, id, title, code, "staff type update rejected"))?;

        self.calculator.regenerate(self.registry.list());
        info!(id, code = %staff_type.code, "staff type updated");

        self.publish(RosterChange::StaffTypeUpdated {
            staff_type: staff_type.clone(),
        });
        Ok(staff_type)
    }

    pub fn add_staffing_row(&mut self, title: &str, ratio: &str) -> Result<StaffingRow, ValidationError> {
        let row = self
            .calculator
            .add_row(title, ratio)
            .inspect_err(|e| warn!(%e, title, ratio, "staffing row rejected"))?;

        info!(id = row.id, title = %row.title, ratio = %row.ratio, "manual staffing row added");
        self.publish(RosterChange::StaffingRowAdded { row: row.clone() });
        Ok(row)
    }

    pub fn set_census(&mut self, row_id: i64, raw: &str) -> Result<StaffingRow, ValidationError> {
        let row = self
            .calculator
            .set_census(row_id, raw)
            .inspect_err(|e| warn!(%e, row_id, raw, "census rejected"))?;

        debug!(row_id, census = ?row.census, required = ?row.required_staff, "census set");
        self.publish(RosterChange::CensusChanged { row: row.clone() });
        Ok(row)
    }

    pub fn sort_staff_types(&mut self, column: StaffTypeColumn) -> Option<SortDirection> {
        let direction = self.staff_type_sort.toggle(column);
        match direction {
            Some(direction) => {
                let mut shown = self.staff_types();
                sort_by_column(&mut shown, column, direction);
                self.staff_type_view = shown.iter().map(|t| t.id).collect();
            }
            None => {
                self.staff_type_view = self.registry.list().iter().map(|t| t.id).collect();
            }
        }
        debug!(?column, ?direction, "sorted staff types");

        self.publish(RosterChange::StaffTypesSorted { column, direction });
        direction
    }

    pub fn sort_staffing_rows(&mut self, column: StaffingColumn) -> Option<SortDirection> {
        let direction = self.calculator.sort(column);
        self.publish(RosterChange::StaffingRowsSorted { column, direction });
        direction
    }

    fn publish(&mut self, change: RosterChange) {
        self.revision += 1;
        let event = RosterEvent {
            revision: self.revision,
            at: Utc::now(),
            change,
        };
        for (_, listener) in &self.subscribers {
            listener(&event);
        }
    }
}
