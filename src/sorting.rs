//! Three-state column sorting shared by the console tables.
//!
//! Clicking the same column cycles ascending → descending → unsorted; a
//! different column always starts ascending. Sorting is stable over the
//! order currently on screen, and "unsorted" hands control back to the
//! table's natural order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{StaffType, StaffingRow};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: Option<SortDirection>,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn unsorted(key: K) -> Self {
        SortState {
            key,
            direction: None,
        }
    }

    /// Advance the cycle for `key` and return the new direction.
    pub fn toggle(&mut self, key: K) -> Option<SortDirection> {
        let next = if self.key == key {
            match self.direction {
                None => Some(SortDirection::Asc),
                Some(SortDirection::Asc) => Some(SortDirection::Desc),
                Some(SortDirection::Desc) => None,
            }
        } else {
            Some(SortDirection::Asc)
        };
        self.key = key;
        self.direction = next;
        next
    }
}

/// A table whose rows can be compared column by column.
pub trait Sortable {
    type Column: Copy + PartialEq;

    fn compare(&self, other: &Self, column: Self::Column) -> Ordering;
}

/// Stable sort of `items` by `column`.
pub fn sort_by_column<T: Sortable>(items: &mut [T], column: T::Column, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ord = a.compare(b, column);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StaffTypeColumn {
    Id,
    Title,
    Code,
}

impl Sortable for StaffType {
    type Column = StaffTypeColumn;

    fn compare(&self, other: &Self, column: StaffTypeColumn) -> Ordering {
        match column {
            StaffTypeColumn::Id => self.id.cmp(&other.id),
            StaffTypeColumn::Title => self.title.cmp(&other.title),
            StaffTypeColumn::Code => self.code.cmp(&other.code),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StaffingColumn {
    Id,
    Title,
    Ratio,
    Census,
    RequiredStaff,
}

impl Sortable for StaffingRow {
    type Column = StaffingColumn;

    // Ratio compares on its display text, like the rendered cell.
    fn compare(&self, other: &Self, column: StaffingColumn) -> Ordering {
        match column {
            StaffingColumn::Id => self.id.cmp(&other.id),
            StaffingColumn::Title => self.title.cmp(&other.title),
            StaffingColumn::Ratio => self.ratio.to_string().cmp(&other.ratio.to_string()),
            StaffingColumn::Census => self.census.cmp(&other.census),
            StaffingColumn::RequiredStaff => self.required_staff.cmp(&other.required_staff),
        }
    }
}
