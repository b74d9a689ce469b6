//! FILENAME: core/engine/src/filter.rs
//! Filter State - the per-session selections driving the dashboard.
//!
//! Each of the four filterable dimensions holds a set of selected values.
//! An empty set means "match nothing", not "match all". Updates replace a
//! dimension's set wholesale; there are no merge semantics and no subset
//! validation against the domain sets - a stale or foreign value simply
//! never matches any record and the dashboard falls into its no-data path.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{DomainSets, FilterDimension, Record};

/// The current selection for each filterable dimension.
///
/// Owned by exactly one session. The special actions (select-all, color
/// mode) are driven by trigger counts retained in the session controller,
/// which is why `apply_cost_center_select_all` takes the count explicitly:
/// the triggering mechanism fires once on initial render with a count of
/// zero, and that zero-th firing must not change anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub dates: BTreeSet<String>,
    pub hospitals: BTreeSet<String>,
    pub cost_centers: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FilterState {
    /// The default state: the first observed value of each dimension,
    /// matching the dashboard's initial dropdown selections. A dimension
    /// with no observed values starts empty (and matches nothing).
    pub fn initial(domains: &DomainSets) -> Self {
        FilterState {
            dates: first_value(&domains.dates),
            hospitals: first_value(&domains.hospitals),
            cost_centers: first_value(&domains.cost_centers),
            categories: first_value(&domains.categories),
        }
    }

    /// Replaces one dimension's selection wholesale.
    pub fn set_filter(&mut self, dimension: FilterDimension, selection: BTreeSet<String>) {
        *self.selection_mut(dimension) = selection;
    }

    /// The current selection for one dimension.
    pub fn selection(&self, dimension: FilterDimension) -> &BTreeSet<String> {
        match dimension {
            FilterDimension::Date => &self.dates,
            FilterDimension::Hospital => &self.hospitals,
            FilterDimension::CostCenter => &self.cost_centers,
            FilterDimension::Category => &self.categories,
        }
    }

    fn selection_mut(&mut self, dimension: FilterDimension) -> &mut BTreeSet<String> {
        match dimension {
            FilterDimension::Date => &mut self.dates,
            FilterDimension::Hospital => &mut self.hospitals,
            FilterDimension::CostCenter => &mut self.cost_centers,
            FilterDimension::Category => &mut self.categories,
        }
    }

    /// Applies the "select all cost centers" action.
    ///
    /// `trigger_count` is the total number of times the user has pressed
    /// the button. Zero means "never pressed" - the evaluation that runs on
    /// initial render must leave the state untouched. Any positive count
    /// replaces the cost-center selection with the full domain set, which
    /// makes repeated presses idempotent.
    pub fn apply_cost_center_select_all(&mut self, domains: &DomainSets, trigger_count: u64) {
        if trigger_count == 0 {
            return;
        }
        self.cost_centers = domains.cost_centers.iter().cloned().collect();
    }

    /// Whether a record passes all four dimension filters.
    /// A record with an unparsable date fails the date filter outright.
    pub fn matches(&self, record: &Record) -> bool {
        let date_ok = record
            .date
            .as_deref()
            .map_or(false, |d| self.dates.contains(d));

        date_ok
            && self.hospitals.contains(record.hospital.as_str())
            && self.cost_centers.contains(record.cost_center.as_str())
            && self.categories.contains(record.category.as_str())
    }
}

fn first_value(domain: &[String]) -> BTreeSet<String> {
    domain.first().cloned().into_iter().collect()
}

/// Derives the accessibility palette flag from the toggle trigger count.
///
/// The count is the only state retained for this feature: the mode is
/// re-derived from parity on every evaluation, so any number of dashboard
/// recomputations between presses reproduces the same off/on sequence.
pub fn alternate_color_mode(toggle_count: u64) -> bool {
    toggle_count % 2 == 1
}
