//! FILENAME: core/engine/src/aggregate.rs
//! Aggregation Engine - grouped sums and percentages over the filtered subset.
//!
//! `aggregate` is a pure function of (dataset, filter state): it derives the
//! filtered subset with one linear scan, then builds one aggregate table per
//! grouping dimension. Everything is recomputed from scratch on every call;
//! there is no incremental update path and none is needed at dashboard
//! scale.
//!
//! Each table carries its own percentage basis: a group's percentage divides
//! by that table's total, not by the grand total, so the four tables each
//! sum to 100% independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::record::{Dataset, GroupDimension, Record};

// ============================================================================
// AGGREGATE TABLE
// ============================================================================

/// One group's summed value and its share of the table total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub label: String,
    pub sum: f64,
    /// Share of this table's total, in percent (0..=100).
    pub percentage: f64,
}

/// Grouped totals for one dimension, in first-seen record order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateTable {
    entries: Vec<GroupTotal>,
}

impl AggregateTable {
    fn build(records: &[&Record], dimension: GroupDimension) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<GroupTotal> = Vec::new();

        for record in records {
            let label = record.group_value(dimension);
            let slot = *index.entry(label.to_string()).or_insert_with(|| {
                entries.push(GroupTotal {
                    label: label.to_string(),
                    sum: 0.0,
                    percentage: 0.0,
                });
                entries.len() - 1
            });
            // Absent values contribute zero but still create the group.
            entries[slot].sum += record.value.unwrap_or(0.0);
        }

        let total: f64 = entries.iter().map(|g| g.sum).sum();
        if total != 0.0 {
            for group in &mut entries {
                group.percentage = group.sum / total * 100.0;
            }
        }

        AggregateTable { entries }
    }

    pub fn entries(&self) -> &[GroupTotal] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<&GroupTotal> {
        self.entries.iter().find(|g| g.label == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all group sums (the table's percentage basis).
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|g| g.sum).sum()
    }
}

// ============================================================================
// AGGREGATE RESULT
// ============================================================================

/// Everything the dashboard derives from one (dataset, filter state) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of `value` across the whole filtered subset. Zero when the
    /// subset is empty; callers must check `is_empty` and render the
    /// no-data state rather than a zero chart.
    pub filtered_total: f64,

    /// Number of records in the filtered subset.
    pub filtered_count: usize,

    pub category: AggregateTable,
    pub subcategory: AggregateTable,
    pub hospital: AggregateTable,
    pub cost_center: AggregateTable,
}

impl AggregateResult {
    /// True when no record passed the filters. All four tables are empty
    /// in that case, regardless of which dimension emptied the subset.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn table(&self, dimension: GroupDimension) -> &AggregateTable {
        match dimension {
            GroupDimension::Category => &self.category,
            GroupDimension::Subcategory => &self.subcategory,
            GroupDimension::Hospital => &self.hospital,
            GroupDimension::CostCenter => &self.cost_center,
        }
    }
}

/// Computes the filtered subset and all four aggregate tables.
pub fn aggregate(dataset: &Dataset, filters: &FilterState) -> AggregateResult {
    let matched: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|record| filters.matches(record))
        .collect();

    let filtered_total = matched.iter().filter_map(|record| record.value).sum();

    AggregateResult {
        filtered_total,
        filtered_count: matched.len(),
        category: AggregateTable::build(&matched, GroupDimension::Category),
        subcategory: AggregateTable::build(&matched, GroupDimension::Subcategory),
        hospital: AggregateTable::build(&matched, GroupDimension::Hospital),
        cost_center: AggregateTable::build(&matched, GroupDimension::CostCenter),
    }
}
