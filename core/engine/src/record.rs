//! FILENAME: core/engine/src/record.rs
//! Dataset model - immutable spending records and their derived domain sets.
//!
//! A `Record` is one row of the source table after normalization: the date
//! column has been coerced to a month-granularity label ("2024-03") and the
//! value column to a number, with unparsable cells degrading to `None`
//! rather than failing the load. The `Dataset` is built once at startup and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

// ============================================================================
// DIMENSIONS
// ============================================================================

/// The four axes a user can filter on.
///
/// Subcategory is deliberately absent: it is groupable (it gets its own
/// chart) but the dashboard exposes no subcategory filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    Date,
    Hospital,
    CostCenter,
    Category,
}

impl FilterDimension {
    /// All filterable dimensions, in the order they appear in the UI.
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::Date,
        FilterDimension::Hospital,
        FilterDimension::CostCenter,
        FilterDimension::Category,
    ];

    /// Display label, matching the source data's column headers.
    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Date => "Data",
            FilterDimension::Hospital => "Hospital",
            FilterDimension::CostCenter => "Centro de Custo",
            FilterDimension::Category => "Categoria",
        }
    }
}

/// The four axes the dashboard groups by (one aggregate table / chart each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupDimension {
    Category,
    Subcategory,
    Hospital,
    CostCenter,
}

impl GroupDimension {
    /// All grouping dimensions, in display order.
    pub const ALL: [GroupDimension; 4] = [
        GroupDimension::Category,
        GroupDimension::Subcategory,
        GroupDimension::Hospital,
        GroupDimension::CostCenter,
    ];

    /// Display label, matching the source data's column headers.
    pub fn label(&self) -> &'static str {
        match self {
            GroupDimension::Category => "Categoria",
            GroupDimension::Subcategory => "Subcategoria",
            GroupDimension::Hospital => "Hospital",
            GroupDimension::CostCenter => "Centro de Custo",
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One normalized row of the spending table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Month-granularity label ("2024-03"); `None` when the source date
    /// could not be parsed. Such records never match a date filter.
    pub date: Option<String>,

    pub hospital: String,

    pub cost_center: String,

    pub category: String,

    pub subcategory: String,

    /// Spent amount; `None` when the source cell was not numeric.
    /// Absent values sum as zero but the record still groups normally.
    pub value: Option<f64>,
}

impl Record {
    /// The record's value along a filterable dimension.
    /// `None` only for an unparsable date.
    pub fn filter_value(&self, dimension: FilterDimension) -> Option<&str> {
        match dimension {
            FilterDimension::Date => self.date.as_deref(),
            FilterDimension::Hospital => Some(&self.hospital),
            FilterDimension::CostCenter => Some(&self.cost_center),
            FilterDimension::Category => Some(&self.category),
        }
    }

    /// The record's value along a grouping dimension.
    /// Grouping keys are the exact strings from the source; no normalization.
    pub fn group_value(&self, dimension: GroupDimension) -> &str {
        match dimension {
            GroupDimension::Category => &self.category,
            GroupDimension::Subcategory => &self.subcategory,
            GroupDimension::Hospital => &self.hospital,
            GroupDimension::CostCenter => &self.cost_center,
        }
    }
}

// ============================================================================
// DOMAIN SETS
// ============================================================================

/// The distinct values observed per filterable dimension, in first-seen
/// order. Used to populate filter option lists, to build the initial filter
/// state, and as the target of "select all cost centers".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainSets {
    pub dates: Vec<String>,
    pub hospitals: Vec<String>,
    pub cost_centers: Vec<String>,
    pub categories: Vec<String>,
}

impl DomainSets {
    fn from_records(records: &[Record]) -> Self {
        let mut domains = DomainSets::default();
        for record in records {
            if let Some(date) = record.date.as_deref() {
                push_unique(&mut domains.dates, date);
            }
            push_unique(&mut domains.hospitals, &record.hospital);
            push_unique(&mut domains.cost_centers, &record.cost_center);
            push_unique(&mut domains.categories, &record.category);
        }
        domains
    }

    /// The option list for one dimension.
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Date => &self.dates,
            FilterDimension::Hospital => &self.hospitals,
            FilterDimension::CostCenter => &self.cost_centers,
            FilterDimension::Category => &self.categories,
        }
    }
}

fn push_unique(values: &mut Vec<String>, candidate: &str) {
    if !values.iter().any(|v| v == candidate) {
        values.push(candidate.to_string());
    }
}

// ============================================================================
// DATASET
// ============================================================================

/// The full spending table, loaded once and read-only for the rest of the
/// session. Domain sets are derived at construction so callers never
/// re-scan the records for option lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
    domains: DomainSets,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let domains = DomainSets::from_records(&records);
        Dataset { records, domains }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn domains(&self) -> &DomainSets {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
