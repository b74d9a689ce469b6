//! FILENAME: app/src/session.rs
//!
//! The interaction controller. One `DashboardSession` per operator: it owns
//! that operator's filter state and the click counters behind the two
//! special actions, and dispatches to the engine and report crates. The
//! dataset itself is loaded once and never mutated.

use std::collections::BTreeSet;
use std::path::Path;

use engine::{
    aggregate, alternate_color_mode, project, AggregateResult, DashboardView, Dataset,
    DomainSets, FilterDimension, FilterState,
};

use crate::{log_debug, log_info};

pub struct DashboardSession {
    dataset: Dataset,
    filters: FilterState,
    select_all_clicks: u64,
    color_toggle_clicks: u64,
}

impl DashboardSession {
    /// Opens a session over a dataset file. Filters start with the first
    /// value of each dimension's domain selected.
    pub fn open(path: &Path) -> Result<Self, loader::LoaderError> {
        let dataset = loader::load_dataset(path)?;
        log_info!(
            "SESSION",
            "Loaded {} records from {}",
            dataset.records().len(),
            path.display()
        );
        Ok(Self::new(dataset))
    }

    pub fn new(dataset: Dataset) -> Self {
        let filters = FilterState::initial(dataset.domains());
        DashboardSession {
            dataset,
            filters,
            select_all_clicks: 0,
            color_toggle_clicks: 0,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn domains(&self) -> &DomainSets {
        self.dataset.domains()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replaces one dimension's selection wholesale.
    pub fn set_filter(&mut self, dimension: FilterDimension, selection: BTreeSet<String>) {
        log_debug!(
            "SESSION",
            "Filter {} set to {} value(s)",
            dimension.label(),
            selection.len()
        );
        self.filters.set_filter(dimension, selection);
    }

    /// Replays the select-all trigger with the current click count. The
    /// trigger fires once when the dashboard first renders, before any
    /// click, and must leave the filters untouched at that point.
    pub fn sync_cost_center_select_all(&mut self) {
        self.filters
            .apply_cost_center_select_all(self.dataset.domains(), self.select_all_clicks);
    }

    /// One click on the "select all cost centers" button.
    pub fn select_all_cost_centers(&mut self) {
        self.select_all_clicks += 1;
        self.sync_cost_center_select_all();
        log_debug!(
            "SESSION",
            "Cost-center select-all applied (click {})",
            self.select_all_clicks
        );
    }

    /// One click on the color-mode button. Returns the resulting mode.
    pub fn toggle_color_mode(&mut self) -> bool {
        self.color_toggle_clicks += 1;
        self.alternate_color_mode()
    }

    /// Whether the colorblind-safe palette is active. Derived from click
    /// parity, never stored.
    pub fn alternate_color_mode(&self) -> bool {
        alternate_color_mode(self.color_toggle_clicks)
    }

    /// Recomputes the aggregates for the current filters.
    pub fn aggregates(&self) -> AggregateResult {
        aggregate(&self.dataset, &self.filters)
    }

    /// Recomputes and projects the full dashboard view.
    pub fn view(&self) -> DashboardView {
        project(&self.aggregates(), self.alternate_color_mode())
    }

    /// Renders the report document for the current filters.
    pub fn export(&self) -> Result<Vec<u8>, report::ReportError> {
        let result = self.aggregates();
        log_info!(
            "SESSION",
            "Exporting report ({} filtered record(s))",
            result.filtered_count
        );
        report::render_document(&result, &self.filters)
    }
}
