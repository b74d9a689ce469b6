//! FILENAME: tests/test_session.rs
//! End-to-end session behavior: filter changes, the select-all and
//! color-mode actions, and view projection through `DashboardSession`.

mod common;

use std::collections::BTreeSet;

use common::{record, TestHarness};
use engine::{Dataset, FilterDimension, NO_DATA_MESSAGE};

#[test]
fn test_initial_filters_select_first_domain_values() {
    let harness = TestHarness::with_sample_data();
    let filters = harness.session.filters();

    assert_eq!(
        filters.selection(FilterDimension::Date),
        &BTreeSet::from(["2024-01".to_string()])
    );
    assert_eq!(
        filters.selection(FilterDimension::CostCenter),
        &BTreeSet::from(["X".to_string()])
    );
    // Categories start at the first domain value only.
    assert_eq!(
        filters.selection(FilterDimension::Category),
        &BTreeSet::from(["Supplies".to_string()])
    );
}

#[test]
fn test_example_aggregation_through_session() {
    let mut harness = TestHarness::with_sample_data();
    harness.session.set_filter(
        FilterDimension::Category,
        BTreeSet::from(["Supplies".to_string(), "Staff".to_string()]),
    );

    let result = harness.session.aggregates();
    assert_eq!(result.filtered_total, 400.0);

    let supplies = result.category.get("Supplies").unwrap();
    assert_eq!(supplies.sum, 100.0);
    assert_eq!(supplies.percentage, 25.0);
    let staff = result.category.get("Staff").unwrap();
    assert_eq!(staff.sum, 300.0);
    assert_eq!(staff.percentage, 75.0);

    let view = harness.session.view();
    assert_eq!(view.total_label, "Valor Total: R$ 400.00");
    assert!(view
        .category_summary
        .contains(&"Supplies: R$ 100.00 (25.00%)".to_string()));
}

#[test]
fn test_loaded_csv_matches_in_memory_dataset() {
    let mut harness = TestHarness::with_sample_csv();
    harness.session.set_filter(
        FilterDimension::Category,
        BTreeSet::from(["Supplies".to_string(), "Staff".to_string()]),
    );

    let result = harness.session.aggregates();
    assert_eq!(result.filtered_total, 400.0);
    assert_eq!(result.filtered_count, 2);
}

#[test]
fn test_select_all_cost_centers_zero_trigger_is_noop() {
    let mut harness = TestHarness::with_sample_data();
    let before = harness.session.filters().clone();

    // The trigger fires on first render with no clicks recorded yet.
    harness.session.sync_cost_center_select_all();

    assert_eq!(harness.session.filters(), &before);
}

#[test]
fn test_select_all_cost_centers_is_idempotent() {
    let dataset = Dataset::from_records(vec![
        record("2024-01", "A", "X", "Supplies", 100.0),
        record("2024-01", "A", "Y", "Staff", 300.0),
        record("2024-02", "B", "Z", "Supplies", 50.0),
    ]);
    let mut session = app_lib::DashboardSession::new(dataset);

    session.select_all_cost_centers();
    let after_one = session.filters().clone();
    assert_eq!(
        after_one.selection(FilterDimension::CostCenter),
        &BTreeSet::from(["X".to_string(), "Y".to_string(), "Z".to_string()])
    );

    session.select_all_cost_centers();
    assert_eq!(session.filters(), &after_one);
}

#[test]
fn test_select_all_touches_only_cost_centers() {
    let dataset = Dataset::from_records(vec![
        record("2024-01", "A", "X", "Supplies", 100.0),
        record("2024-02", "B", "Y", "Staff", 300.0),
    ]);
    let mut session = app_lib::DashboardSession::new(dataset);
    let dates_before = session.filters().selection(FilterDimension::Date).clone();
    let categories_before = session
        .filters()
        .selection(FilterDimension::Category)
        .clone();

    session.select_all_cost_centers();

    assert_eq!(
        session.filters().selection(FilterDimension::Date),
        &dates_before
    );
    assert_eq!(
        session.filters().selection(FilterDimension::Category),
        &categories_before
    );
}

#[test]
fn test_color_mode_parity() {
    let mut harness = TestHarness::with_sample_data();
    assert!(!harness.session.alternate_color_mode());

    for n in 1..=6u64 {
        let mode = harness.session.toggle_color_mode();
        assert_eq!(mode, n % 2 == 1);
        assert_eq!(harness.session.alternate_color_mode(), n % 2 == 1);
    }
}

#[test]
fn test_palette_follows_color_mode() {
    let mut harness = TestHarness::with_sample_data();
    assert_eq!(harness.session.view().palette.id(), "default");

    harness.session.toggle_color_mode();
    assert_eq!(harness.session.view().palette.id(), "colorblind-safe");

    harness.session.toggle_color_mode();
    assert_eq!(harness.session.view().palette.id(), "default");
}

#[test]
fn test_empty_selection_yields_uniform_sentinel() {
    let mut harness = TestHarness::with_sample_data();
    harness
        .session
        .set_filter(FilterDimension::Category, BTreeSet::new());

    let result = harness.session.aggregates();
    assert!(result.is_empty());
    assert!(result.category.is_empty());
    assert!(result.subcategory.is_empty());
    assert!(result.hospital.is_empty());
    assert!(result.cost_center.is_empty());

    let view = harness.session.view();
    assert!(view.is_no_data());
    assert_eq!(view.total_label, NO_DATA_MESSAGE);
    assert_eq!(view.category_summary, vec![NO_DATA_MESSAGE.to_string()]);
    assert_eq!(view.subcategory_summary, vec![NO_DATA_MESSAGE.to_string()]);
    assert_eq!(view.hospital_summary, vec![NO_DATA_MESSAGE.to_string()]);
}

#[test]
fn test_out_of_domain_selection_is_not_an_error() {
    let mut harness = TestHarness::with_sample_data();
    harness.session.set_filter(
        FilterDimension::Hospital,
        BTreeSet::from(["Hospital Inexistente".to_string()]),
    );

    let view = harness.session.view();
    assert!(view.is_no_data());
}

#[test]
fn test_sessions_are_independent() {
    let mut first = TestHarness::with_sample_data();
    let second = TestHarness::with_sample_data();

    first
        .session
        .set_filter(FilterDimension::Category, BTreeSet::new());
    first.session.toggle_color_mode();

    assert!(first.session.view().is_no_data());
    assert!(!second.session.view().is_no_data());
    assert!(!second.session.alternate_color_mode());
}
