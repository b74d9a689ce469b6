//! FILENAME: core/engine/src/view.rs
//! View Projection - renderable output for the dashboard frontend.
//!
//! This module turns an `AggregateResult` into chart-ready series and the
//! textual breakdowns shown next to the charts. The concrete drawing of
//! bars and colors belongs to the charting surface; we only supply labels,
//! values, pre-formatted percent labels and a palette identifier.
//!
//! When the filtered subset is empty, every text output carries the same
//! sentinel message and every series is empty. The frontend renders that
//! message instead of a zero-height chart.

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateResult, AggregateTable};
use crate::number_format::{format_amount, format_percent};
use crate::record::GroupDimension;

/// Shown for every output when no record passes the filters.
pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado para os filtros selecionados.";

// ============================================================================
// CHART SERIES
// ============================================================================

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Percentage formatted to two decimals with a trailing "%", rendered
    /// outside/above the bar.
    pub percent_label: String,
}

/// A bar chart for one grouping dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    /// Axis hint for the value axis.
    pub value_axis_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn from_table(dimension: GroupDimension, table: &AggregateTable) -> Self {
        ChartSeries {
            title: chart_title(dimension),
            value_axis_label: "Valor (R$)".to_string(),
            points: table
                .entries()
                .iter()
                .map(|group| ChartPoint {
                    label: group.label.clone(),
                    value: group.sum,
                    percent_label: format_percent(group.percentage),
                })
                .collect(),
        }
    }

    fn empty(dimension: GroupDimension) -> Self {
        ChartSeries {
            title: chart_title(dimension),
            value_axis_label: "Valor (R$)".to_string(),
            points: Vec::new(),
        }
    }
}

fn chart_title(dimension: GroupDimension) -> String {
    format!("Gastos por {}", dimension.label())
}

// ============================================================================
// PALETTE
// ============================================================================

/// Which qualitative color palette the charts should use.
/// The concrete color values are the charting surface's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Default,
    ColorblindSafe,
}

impl Palette {
    pub fn from_alternate_mode(alternate_color_mode: bool) -> Self {
        if alternate_color_mode {
            Palette::ColorblindSafe
        } else {
            Palette::Default
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Palette::Default => "default",
            Palette::ColorblindSafe => "colorblind-safe",
        }
    }
}

// ============================================================================
// DASHBOARD VIEW
// ============================================================================

/// Everything the frontend needs to redraw after a filter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub category_chart: ChartSeries,
    pub subcategory_chart: ChartSeries,
    pub hospital_chart: ChartSeries,
    pub cost_center_chart: ChartSeries,

    /// One line per group: "{label}: R$ {sum} ({percent}%)".
    pub category_summary: Vec<String>,
    pub subcategory_summary: Vec<String>,
    pub hospital_summary: Vec<String>,

    /// "Valor Total: R$ {total}", or the no-data message.
    pub total_label: String,

    pub palette: Palette,

    /// Label for the color-mode button: names the mode a press switches to.
    pub mode_button_label: String,
}

impl DashboardView {
    /// True when this view is the uniform no-data rendering.
    pub fn is_no_data(&self) -> bool {
        self.total_label == NO_DATA_MESSAGE
    }
}

/// Projects an aggregate result into the renderable dashboard view.
pub fn project(result: &AggregateResult, alternate_color_mode: bool) -> DashboardView {
    let palette = Palette::from_alternate_mode(alternate_color_mode);
    let mode_button_label = if alternate_color_mode {
        "Modo Normal"
    } else {
        "Modo Daltonismo"
    }
    .to_string();

    if result.is_empty() {
        return DashboardView {
            category_chart: ChartSeries::empty(GroupDimension::Category),
            subcategory_chart: ChartSeries::empty(GroupDimension::Subcategory),
            hospital_chart: ChartSeries::empty(GroupDimension::Hospital),
            cost_center_chart: ChartSeries::empty(GroupDimension::CostCenter),
            category_summary: vec![NO_DATA_MESSAGE.to_string()],
            subcategory_summary: vec![NO_DATA_MESSAGE.to_string()],
            hospital_summary: vec![NO_DATA_MESSAGE.to_string()],
            total_label: NO_DATA_MESSAGE.to_string(),
            palette,
            mode_button_label,
        };
    }

    DashboardView {
        category_chart: ChartSeries::from_table(GroupDimension::Category, &result.category),
        subcategory_chart: ChartSeries::from_table(
            GroupDimension::Subcategory,
            &result.subcategory,
        ),
        hospital_chart: ChartSeries::from_table(GroupDimension::Hospital, &result.hospital),
        cost_center_chart: ChartSeries::from_table(
            GroupDimension::CostCenter,
            &result.cost_center,
        ),
        category_summary: summary_lines(&result.category),
        subcategory_summary: summary_lines(&result.subcategory),
        hospital_summary: summary_lines(&result.hospital),
        total_label: format!("Valor Total: R$ {}", format_amount(result.filtered_total)),
        palette,
        mode_button_label,
    }
}

/// One breakdown line per group: "{label}: R$ {sum} ({percent}%)".
pub fn summary_lines(table: &AggregateTable) -> Vec<String> {
    table
        .entries()
        .iter()
        .map(|group| {
            format!(
                "{}: R$ {} ({})",
                group.label,
                format_amount(group.sum),
                format_percent(group.percentage)
            )
        })
        .collect()
}
