//! FILENAME: core/engine/src/lib.rs
//! Apura Reporting Engine
//!
//! The calculation core of the hospital spending dashboard. This crate is
//! pure: it owns the dataset model, the filter state, and the functions that
//! turn both into renderable output. It performs no I/O; loading source
//! files and producing export documents live in the `loader` and `report`
//! crates.
//!
//! Layers:
//! - `record`: Immutable dataset model (records, domain sets, dimensions)
//! - `filter`: Per-session filter selections and the special actions
//! - `aggregate`: Grouped sums and percentages over the filtered subset
//! - `view`: Chart-ready series and summary strings for the frontend
//! - `number_format`: Display formatting (currency, percentages)

pub mod record;
pub mod filter;
pub mod aggregate;
pub mod view;
pub mod number_format;

pub use record::{Dataset, DomainSets, FilterDimension, GroupDimension, Record};
pub use filter::{alternate_color_mode, FilterState};
pub use aggregate::{aggregate, AggregateResult, AggregateTable, GroupTotal};
pub use view::{project, ChartPoint, ChartSeries, DashboardView, Palette, NO_DATA_MESSAGE};
pub use number_format::{format_amount, format_percent};
