//! FILENAME: app/src/main.rs
//! Command-line front end for the Apura spending dashboard.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;
use app_lib::{log_error, log_info, logging, DashboardSession};
use clap::Parser;
use engine::FilterDimension;

#[derive(Parser)]
#[command(name = "apura", about = "Hospital spending dashboard", version)]
struct Cli {
    /// Spending dataset (.csv, .xlsx or .xls).
    data_file: PathBuf,

    /// Month selection, e.g. 2024-01. Repeatable.
    #[arg(long = "date")]
    dates: Vec<String>,

    /// Hospital selection. Repeatable.
    #[arg(long = "hospital")]
    hospitals: Vec<String>,

    /// Cost-center selection. Repeatable.
    #[arg(long = "cost-center")]
    cost_centers: Vec<String>,

    /// Category selection. Repeatable.
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Select every cost center, as the dashboard's select-all button does.
    #[arg(long)]
    all_cost_centers: bool,

    /// Use the colorblind-safe palette.
    #[arg(long)]
    colorblind: bool,

    /// Write the report document to this path instead of printing the view.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the view as JSON.
    #[arg(long)]
    json: bool,

    /// Log file path. Defaults to apura.log in the working directory.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_log_file(cli.log_file.as_deref()) {
        eprintln!("[LOG_WARN] {}", e);
    }

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            log_error!("MAIN", "{:#}", e);
            Err(e)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut session = DashboardSession::open(&cli.data_file)
        .with_context(|| format!("failed to load {}", cli.data_file.display()))?;

    apply_selection(&mut session, FilterDimension::Date, &cli.dates);
    apply_selection(&mut session, FilterDimension::Hospital, &cli.hospitals);
    apply_selection(&mut session, FilterDimension::CostCenter, &cli.cost_centers);
    apply_selection(&mut session, FilterDimension::Category, &cli.categories);

    if cli.all_cost_centers {
        session.select_all_cost_centers();
    }
    if cli.colorblind {
        session.toggle_color_mode();
    }

    if let Some(report_path) = &cli.report {
        let bytes = session.export().context("failed to render report")?;
        std::fs::write(report_path, bytes)
            .with_context(|| format!("failed to write {}", report_path.display()))?;
        log_info!("MAIN", "Report written to {}", report_path.display());
        println!("Relatório salvo em {}", report_path.display());
        return Ok(());
    }

    let view = session.view();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", view.total_label);
    println!();
    for (title, lines) in [
        (&view.category_chart.title, &view.category_summary),
        (&view.subcategory_chart.title, &view.subcategory_summary),
        (&view.hospital_chart.title, &view.hospital_summary),
    ] {
        println!("{}", title);
        for line in lines {
            println!("  {}", line);
        }
        println!();
    }
    println!("Paleta: {}", view.palette.id());
    Ok(())
}

/// An empty CLI selection keeps the session's current selection for that
/// dimension.
fn apply_selection(session: &mut DashboardSession, dimension: FilterDimension, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let selection: BTreeSet<String> = values.iter().cloned().collect();
    session.set_filter(dimension, selection);
}
