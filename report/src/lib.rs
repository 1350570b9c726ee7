//! # LFX Insights Report Builder
//!
//! Turns the leaderboard datasets saved by the collector into a single JSON
//! report of derived project-health insights.
//!
//! ## Architecture
//!
//! - **`datasets`**: loads every `{type}_full.json` file into [`Datasets`]
//! - **`join`**: slug joins, stable top-N ranking and correlation
//! - **`classify`**: keyword heuristic labelling libraries and applications
//! - **`insights`**: the eight self-contained insights, each computing its own
//!   rows and formatting them for the terminal
//! - **`report`**: assembles the insights into a [`Report`] and writes it
//!
//! Missing datasets only remove the insights that need them. A malformed
//! dataset file aborts the run before anything is written.
//!
//! ## Usage
//!
//! ```no_run
//! use lfx_insights_report::{generate, Classifier};
//! use std::path::Path;
//!
//! let report = generate(Path::new("datasets"), Path::new("datastory/report_data.json"), &Classifier::default())?;
//! println!("{}", report.format());
//! # Ok::<(), eyre::Report>(())
//! ```

#[macro_use]
extern crate tracing;

pub mod classify;
pub mod datasets;
pub mod insights;
pub mod join;
pub mod report;

#[cfg(test)]
mod test_support;

pub use classify::{
    Classifier,
    ProjectType,
};
pub use datasets::{
    load_datasets,
    Dataset,
    Datasets,
    LeaderboardKind,
};
pub use insights::Insight;
pub use report::Report;

use eyre::Result;
use std::path::Path;

/// Loads the datasets in `dataset_dir`, builds every insight they allow and
/// writes the report to `report_path`.
#[instrument(skip(classifier))]
pub fn generate(dataset_dir: &Path, report_path: &Path, classifier: &Classifier) -> Result<Report> {
    let datasets = load_datasets(dataset_dir)?;
    info!("Loaded {} datasets from {}", datasets.len(), dataset_dir.display());

    let report = Report::build(&datasets, classifier);
    report.write(report_path)?;
    Ok(report)
}
