use super::{
    count_cell,
    format_count,
    name_cell,
    ratio_cell,
    render,
    Insight,
    DISPLAY_ROWS,
};
use crate::{
    datasets::{
        Datasets,
        LeaderboardKind,
    },
    join::{
        inner_join,
        top_n,
        Rank,
    },
};
use comfy_table::Cell;
use serde::Serialize;

pub const TOP_N: usize = 15;

pub const MIN_COMMITS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnRow {
    pub name: String,
    pub slug: String,
    pub current_loc: f64,
    pub prev_loc: Option<f64>,
    pub commits: f64,
    pub net_line_change: Option<f64>,
    pub churn_ratio_proxy: f64,
}

/// Commits per changed line. Falls back to the commit count itself when the
/// net change is zero or unknown, so busy projects that do not grow still rank high.
pub fn churn_ratio(commits: f64, net_line_change: Option<f64>) -> f64 {
    match net_line_change {
        Some(net) if net > 0.0 => commits / net,
        _ => commits,
    }
}

/// Projects doing a lot of work that does not show up as codebase growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Churn {
    #[serde(rename = "churn_high")]
    pub high: Vec<ChurnRow>,
    /// Every joined row above the commit threshold.
    #[serde(rename = "churn_all")]
    pub all: Vec<ChurnRow>,
}

impl Churn {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let (codebase, commits) = datasets.pair(
            "churn",
            LeaderboardKind::CodebaseSize,
            LeaderboardKind::CommitActivity,
        )?;

        let all: Vec<ChurnRow> = inner_join(&codebase.entries, &commits.entries)
            .into_iter()
            .map(|(codebase, commits)| {
                let net_line_change = codebase
                    .previous_period_value
                    .map(|prev_loc| (codebase.value - prev_loc).abs());
                ChurnRow {
                    name: codebase.name.clone(),
                    slug: codebase.slug.clone(),
                    current_loc: codebase.value,
                    prev_loc: codebase.previous_period_value,
                    commits: commits.value,
                    net_line_change,
                    churn_ratio_proxy: churn_ratio(commits.value, net_line_change),
                }
            })
            .filter(|row| row.commits > MIN_COMMITS)
            .collect();
        debug!(rows = all.len(), "Projects above the churn commit threshold");

        let high = top_n(&all, TOP_N, Rank::Largest, |row| row.churn_ratio_proxy);
        Some(Self { high, all })
    }
}

impl Insight for Churn {
    fn keys(&self) -> &'static [&'static str] {
        &["churn_high", "churn_all"]
    }

    fn format(&self) -> String {
        render(
            "🌀 THE CHURN TRAP: COMMITS PER CHANGED LINE",
            &["Project", "Commits", "Net Line Change", "Churn Ratio"],
            self.high.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    count_cell(row.commits),
                    Cell::new(row.net_line_change.map(format_count).unwrap_or_else(|| "n/a".to_string())),
                    ratio_cell(row.churn_ratio_proxy),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Churn"
    }
}
