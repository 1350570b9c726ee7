use super::{
    count_cell,
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

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceRow {
    pub name: String,
    pub slug: String,
    pub codebase_size: f64,
    pub commits: f64,
    pub maintenance_ratio: f64,
}

/// Commits per line of code. High values point at projects spending their
/// activity on maintenance and refactoring rather than growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthMaintenance {
    #[serde(rename = "growth_maintenance")]
    pub all: Vec<MaintenanceRow>,
    #[serde(rename = "top_maintenance")]
    pub top: Vec<MaintenanceRow>,
}

impl GrowthMaintenance {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let (codebase, commits) = datasets.pair(
            "growth_maintenance",
            LeaderboardKind::CodebaseSize,
            LeaderboardKind::CommitActivity,
        )?;

        let all: Vec<MaintenanceRow> = inner_join(&codebase.entries, &commits.entries)
            .into_iter()
            .map(|(codebase, commits)| MaintenanceRow {
                name: codebase.name.clone(),
                slug: codebase.slug.clone(),
                codebase_size: codebase.value,
                commits: commits.value,
                maintenance_ratio: commits.value / codebase.value,
            })
            .collect();
        debug!(rows = all.len(), "Joined codebase size with commit activity");

        let top = top_n(&all, TOP_N, Rank::Largest, |row| row.maintenance_ratio);
        Some(Self { all, top })
    }
}

impl Insight for GrowthMaintenance {
    fn keys(&self) -> &'static [&'static str] {
        &["growth_maintenance", "top_maintenance"]
    }

    fn format(&self) -> String {
        render(
            "🔧 HIGH MAINTENANCE: COMMITS PER LINE OF CODE",
            &["Project", "Commits", "Codebase Size (LOC)", "Commits/LOC"],
            self.top.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    count_cell(row.commits),
                    count_cell(row.codebase_size),
                    if row.maintenance_ratio.is_finite() && row.maintenance_ratio < 0.01 {
                        Cell::new(format!("{:.5}", row.maintenance_ratio))
                    } else {
                        ratio_cell(row.maintenance_ratio)
                    },
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Growth vs. Maintenance"
    }
}
