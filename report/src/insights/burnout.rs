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
use comfy_table::{
    Cell,
    Color,
};
use serde::Serialize;

pub const TOP_N: usize = 15;

/// Momentum below this counts as slowing down.
pub const DECLINE_THRESHOLD: f64 = -0.1;

/// Minimum commit volume for a decline to be worth flagging.
pub const MIN_COMMITS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnoutRow {
    pub name: String,
    pub slug: String,
    pub productivity_score: f64,
    pub commits: f64,
    pub prev_commits: Option<f64>,
    pub momentum: f64,
}

/// Relative change of the commit count against the previous period.
///
/// Without a positive previous value there is no baseline and the momentum is `0`.
pub fn momentum(commits: f64, prev_commits: Option<f64>) -> f64 {
    match prev_commits {
        Some(prev) if prev > 0.0 => (commits - prev) / prev,
        _ => 0.0,
    }
}

/// Highly productive teams whose commit activity is dropping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnoutRisk {
    #[serde(rename = "burnout_risk")]
    pub declining: Vec<BurnoutRow>,
    #[serde(rename = "burnout_all")]
    pub all: Vec<BurnoutRow>,
}

impl BurnoutRisk {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let (focused, commits) = datasets.pair(
            "burnout_risk",
            LeaderboardKind::FocusedTeams,
            LeaderboardKind::CommitActivity,
        )?;

        let all: Vec<BurnoutRow> = inner_join(&focused.entries, &commits.entries)
            .into_iter()
            .map(|(focused, commits)| BurnoutRow {
                name: focused.name.clone(),
                slug: focused.slug.clone(),
                productivity_score: focused.value,
                commits: commits.value,
                prev_commits: commits.previous_period_value,
                momentum: momentum(commits.value, commits.previous_period_value),
            })
            .collect();

        let declining: Vec<BurnoutRow> = all
            .iter()
            .filter(|row| row.momentum < DECLINE_THRESHOLD && row.commits > MIN_COMMITS)
            .cloned()
            .collect();
        debug!(joined = all.len(), declining = declining.len(), "Computed commit momentum");

        Some(Self {
            declining: top_n(&declining, TOP_N, Rank::Smallest, |row| row.momentum),
            all,
        })
    }
}

impl Insight for BurnoutRisk {
    fn keys(&self) -> &'static [&'static str] {
        &["burnout_risk", "burnout_all"]
    }

    fn format(&self) -> String {
        render(
            "🔥 BURNOUT RISK: PRODUCTIVE TEAMS LOSING MOMENTUM",
            &["Project", "Productivity", "Commits", "Previous", "Momentum"],
            self.declining.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    ratio_cell(row.productivity_score),
                    count_cell(row.commits),
                    Cell::new(row.prev_commits.map(format_count).unwrap_or_else(|| "n/a".to_string())),
                    Cell::new(format!("{:.1}%", row.momentum * 100.0)).fg(Color::Red),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Burnout Risk"
    }
}
