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
use serde::Serialize;

pub const TOP_N: usize = 20;

/// Projects at or below this many contributors are too small for the ratio to mean much.
pub const MIN_CONTRIBUTORS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityRow {
    pub name: String,
    pub slug: String,
    pub active_organizations: f64,
    pub active_contributors: f64,
    pub org_diversity_ratio: f64,
}

/// Projects backed by many organizations relative to their contributor count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenGems {
    #[serde(rename = "hidden_gems")]
    pub top: Vec<DiversityRow>,
    /// Every joined row that passed the contributor filter.
    #[serde(rename = "org_diversity_all")]
    pub all: Vec<DiversityRow>,
}

impl HiddenGems {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let (organizations, contributors) = datasets.pair(
            "hidden_gems",
            LeaderboardKind::ActiveOrganizations,
            LeaderboardKind::ActiveContributors,
        )?;

        let all: Vec<DiversityRow> = inner_join(&organizations.entries, &contributors.entries)
            .into_iter()
            .map(|(organizations, contributors)| DiversityRow {
                name: organizations.name.clone(),
                slug: organizations.slug.clone(),
                active_organizations: organizations.value,
                active_contributors: contributors.value,
                org_diversity_ratio: organizations.value / contributors.value,
            })
            .filter(|row| row.active_contributors > MIN_CONTRIBUTORS)
            .collect();
        debug!(rows = all.len(), "Projects above the contributor threshold");

        let top = top_n(&all, TOP_N, Rank::Largest, |row| row.org_diversity_ratio);
        Some(Self { top, all })
    }
}

impl Insight for HiddenGems {
    fn keys(&self) -> &'static [&'static str] {
        &["hidden_gems", "org_diversity_all"]
    }

    fn format(&self) -> String {
        render(
            "💎 HIDDEN GEMS: ORGANIZATIONAL DIVERSITY",
            &["Project", "Organizations", "Contributors", "Orgs/Contributor"],
            self.top.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    count_cell(row.active_organizations),
                    count_cell(row.active_contributors),
                    ratio_cell(row.org_diversity_ratio),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Hidden Gems"
    }
}
