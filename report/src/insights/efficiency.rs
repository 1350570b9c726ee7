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

pub const TOP_N: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyRow {
    pub name: String,
    pub slug: String,
    pub active_contributors: f64,
    pub commits: f64,
    pub commits_per_contributor: f64,
}

/// Small teams outperforming large ones: commits per active contributor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Efficiency {
    #[serde(rename = "efficiency")]
    pub top: Vec<EfficiencyRow>,
    #[serde(rename = "efficiency_all")]
    pub all: Vec<EfficiencyRow>,
}

impl Efficiency {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let (contributors, commits) = datasets.pair(
            "efficiency",
            LeaderboardKind::ActiveContributors,
            LeaderboardKind::CommitActivity,
        )?;

        let all: Vec<EfficiencyRow> = inner_join(&contributors.entries, &commits.entries)
            .into_iter()
            .map(|(contributors, commits)| EfficiencyRow {
                name: contributors.name.clone(),
                slug: contributors.slug.clone(),
                active_contributors: contributors.value,
                commits: commits.value,
                commits_per_contributor: commits.value / contributors.value,
            })
            .collect();
        debug!(rows = all.len(), "Joined contributors with commit activity");

        let top = top_n(&all, TOP_N, Rank::Largest, |row| row.commits_per_contributor);
        Some(Self { top, all })
    }
}

impl Insight for Efficiency {
    fn keys(&self) -> &'static [&'static str] {
        &["efficiency", "efficiency_all"]
    }

    fn format(&self) -> String {
        render(
            "⚡ EFFICIENCY: COMMITS PER CONTRIBUTOR",
            &["Project", "Contributors", "Commits", "Commits/Contributor"],
            self.top.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    count_cell(row.active_contributors),
                    count_cell(row.commits),
                    ratio_cell(row.commits_per_contributor),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Efficiency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        datasets,
        entries,
    };
    use pretty_assertions::assert_eq;

    fn efficiency(contributors: &[(&str, f64)], commits: &[(&str, f64)]) -> Option<Efficiency> {
        Efficiency::compute(&datasets(vec![
            ("active-contributors", entries("active-contributors", contributors)),
            ("commit-activity", entries("commit-activity", commits)),
        ]))
    }

    #[test]
    fn single_shared_project_yields_ratio() {
        let efficiency = efficiency(&[("a", 100.0)], &[("a", 500.0)]).unwrap();

        assert_eq!(
            efficiency.all,
            vec![EfficiencyRow {
                name: "A".to_string(),
                slug: "a".to_string(),
                active_contributors: 100.0,
                commits: 500.0,
                commits_per_contributor: 5.0,
            }]
        );
        assert_eq!(efficiency.top, efficiency.all);
    }

    #[test]
    fn zero_contributors_propagate_infinity() {
        let efficiency = efficiency(&[("a", 0.0), ("b", 10.0)], &[("a", 5.0), ("b", 20.0)]).unwrap();

        assert!(efficiency.all[0].commits_per_contributor.is_infinite());
        assert_eq!(efficiency.top[0].slug, "a");
    }

    #[test]
    fn top_list_is_capped_and_sorted() {
        let slugs: Vec<String> = (0..60).map(|i| format!("p{i}")).collect();
        let contributors: Vec<(&str, f64)> = slugs.iter().map(|s| (s.as_str(), 10.0)).collect();
        let commits: Vec<(&str, f64)> = slugs.iter().enumerate().map(|(i, s)| (s.as_str(), i as f64)).collect();

        let efficiency = efficiency(&contributors, &commits).unwrap();

        assert_eq!(efficiency.all.len(), 60);
        assert_eq!(efficiency.top.len(), TOP_N);
        assert_eq!(efficiency.top[0].slug, "p59");
        assert!(efficiency
            .top
            .windows(2)
            .all(|w| w[0].commits_per_contributor >= w[1].commits_per_contributor));
    }

    #[test]
    fn missing_commit_activity_skips_insight() {
        let datasets = datasets(vec![("active-contributors", Vec::new())]);
        assert!(Efficiency::compute(&datasets).is_none());
    }
}
