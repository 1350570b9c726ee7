use super::{
    count_cell,
    name_cell,
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
        top_n,
        Rank,
    },
};
use comfy_table::Cell;
use serde::Serialize;

pub const TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusFactorRow {
    pub name: String,
    pub slug: String,
    pub commits: f64,
    #[serde(rename = "collectionsSlugs")]
    pub collections_slugs: Option<Vec<String>>,
}

/// Small teams carrying a large commit volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusFactor {
    #[serde(rename = "bus_factor")]
    pub rows: Vec<BusFactorRow>,
}

impl BusFactor {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let small_teams = datasets.single("bus_factor", LeaderboardKind::SmallTeamsMassiveOutput)?;

        let all: Vec<BusFactorRow> = small_teams
            .entries
            .iter()
            .map(|entry| BusFactorRow {
                name: entry.name.clone(),
                slug: entry.slug.clone(),
                commits: entry.value,
                collections_slugs: entry.collections_slugs.clone(),
            })
            .collect();

        Some(Self {
            rows: top_n(&all, TOP_N, Rank::Largest, |row| row.commits),
        })
    }
}

impl Insight for BusFactor {
    fn keys(&self) -> &'static [&'static str] {
        &["bus_factor"]
    }

    fn format(&self) -> String {
        render(
            "🚌 BUS FACTOR WATCHLIST: SMALL TEAMS, MASSIVE OUTPUT",
            &["Project", "Commits", "Collections"],
            self.rows.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    count_cell(row.commits),
                    Cell::new(row.collections_slugs.as_deref().unwrap_or_default().join(", ")),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Bus Factor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfx_insights_collector::LeaderboardEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_collections_and_ranks_by_commits() {
        let datasets: Datasets = vec![(
            "small-teams-massive-output",
            vec![
                LeaderboardEntry::new("small-teams-massive-output", "Quiet", "quiet", 800.0),
                LeaderboardEntry::new("small-teams-massive-output", "Busy", "busy", 9_000.0)
                    .with_collections(["linux-kernel", "embedded"]),
            ],
        )]
        .into_iter()
        .collect();

        let bus_factor = BusFactor::compute(&datasets).unwrap();

        assert_eq!(bus_factor.rows[0].slug, "busy");
        assert_eq!(
            bus_factor.rows[0].collections_slugs,
            Some(vec!["linux-kernel".to_string(), "embedded".to_string()])
        );

        let json = serde_json::to_value(&bus_factor).unwrap();
        assert_eq!(json["bus_factor"][0]["collectionsSlugs"][1], "embedded");
        assert_eq!(json["bus_factor"][1]["collectionsSlugs"], serde_json::Value::Null);
    }

    #[test]
    fn caps_at_twenty_rows() {
        let datasets: Datasets = vec![(
            "small-teams-massive-output",
            (0..25)
                .map(|i| LeaderboardEntry::new("small-teams-massive-output", format!("P{i}"), format!("p{i}"), i as f64))
                .collect::<Vec<_>>(),
        )]
        .into_iter()
        .collect();

        let bus_factor = BusFactor::compute(&datasets).unwrap();
        assert_eq!(bus_factor.rows.len(), TOP_N);
        assert_eq!(bus_factor.rows[0].slug, "p24");
    }
}
