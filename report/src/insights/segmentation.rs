use super::{
    count_cell,
    name_cell,
    ratio_cell,
    render,
    Insight,
    DISPLAY_ROWS,
};
use crate::{
    classify::{
        Classifier,
        ProjectType,
    },
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

pub const TOP_N: usize = 30;

pub const MIN_DIVERSITY_RATIO: f64 = 0.5;

pub const MIN_ORGANIZATIONS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentedRow {
    pub name: String,
    pub slug: String,
    pub active_organizations: f64,
    /// Collection tags joined with `", "`.
    #[serde(rename = "collectionsSlugs")]
    pub collections_slugs: String,
    pub active_contributors: f64,
    pub org_diversity_ratio: f64,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
}

/// Diverse projects split into libraries and end-user applications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentedGems {
    #[serde(rename = "segmented_gems")]
    pub rows: Vec<SegmentedRow>,
}

impl SegmentedGems {
    pub fn compute(datasets: &Datasets, classifier: &Classifier) -> Option<Self> {
        let (organizations, contributors) = datasets.pair(
            "segmented_gems",
            LeaderboardKind::ActiveOrganizations,
            LeaderboardKind::ActiveContributors,
        )?;

        let gems: Vec<SegmentedRow> = inner_join(&organizations.entries, &contributors.entries)
            .into_iter()
            .map(|(organizations, contributors)| {
                let collections = organizations.collections_slugs.as_deref();
                SegmentedRow {
                    name: organizations.name.clone(),
                    slug: organizations.slug.clone(),
                    active_organizations: organizations.value,
                    collections_slugs: collections.map(|slugs| slugs.join(", ")).unwrap_or_default(),
                    active_contributors: contributors.value,
                    org_diversity_ratio: organizations.value / contributors.value,
                    project_type: classifier.classify(&organizations.name, collections),
                }
            })
            .filter(|row| row.org_diversity_ratio > MIN_DIVERSITY_RATIO && row.active_organizations > MIN_ORGANIZATIONS)
            .collect();
        debug!(rows = gems.len(), "Classified diverse projects");

        Some(Self {
            rows: top_n(&gems, TOP_N, Rank::Largest, |row| row.org_diversity_ratio),
        })
    }
}

impl Insight for SegmentedGems {
    fn keys(&self) -> &'static [&'static str] {
        &["segmented_gems"]
    }

    fn format(&self) -> String {
        render(
            "🧩 LIBRARIES VS. APPS: DIVERSE PROJECTS BY TYPE",
            &["Project", "Type", "Organizations", "Contributors", "Orgs/Contributor"],
            self.rows.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    Cell::new(row.project_type),
                    count_cell(row.active_organizations),
                    count_cell(row.active_contributors),
                    ratio_cell(row.org_diversity_ratio),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Segmentation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfx_insights_collector::LeaderboardEntry;
    use pretty_assertions::assert_eq;

    fn organizations(rows: Vec<LeaderboardEntry>) -> Datasets {
        let contributors: Vec<LeaderboardEntry> = rows
            .iter()
            .map(|entry| LeaderboardEntry::new("active-contributors", entry.name.clone(), entry.slug.clone(), 10.0))
            .collect();
        vec![("active-organizations", rows), ("active-contributors", contributors)]
            .into_iter()
            .collect()
    }

    #[test]
    fn labels_and_joins_collections() {
        let datasets = organizations(vec![
            LeaderboardEntry::new("active-organizations", "Acme SDK", "acme", 9.0).with_collections(["cloud", "tooling"]),
            LeaderboardEntry::new("active-organizations", "Orbit", "orbit", 8.0)
                .with_collections(["mobile-apps"]),
            LeaderboardEntry::new("active-organizations", "Nimbus", "nimbus", 7.0),
        ]);

        let gems = SegmentedGems::compute(&datasets, &Classifier::default()).unwrap();

        assert_eq!(
            gems.rows
                .iter()
                .map(|row| (row.slug.as_str(), row.collections_slugs.as_str(), row.project_type))
                .collect::<Vec<_>>(),
            vec![
                ("acme", "cloud, tooling", ProjectType::LibraryTool),
                ("orbit", "mobile-apps", ProjectType::EndUserApp),
                ("nimbus", "", ProjectType::Unclassified),
            ]
        );

        let json = serde_json::to_value(&gems).unwrap();
        assert_eq!(json["segmented_gems"][0]["type"], "Library/Tool");
        assert_eq!(json["segmented_gems"][2]["collectionsSlugs"], "");
    }

    #[test]
    fn requires_diversity_and_enough_organizations() {
        let datasets = organizations(vec![
            // ratio 0.5 is not above the threshold
            LeaderboardEntry::new("active-organizations", "Half", "half", 5.0),
            LeaderboardEntry::new("active-organizations", "Many", "many", 6.0),
        ]);

        let gems = SegmentedGems::compute(&datasets, &Classifier::default()).unwrap();

        assert_eq!(gems.rows.len(), 1);
        assert_eq!(gems.rows[0].slug, "many");
    }

    #[test]
    fn custom_keywords_change_labels() {
        let datasets = organizations(vec![LeaderboardEntry::new("active-organizations", "Widget", "widget", 9.0)]);
        let classifier = Classifier::new(["widget"], ["gadget"]);

        let gems = SegmentedGems::compute(&datasets, &classifier).unwrap();
        assert_eq!(gems.rows[0].project_type, ProjectType::LibraryTool);
    }
}
