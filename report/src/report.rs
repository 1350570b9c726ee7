use crate::{
    classify::Classifier,
    datasets::Datasets,
    insights::{
        BurnoutRisk,
        BusFactor,
        Churn,
        Efficiency,
        GrowthMaintenance,
        HiddenGems,
        Insight,
        ResponseResolution,
        SegmentedGems,
    },
};
use eyre::{
    Context as _,
    Result,
};
use serde::Serialize;
use std::path::Path;

/// Every insight that could be computed from the datasets on disk.
///
/// Serializes to a single JSON object. Field order fixes key order, and an
/// insight that was skipped contributes no keys at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub efficiency: Option<Efficiency>,
    #[serde(flatten)]
    pub response_resolution: Option<ResponseResolution>,
    #[serde(flatten)]
    pub growth_maintenance: Option<GrowthMaintenance>,
    #[serde(flatten)]
    pub hidden_gems: Option<HiddenGems>,
    #[serde(flatten)]
    pub bus_factor: Option<BusFactor>,
    #[serde(flatten)]
    pub burnout: Option<BurnoutRisk>,
    #[serde(flatten)]
    pub churn: Option<Churn>,
    #[serde(flatten)]
    pub segmentation: Option<SegmentedGems>,
}

impl Report {
    #[instrument(level = "debug", skip_all, fields(datasets = datasets.len()))]
    pub fn build(datasets: &Datasets, classifier: &Classifier) -> Self {
        Self {
            efficiency: Efficiency::compute(datasets),
            response_resolution: ResponseResolution::compute(datasets),
            growth_maintenance: GrowthMaintenance::compute(datasets),
            hidden_gems: HiddenGems::compute(datasets),
            bus_factor: BusFactor::compute(datasets),
            burnout: BurnoutRisk::compute(datasets),
            churn: Churn::compute(datasets),
            segmentation: SegmentedGems::compute(datasets, classifier),
        }
    }

    /// The computed insights, in report order.
    pub fn insights(&self) -> Vec<&dyn Insight> {
        let mut insights: Vec<&dyn Insight> = Vec::new();
        if let Some(ref efficiency) = self.efficiency {
            insights.push(efficiency);
        }
        if let Some(ref response_resolution) = self.response_resolution {
            insights.push(response_resolution);
        }
        if let Some(ref growth_maintenance) = self.growth_maintenance {
            insights.push(growth_maintenance);
        }
        if let Some(ref hidden_gems) = self.hidden_gems {
            insights.push(hidden_gems);
        }
        if let Some(ref bus_factor) = self.bus_factor {
            insights.push(bus_factor);
        }
        if let Some(ref burnout) = self.burnout {
            insights.push(burnout);
        }
        if let Some(ref churn) = self.churn {
            insights.push(churn);
        }
        if let Some(ref segmentation) = self.segmentation {
            insights.push(segmentation);
        }
        insights
    }

    /// Top-level keys of the serialized report.
    pub fn keys(&self) -> Vec<&'static str> {
        self.insights().iter().flat_map(|insight| insight.keys().iter().copied()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.insights().is_empty()
    }

    /// Writes the report as JSON, replacing any previous file at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create report directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).wrap_err("Failed to serialize report")?;
        std::fs::write(path, json).wrap_err_with(|| format!("Failed to write report to {:?}", path))?;

        let keys = self.keys();
        info!("Exported {} datasets to {}", keys.len(), path.display());
        info!("Keys: {:?}", keys);
        Ok(())
    }

    pub fn format(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("\n{}\n", "=".repeat(80)));
        report.push_str(&format!("{:^80}\n", "📈 LFX PROJECT INSIGHTS"));
        report.push_str(&format!("{}\n", "=".repeat(80)));

        let insights = self.insights();
        report.push_str(&format!(
            "\n📊 Summary:\n\
            • Insights: {} of 8 ({})\n\
            • Report keys: {}\n",
            insights.len(),
            insights.iter().map(|insight| insight.name()).collect::<Vec<_>>().join(", "),
            self.keys().len()
        ));

        for insight in &insights {
            report.push_str(&insight.format());
        }

        report.push_str(&format!("\n{}\n", "=".repeat(80)));
        report.push_str(&format!("{:^80}\n", "✅ END OF REPORT"));
        report.push_str(&format!("{}\n", "=".repeat(80)));

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        datasets,
        entries,
        entries_with_previous,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn no_datasets_means_an_empty_object() {
        let report = Report::build(&Datasets::default(), &Classifier::default());

        assert!(report.is_empty());
        assert_eq!(serde_json::to_string(&report).unwrap(), "{}");
    }

    #[test]
    fn keys_follow_insight_order() {
        let datasets = datasets(vec![
            ("active-contributors", entries("active-contributors", &[("a", 60.0)])),
            ("active-organizations", entries("active-organizations", &[("a", 40.0)])),
            ("commit-activity", entries_with_previous("commit-activity", &[("a", 500.0, 900.0)])),
            ("codebase-size", entries_with_previous("codebase-size", &[("a", 10_000.0, 9_000.0)])),
            ("fastest-responders", entries("fastest-responders", &[("a", 2.0)])),
            ("resolution-rate", entries("resolution-rate", &[("a", 0.7)])),
            ("focused-teams", entries("focused-teams", &[("a", 8.0)])),
            ("small-teams-massive-output", entries("small-teams-massive-output", &[("a", 500.0)])),
        ]);

        let report = Report::build(&datasets, &Classifier::default());
        let expected = vec![
            "efficiency",
            "efficiency_all",
            "response_resolution",
            "correlation",
            "growth_maintenance",
            "top_maintenance",
            "hidden_gems",
            "org_diversity_all",
            "bus_factor",
            "burnout_risk",
            "burnout_all",
            "churn_high",
            "churn_all",
            "segmented_gems",
        ];
        assert_eq!(report.keys(), expected);

        let json = serde_json::to_string(&report).unwrap();
        let positions: Vec<usize> = expected
            .iter()
            .map(|key| json.find(&format!("\"{key}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn format_lists_every_present_insight() {
        let datasets = datasets(vec![(
            "small-teams-massive-output",
            entries("small-teams-massive-output", &[("solo", 4_200.0)]),
        )]);

        let formatted = Report::build(&datasets, &Classifier::default()).format();

        assert!(formatted.contains("BUS FACTOR"));
        assert!(formatted.contains("SOLO"));
        assert!(!formatted.contains("EFFICIENCY"));
    }
}
