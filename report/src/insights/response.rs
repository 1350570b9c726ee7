use super::{
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
        pearson,
    },
};
use comfy_table::Cell;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRow {
    pub name: String,
    pub slug: String,
    pub response_time_hours: f64,
    pub resolution_rate: f64,
}

/// Whether fast first responses go together with high resolution rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseResolution {
    #[serde(rename = "response_resolution")]
    pub rows: Vec<ResponseRow>,
    /// Pearson coefficient; NaN (written as `null`) when undefined.
    pub correlation: f64,
}

impl ResponseResolution {
    pub fn compute(datasets: &Datasets) -> Option<Self> {
        let (responders, resolution) = datasets.pair(
            "response_resolution",
            LeaderboardKind::FastestResponders,
            LeaderboardKind::ResolutionRate,
        )?;

        let rows: Vec<ResponseRow> = inner_join(&responders.entries, &resolution.entries)
            .into_iter()
            .map(|(responders, resolution)| ResponseRow {
                name: responders.name.clone(),
                slug: responders.slug.clone(),
                response_time_hours: responders.value,
                resolution_rate: resolution.value,
            })
            .collect();

        let correlation = pearson(rows.iter().map(|row| (row.response_time_hours, row.resolution_rate)));
        info!(
            "Correlation between Response Time and Resolution Rate: {:.2}",
            correlation
        );

        Some(Self { rows, correlation })
    }
}

impl Insight for ResponseResolution {
    fn keys(&self) -> &'static [&'static str] {
        &["response_resolution", "correlation"]
    }

    fn format(&self) -> String {
        let title = format!(
            "⏱️  RESPONSE TIME VS. RESOLUTION RATE (correlation: {})",
            super::format_ratio(self.correlation)
        );
        render(
            &title,
            &["Project", "Response Time (h)", "Resolution Rate"],
            self.rows.iter().take(DISPLAY_ROWS).map(|row| {
                vec![
                    name_cell(&row.name),
                    Cell::new(super::format_ratio(row.response_time_hours)),
                    ratio_cell(row.resolution_rate),
                ]
            }),
        )
    }

    fn name(&self) -> &'static str {
        "Response vs. Resolution"
    }
}
