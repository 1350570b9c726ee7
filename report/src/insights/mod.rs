//! # Insights
//!
//! Each insight joins one or two leaderboard datasets on `slug`, derives a
//! ratio, filters and ranks the rows. An insight whose datasets are missing is
//! not computed at all and contributes nothing to the report.
//!
//! | insight | datasets | derived value |
//! |---|---|---|
//! | `Efficiency` | active-contributors, commit-activity | commits per contributor |
//! | `ResponseResolution` | fastest-responders, resolution-rate | correlation of response time and resolution rate |
//! | `GrowthMaintenance` | codebase-size, commit-activity | commits per line of code |
//! | `HiddenGems` | active-organizations, active-contributors | organizations per contributor |
//! | `BusFactor` | small-teams-massive-output | commit volume of small teams |
//! | `BurnoutRisk` | focused-teams, commit-activity | commit momentum against the previous period |
//! | `Churn` | codebase-size, commit-activity | commits per changed line |
//! | `SegmentedGems` | active-organizations, active-contributors | diversity ratio plus library/app label |

pub mod burnout;
pub mod bus_factor;
pub mod churn;
pub mod diversity;
pub mod efficiency;
pub mod maintenance;
pub mod response;
pub mod segmentation;

pub use burnout::{
    BurnoutRisk,
    BurnoutRow,
};
pub use bus_factor::{
    BusFactor,
    BusFactorRow,
};
pub use churn::{
    Churn,
    ChurnRow,
};
pub use diversity::{
    DiversityRow,
    HiddenGems,
};
pub use efficiency::{
    Efficiency,
    EfficiencyRow,
};
pub use maintenance::{
    GrowthMaintenance,
    MaintenanceRow,
};
pub use response::{
    ResponseResolution,
    ResponseRow,
};
pub use segmentation::{
    SegmentedGems,
    SegmentedRow,
};

use comfy_table::{
    presets,
    Attribute,
    Cell,
    Color,
    ContentArrangement,
    Table,
};

/// A computed insight that can be shown in the terminal.
pub trait Insight {
    /// Report keys this insight fills, in serialization order.
    fn keys(&self) -> &'static [&'static str];

    /// Terminal rendering of the top rows.
    fn format(&self) -> String;

    fn name(&self) -> &'static str;
}

/// Rows shown per insight in the terminal. The JSON report is not truncated to this.
pub(crate) const DISPLAY_ROWS: usize = 10;

pub(crate) fn render(title: &str, header: &[&str], rows: impl IntoIterator<Item = Vec<Cell>>) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            header
                .iter()
                .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

    let mut empty = true;
    for row in rows {
        table.add_row(row);
        empty = false;
    }

    if empty {
        table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new("No projects matched").add_attribute(Attribute::Bold)]);
    }

    format!("\n{title}\n{table}\n")
}

pub(crate) fn name_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}

pub(crate) fn count_cell(value: f64) -> Cell {
    Cell::new(format_count(value))
}

pub(crate) fn ratio_cell(value: f64) -> Cell {
    Cell::new(format_ratio(value)).fg(Color::Cyan)
}

pub(crate) fn format_ratio(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Format numbers in human readable format
pub(crate) fn format_count(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_handle_undefined_values() {
        assert_eq!(format_ratio(5.0), "5.00");
        assert_eq!(format_ratio(f64::NAN), "n/a");
        assert_eq!(format_ratio(f64::INFINITY), "∞");
    }

    #[test]
    fn counts_are_abbreviated() {
        assert_eq!(format_count(950.0), "950");
        assert_eq!(format_count(12_500.0), "12.5K");
        assert_eq!(format_count(3_200_000.0), "3.2M");
    }

    #[test]
    fn empty_tables_say_so() {
        let rendered = render("TITLE", &["Project"], Vec::<Vec<Cell>>::new());
        assert!(rendered.contains("TITLE"));
        assert!(rendered.contains("No projects matched"));
    }
}
