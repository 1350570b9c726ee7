use crate::datasets::Datasets;
use lfx_insights_collector::LeaderboardEntry;

/// Entries of one leaderboard type; project names are the upper-cased slugs.
pub(crate) fn entries(kind: &str, rows: &[(&str, f64)]) -> Vec<LeaderboardEntry> {
    rows.iter()
        .map(|(slug, value)| LeaderboardEntry::new(kind, slug.to_uppercase(), *slug, *value))
        .collect()
}

/// Like [`entries`], with a previous-period value per row.
pub(crate) fn entries_with_previous(kind: &str, rows: &[(&str, f64, f64)]) -> Vec<LeaderboardEntry> {
    rows.iter()
        .map(|(slug, value, previous)| {
            LeaderboardEntry::new(kind, slug.to_uppercase(), *slug, *value).with_previous_period_value(*previous)
        })
        .collect()
}

pub(crate) fn datasets(sets: Vec<(&str, Vec<LeaderboardEntry>)>) -> Datasets {
    sets.into_iter().collect()
}
