//! Slug joins, ranking and correlation shared by the insights.

use lfx_insights_collector::LeaderboardEntry;
use std::{
    cmp::Ordering,
    collections::HashMap,
};

/// Inner join on `slug`. Rows come out in left order, and for a left row with
/// several matches, in right order. Duplicate slugs fan out.
pub fn inner_join<'l, 'r>(
    left: &'l [LeaderboardEntry],
    right: &'r [LeaderboardEntry],
) -> Vec<(&'l LeaderboardEntry, &'r LeaderboardEntry)> {
    let mut by_slug: HashMap<&str, Vec<&'r LeaderboardEntry>> = HashMap::new();
    for entry in right {
        by_slug.entry(entry.slug.as_str()).or_default().push(entry);
    }

    let mut joined = Vec::new();
    for entry in left {
        if let Some(matches) = by_slug.get(entry.slug.as_str()) {
            joined.extend(matches.iter().map(|matched| (entry, *matched)));
        }
    }
    joined
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Largest,
    Smallest,
}

/// The first `n` rows ordered by `key`. Rows whose key is NaN are never ranked;
/// equal keys keep their input order.
pub fn top_n<T: Clone>(rows: &[T], n: usize, rank: Rank, key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut ranked: Vec<&T> = rows.iter().filter(|row| !key(*row).is_nan()).collect();
    ranked.sort_by(|a, b| {
        let ordering = key(*a).partial_cmp(&key(*b)).unwrap_or(Ordering::Equal);
        match rank {
            Rank::Largest => ordering.reverse(),
            Rank::Smallest => ordering,
        }
    });
    ranked.into_iter().take(n).cloned().collect()
}

/// Pearson correlation over the pairs where neither value is NaN. NaN when
/// fewer than two pairs remain or either side has no variance.
pub fn pearson(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let pairs: Vec<(f64, f64)> = pairs
        .into_iter()
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        return f64::NAN;
    }
    covariance / (variance_x.sqrt() * variance_y.sqrt())
}
