use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::HashMap,
    fmt,
};

/// One ranked project as returned by the leaderboard API.
///
/// Fields the pipeline does not use are kept in `extra` so a persisted dataset
/// holds exactly what the API sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub leaderboard_type: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections_slugs: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LeaderboardEntry {
    pub fn new(leaderboard_type: impl Into<String>, name: impl Into<String>, slug: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            leaderboard_type: leaderboard_type.into(),
            value,
            previous_period_value: None,
            collections_slugs: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_previous_period_value(mut self, value: f64) -> Self {
        self.previous_period_value = Some(value);
        self
    }

    pub fn with_collections<S: Into<String>>(mut self, slugs: impl IntoIterator<Item = S>) -> Self {
        self.collections_slugs = Some(slugs.into_iter().map(Into::into).collect());
        self
    }
}

/// All entries of a single leaderboard type, in fetch order.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub kind: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// Entries grouped by leaderboard type. Groups appear in the order their type
/// was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboards {
    boards: Vec<Leaderboard>,
}

impl Leaderboards {
    pub fn group(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut boards: Vec<Leaderboard> = Vec::new();

        for entry in entries {
            let position = *index.entry(entry.leaderboard_type.clone()).or_insert_with(|| {
                boards.push(Leaderboard {
                    kind: entry.leaderboard_type.clone(),
                    entries: Vec::new(),
                });
                boards.len() - 1
            });
            boards[position].entries.push(entry);
        }

        Self { boards }
    }

    pub fn get(&self, kind: &str) -> Option<&Leaderboard> {
        self.boards.iter().find(|board| board.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Leaderboard> {
        self.boards.iter()
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.boards.iter().map(|board| board.kind.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.boards.iter().map(|board| board.entries.len()).sum()
    }
}

impl FromIterator<LeaderboardEntry> for Leaderboards {
    fn from_iter<T: IntoIterator<Item = LeaderboardEntry>>(iter: T) -> Self {
        Self::group(iter)
    }
}

/// How much of the listing to fetch. Also decides the file-name suffix of the
/// persisted datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Every entry, in a single page. Without a known total, it is queried first.
    Full { total: Option<u64> },
    /// The first `n` ranks of each leaderboard.
    TopRanked(u32),
}

impl FetchMode {
    pub fn suffix(&self) -> String {
        match self {
            FetchMode::Full { .. } => crate::FULL_SUFFIX.to_string(),
            FetchMode::TopRanked(n) => format!("top_{n}"),
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix())
    }
}
