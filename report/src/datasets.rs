use eyre::{
    Context as _,
    Result,
};
use lfx_insights_collector::{
    Leaderboard,
    LeaderboardEntry,
    FULL_SUFFIX,
};
use std::{
    collections::BTreeMap,
    path::Path,
};
use strum::{
    AsRefStr,
    Display,
    EnumString,
};

/// A loaded `{type}_full.json` file.
pub type Dataset = Leaderboard;

/// The leaderboard types the insights are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum LeaderboardKind {
    ActiveContributors,
    ActiveOrganizations,
    CommitActivity,
    CodebaseSize,
    FastestResponders,
    ResolutionRate,
    FocusedTeams,
    SmallTeamsMassiveOutput,
}

/// Every dataset found on disk, keyed by leaderboard type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    sets: BTreeMap<String, Dataset>,
}

impl Datasets {
    pub fn get(&self, kind: LeaderboardKind) -> Option<&Dataset> {
        self.sets.get(kind.as_ref())
    }

    pub fn contains(&self, kind: LeaderboardKind) -> bool {
        self.sets.contains_key(kind.as_ref())
    }

    /// Both datasets an insight joins, or `None` (logged) when either is missing.
    pub fn pair(&self, insight: &str, left: LeaderboardKind, right: LeaderboardKind) -> Option<(&Dataset, &Dataset)> {
        match (self.get(left), self.get(right)) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => {
                let missing: Vec<LeaderboardKind> =
                    [left, right].into_iter().filter(|kind| !self.contains(*kind)).collect();
                warn!(insight, ?missing, "Required datasets not found, skipping");
                None
            }
        }
    }

    /// The single dataset an insight reads, or `None` (logged) when it is missing.
    pub fn single(&self, insight: &str, kind: LeaderboardKind) -> Option<&Dataset> {
        let dataset = self.get(kind);
        if dataset.is_none() {
            warn!(insight, missing = kind.as_ref(), "Required dataset not found, skipping");
        }
        dataset
    }

    pub fn insert(&mut self, kind: impl Into<String>, entries: Vec<LeaderboardEntry>) {
        let kind = kind.into();
        self.sets.insert(kind.clone(), Dataset { kind, entries });
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<LeaderboardEntry>)> for Datasets {
    fn from_iter<T: IntoIterator<Item = (K, Vec<LeaderboardEntry>)>>(iter: T) -> Self {
        let mut datasets = Datasets::default();
        for (kind, entries) in iter {
            datasets.insert(kind, entries);
        }
        datasets
    }
}

/// Loads every `*_full.json` file in `dir`. A missing directory yields no
/// datasets; an unreadable or malformed file is an error.
#[instrument(level = "debug")]
pub fn load_datasets(dir: &Path) -> Result<Datasets> {
    let mut datasets = Datasets::default();
    if !dir.exists() {
        warn!("Dataset directory {:?} does not exist", dir);
        return Ok(datasets);
    }

    let marker = format!("_{FULL_SUFFIX}.json");
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).wrap_err_with(|| format!("Failed to read dataset directory {:?}", dir))? {
        let entry = entry.wrap_err_with(|| format!("Failed to read dataset directory {:?}", dir))?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Some(kind) = file_name.strip_suffix(&marker) {
            files.push((kind.to_string(), entry.path()));
        }
    }
    files.sort();

    for (kind, path) in files {
        let content = std::fs::read(&path).wrap_err_with(|| format!("Failed to read dataset {:?}", path))?;
        let entries: Vec<LeaderboardEntry> =
            serde_json::from_slice(&content).wrap_err_with(|| format!("Failed to parse dataset {:?}", path))?;
        info!("Loaded {} with {} records", kind, entries.len());
        datasets.insert(kind, entries);
    }

    Ok(datasets)
}
