use crate::leaderboard::{
    FetchMode,
    Leaderboards,
};
use eyre::{
    Context as _,
    Result,
};
use std::path::{
    Path,
    PathBuf,
};

/// Suffix of the datasets produced by a full fetch. The report builder only
/// reads files carrying it.
pub const FULL_SUFFIX: &str = "full";

pub fn dataset_file_name(kind: &str, suffix: &str) -> String {
    format!("{kind}_{suffix}.json")
}

/// Writes every leaderboard as a JSON array to `{dir}/{type}_{suffix}.json`,
/// replacing files from earlier runs. Returns the written paths.
pub fn save_leaderboards(dir: &Path, leaderboards: &Leaderboards, mode: FetchMode) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).wrap_err_with(|| format!("Failed to create dataset directory {:?}", dir))?;

    let suffix = mode.suffix();
    let mut written = Vec::with_capacity(leaderboards.len());
    for board in leaderboards.iter() {
        info!("Leaderboard Type: {}, Entries: {}", board.kind, board.entries.len());
        let path = dir.join(dataset_file_name(&board.kind, &suffix));
        let content = serde_json::to_vec(&board.entries)
            .wrap_err_with(|| format!("Failed to serialize leaderboard {}", board.kind))?;
        std::fs::write(&path, content).wrap_err_with(|| format!("Failed to write dataset to {:?}", path))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_type_and_suffix() {
        assert_eq!(dataset_file_name("commit-activity", FULL_SUFFIX), "commit-activity_full.json");
        assert_eq!(dataset_file_name("resolution-rate", "top_100"), "resolution-rate_top_100.json");
    }
}
