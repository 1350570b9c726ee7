//! # LFX Leaderboard Collector
//!
//! Fetches the LFX Insights leaderboard listing and persists it as one JSON
//! dataset per leaderboard type.
//!
//! ## Architecture
//!
//! - **`leaderboard`**: the raw `LeaderboardEntry`, its grouping by type and the
//!   `FetchMode` that decides how much is fetched
//! - **`client`**: blocking HTTP client for the paged and rank-limited listings
//! - **`store`**: writes grouped entries to `{type}_{suffix}.json`
//!
//! A run is fetch, group, then save. Grouping finishes before anything is
//! written, so a failed request leaves the dataset directory untouched.
//!
//! ## Usage
//!
//! ```no_run
//! use lfx_insights_collector::{collect, FetchMode, LeaderboardClient};
//! use std::path::Path;
//!
//! let client = LeaderboardClient::new("https://insights.linuxfoundation.org/api/leaderboard".parse()?);
//! collect(&client, FetchMode::Full { total: None }, Path::new("datasets"))?;
//! # Ok::<(), eyre::Report>(())
//! ```

#[macro_use]
extern crate tracing;

pub mod client;
pub mod error;
pub mod leaderboard;
pub mod store;

pub use client::LeaderboardClient;
pub use error::FetchError;
pub use leaderboard::{
    FetchMode,
    Leaderboard,
    LeaderboardEntry,
    Leaderboards,
};
pub use store::{
    dataset_file_name,
    save_leaderboards,
    FULL_SUFFIX,
};

use eyre::Result;
use std::path::{
    Path,
    PathBuf,
};

/// Anything that can produce grouped leaderboard entries.
pub trait LeaderboardSource {
    fn fetch(&self, mode: FetchMode) -> Result<Leaderboards, FetchError>;
}

/// Fetches the listing in the given mode and saves it under `dataset_dir`.
#[instrument(level = "debug", skip(source))]
pub fn collect(source: &impl LeaderboardSource, mode: FetchMode, dataset_dir: &Path) -> Result<Vec<PathBuf>> {
    let leaderboards = source.fetch(mode)?;
    save_leaderboards(dataset_dir, &leaderboards, mode)
}
