use crate::{
    error::FetchError,
    leaderboard::{
        FetchMode,
        LeaderboardEntry,
        Leaderboards,
    },
    LeaderboardSource,
};
use reqwest::blocking::Client as HttpClient;
use serde::{
    de::{
        DeserializeOwned,
        Error as _,
    },
    Deserialize,
};
use url::Url;

/// Blocking client for the leaderboard listing endpoint.
pub struct LeaderboardClient {
    http_client: HttpClient,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct TotalResponse {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    data: Vec<LeaderboardEntry>,
}

impl LeaderboardClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_http_client(HttpClient::new(), base_url)
    }

    pub fn with_http_client(http_client: HttpClient, base_url: Url) -> Self {
        Self { http_client, base_url }
    }

    /// `{base}?page=0&pageSize={page_size}`
    pub fn paged_url(&self, page_size: u64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", "0")
            .append_pair("pageSize", &page_size.to_string());
        url
    }

    /// `{base}?maxRank={max_rank}`
    pub fn ranked_url(&self, max_rank: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("maxRank", &max_rank.to_string());
        url
    }

    /// Number of entries the API can return in total.
    pub fn total_entries(&self) -> Result<u64, FetchError> {
        let response: TotalResponse = self.get_json(self.paged_url(1))?;
        info!("Total entries available: {}", response.total);
        Ok(response.total)
    }

    /// Fetches every entry in one page sized to `total`, or to the total the API
    /// reports when none is given.
    pub fn fetch_full(&self, total: Option<u64>) -> Result<(Leaderboards, FetchMode), FetchError> {
        let total = match total {
            Some(total) => total,
            None => self.total_entries()?,
        };
        let entries = self.get_listing(self.paged_url(total))?;
        info!("Found total entries: {}", entries.len());

        Ok((Leaderboards::group(entries), FetchMode::Full { total: Some(total) }))
    }

    /// Fetches the top `n` ranks of every leaderboard.
    pub fn fetch_top_ranked(&self, n: u32) -> Result<(Leaderboards, FetchMode), FetchError> {
        let entries = self.get_listing(self.ranked_url(n))?;
        info!("Found total entries: {}", entries.len());

        let leaderboards = Leaderboards::group(entries);
        info!(
            "Found leaderboard types: {:?} ({})",
            leaderboards.kinds(),
            leaderboards.len()
        );
        Ok((leaderboards, FetchMode::TopRanked(n)))
    }

    /// Listing entries; every one of them must name its leaderboard type.
    fn get_listing(&self, url: Url) -> Result<Vec<LeaderboardEntry>, FetchError> {
        let response: ListingResponse = self.get_json(url.clone())?;
        if let Some(untyped) = response.data.iter().find(|entry| entry.leaderboard_type.is_empty()) {
            return Err(FetchError::Decode {
                url,
                source: serde_json::Error::custom(format!("entry {:?} has no leaderboardType", untyped.slug)),
            });
        }
        Ok(response.data)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = match self.http_client.get(url.clone()).send() {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

impl LeaderboardSource for LeaderboardClient {
    fn fetch(&self, mode: FetchMode) -> Result<Leaderboards, FetchError> {
        let (leaderboards, _) = match mode {
            FetchMode::Full { total } => self.fetch_full(total)?,
            FetchMode::TopRanked(n) => self.fetch_top_ranked(n)?,
        };
        Ok(leaderboards)
    }
}
