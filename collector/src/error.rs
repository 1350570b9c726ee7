use url::Url;

/// Failures talking to the leaderboard API. All of them abort a collection run.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} returned status {status}")]
    Status { url: Url, status: reqwest::StatusCode },
    #[error("Response from {url} could not be decoded: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &Url {
        match self {
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } | FetchError::Decode { url, .. } => url,
        }
    }
}
