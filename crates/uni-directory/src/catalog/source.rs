use chrono::Utc;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::config::CatalogConfig;

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(PathBuf),
    Http {
        url: Url,
        cache_bust: bool,
        timeout: Duration,
    },
}

impl CatalogLocation {
    /// `http://` and `https://` sources are fetched over the network; anything
    /// else is a local path.
    pub fn parse(source: &str, cache_bust: bool, timeout: Duration) -> Result<Self, FetchError> {
        let trimmed = source.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|source| FetchError::InvalidUrl {
                url: trimmed.to_string(),
                source,
            })?;
            Ok(Self::Http {
                url,
                cache_bust,
                timeout,
            })
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, FetchError> {
        Self::parse(&config.source, config.cache_bust, config.timeout())
    }

    /// Performs the single read of the catalog resource.
    pub(crate) async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        match self {
            Self::File(path) => tokio::fs::read(path).await.map_err(|source| FetchError::Read {
                path: path.clone(),
                source,
            }),
            Self::Http {
                url,
                cache_bust,
                timeout,
            } => {
                let url = if *cache_bust {
                    with_cache_buster(url)
                } else {
                    url.clone()
                };
                let client = reqwest::Client::builder()
                    .timeout(*timeout)
                    .build()
                    .map_err(FetchError::Transport)?;
                let response = client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await
                    .map_err(FetchError::Transport)?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }

                let body = response.bytes().await.map_err(FetchError::Transport)?;
                Ok(body.to_vec())
            }
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http { url, .. } => write!(f, "{url}"),
        }
    }
}

fn with_cache_buster(url: &Url) -> Url {
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair("_", &Utc::now().timestamp_millis().to_string());
    busted
}

/// The catalog body could not be decoded into institutions.
#[derive(Debug, thiserror::Error)]
#[error("malformed catalog body: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Failure while loading the catalog. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid catalog url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
