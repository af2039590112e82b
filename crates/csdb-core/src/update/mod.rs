//! Remote dataset update check and download.
//!
//! The hosted dataset publishes a content hash alongside the raw JSON; an
//! update check is a single GET of the version document plus a string
//! comparison against the hash recorded at the last download. Both
//! operations are blocking and run only on explicit user action.

mod fetch;
mod version;

pub use version::{parse_version, VersionInfo};

use thiserror::Error;
use url::Url;

use crate::dataset::{DatasetStore, LoadOutcome, StoreError};

/// Upstream location of the hosted sensor dataset (raw JSON).
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/EmberLightVFX/Camera-Sensor-Database/refs/heads/main/data/sensors.json";

/// Version metadata document for the hosted dataset.
pub const DEFAULT_VERSION_URL: &str =
    "https://api.github.com/repos/EmberLightVFX/Camera-Sensor-Database/contents/data/sensors.json";

#[derive(Debug, Error)]
pub enum UpdateError {
    /// The host has network access switched off. Nothing was attempted.
    #[error("network access is disabled")]
    NetworkDisabled,
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("GET {url} failed: {source}")]
    Transport { url: String, source: curl::Error },
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// The version document did not parse or carried no usable hash.
    #[error("version metadata: {0}")]
    MalformedMetadata(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The pair of remote endpoints a dataset is synced from.
#[derive(Debug, Clone)]
pub struct UpdateSource {
    pub dataset_url: Url,
    pub version_url: Url,
}

impl UpdateSource {
    pub fn new(dataset_url: &str, version_url: &str) -> Result<Self, UpdateError> {
        let parse = |url: &str| {
            Url::parse(url).map_err(|source| UpdateError::InvalidUrl {
                url: url.to_string(),
                source,
            })
        };
        Ok(Self {
            dataset_url: parse(dataset_url)?,
            version_url: parse(version_url)?,
        })
    }
}

/// Result of an update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    pub remote_sha: String,
    pub update_available: bool,
}

/// Result of a completed download.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    /// Hash of the dataset version just downloaded, for the host to store.
    pub remote_sha: String,
    pub bytes_written: usize,
    /// What the freshly written file parsed as.
    pub outcome: LoadOutcome,
}

/// Fetch the remote version document and compare its hash against the one
/// stored at the last download. `stored_sha` is `None` when nothing has been
/// downloaded yet.
pub fn check_for_update(
    source: &UpdateSource,
    stored_sha: Option<&str>,
    online: bool,
) -> Result<UpdateCheck, UpdateError> {
    if !online {
        return Err(UpdateError::NetworkDisabled);
    }
    let info = version::fetch_version(&source.version_url)?;
    let update_available = stored_sha != Some(info.sha.as_str());
    tracing::info!(
        remote_sha = %info.sha,
        update_available,
        "checked for dataset update"
    );
    Ok(UpdateCheck {
        remote_sha: info.sha,
        update_available,
    })
}

/// Download the dataset and replace the persisted file.
///
/// The dataset body and the fresh content hash are both fetched before the
/// file is touched, so any failure leaves the persisted file byte-for-byte
/// unchanged and the stored hash in step with it. The downloaded bytes are
/// written verbatim; a body that does not parse still replaces the file and
/// is reported through the outcome.
pub fn download(
    source: &UpdateSource,
    store: &mut DatasetStore,
    online: bool,
) -> Result<DownloadReport, UpdateError> {
    if !online {
        return Err(UpdateError::NetworkDisabled);
    }
    tracing::info!(url = %source.dataset_url, "downloading sensor dataset");
    let bytes = fetch::fetch(&source.dataset_url)?;
    let info = version::fetch_version(&source.version_url)?;
    let outcome = store.replace(&bytes)?;
    Ok(DownloadReport {
        remote_sha: info.sha,
        bytes_written: bytes.len(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_source_rejects_bad_urls() {
        assert!(matches!(
            UpdateSource::new("not a url", DEFAULT_VERSION_URL),
            Err(UpdateError::InvalidUrl { .. })
        ));
        assert!(UpdateSource::new(DEFAULT_DATASET_URL, DEFAULT_VERSION_URL).is_ok());
    }

    #[test]
    fn offline_check_refuses_before_any_request() {
        // The port is unroutable; an attempted connection would fail loudly
        // with Transport, not NetworkDisabled.
        let source = UpdateSource::new("http://127.0.0.1:1/a", "http://127.0.0.1:1/b").unwrap();
        assert!(matches!(
            check_for_update(&source, None, false),
            Err(UpdateError::NetworkDisabled)
        ));
    }
}
