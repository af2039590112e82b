//! Remote version metadata: the content hash published for the dataset.

use serde::Deserialize;
use url::Url;

use super::{fetch, UpdateError};

/// The single field consumed from the version document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
struct VersionDoc {
    #[serde(default)]
    sha: Option<String>,
}

/// Parse a version document. Fields other than `sha` are ignored; a missing
/// or empty hash is malformed metadata, not "up to date".
pub fn parse_version(bytes: &[u8]) -> Result<VersionInfo, UpdateError> {
    let doc: VersionDoc = serde_json::from_slice(bytes)
        .map_err(|e| UpdateError::MalformedMetadata(e.to_string()))?;
    match doc.sha {
        Some(sha) if !sha.is_empty() => Ok(VersionInfo { sha }),
        _ => Err(UpdateError::MalformedMetadata(
            "missing sha field".to_string(),
        )),
    }
}

pub(crate) fn fetch_version(url: &Url) -> Result<VersionInfo, UpdateError> {
    let bytes = fetch::fetch(url)?;
    parse_version(&bytes)
}
