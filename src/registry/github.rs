//! GitHub release metadata client.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// One published release: tag plus downloadable assets, in API listing order.
///
/// A read-only snapshot; fetched once per run and discarded after rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

/// One downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
    /// `<algorithm>:<hex>` content checksum; null on assets the API has not
    /// digested.
    #[serde(default)]
    pub digest: Option<String>,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API error: {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Fetch the most recently published release for `owner/repo`.
///
/// One GET against the `releases/latest` endpoint, which already excludes
/// drafts and prereleases. Any transport failure or non-2xx status is
/// terminal for the run; there are no retries.
pub async fn fetch_latest_release(
    client: &Client,
    api_base: &str,
    owner: &str,
    repo: &str,
) -> Result<GithubRelease, FetchError> {
    let url = format!(
        "{}/repos/{owner}/{repo}/releases/latest",
        api_base.trim_end_matches('/')
    );

    let resp = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(FetchError::Status {
            status: resp.status(),
            url,
        });
    }

    Ok(resp.json().await?)
}
