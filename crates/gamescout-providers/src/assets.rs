use anyhow::{bail, Context, Result};

/// Fetch a candidate's display asset. Purely cosmetic: callers log failures
/// and move on; a missing image never invalidates a retrieval or generation
/// result that has already been produced.
pub async fn fetch_asset(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = http
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch asset {url}"))?;
    if !response.status().is_success() {
        bail!("asset fetch for {url} returned {}", response.status());
    }
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("failed to read asset body from {url}"))?;
    Ok(bytes.to_vec())
}
