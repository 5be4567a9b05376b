//! Reading a data source that is either a local file or an http(s) URL.

use anyhow::Context;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the whole source as text.
pub async fn read_source(source: &str) -> anyhow::Result<String> {
    if is_url(source) {
        log::info!("Fetching {}", source);
        let body = reqwest::get(source)
            .await
            .with_context(|| format!("request to {} failed", source))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", source))?
            .text()
            .await
            .with_context(|| format!("reading body of {} failed", source))?;
        Ok(body)
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read {}", source))
    }
}
