//! Reading document JSON from local files or URLs.

use std::path::Path;

use tracing::debug;

/// Whether the location is an `http://` or `https://` URL.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Read the content at a local path or URL.
pub async fn retrieve_content(location: &str) -> anyhow::Result<String> {
    if is_url(location) {
        debug!("Fetching {}", location);
        let response = reqwest::get(location)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| anyhow::anyhow!("Error retrieving data from URL: {}", e))?;
        return Ok(response.text().await?);
    }

    let path = Path::new(location);
    if !path.exists() {
        anyhow::bail!("The file {} was not found", path.display());
    }

    debug!("Reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
