//! Remote release-cycle source and cache refresh

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::{FETCH_TIMEOUT_MS, USER_AGENT};
use crate::release::error::SourceError;
use crate::release::table::ReleaseCycleTable;

/// Trait for fetching the release-cycle JSON from somewhere other than the local cache
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseCycleSource: Send + Sync {
    /// Fetches the release-cycle document verbatim
    async fn fetch_release_cycle(&self) -> Result<serde_json::Value, SourceError>;
}

/// Release-cycle source backed by the devguide HTTP endpoint
pub struct HttpReleaseCycleSource {
    client: Client,
    url: String,
}

impl HttpReleaseCycleSource {
    pub fn new(url: String) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl ReleaseCycleSource for HttpReleaseCycleSource {
    async fn fetch_release_cycle(&self) -> Result<serde_json::Value, SourceError> {
        debug!("Fetching release cycle: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "release cycle endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))
    }
}

/// Refresh the release-cycle cache at `path` from `source`.
///
/// The fetched document must load as a [`ReleaseCycleTable`] before anything
/// is written. It is stored pretty-printed with its original key order and a
/// trailing newline. Returns the number of releases written.
pub async fn bump_cache(
    source: &dyn ReleaseCycleSource,
    path: &Path,
) -> Result<usize, SourceError> {
    let document = source.fetch_release_cycle().await?;
    let table = ReleaseCycleTable::from_value(document.clone())?;

    let io_err = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut contents = serde_json::to_string_pretty(&document)
        .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;
    contents.push('\n');
    std::fs::write(path, contents).map_err(io_err)?;

    info!("Wrote {} releases to {:?}", table.len(), path);
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;
    use tempfile::TempDir;

    const BODY: &str = r#"{
        "3.14": {"branch": "3.14", "status": "prerelease", "end_of_life": "2030-10"},
        "3.8": {"branch": "3.8", "status": "end-of-life", "end_of_life": "2024-10-07"}
    }"#;

    #[tokio::test]
    async fn fetch_release_cycle_returns_document() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/release-cycle.json")
            .match_header("user-agent", mockito::Matcher::Regex("^check-eol/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let source =
            HttpReleaseCycleSource::new(format!("{}/api/release-cycle.json", server.url())).unwrap();
        let document = source.fetch_release_cycle().await.unwrap();

        mock.assert_async().await;

        assert_eq!(document["3.8"]["status"], "end-of-life");
        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["3.14", "3.8"]);
    }

    #[tokio::test]
    async fn fetch_release_cycle_rejects_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/release-cycle.json")
            .with_status(503)
            .create_async()
            .await;

        let source =
            HttpReleaseCycleSource::new(format!("{}/api/release-cycle.json", server.url())).unwrap();
        let result = source.fetch_release_cycle().await;

        mock.assert_async().await;

        assert!(matches!(result, Err(SourceError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_release_cycle_handles_network_error() {
        let source =
            HttpReleaseCycleSource::new("http://invalid.localhost.test:99999".to_string()).unwrap();
        let result = source.fetch_release_cycle().await;

        assert!(matches!(result, Err(SourceError::Network(_))));
    }

    #[tokio::test]
    async fn bump_cache_writes_pretty_json_with_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("release-cycle.json");

        let mut source = MockReleaseCycleSource::new();
        source.expect_fetch_release_cycle().times(1).returning(|| {
            Ok(json!({
                "3.9": {"status": "security", "end_of_life": "2025-10", "release_manager": "Łukasz Langa"},
                "3.10": {"status": "security", "end_of_life": "2026-10"}
            }))
        });

        let count = bump_cache(&source, &path).await.unwrap();
        assert_eq!(count, 2);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
        assert!(written.contains("\n  \"3.9\": {\n    \"status\": \"security\""));
        assert!(written.contains("Łukasz Langa"));
        assert!(written.find("\"3.9\"").unwrap() < written.find("\"3.10\"").unwrap());

        let reloaded = ReleaseCycleTable::from_path(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[tokio::test]
    async fn bump_cache_leaves_existing_cache_when_document_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("release-cycle.json");
        std::fs::write(&path, "previous").unwrap();

        let mut source = MockReleaseCycleSource::new();
        source
            .expect_fetch_release_cycle()
            .returning(|| Ok(json!({"3.9": {"status": "retired", "end_of_life": "2025-10"}})));

        let result = bump_cache(&source, &path).await;

        assert!(matches!(result, Err(SourceError::Release(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }
}
