use crate::{
    api::client::DDragonClient,
    types::{DDragonError, DDragonResponse, Version},
};

impl DDragonClient {
    /// Read the versions feed and cache its newest entry.
    ///
    /// Never fails: on any error the failure is logged and the version cached
    /// so far is returned unchanged.
    pub async fn resolve_latest_version(&self) -> Version {
        match self.fetch_latest_version().await {
            Ok(latest) => {
                let previous = self.version();
                if previous != latest {
                    tracing::info!("Using Riot Ddragon assets v{} (was v{})", latest, previous);
                }
                self.set_version(latest.clone());
                latest
            }
            Err(e) => {
                let current = self.version();
                tracing::error!(
                    "[DDRAGON::CLIENT] failed to fetch versions, keeping v{}: {}",
                    current,
                    e
                );
                current
            }
        }
    }

    async fn fetch_latest_version(&self) -> DDragonResponse<Version> {
        tracing::trace!("[DDRAGON::CLIENT] fetch_latest_version");

        let path = format!("{}/api/versions.json", self.base_url());
        let versions: Vec<String> = self.request(path).await?;

        versions
            .into_iter()
            .next()
            .map(Version::from)
            .ok_or(DDragonError::EmptyVersionFeed)
    }
}
