use crate::{
    api::client::DDragonClient,
    models::{Champion, ChampionDetail, DataDocument},
    types::{DDragonError, DDragonResponse},
};

impl DDragonClient {
    /// Every champion of the current version, in the order the CDN lists them.
    pub async fn get_champions(&self) -> DDragonResponse<Vec<Champion>> {
        let version = self.ensure_version().await;
        tracing::trace!("[DDRAGON::CLIENT] get_champions v{}", version);

        let path = self.data_url(&version, "champion.json");
        let document: DataDocument = self.request(path).await?;

        Ok(document.into_records()?)
    }

    /// Full record of a single champion.
    ///
    /// `Ok(None)` means the CDN answered but its document has no entry for `id`.
    pub async fn get_champion_detail(&self, id: &str) -> DDragonResponse<Option<ChampionDetail>> {
        if id.is_empty() {
            return Err(DDragonError::InvalidChampionId);
        }

        let version = self.ensure_version().await;
        tracing::trace!("[DDRAGON::CLIENT] get_champion_detail {} v{}", id, version);

        let file = format!("champion/{}.json", urlencoding::encode(id));
        let path = self.data_url(&version, &file);
        let document: DataDocument = self.request(path).await?;

        Ok(document.take(id)?)
    }
}
