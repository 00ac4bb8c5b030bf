use crate::{
    api::client::DDragonClient,
    models::{DataDocument, ProfileIcon},
    types::DDragonResponse,
};

impl DDragonClient {
    pub async fn get_profile_icons(&self) -> DDragonResponse<Vec<ProfileIcon>> {
        let version = self.ensure_version().await;
        tracing::trace!("[DDRAGON::CLIENT] get_profile_icons v{}", version);

        let path = self.data_url(&version, "profileicon.json");
        let document: DataDocument = self.request(path).await?;

        Ok(document.into_records()?)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::{
        api::{ClientOptions, DDragonClient},
        types::DDragonError,
    };

    #[tokio::test]
    async fn get_profile_icons_keeps_document_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/versions.json");
                then.status(200).json_body(json!(["16.1.1"]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/cdn/16.1.1/data/en_US/profileicon.json");
                then.status(200).body(
                    r#"{"type":"profileicon","data":{
                        "29":{"id":29,"image":{"full":"29.png"}},
                        "0":{"id":0,"image":{"full":"0.png"}},
                        "7":{"id":7,"image":{"full":"7.png"}}
                    }}"#,
                );
            })
            .await;
        let client = DDragonClient::with_options(ClientOptions {
            base_url: server.base_url(),
            ..Default::default()
        });

        let ids: Vec<u32> = client
            .get_profile_icons()
            .await
            .unwrap()
            .into_iter()
            .map(|icon| icon.id)
            .collect();

        assert_eq!(ids, vec![29, 0, 7]);
    }

    #[tokio::test]
    async fn get_profile_icons_propagates_malformed_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/versions.json");
                then.status(200).json_body(json!(["16.1.1"]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/cdn/16.1.1/data/en_US/profileicon.json");
                then.status(200).json_body(json!({"data": [1, 2, 3]}));
            })
            .await;
        let client = DDragonClient::with_options(ClientOptions {
            base_url: server.base_url(),
            ..Default::default()
        });

        let res = client.get_profile_icons().await;

        assert!(matches!(res, Err(DDragonError::Serde(_))));
    }
}
