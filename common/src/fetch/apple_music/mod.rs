mod structures;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, ORIGIN};
use std::time::Instant;
use url::Url;

use super::{client, decode, Catalog};
use crate::error::CatalogFetchError;
use base::setting;
use entity::CatalogCoordinates;

pub use structures::*;

pub struct AppleMusic {
    client: reqwest::Client,
    base: Url,
    origin: HeaderValue,
}

impl AppleMusic {
    pub fn new(catalog: &setting::Catalog, http: &setting::Http) -> Result<Self, CatalogFetchError> {
        Ok(AppleMusic {
            client: client(http.timeout())?,
            base: catalog.url.clone(),
            origin: catalog.origin.parse()?,
        })
    }

    pub fn url(&self, entry: &CatalogCoordinates) -> Result<Url, CatalogFetchError> {
        Ok(self.base.join(
            format!(
                "catalog/{}/{}/{}",
                entry.country,
                entry.entry_type.collection(),
                entry.id
            )
            .as_str(),
        )?)
    }
}

#[async_trait]
impl Catalog for AppleMusic {
    async fn fetch(
        &self,
        entry: &CatalogCoordinates,
        token: &str,
    ) -> Result<CatalogResponse, CatalogFetchError> {
        let url = self.url(entry)?;
        tracing::info! {%url, "Fetching catalog entry"};
        let authorization: HeaderValue = format!("Bearer {}", token).parse()?;
        let start = Instant::now();
        let res = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .header(ORIGIN, self.origin.clone())
            .send()
            .await?;
        tracing::trace! {elapsed = ?start.elapsed(), status = %res.status(), "Catalog HTTP request"};
        let status = res.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status {
                status,
                body: res.text().await?,
            });
        }
        let text = res.text().await?;
        Ok(decode(text.as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::EntryType;
    use httpmock::prelude::*;
    use serde_json::json;

    fn apple_music(server: &MockServer) -> AppleMusic {
        let catalog = setting::Catalog {
            url: Url::parse(server.url("/v1/").as_str()).unwrap(),
            ..Default::default()
        };
        AppleMusic::new(&catalog, &setting::Http::default()).unwrap()
    }

    fn entry(entry_type: EntryType) -> CatalogCoordinates {
        CatalogCoordinates {
            country: "us".to_string(),
            entry_type,
            id: "1440857781".to_string(),
        }
    }

    #[test]
    fn builds_plural_collection_urls() {
        let client = AppleMusic::new(&setting::Catalog::default(), &setting::Http::default()).unwrap();
        assert_eq!(
            client.url(&entry(EntryType::Album)).unwrap().as_str(),
            "https://amp-api.music.apple.com/v1/catalog/us/albums/1440857781"
        );
        assert_eq!(
            client.url(&entry(EntryType::MusicVideo)).unwrap().as_str(),
            "https://amp-api.music.apple.com/v1/catalog/us/music-videos/1440857781"
        );
    }

    #[tokio::test]
    async fn sends_bearer_token_and_origin() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/catalog/us/albums/1440857781")
                    .header("authorization", "Bearer eyTOKEN")
                    .header("origin", "https://music.apple.com");
                then.status(200).json_body(json!({
                    "data": [{
                        "id": "1440857781",
                        "type": "albums",
                        "attributes": { "name": "An Album", "artistName": "Artist", "upc": "123" },
                        "relationships": { "tracks": { "data": [
                            { "id": "1", "type": "songs", "attributes": {
                                "name": "Song", "artistName": "Artist",
                                "discNumber": 1, "trackNumber": 1,
                                "isrc": "USAAA2000001", "durationInMillis": 200000
                            }}
                        ]}}
                    }]
                }));
            })
            .await;

        let res = apple_music(&server)
            .fetch(&entry(EntryType::Album), "eyTOKEN")
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(res.data.len(), 1);
        assert_eq!(res.data[0].attributes.upc.as_deref(), Some("123"));
        let tracks = res.data[0].relationships.tracks.as_ref().unwrap();
        assert_eq!(tracks.data[0].attributes.duration_in_millis, Some(200000));
    }

    #[tokio::test]
    async fn unauthorized_is_a_fetch_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/catalog/us/albums/1440857781");
                then.status(401).body("");
            })
            .await;
        let res = apple_music(&server)
            .fetch(&entry(EntryType::Album), "expired")
            .await;
        assert!(matches!(res, Err(CatalogFetchError::Status { .. })));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_fetch_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/catalog/us/albums/1440857781");
                then.status(200).body("{\"data\": [{\"attributes\": {}}]}");
            })
            .await;
        let res = apple_music(&server)
            .fetch(&entry(EntryType::Album), "eyTOKEN")
            .await;
        assert!(matches!(res, Err(CatalogFetchError::Decode(_))));
    }
}
