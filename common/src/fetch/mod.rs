pub mod apple_music;
pub mod musicbrainz;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::CatalogFetchError;
use apple_music::CatalogResponse;
use entity::CatalogCoordinates;
use musicbrainz::{ExternalRelease, ReleaseSummary};

/// Lookups against the metadata registry. Both calls are single attempts and
/// report any failure as `None`.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn search_by_identifier(&self, barcode: &str) -> Option<ReleaseSummary>;
    async fn fetch_release_detail(&self, id: &Uuid) -> Option<ExternalRelease>;
}

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn fetch(
        &self,
        entry: &CatalogCoordinates,
        token: &str,
    ) -> Result<CatalogResponse, CatalogFetchError>;
}

pub(crate) fn decode<T: DeserializeOwned>(
    text: &str,
) -> Result<T, serde_path_to_error::Error<serde_json::Error>> {
    serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_str(text))
}

pub(crate) fn client(timeout: Option<std::time::Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
