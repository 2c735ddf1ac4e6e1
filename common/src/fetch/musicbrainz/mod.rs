mod structures;

use async_trait::async_trait;
use governor::{clock::*, middleware::*, state::*, Quota, RateLimiter};
use nonzero_ext::*;
use reqwest::header::{HeaderValue, USER_AGENT};
use std::num::NonZeroU32;
use std::time::Instant;
use url::Url;
use uuid::Uuid;

use super::{client, decode, Registry};
use crate::error::RegistryError;
use base::setting;

pub use structures::*;

static INCLUDES: &[&str] = &["recordings", "isrcs", "labels", "artist-credits"];

pub struct MusicBrainz {
    client: reqwest::Client,
    base: Url,
    user_agent: HeaderValue,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>,
}

impl MusicBrainz {
    pub fn new(registry: &setting::Registry, http: &setting::Http) -> Result<Self, RegistryError> {
        let per_second = NonZeroU32::new(registry.calls_per_second).unwrap_or(nonzero!(1u32));
        Ok(MusicBrainz {
            client: client(http.timeout())?,
            base: registry.url.clone(),
            user_agent: registry.user_agent.parse()?,
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
        })
    }

    async fn send(&self, url: Url) -> Result<String, RegistryError> {
        self.limiter.until_ready().await;
        let start = Instant::now();
        let res = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.clone())
            .send()
            .await?;
        tracing::trace! {elapsed = ?start.elapsed(), status = %res.status(), "MusicBrainz HTTP request"};
        let status = res.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                status,
                body: res.text().await?,
            });
        }
        Ok(res.text().await?)
    }

    /// Searches releases by barcode and keeps the first hit, without scoring.
    pub async fn search(&self, barcode: &str) -> Result<Option<ReleaseSummary>, RegistryError> {
        tracing::info! {%barcode, "Searching MusicBrainz by barcode"};
        let mut url = self.base.join("release/")?;
        url.query_pairs_mut()
            .append_pair("query", format!("barcode:{}", barcode).as_str())
            .append_pair("fmt", "json");
        let text = self.send(url).await?;
        let search: ReleaseSearch = decode(text.as_str())?;
        tracing::debug! {count = search.releases.len(), "MusicBrainz search results"};
        Ok(search.releases.into_iter().next())
    }

    pub async fn release(&self, id: &Uuid) -> Result<ExternalRelease, RegistryError> {
        tracing::info! {%id, "Fetching MusicBrainz release"};
        let mut url = self.base.join(format!("release/{}", id).as_str())?;
        url.query_pairs_mut()
            .append_pair("inc", INCLUDES.join("+").as_str())
            .append_pair("fmt", "json");
        let text = self.send(url).await?;
        Ok(decode(text.as_str())?)
    }
}

#[async_trait]
impl Registry for MusicBrainz {
    async fn search_by_identifier(&self, barcode: &str) -> Option<ReleaseSummary> {
        match self.search(barcode).await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::warn! {%barcode, %error, "MusicBrainz search failed"};
                None
            }
        }
    }

    async fn fetch_release_detail(&self, id: &Uuid) -> Option<ExternalRelease> {
        match self.release(id).await {
            Ok(release) => Some(release),
            Err(error) => {
                tracing::warn! {%id, %error, "MusicBrainz release fetch failed"};
                None
            }
        }
    }
}
