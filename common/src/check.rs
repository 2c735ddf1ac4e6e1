use serde_derive::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::fetch::musicbrainz::{ExternalRelease, ReleaseSummary};
use crate::fetch::{Catalog, Registry};
use crate::links::{LinkBuilder, ToolLinks};
use crate::normalize::normalize;
use crate::page::PageContext;
use crate::reconcile::reconcile;
use crate::token::TokenProvider;
use entity::{Album, CatalogCoordinates, Indicators};

/// Everything one run found out about a catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub entry: CatalogCoordinates,
    /// Every album on the page; checks and links use the first one.
    pub albums: Vec<Album>,
    pub summary: Option<ReleaseSummary>,
    pub release: Option<ExternalRelease>,
    pub indicators: Option<Indicators>,
    pub links: ToolLinks,
    pub release_link: Option<String>,
}

impl CheckReport {
    pub fn album(&self) -> &Album {
        // never built without at least one album
        &self.albums[0]
    }
}

/// Catalog side of a run: page, token, catalog lookup, normalization.
///
/// `Ok(None)` means the page is not one a check applies to, or the catalog
/// returned no album.
pub async fn fetch_albums(
    page: &dyn PageContext,
    tokens: &dyn TokenProvider,
    catalog: &dyn Catalog,
) -> Result<Option<(CatalogCoordinates, Vec<Album>)>, CheckError> {
    let entry = match page.resolve_entry() {
        Some(entry) => entry,
        None => {
            tracing::info!("Not an album or music video page, nothing to check");
            return Ok(None);
        }
    };
    let token = tokens.bearer_token().await?;
    let response = catalog.fetch(&entry, token.as_str()).await?;
    let albums = normalize(&response);
    tracing::debug! {count = albums.len(), "Normalized catalog albums"};
    if albums.is_empty() {
        return Ok(None);
    }
    Ok(Some((entry, albums)))
}

/// Resolves the registry release for a barcode. The detail fetch only runs
/// after a search hit; any failure leaves the release unresolved.
pub async fn lookup_release(
    registry: &dyn Registry,
    barcode: Option<&str>,
) -> (Option<ReleaseSummary>, Option<ExternalRelease>) {
    let barcode = match barcode {
        Some(barcode) => barcode,
        None => return (None, None),
    };
    let summary = match registry.search_by_identifier(barcode).await {
        Some(summary) => summary,
        None => {
            tracing::info! {%barcode, "Release not found on MusicBrainz"};
            return (None, None);
        }
    };
    let release = registry.fetch_release_detail(&summary.id).await;
    (Some(summary), release)
}

pub async fn check(
    page: &dyn PageContext,
    tokens: &dyn TokenProvider,
    catalog: &dyn Catalog,
    registry: &dyn Registry,
    links: &LinkBuilder,
) -> Result<Option<CheckReport>, CheckError> {
    let (entry, albums) = match fetch_albums(page, tokens, catalog).await? {
        Some(found) => found,
        None => return Ok(None),
    };
    let album = &albums[0];
    let (summary, release) = lookup_release(registry, album.barcode()).await;
    let indicators = reconcile(album, release.as_ref());
    let tool_links = links.tool_links(album, None);
    let release_link = summary.as_ref().map(|s| links.registry_release(&s.id));
    Ok(Some(CheckReport {
        entry,
        summary,
        release,
        indicators,
        links: tool_links,
        release_link,
        albums,
    }))
}
