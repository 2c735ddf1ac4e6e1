use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSearch {
    pub created: Option<String>,
    pub count: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub releases: Vec<ReleaseSummary>,
}

/// A search hit. Only the id is needed to fetch the full document.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub id: Uuid,
    pub title: Option<String>,
    pub score: Option<u32>,
    pub barcode: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRelease {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "artist-credit")]
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    pub date: Option<String>,
    #[serde(rename = "label-info")]
    #[serde(default)]
    pub label_info: Vec<LabelInfo>,
    pub barcode: Option<String>,
    #[serde(default)]
    pub media: Vec<Medium>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCredit {
    pub name: String,
    pub joinphrase: Option<String>,
    pub artist: Option<Artist>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "sort-name")]
    pub sort_name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelInfo {
    #[serde(rename = "catalog-number")]
    pub catalog_number: Option<String>,
    pub label: Option<Label>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: Option<Uuid>,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medium {
    pub position: Option<u32>,
    pub format: Option<String>,
    #[serde(default)]
    pub tracks: Vec<ExternalTrack>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalTrack {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub position: u32,
    pub number: Option<String>,
    pub title: String,
    #[serde(rename = "artist-credit")]
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    #[serde(default)]
    pub recording: Recording,
    pub length: Option<u64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    #[serde(default)]
    pub isrcs: Vec<String>,
    pub length: Option<u64>,
}

/// Joins a credit the way it is printed on the release: each name followed by
/// its join phrase.
pub fn joined_credit(credit: &[ArtistCredit]) -> String {
    credit
        .iter()
        .map(|ac| ac.name.clone() + ac.joinphrase.as_deref().unwrap_or(""))
        .join("")
}

impl ExternalRelease {
    /// Every track of every medium, in medium order then position order.
    pub fn tracks(&self) -> impl Iterator<Item = &ExternalTrack> {
        self.media.iter().flat_map(|m| m.tracks.iter())
    }

    pub fn track_count(&self) -> usize {
        self.media.iter().map(|m| m.tracks.len()).sum()
    }

    pub fn artist(&self) -> String {
        joined_credit(&self.artist_credit)
    }

    /// The first label entry rendered as `name · Cat#: number`, if it carries
    /// either part.
    pub fn label_line(&self) -> Option<String> {
        let info = self.label_info.first()?;
        let mut parts = Vec::new();
        if let Some(label) = &info.label {
            parts.push(label.name.clone());
        }
        if let Some(catno) = &info.catalog_number {
            parts.push(format!("Cat#: {}", catno));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}
