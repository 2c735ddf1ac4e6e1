use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<Resource>,
}

/// One catalog resource: an album, a music video or one of their tracks.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_field: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub relationships: Relationships,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub name: Option<String>,
    pub artist_name: Option<String>,
    pub composer_name: Option<String>,
    pub release_date: Option<String>,
    pub record_label: Option<String>,
    pub upc: Option<String>,
    pub is_mastered_for_itunes: Option<bool>,
    pub audio_traits: Option<Vec<String>>,
    pub copyright: Option<String>,
    pub disc_number: Option<u32>,
    pub track_number: Option<u32>,
    pub isrc: Option<String>,
    pub duration_in_millis: Option<u64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    pub tracks: Option<Relationship>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Vec<Resource>,
}
