use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The kind of catalog page a check can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    Album,
    MusicVideo,
}

impl EntryType {
    /// Path segment of the catalog collection holding this kind of entry.
    pub fn collection(&self) -> &'static str {
        match self {
            EntryType::Album => "albums",
            EntryType::MusicVideo => "music-videos",
        }
    }
}

impl Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::Album => write!(f, "album"),
            EntryType::MusicVideo => write!(f, "music-video"),
        }
    }
}

impl FromStr for EntryType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "album" => Ok(EntryType::Album),
            "music-video" => Ok(EntryType::MusicVideo),
            s => Err(format!("Unsupported catalog entry type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogCoordinates {
    pub country: String,
    pub entry_type: EntryType,
    pub id: String,
}
