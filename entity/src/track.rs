use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub composer: Option<String>,
    pub disc: u32,
    pub track: u32,
    pub isrc: Option<String>,
    pub release_date: Option<String>,
    /// Length in milliseconds.
    pub duration: Option<u64>,
}
