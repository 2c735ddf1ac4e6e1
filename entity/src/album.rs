use serde_derive::{Deserialize, Serialize};

use crate::Track;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub artist: String,
    pub release_date: Option<String>,
    pub label: Option<String>,
    pub barcode: Option<String>,
    pub is_mastered_for_itunes: Option<bool>,
    pub audio: Option<Vec<String>>,
    pub copyright: Option<String>,
    /// Kept in the order the provider listed them, which is disc/track order.
    pub tracks: Vec<Track>,
    pub different_dates: bool,
}

impl Album {
    pub fn has_multiple_discs(&self) -> bool {
        self.tracks.iter().any(|t| t.disc != 1)
    }

    pub fn has_composers(&self) -> bool {
        self.tracks.iter().any(|t| t.composer.is_some())
    }

    /// The barcode, if the provider gave a non-empty one.
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref().filter(|b| !b.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(disc: u32, composer: Option<&str>) -> Track {
        Track {
            disc,
            track: 1,
            composer: composer.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn detects_multiple_discs_and_composers() {
        let mut album = Album {
            tracks: vec![track(1, None), track(1, None)],
            ..Default::default()
        };
        assert!(!album.has_multiple_discs());
        assert!(!album.has_composers());

        album.tracks.push(track(2, Some("Someone")));
        assert!(album.has_multiple_discs());
        assert!(album.has_composers());
    }

    #[test]
    fn empty_barcode_counts_as_missing() {
        let mut album = Album {
            barcode: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(album.barcode(), None);
        album.barcode = Some("0602445790654".to_string());
        assert_eq!(album.barcode(), Some("0602445790654"));
    }
}
