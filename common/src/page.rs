use url::Url;

use entity::{CatalogCoordinates, EntryType};

/// Something that knows which catalog entry the user is looking at.
pub trait PageContext {
    /// `None` when the page is not an album or music video page.
    fn resolve_entry(&self) -> Option<CatalogCoordinates>;
}

impl PageContext for Url {
    fn resolve_entry(&self) -> Option<CatalogCoordinates> {
        let parts = self.path().split('/').collect::<Vec<_>>();
        let entry_type = parts.get(2)?.parse::<EntryType>().ok()?;
        let country = parts.get(1).filter(|c| !c.is_empty())?;
        let id = parts
            .iter()
            .rev()
            .find(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))?;
        Some(CatalogCoordinates {
            country: country.to_string(),
            entry_type,
            id: id.to_string(),
        })
    }
}

impl PageContext for CatalogCoordinates {
    fn resolve_entry(&self) -> Option<CatalogCoordinates> {
        Some(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(s: &str) -> Option<CatalogCoordinates> {
        Url::parse(s).unwrap().resolve_entry()
    }

    #[test]
    fn resolves_album_pages() {
        let entry = resolve("https://music.apple.com/us/album/some-album/1440857781?i=1440857795").unwrap();
        assert_eq!(entry.country, "us");
        assert_eq!(entry.entry_type, EntryType::Album);
        assert_eq!(entry.id, "1440857781");
    }

    #[test]
    fn resolves_music_video_pages() {
        let entry = resolve("https://music.apple.com/gb/music-video/a-video/1591234567").unwrap();
        assert_eq!(entry.country, "gb");
        assert_eq!(entry.entry_type, EntryType::MusicVideo);
        assert_eq!(entry.id, "1591234567");
    }

    #[test]
    fn takes_the_last_numeric_segment() {
        let entry = resolve("https://music.apple.com/us/album/1999/1440857781").unwrap();
        assert_eq!(entry.id, "1440857781");
        let entry = resolve("https://music.apple.com/us/album/1440857781/").unwrap();
        assert_eq!(entry.id, "1440857781");
    }

    #[test]
    fn ignores_other_pages() {
        assert_eq!(resolve("https://music.apple.com/us/artist/someone/12345"), None);
        assert_eq!(resolve("https://music.apple.com/includes/commerce/fetch-proxy.html"), None);
        assert_eq!(resolve("https://music.apple.com/us/album/no-id"), None);
        assert_eq!(resolve("https://music.apple.com/"), None);
    }
}
