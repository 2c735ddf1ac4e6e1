use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};
use url::form_urlencoded;
use url::Url;
use uuid::Uuid;

use base::setting::Settings;
use entity::{Album, Track};

/// Parameters of the release lookup tool, in the order it expects them.
/// Linked services other than the registry are always sent empty.
static HARMONY_PARAMS: &[&str] = &[
    "url",
    "gtin",
    "region",
    "musicbrainz",
    "deezer",
    "itunes",
    "spotify",
    "tidal",
    "beatport",
];

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLinks {
    /// Only offered for albums with a barcode.
    pub harmony: Option<String>,
    pub magic_isrc: String,
}

/// Builds links into the companion correction tools and the registry website.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    harmony: Url,
    magic_isrc: Url,
    site: Url,
}

impl LinkBuilder {
    pub fn new(settings: &Settings) -> Self {
        LinkBuilder {
            harmony: settings.tools.harmony.clone(),
            magic_isrc: settings.tools.magic_isrc.clone(),
            site: settings.registry.site.clone(),
        }
    }

    pub fn harmony(&self, gtin: &str, mbid: Option<&str>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for param in HARMONY_PARAMS {
            let value = match *param {
                "gtin" => gtin,
                "musicbrainz" => mbid.unwrap_or(""),
                _ => "",
            };
            query.append_pair(param, value);
        }
        format!("{}?{}", self.harmony, query.finish())
    }

    /// One `isrc<N>` parameter per track, in album order. Tracks without an
    /// ISRC still take their slot with an empty value.
    pub fn magic_isrc(&self, tracks: &[Track], mbid: Option<&str>) -> String {
        let params = tracks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("isrc{}={}", i + 1, t.isrc.as_deref().unwrap_or("")))
            .join("&");
        let base = format!("{}?{}", self.magic_isrc, params);
        match mbid.filter(|m| !m.is_empty()) {
            Some(mbid) => format!("{}&mbid={}", base, mbid),
            None => base,
        }
    }

    pub fn registry_release(&self, id: &Uuid) -> String {
        format!(
            "{}/release/{}",
            self.site.as_str().trim_end_matches('/'),
            id
        )
    }

    pub fn tool_links(&self, album: &Album, mbid: Option<&str>) -> ToolLinks {
        ToolLinks {
            harmony: album.barcode().map(|gtin| self.harmony(gtin, mbid)),
            magic_isrc: self.magic_isrc(&album.tracks, mbid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> LinkBuilder {
        LinkBuilder::new(&Settings::default())
    }

    fn track(isrc: Option<&str>) -> Track {
        Track {
            isrc: isrc.map(str::to_string),
            disc: 1,
            track: 1,
            ..Default::default()
        }
    }

    #[test]
    fn isrc_link_numbers_tracks_from_one() {
        let tracks = vec![track(Some("A")), track(Some("B"))];
        assert_eq!(
            builder().magic_isrc(&tracks, None),
            "https://magicisrc.kepstin.ca/?isrc1=A&isrc2=B"
        );
        assert_eq!(
            builder().magic_isrc(&tracks, Some("X")),
            "https://magicisrc.kepstin.ca/?isrc1=A&isrc2=B&mbid=X"
        );
    }

    #[test]
    fn isrc_link_keeps_slots_for_missing_isrcs() {
        let tracks = vec![track(Some("A")), track(None), track(Some("C"))];
        assert_eq!(
            builder().magic_isrc(&tracks, Some("")),
            "https://magicisrc.kepstin.ca/?isrc1=A&isrc2=&isrc3=C"
        );
    }

    #[test]
    fn harmony_link_has_a_fixed_parameter_set() {
        assert_eq!(
            builder().harmony("0602445790654", None),
            "http://localhost:5220/release?url=&gtin=0602445790654&region=&musicbrainz=&deezer=&itunes=&spotify=&tidal=&beatport="
        );
        assert_eq!(
            builder().harmony("0602445790654", Some("b84ee12a-09ef-421b-82de-0441a926375b")),
            "http://localhost:5220/release?url=&gtin=0602445790654&region=&musicbrainz=b84ee12a-09ef-421b-82de-0441a926375b&deezer=&itunes=&spotify=&tidal=&beatport="
        );
    }

    #[test]
    fn harmony_link_encodes_values() {
        let link = builder().harmony("12 34&5", None);
        assert!(link.contains("gtin=12+34%265&"));
    }

    #[test]
    fn registry_release_link() {
        let id = Uuid::parse_str("b84ee12a-09ef-421b-82de-0441a926375b").unwrap();
        assert_eq!(
            builder().registry_release(&id),
            "https://musicbrainz.org/release/b84ee12a-09ef-421b-82de-0441a926375b"
        );
    }

    #[test]
    fn harmony_is_only_offered_with_a_barcode() {
        let mut album = Album {
            tracks: vec![track(Some("A"))],
            ..Default::default()
        };
        let links = builder().tool_links(&album, None);
        assert_eq!(links.harmony, None);
        assert_eq!(links.magic_isrc, "https://magicisrc.kepstin.ca/?isrc1=A");

        album.barcode = Some("123".to_string());
        let links = builder().tool_links(&album, Some("X"));
        assert!(links.harmony.unwrap().contains("gtin=123&"));
        assert!(links.magic_isrc.ends_with("&mbid=X"));
    }
}
