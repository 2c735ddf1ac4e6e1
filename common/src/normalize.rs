use crate::fetch::apple_music::{CatalogResponse, Resource};
use entity::{Album, Track};

static ALBUM_TYPE: &str = "albums";
static VIDEO_TYPE: &str = "music-videos";

/// Builds one Album per album entry, then one single-track Album per music
/// video entry. Other resource types are ignored.
pub fn normalize(response: &CatalogResponse) -> Vec<Album> {
    let albums = response
        .data
        .iter()
        .filter(|r| r.type_field == ALBUM_TYPE)
        .map(album);
    let videos = response
        .data
        .iter()
        .filter(|r| r.type_field == VIDEO_TYPE)
        .map(video);
    albums.chain(videos).collect()
}

fn track(resource: &Resource) -> Track {
    let attrs = &resource.attributes;
    Track {
        name: attrs.name.clone().unwrap_or_default(),
        artist: attrs.artist_name.clone().unwrap_or_default(),
        composer: attrs.composer_name.clone(),
        disc: attrs.disc_number.unwrap_or(1),
        track: attrs.track_number.unwrap_or(1),
        isrc: attrs.isrc.clone(),
        release_date: attrs.release_date.clone(),
        duration: attrs.duration_in_millis,
    }
}

/// A track date differing from the album's marks the album, unless no track
/// carries a date at all.
pub fn different_dates(release_date: Option<&str>, tracks: &[Track]) -> bool {
    let differs = tracks
        .iter()
        .any(|t| t.release_date.as_deref() != release_date);
    let tracks_have_dates = tracks
        .iter()
        .any(|t| t.release_date.as_deref().map_or(false, |d| !d.is_empty()));
    differs && tracks_have_dates
}

fn album(resource: &Resource) -> Album {
    let attrs = &resource.attributes;
    let tracks = resource
        .relationships
        .tracks
        .as_ref()
        .map(|rel| rel.data.iter().map(track).collect::<Vec<_>>())
        .unwrap_or_default();
    Album {
        name: attrs.name.clone().unwrap_or_default(),
        artist: attrs.artist_name.clone().unwrap_or_default(),
        release_date: attrs.release_date.clone(),
        label: attrs.record_label.clone(),
        barcode: attrs.upc.clone(),
        is_mastered_for_itunes: attrs.is_mastered_for_itunes,
        audio: attrs.audio_traits.clone(),
        copyright: attrs.copyright.clone(),
        different_dates: different_dates(attrs.release_date.as_deref(), &tracks),
        tracks,
    }
}

fn video(resource: &Resource) -> Album {
    let attrs = &resource.attributes;
    let name = attrs.name.clone().unwrap_or_default();
    let artist = attrs.artist_name.clone().unwrap_or_default();
    Album {
        name: name.clone(),
        artist: artist.clone(),
        release_date: attrs.release_date.clone(),
        tracks: vec![Track {
            name,
            artist,
            composer: None,
            disc: 1,
            track: 1,
            isrc: attrs.isrc.clone(),
            release_date: attrs.release_date.clone(),
            duration: attrs.duration_in_millis,
        }],
        different_dates: false,
        ..Default::default()
    }
}
