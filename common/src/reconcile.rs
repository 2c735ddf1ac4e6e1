use crate::fetch::musicbrainz::ExternalRelease;
use entity::{Album, Indicator, IndicatorKind, Indicators};

/// Largest difference between a catalog track and its registry counterpart
/// still accepted as the same length.
pub static LENGTH_TOLERANCE_MS: u64 = 2000;

fn all_isrcs(release: &ExternalRelease) -> bool {
    release.tracks().all(|t| !t.recording.isrcs.is_empty())
}

fn track_count_matches(album: &Album, release: &ExternalRelease) -> bool {
    album.tracks.len() == release.track_count()
}

/// Pairs tracks by position only. Expects the counts to match already.
fn track_lengths_match(album: &Album, release: &ExternalRelease) -> bool {
    album
        .tracks
        .iter()
        .zip(release.tracks())
        .all(|(local, external)| match (local.duration, external.length) {
            (Some(duration), Some(length)) if duration > 0 && length > 0 => {
                duration.abs_diff(length) <= LENGTH_TOLERANCE_MS
            }
            _ => false,
        })
}

/// Compares an album against the release resolved for its barcode.
///
/// Returns `None` when the album has no barcode: the checks do not apply,
/// which is different from all of them failing. With a barcode the result
/// always holds every indicator, in `IndicatorKind::ALL` order.
pub fn reconcile(album: &Album, release: Option<&ExternalRelease>) -> Option<Indicators> {
    album.barcode()?;
    let on_registry = release.is_some();
    let trackcount = release.map_or(false, |r| track_count_matches(album, r));
    let values = [
        (IndicatorKind::OnRegistry, on_registry),
        // same outcome as OnRegistry: the release was found through the barcode
        (IndicatorKind::Gtin, on_registry),
        (IndicatorKind::AllIsrcs, release.map_or(false, all_isrcs)),
        (IndicatorKind::Trackcount, trackcount),
        (
            IndicatorKind::Tracklengths,
            trackcount && release.map_or(false, |r| track_lengths_match(album, r)),
        ),
    ];
    Some(Indicators(
        values
            .into_iter()
            .map(|(kind, passed)| Indicator { kind, passed })
            .collect(),
    ))
}
