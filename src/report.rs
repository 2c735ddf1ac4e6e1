use itertools::Itertools;

use base::util::format_duration;
use common::check::CheckReport;
use common::fetch::musicbrainz::{joined_credit, ExternalRelease};
use common::links::ToolLinks;
use entity::{Album, IndicatorKind, Indicators};

static SEPARATOR: &str = " · ";

/// Pads every column to its widest cell.
fn table(header: &[&str], rows: Vec<Vec<String>>) -> Vec<String> {
    let mut widths = header.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows.iter() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .join("  ")
            .trim_end()
            .to_string()
    };
    let mut lines = vec![line(header.iter().map(|h| h.to_string()).collect())];
    lines.extend(rows.into_iter().map(line));
    lines
}

fn indicator_line(indicators: &Indicators) -> String {
    IndicatorKind::ALL
        .iter()
        .map(|kind| {
            let mark = if indicators.passed(*kind) { "✓" } else { "✗" };
            format!("{} {}", mark, kind.label())
        })
        .join(SEPARATOR)
}

fn badge_line(album: &Album) -> Option<String> {
    let parts = album
        .barcode()
        .map(|b| format!("UPC: {}", b))
        .into_iter()
        .chain(album.label.clone())
        .collect::<Vec<_>>();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SEPARATOR))
    }
}

pub fn render_links(links: &ToolLinks) -> String {
    let mut lines = Vec::new();
    if let Some(harmony) = &links.harmony {
        lines.push(format!("Harmony: {}", harmony));
    }
    lines.push(format!("MagicISRC: {}", links.magic_isrc));
    lines.join("\n") + "\n"
}

fn album_details(album: &Album) -> Vec<String> {
    let mut lines = vec![album.name.clone(), album.artist.clone()];
    let mut date = format!(
        "Release Date: {}",
        album.release_date.as_deref().unwrap_or("")
    );
    if album.different_dates {
        date.push_str(" (Some track dates differ)");
    }
    lines.push(date);
    if let Some(label) = &album.label {
        lines.push(format!("Label: {}", label));
    }
    if let Some(barcode) = album.barcode() {
        lines.push(format!("Barcode: {}", barcode));
    }
    if let Some(mastered) = album.is_mastered_for_itunes {
        lines.push(format!(
            "Mastered for iTunes: {}",
            if mastered { "yes" } else { "no" }
        ));
    }
    if let Some(audio) = &album.audio {
        lines.push(format!("Audio: {}", audio.join(", ")));
    }
    if let Some(copyright) = &album.copyright {
        lines.push(format!("Copyright: {}", copyright));
    }

    let discs = album.has_multiple_discs();
    let composers = album.has_composers();
    let mut header = vec!["Track", "Title", "Artist"];
    if composers {
        header.push("Composer");
    }
    header.extend(["ISRC", "Length"]);
    if album.different_dates {
        header.push("Date");
    }
    let rows = album
        .tracks
        .iter()
        .map(|t| {
            let mut row = vec![
                if discs {
                    format!("{}.{}", t.disc, t.track)
                } else {
                    t.track.to_string()
                },
                t.name.clone(),
                t.artist.clone(),
            ];
            if composers {
                row.push(t.composer.clone().unwrap_or_default());
            }
            row.push(t.isrc.clone().unwrap_or_default());
            row.push(format_duration(t.duration));
            if album.different_dates {
                let mut date = t.release_date.clone().unwrap_or_default();
                if t.release_date != album.release_date {
                    date.push('*');
                }
                row.push(date);
            }
            row
        })
        .collect();
    lines.push(String::new());
    lines.extend(table(&header, rows));
    lines
}

fn release_details(release: &ExternalRelease) -> Vec<String> {
    let mut lines = vec![
        "MusicBrainz Release".to_string(),
        release.title.clone(),
        release.artist(),
    ];
    if let Some(date) = &release.date {
        lines.push(format!("Date: {}", date));
    }
    if let Some(label) = release.label_line() {
        lines.push(format!("Label: {}", label));
    }
    if let Some(barcode) = &release.barcode {
        lines.push(format!("Barcode: {}", barcode));
    }

    let media = release.media.len() > 1;
    let rows = release
        .media
        .iter()
        .enumerate()
        .flat_map(|(i, medium)| {
            medium.tracks.iter().map(move |t| {
                vec![
                    if media {
                        format!("{}.{}", i + 1, t.position)
                    } else {
                        t.position.to_string()
                    },
                    t.title.clone(),
                    joined_credit(&t.artist_credit),
                    t.recording.isrcs.join(", "),
                    format_duration(t.length),
                ]
            })
        })
        .collect();
    lines.push(String::new());
    lines.extend(table(&["Track", "Title", "Artist", "ISRC", "Length"], rows));
    lines
}

/// Terminal rendering of a check: badges and indicators for the first album,
/// details for every album, then the registry release.
pub fn render(report: &CheckReport) -> String {
    let album = report.album();
    let mut lines = Vec::new();
    if let Some(badge) = badge_line(album) {
        lines.push(badge);
    }
    if album.barcode().is_some() {
        lines.extend(render_links(&report.links).lines().map(str::to_string));
    }
    if let Some(indicators) = &report.indicators {
        lines.push(indicator_line(indicators));
    }
    if let Some(link) = &report.release_link {
        lines.push(format!("MusicBrainz: {}", link));
    }
    for album in report.albums.iter() {
        lines.push(String::new());
        lines.extend(album_details(album));
    }
    match &report.release {
        Some(release) => {
            lines.push(String::new());
            lines.extend(release_details(release));
        }
        None if album.barcode().is_some() => {
            lines.push(String::new());
            lines.push("Not found on MusicBrainz".to_string());
        }
        None => {}
    }
    lines.join("\n") + "\n"
}
