use colored::Colorize;

use crate::types::{
    ArtistRelatedMap, ArtistSongMap, ArtistSongTableRow, PlaylistSummary, PlaylistTableRow,
};

/// Numbers playlists from 1, the way they are picked at the prompt.
pub fn playlist_rows(playlists: &[PlaylistSummary]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .enumerate()
        .map(|(i, p)| PlaylistTableRow {
            number: i + 1,
            name: p.name.clone(),
            id: p.id.clone(),
        })
        .collect()
}

/// One row per song; the artist name is only set on its first row and an
/// empty row separates consecutive artists.
pub fn artist_song_rows(artist_songs: &ArtistSongMap) -> Vec<ArtistSongTableRow> {
    let mut rows = Vec::new();
    for (i, (artist, songs)) in artist_songs.iter().enumerate() {
        if i > 0 {
            rows.push(ArtistSongTableRow {
                artist: String::new(),
                songs: String::new(),
            });
        }
        for (j, song) in songs.iter().enumerate() {
            rows.push(ArtistSongTableRow {
                artist: if j == 0 {
                    artist.name.clone()
                } else {
                    String::new()
                },
                songs: song.name.clone(),
            });
        }
    }
    rows
}

pub fn render_related_tree(related: &ArtistRelatedMap) -> String {
    let mut out = String::from("Related Artists\n");
    let count = related.len();

    for (i, (artist, relations)) in related.iter().enumerate() {
        let last = i + 1 == count;
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(&format!(
            "{}{}\n",
            branch,
            artist.name.truecolor(255, 165, 0).bold()
        ));

        for (j, rel) in relations.iter().enumerate() {
            let leaf = if j + 1 == relations.len() {
                "└── "
            } else {
                "├── "
            };
            out.push_str(&format!("{}{}{}\n", indent, leaf, rel.name));
        }
    }

    out
}
