use crate::{
    lineup::Lineup,
    types::{ArtistSongMap, PlaylistItem},
};

/// Maps each lineup artist appearing on `items` to the songs it appears on.
///
/// Artists are keyed in the order they are first seen while scanning the
/// items, and each artist's songs keep the scan order. A song with several
/// matching artists is listed under each of them. Repeated tracks are kept,
/// so the same song may show up twice for an artist.
pub fn intersect(lineup: &Lineup, items: &[PlaylistItem]) -> ArtistSongMap {
    let mut artist_songs = ArtistSongMap::new();

    for item in items {
        let song = item.song();
        for artist in item.artists() {
            if lineup.contains(&artist.name) {
                artist_songs
                    .entry_or_insert_with(artist, Vec::new)
                    .push(song.clone());
            }
        }
    }

    artist_songs
}
