use lineupcli::{
    cli::{artist_song_rows, playlist_rows, render_related_tree},
    types::{Artist, ArtistRelatedMap, ArtistSongMap, PlaylistSummary, Song},
};

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        followers: 0,
        genres: Vec::new(),
        popularity: 0,
    }
}

fn song(id: &str, name: &str) -> Song {
    Song {
        id: id.to_string(),
        name: name.to_string(),
        artist_ids: Vec::new(),
        popularity: 0,
    }
}

#[test]
fn test_playlist_rows_are_numbered_from_one() {
    let playlists = vec![
        PlaylistSummary {
            id: "p1".to_string(),
            name: "Road Trip".to_string(),
        },
        PlaylistSummary {
            id: "p2".to_string(),
            name: "Gym".to_string(),
        },
    ];

    let rows = playlist_rows(&playlists);

    assert_eq!(rows[0].number, 1);
    assert_eq!(rows[1].number, 2);
    assert_eq!(rows[1].name, "Gym");
}

#[test]
fn test_artist_song_rows() {
    let mut map = ArtistSongMap::new();
    map.insert(
        artist("a", "Daft Punk"),
        vec![song("t1", "One More Time"), song("t2", "Aerodynamic")],
    );
    map.insert(artist("b", "Justice"), vec![song("t3", "D.A.N.C.E.")]);

    let rows = artist_song_rows(&map);
    let cells: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.artist.as_str(), r.songs.as_str()))
        .collect();

    assert_eq!(
        cells,
        vec![
            ("Daft Punk", "One More Time"),
            ("", "Aerodynamic"),
            ("", ""),
            ("Justice", "D.A.N.C.E."),
        ]
    );
}

#[test]
fn test_render_related_tree() {
    colored::control::set_override(false);

    let mut map = ArtistRelatedMap::new();
    map.insert(
        artist("a", "Daft Punk"),
        vec![artist("k", "Kavinsky"), artist("b", "Breakbot")],
    );
    map.insert(artist("j", "Justice"), Vec::new());

    let tree = render_related_tree(&map);

    assert_eq!(
        tree,
        "Related Artists\n\
         ├── Daft Punk\n\
         │   ├── Kavinsky\n\
         │   └── Breakbot\n\
         └── Justice\n"
    );
}
