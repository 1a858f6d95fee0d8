use std::path::PathBuf;

use tabled::Table;

use crate::{
    cli::{Prompt, artist_song_rows, playlist_rows, render_related_tree, resolve_user, spinner},
    config::Config,
    error, info,
    lineup::{self, Lineup},
    spotify::CatalogClient,
    success, warning,
};

pub async fn scan(
    config: &Config,
    user: Option<String>,
    playlist: Option<usize>,
    lineup_path: Option<PathBuf>,
) {
    let Some(lineup_path) = lineup_path.or_else(|| config.lineup_file.clone()) else {
        error!("No lineup given. Pass --lineup or set LINEUP_FILE.");
    };

    let lineup = match Lineup::from_file(&lineup_path).await {
        Ok(lineup) => lineup,
        Err(e) => error!(
            "Failed to read lineup {}. Err: {}",
            lineup_path.display(),
            e
        ),
    };
    if lineup.is_empty() {
        warning!("Lineup {} is empty, nothing will match.", lineup_path.display());
    }

    let mut prompt = Prompt::stdin();
    let user = match resolve_user(config, user, &mut prompt).await {
        Ok(user) => user,
        Err(e) => error!("Failed to read user id. Err: {}", e),
    };

    let client = CatalogClient::new(config);

    let pb = spinner("Fetching playlists...");
    let playlists = client.get_user_playlists(&user).await;
    pb.finish_and_clear();

    let playlists = match playlists {
        Ok(playlists) if playlists.is_empty() => {
            error!("User {} has no public playlists.", user)
        }
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists for {}. Err: {}", user, e),
    };

    let number = match playlist {
        Some(n) => n,
        None => {
            println!("{}", Table::new(playlist_rows(&playlists)));
            match prompt.ask("Playlist #:").await {
                Ok(input) => match input.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => error!("'{}' is not a playlist number.", input),
                },
                Err(e) => error!("Failed to read playlist number. Err: {}", e),
            }
        }
    };

    let Some(selected) = number.checked_sub(1).and_then(|i| playlists.get(i)) else {
        error!(
            "Playlist #{} does not exist, pick a number between 1 and {}.",
            number,
            playlists.len()
        );
    };

    info!("Matching {} against {} lineup artists", selected.name, lineup.len());

    let pb = spinner("Fetching playlist items and related artists...");
    let report = lineup::analyze(&client, &lineup, &selected.id).await;
    pb.finish_and_clear();

    let report = match report {
        Ok(report) => report,
        Err(e) => error!("Failed to analyze playlist {}. Err: {}", selected.name, e),
    };

    if report.songs.is_empty() {
        warning!("No lineup artist appears on {}.", selected.name);
        return;
    }

    success!("{} lineup artists found on {}", report.songs.len(), selected.name);
    println!("{}", Table::new(artist_song_rows(&report.songs)));
    println!("{}", render_related_tree(&report.related));
}
