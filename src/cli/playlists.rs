use tabled::Table;

use crate::{
    cli::{Prompt, playlist_rows, resolve_user, spinner},
    config::Config,
    error,
    spotify::CatalogClient,
    warning,
};

pub async fn playlists(config: &Config, user: Option<String>) {
    let user = match resolve_user(config, user, &mut Prompt::stdin()).await {
        Ok(user) => user,
        Err(e) => error!("Failed to read user id. Err: {}", e),
    };

    let client = CatalogClient::new(config);

    let pb = spinner("Fetching playlists...");
    let playlists = client.get_user_playlists(&user).await;
    pb.finish_and_clear();

    match playlists {
        Ok(playlists) if playlists.is_empty() => warning!("User {} has no public playlists.", user),
        Ok(playlists) => println!("{}", Table::new(playlist_rows(&playlists))),
        Err(e) => error!("Failed to fetch playlists for {}. Err: {}", user, e),
    }
}
