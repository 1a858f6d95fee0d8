//! # Lineup Module
//!
//! Cross-references fetched playlist data with a lineup, a fixed list of
//! artist display names.
//!
//! - [`intersect`] maps every lineup artist found on the playlist to the songs
//!   it appears on. Pure computation.
//! - [`resolve`] maps every found artist to the other lineup artists the
//!   catalog lists as related. One concurrent request per found artist.
//! - [`analyze`] runs the whole pipeline for one playlist.
//!
//! Names are compared case-insensitively. Matching is by name, not by id,
//! because the lineup only carries names: two catalog artists sharing a
//! display name cannot be told apart here.

mod intersect;
mod related;

use std::{collections::HashSet, path::Path};

pub use intersect::intersect;
pub use related::{filter_related, resolve};

use crate::{error::Result, spotify::CatalogClient, types::LineupReport};

/// A set of artist names, normalized to lowercase once on construction.
#[derive(Debug, Clone, Default)]
pub struct Lineup {
    names: HashSet<String>,
}

impl Lineup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Parses one name per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = async_fs::read_to_string(path.as_ref()).await?;
        Ok(Self::parse(&content))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Fetches every item of `playlist_id` and computes both lineup views.
pub async fn analyze(
    client: &CatalogClient,
    lineup: &Lineup,
    playlist_id: &str,
) -> Result<LineupReport> {
    let items = client.fetch_all_playlist_items(playlist_id).await?;
    log::debug!("Fetched {} items from playlist {}", items.len(), playlist_id);

    let songs = intersect(lineup, &items);
    let found: Vec<_> = songs.keys().cloned().collect();
    let related = resolve(client, lineup, &found).await?;

    Ok(LineupReport { songs, related })
}
