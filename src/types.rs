use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::{Error, Result};

/// A bearer token together with the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Fails with [`Error::Auth`] when `expires_in` does not fit a timestamp.
    pub fn new(token: String, expires_in: i64) -> Result<Self> {
        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| {
                Error::Auth(format!("token lifetime of {}s is out of range", expires_in))
            })?;

        Ok(Self { token, expires_at })
    }

    /// A token expiring exactly at `now` is still considered valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// An artist as returned by the catalog.
///
/// Equality and hashing only look at `id`: two records for the same artist
/// compare equal even when other fields (e.g. a stale popularity) differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_followers")]
    pub followers: u64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Artist {}

impl Hash for Artist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Spotify sends `{"total": n}`, older payloads and fixtures a plain number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Followers {
    Count(u64),
    Object { total: Option<u64> },
}

fn deserialize_followers<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let followers = Option::<Followers>::deserialize(deserializer)?;
    Ok(match followers {
        Some(Followers::Count(n)) => n,
        Some(Followers::Object { total }) => total.unwrap_or(0),
        None => 0,
    })
}

/// A track on a playlist. Equality and hashing only look at `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist_ids: Vec<String>,
    pub popularity: u32,
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
}

/// One entry of a playlist's track listing, kept close to the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: TrackObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    pub artists: Vec<Artist>,
}

impl PlaylistItem {
    pub fn song(&self) -> Song {
        Song {
            id: self.track.id.clone(),
            name: self.track.name.clone(),
            artist_ids: self.track.artists.iter().map(|a| a.id.clone()).collect(),
            popularity: self.track.popularity,
        }
    }

    pub fn artists(&self) -> &[Artist] {
        &self.track.artists
    }
}

/// One page of the playlist tracks endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<PlaylistItem>,
    pub total: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArtistsResponse {
    pub artists: Vec<Artist>,
}

/// A map keyed by [`Artist`] that iterates in insertion order.
#[derive(Debug, Clone)]
pub struct ArtistMap<V> {
    entries: Vec<(Artist, V)>,
    index: HashMap<String, usize>,
}

pub type ArtistSongMap = ArtistMap<Vec<Song>>;
pub type ArtistRelatedMap = ArtistMap<Vec<Artist>>;

impl<V> Default for ArtistMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> ArtistMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` for `artist`. An existing key keeps its position and
    /// its original key record; only the value is replaced.
    pub fn insert(&mut self, artist: Artist, value: V) {
        match self.index.get(&artist.id) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(artist.id.clone(), self.entries.len());
                self.entries.push((artist, value));
            }
        }
    }

    /// Returns the value for `artist`, inserting `default()` at the end first
    /// if the key is new.
    pub fn entry_or_insert_with(&mut self, artist: &Artist, default: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(&artist.id) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(artist.id.clone(), i);
                self.entries.push((artist.clone(), default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn get(&self, artist: &Artist) -> Option<&V> {
        self.index.get(&artist.id).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, artist: &Artist) -> bool {
        self.index.contains_key(&artist.id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Artist> {
        self.entries.iter().map(|(a, _)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Artist, &V)> {
        self.entries.iter().map(|(a, v)| (a, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both views computed for one playlist.
#[derive(Debug, Clone, Default)]
pub struct LineupReport {
    pub songs: ArtistSongMap,
    pub related: ArtistRelatedMap,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub number: usize,
    pub name: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct ArtistSongTableRow {
    pub artist: String,
    pub songs: String,
}
