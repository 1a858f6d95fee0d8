//! # Spotify Integration Module
//!
//! This module is the integration layer between lineupcli and the Spotify Web
//! API. It handles authentication, HTTP communication and the decoding of
//! responses into the typed records of [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Lineup computations (intersect, related)
//!          ↓
//! CatalogClient
//!     ├── Playlists (user playlists, paginated tracks)
//!     └── Artists (related artists)
//!          ↓
//! TokenGuard (client credentials)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 client-credentials flow. The token is
//! requested lazily, right before the first request that needs it, and
//! renewed the same way once it has expired. Concurrent requests share a
//! single in-flight exchange.
//!
//! ## Pagination
//!
//! [`playlist`] fetches the first page of a playlist to learn its size and
//! then requests all remaining pages at once. Pages are reassembled in page
//! order, never in arrival order.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials exchange
//! - `GET /users/{user_id}/playlists` - a user's playlists
//! - `GET /playlists/{playlist_id}/tracks` - playlist items, 100 per page
//! - `GET /artists/{artist_id}/related-artists` - related artists
//!
//! ## Error Types
//!
//! All functions return [`crate::Result`]. Failures are never retried, with
//! the exception of the implicit re-authentication on token expiry.

pub mod artists;
pub mod auth;
pub mod client;
pub mod playlist;

pub use auth::TokenGuard;
pub use client::CatalogClient;
