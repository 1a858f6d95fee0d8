use futures::future::try_join_all;

use crate::{
    error::Result,
    spotify::CatalogClient,
    types::{GetUserPlaylistsResponse, PageResult, PlaylistItem, PlaylistSummary},
};

/// Number of items requested per page of the playlist tracks endpoint.
pub const PAGE_SIZE: u32 = 100;

impl CatalogClient {
    /// Retrieves the playlists of a user.
    ///
    /// Issues a single request to `GET /users/{user_id}/playlists` and returns
    /// the `items` array of the response. No further pages are fetched.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`](crate::Error::Api) for a non-success status
    /// - [`Error::MalformedResponse`](crate::Error::MalformedResponse) when
    ///   `items` is missing or an entry lacks `id`/`name`
    pub async fn get_user_playlists(&self, user_id: &str) -> Result<Vec<PlaylistSummary>> {
        let res: GetUserPlaylistsResponse = self
            .get_json(&format!("/users/{}/playlists", user_id), &[])
            .await?;
        Ok(res.items)
    }

    /// Fetches exactly one page of a playlist's tracks.
    ///
    /// Page `0` is requested without an `offset` parameter; page `n >= 1` is
    /// requested with `offset = n * 100`. The caller does the pagination math,
    /// see [`CatalogClient::fetch_all_playlist_items`].
    pub async fn get_playlist_items_page(
        &self,
        playlist_id: &str,
        page_index: u32,
    ) -> Result<PageResult> {
        let mut query = vec![("limit", PAGE_SIZE.to_string())];
        if page_index > 0 {
            let offset = u64::from(page_index) * u64::from(PAGE_SIZE);
            query.push(("offset", offset.to_string()));
        }

        self.get_json(&format!("/playlists/{}/tracks", playlist_id), &query)
            .await
    }

    /// Retrieves every item of a playlist, in playlist order.
    ///
    /// Page 0 is fetched first to learn `total` and `limit`. When more than one
    /// page exists, pages `1..num_pages` are requested concurrently and
    /// appended after page 0 in ascending page order, independent of the
    /// order in which the responses arrive.
    ///
    /// # Errors
    ///
    /// The first failing page aborts the whole fetch and its error is returned.
    pub async fn fetch_all_playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>> {
        let first = self.get_playlist_items_page(playlist_id, 0).await?;
        let num_pages = page_count(first.total, first.limit);

        let mut items = first.items;
        if num_pages <= 1 {
            return Ok(items);
        }

        log::debug!(
            "Playlist {} has {} items, fetching {} more pages",
            playlist_id,
            first.total,
            num_pages - 1
        );

        let pages = try_join_all(
            (1..num_pages).map(|page| self.get_playlist_items_page(playlist_id, page)),
        )
        .await?;

        for page in pages {
            items.extend(page.items);
        }

        Ok(items)
    }
}

/// `ceil(total / limit)`; a zero limit means everything came in one page.
pub fn page_count(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(limit)
}
