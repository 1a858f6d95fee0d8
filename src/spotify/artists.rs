use crate::{
    error::Result,
    spotify::CatalogClient,
    types::{Artist, RelatedArtistsResponse},
};

impl CatalogClient {
    /// Retrieves the artists the catalog considers related to `artist_id`.
    ///
    /// Issues a single request to `GET /artists/{artist_id}/related-artists`
    /// and maps the `artists` array to [`Artist`] records in the order the
    /// API returns them.
    ///
    /// # Example
    ///
    /// ```
    /// let related = client.get_related_artists("4tZwfgrHOc3mvqYlEYSvVi").await?;
    /// for artist in related {
    ///     println!("{} ({} followers)", artist.name, artist.followers);
    /// }
    /// ```
    pub async fn get_related_artists(&self, artist_id: &str) -> Result<Vec<Artist>> {
        let res: RelatedArtistsResponse = self
            .get_json(&format!("/artists/{}/related-artists", artist_id), &[])
            .await?;
        Ok(res.artists)
    }
}
