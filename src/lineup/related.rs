use futures::future::try_join_all;

use crate::{
    error::Result,
    lineup::Lineup,
    spotify::CatalogClient,
    types::{Artist, ArtistRelatedMap},
};

/// Maps every artist of `found` to its related artists that are on the
/// lineup but not already in `found`.
///
/// Related artists are requested for all found artists at once. The result
/// is keyed in the order of `found` and each list keeps the API's order.
/// Artists without any qualifying relation still get an empty entry.
///
/// # Errors
///
/// The first failing request aborts the resolution and its error is returned.
pub async fn resolve(
    client: &CatalogClient,
    lineup: &Lineup,
    found: &[Artist],
) -> Result<ArtistRelatedMap> {
    let related_lists =
        try_join_all(found.iter().map(|artist| client.get_related_artists(&artist.id))).await?;

    let mut related_map = ArtistRelatedMap::new();
    for (artist, related) in found.iter().zip(related_lists) {
        related_map.insert(artist.clone(), filter_related(lineup, found, related));
    }

    Ok(related_map)
}

/// Keeps the artists of `related` that are on the lineup and not in `found`.
pub fn filter_related(lineup: &Lineup, found: &[Artist], related: Vec<Artist>) -> Vec<Artist> {
    related
        .into_iter()
        .filter(|a| lineup.contains(&a.name) && !found.contains(a))
        .collect()
}
