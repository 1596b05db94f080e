use std::collections::{HashMap, HashSet};

use crate::{
    Error, Result,
    types::{AlbumMatch, FeatureRecord},
};

use super::Session;

/// Lists albums matching `query`, numbered from 1 in API order.
///
/// Requires a logged-in [`Session`].
///
/// # Example
///
/// ```
/// for m in search_album(&session, "Faster Than the Speed of Night").await? {
///     println!("{} {} {} {}", m.position, m.name, m.artist_name, m.id);
/// }
/// ```
pub async fn search_album(session: &Session, query: &str) -> Result<Vec<AlbumMatch>> {
    let client = session.client()?;
    let response = client.search_albums(query).await?;

    Ok(response
        .albums
        .items
        .into_iter()
        .enumerate()
        .map(|(i, album)| AlbumMatch {
            position: i + 1,
            name: album.name,
            artist_name: album
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            id: album.id,
        })
        .collect())
}

/// Fetches audio features for every track of an album.
///
/// The features API does not return track names, so each record gets the
/// name from the album's track listing, matched on track id. Records keep
/// the order the features API returned them in. A record whose id is not on
/// the album fails with [`Error::UnknownTrack`].
///
/// Requires a logged-in [`Session`].
pub async fn fetch_features(session: &Session, album_id: &str) -> Result<Vec<FeatureRecord>> {
    let client = session.client()?;

    let tracks = client.album_tracks(album_id).await?.items;
    let mut seen = HashSet::new();
    let ids: Vec<String> = tracks
        .iter()
        .filter(|t| seen.insert(t.id.as_str()))
        .map(|t| t.id.clone())
        .collect();
    let names: HashMap<String, String> = tracks.into_iter().map(|t| (t.id, t.name)).collect();

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut features = client.audio_features(&ids).await?.audio_features;
    for record in &mut features {
        let name = names
            .get(&record.id)
            .ok_or_else(|| Error::UnknownTrack(record.id.clone()))?;
        record.name = Some(name.clone());
    }

    log::debug!("fetched features for {} tracks", features.len());
    Ok(features)
}
