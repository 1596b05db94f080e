//! # Spotify Integration Module
//!
//! Talks to the Spotify Web API on behalf of the workshop helpers.
//!
//! ```text
//! CLI / notebook code
//!          ↓
//!     Session  ── login ──> SpotifyClient (bearer token + API base URL)
//!          ↓
//!     albums (search, track listing, audio features)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Sessions
//!
//! A [`SpotifyClient`] can only be obtained through [`login`], which uses the
//! token it is given or fetches the shared workshop token. A [`Session`]
//! holds the client for the rest of the run. Every authenticated operation
//! takes the session and asks it for the client before touching the
//! network, so calling one before logging in fails with
//! [`Error::NotLoggedIn`](crate::Error::NotLoggedIn) and sends nothing.
//!
//! ## Error Handling
//!
//! Non-success responses are turned into HTTP errors with
//! `error_for_status`. There is no retry, caching or pagination: one call,
//! one round trip.

pub mod albums;
pub mod auth;

pub use albums::{fetch_features, search_album};
pub use auth::login;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Error, Result,
    config::Endpoints,
    types::{AlbumTracksResponse, AudioFeaturesResponse, SearchResponse},
};

/// Albums listed per search.
pub const SEARCH_LIMIT: &str = "10";

/// Tracks fetched per album; the API maximum for one page.
pub const ALBUM_TRACKS_LIMIT: &str = "50";

/// An authenticated handle on the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    pub(crate) fn new(api_url: &str, token: String) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Searches albums matching `query`, first page only.
    pub async fn search_albums(&self, query: &str) -> Result<SearchResponse> {
        self.get(
            "search",
            &[("q", query), ("type", "album"), ("limit", SEARCH_LIMIT)],
        )
        .await
    }

    /// Lists the tracks of an album, first page only.
    pub async fn album_tracks(&self, album_id: &str) -> Result<AlbumTracksResponse> {
        self.get(
            &format!("albums/{album_id}/tracks"),
            &[("limit", ALBUM_TRACKS_LIMIT)],
        )
        .await
    }

    /// Fetches audio features for the given track ids in one request.
    pub async fn audio_features(&self, ids: &[String]) -> Result<AudioFeaturesResponse> {
        let ids = ids.join(",");
        self.get("audio-features", &[("ids", ids.as_str())]).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.api_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Holds the client created by the last successful login.
#[derive(Debug, Default)]
pub struct Session {
    client: Option<SpotifyClient>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in and keeps the new client, replacing any earlier one.
    pub async fn login(
        &mut self,
        endpoints: &Endpoints,
        token: Option<String>,
    ) -> Result<&SpotifyClient> {
        let client: &SpotifyClient = self.client.insert(login(endpoints, token).await?);
        Ok(client)
    }

    /// The logged-in client, or [`Error::NotLoggedIn`].
    pub fn client(&self) -> Result<&SpotifyClient> {
        self.client.as_ref().ok_or(Error::NotLoggedIn)
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.is_some()
    }
}
