use reqwest::Client;

use crate::{Error, Result, config::Endpoints};

use super::SpotifyClient;

/// Creates an authenticated Spotify client.
///
/// Uses `token` when given. Otherwise the shared workshop token is fetched
/// from `endpoints.token_url`; outside the workshop that URL answers with an
/// error status, which is reported as [`Error::SpecialAccess`] instead of
/// the raw HTTP error. Connection failures are still reported as HTTP
/// errors.
///
/// # Example
///
/// ```
/// let client = login(&Endpoints::from_env(), None).await?;
/// ```
pub async fn login(endpoints: &Endpoints, token: Option<String>) -> Result<SpotifyClient> {
    let token = match token {
        Some(token) => token,
        None => fetch_workshop_token(&endpoints.token_url).await?,
    };

    log::info!("logged in to spotify at {}", endpoints.api_url);
    Ok(SpotifyClient::new(&endpoints.api_url, token))
}

async fn fetch_workshop_token(url: &str) -> Result<String> {
    log::debug!("GET {}", url);

    let client = Client::new();
    let response = client.get(url).send().await?;
    let response = response.error_for_status().map_err(|e| {
        log::debug!("token endpoint refused: {}", e);
        Error::SpecialAccess
    })?;

    Ok(response.text().await?.trim().to_string())
}
