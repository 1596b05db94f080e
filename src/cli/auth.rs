use crate::{config::Endpoints, success};

use super::logged_in_session;

/// Checks that a Spotify session can be created with the given token, or the
/// workshop token when none is given.
pub async fn login(endpoints: &Endpoints, token: Option<String>) {
    let session = logged_in_session(endpoints, token).await;
    if let Ok(client) = session.client() {
        success!("Logged in to spotify ({})", client.api_url());
    }
}
