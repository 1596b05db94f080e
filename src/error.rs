//! The errors that can occur.

use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The possible errors that can occur.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request failed or returned an error status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A response body or record could not be decoded.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing a rendered plot failed.
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// The workshop token endpoint refused to hand out a token.
    #[error("Logging in to spotify requires a special token only available during workshop")]
    SpecialAccess,
    /// An authenticated operation ran before `login`.
    #[error("Not logged in to spotify. Run login first.")]
    NotLoggedIn,

    /// The chart data was still wrapped in its `songs`/`albums` envelope.
    #[error("Did you remember to get only the song data?")]
    Envelope,
    /// The chart data was neither an envelope nor a list of songs.
    #[error("Expected a list of song records, got {0}")]
    NotAList(String),
    /// An envelope field was requested from something that is not an object.
    #[error("Expected an object with a '{key}' field, got {kind}")]
    NotAnEnvelope { key: String, kind: String },
    /// A numeric chart field did not parse as an integer.
    #[error("Field '{field}' is not an integer: {value}")]
    Coercion { field: String, value: String },
    /// A required field is absent.
    #[error("Missing field '{field}'")]
    MissingField { field: String },
    /// A track has no numeric value for the requested feature.
    #[error("Track '{track}' has no numeric feature '{feature}'")]
    MissingFeature { track: String, feature: String },

    /// Audio features came back for a track that is not on the album.
    #[error("No track with id '{0}' in the album track listing")]
    UnknownTrack(String),
}
