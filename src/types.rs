use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// One song of a chart search, with its two numeric columns coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub song_name: String,
    pub highest_rank: i64,
    pub weeks_on_chart: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub albums: AlbumPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumPage {
    pub items: Vec<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub name: String,
}

/// An album search hit, numbered for the user to pick from.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct AlbumMatch {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    #[tabled(rename = "artist")]
    pub artist_name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<FeatureRecord>,
}

/// Audio features of one track.
///
/// Everything except `id` and `name` is kept as returned by the API, so any
/// numeric field (`danceability`, `energy`, `tempo`, ...) can be plotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub features: BTreeMap<String, Value>,
}

impl FeatureRecord {
    /// Numeric value of `feature`, if present.
    pub fn value(&self, feature: &str) -> Option<f64> {
        self.features.get(feature).and_then(Value::as_f64)
    }
}

/// One (track, feature) cell of a melted feature table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct MeltedRow {
    pub name: String,
    pub feature: String,
    pub value: f64,
}

/// Mean of one feature across all tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct FeatureAverage {
    pub feature: String,
    pub value: f64,
}
