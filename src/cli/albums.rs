use tabled::Table;

use crate::{config::Endpoints, error, info, plot, spotify, warning};

use super::{OutputOptions, emit, logged_in_session, spinner};

/// What to plot from an album's audio features.
#[derive(Debug, Clone)]
pub struct FeatureOptions {
    pub columns: Vec<String>,
    pub title: String,
    pub average: bool,
    pub table: bool,
}

/// Prints the albums matching `query` so the user can pick an id.
pub async fn search(endpoints: &Endpoints, token: Option<String>, query: &str) {
    let session = logged_in_session(endpoints, token).await;

    let pb = spinner("Searching albums...");
    let result = spotify::search_album(&session, query).await;
    pb.finish_and_clear();

    match result {
        Ok(matches) if matches.is_empty() => warning!("No albums found for '{}'", query),
        Ok(matches) => println!("{}", Table::new(matches)),
        Err(e) => error!("Cannot search albums. Err: {}", e),
    }
}

/// Fetches the audio features of an album and plots them.
pub async fn features(
    endpoints: &Endpoints,
    token: Option<String>,
    album_id: &str,
    options: &FeatureOptions,
    output: &OutputOptions,
) {
    let session = logged_in_session(endpoints, token).await;

    let pb = spinner("Fetching audio features...");
    let result = spotify::fetch_features(&session, album_id).await;
    pb.finish_and_clear();

    let feats = match result {
        Ok(feats) => feats,
        Err(e) => error!("Cannot fetch audio features. Err: {}", e),
    };
    info!("Fetched features for {} tracks", feats.len());

    if options.table {
        match plot::melt(&feats, &options.columns) {
            Ok(rows) if options.average => println!("{}", Table::new(plot::average(&rows))),
            Ok(rows) => println!("{}", Table::new(rows)),
            Err(e) => error!("Cannot reshape audio features. Err: {}", e),
        }
        return;
    }

    let spec = if options.average {
        plot::render_avg_features(&feats, &options.columns, &options.title)
    } else {
        plot::render_features(&feats, &options.columns, &options.title)
    };

    match spec {
        Ok(spec) => emit(&spec, output).await,
        Err(e) => error!("Cannot plot audio features. Err: {}", e),
    }
}
