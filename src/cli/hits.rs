use crate::{billboard, error, info, plot};

use super::{OutputOptions, emit, spinner};

/// Fetches chart data from `url` and plots it.
///
/// `field` picks the list out of a search envelope, e.g. `songs`.
pub async fn hits(url: &str, field: Option<String>, output: &OutputOptions) {
    let pb = spinner("Fetching chart data...");
    let fetched = billboard::fetch(url).await;
    pb.finish_and_clear();

    let mut data = match fetched {
        Ok(data) => data,
        Err(e) => error!("Cannot fetch chart data. Err: {}", e),
    };

    if let Some(field) = field {
        data = match billboard::peel(&data, &field) {
            Ok(inner) => inner,
            Err(e) => error!("Cannot extract '{}' from chart data. Err: {}", field, e),
        };
    }

    let spec = match plot::render_hits(&data) {
        Ok(spec) => spec,
        Err(e) => error!("Cannot plot chart data. Err: {}", e),
    };

    info!("Plotting {} songs", spec.data.len());
    emit(&spec, output).await;
}
