use std::collections::BTreeMap;

use crate::{
    Error, Result,
    types::{FeatureAverage, FeatureRecord, MeltedRow},
    utils::truncate_name,
};

use super::{Channel, Layer, Mark, PlotSpec, XLabels};

/// Features plotted when the caller does not pick any.
pub const DEFAULT_FEATURES: [&str; 2] = ["danceability", "energy"];

/// Placeholder title nudging workshop users to set their own.
pub const DEFAULT_TITLE: &str = "Add a Title";

const FACET_COLUMNS: u32 = 4;

/// Pivots feature records from wide to long.
///
/// Emits one row per (record, column) pair, record by record and within a
/// record in `columns` order. Track names are shortened for display.
pub fn melt<S: AsRef<str>>(records: &[FeatureRecord], columns: &[S]) -> Result<Vec<MeltedRow>> {
    let mut rows = Vec::with_capacity(records.len() * columns.len());

    for record in records {
        let name = record.name.as_deref().ok_or_else(|| Error::MissingField {
            field: "name".to_string(),
        })?;
        let short = truncate_name(name);

        for column in columns {
            let feature = column.as_ref();
            let value = record.value(feature).ok_or_else(|| Error::MissingFeature {
                track: name.to_string(),
                feature: feature.to_string(),
            })?;

            rows.push(MeltedRow {
                name: short.clone(),
                feature: feature.to_string(),
                value,
            });
        }
    }

    Ok(rows)
}

/// Mean `value` per feature, ordered by feature name.
pub fn average(rows: &[MeltedRow]) -> Vec<FeatureAverage> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.feature.as_str()).or_insert((0.0, 0));
        entry.0 += row.value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(feature, (sum, count))| FeatureAverage {
            feature: feature.to_string(),
            value: sum / count as f64,
        })
        .collect()
}

/// Bar chart of every track's features, one panel per track.
pub fn render_features<S: AsRef<str>>(
    records: &[FeatureRecord],
    columns: &[S],
    title: &str,
) -> Result<PlotSpec> {
    let melted = melt(records, columns)?;

    Ok(PlotSpec::from_rows(&melted)?
        .layer(feature_bars())
        .facet_wrap("name", FACET_COLUMNS)
        .title(title)
        .x_labels(XLabels::Hidden))
}

/// Bar chart of each feature averaged over all tracks.
pub fn render_avg_features<S: AsRef<str>>(
    records: &[FeatureRecord],
    columns: &[S],
    title: &str,
) -> Result<PlotSpec> {
    let averaged = average(&melt(records, columns)?);

    Ok(PlotSpec::from_rows(&averaged)?
        .layer(feature_bars())
        .title(title)
        .x_labels(XLabels::Rotated(45.0)))
}

fn feature_bars() -> Layer {
    Layer::new(
        Mark::Bar,
        Channel::nominal("feature"),
        Channel::quantitative("value"),
    )
    .fill(Channel::nominal("feature"))
}
