use serde_json::Value;

use crate::{
    Error, Result,
    billboard::json_kind,
    types::SongRecord,
    utils::{coerce_int, coerce_text},
};

use super::{Align, Channel, Layer, Mark, PlotSpec};

/// Keys of a chart search envelope that must be peeled off before plotting.
const ENVELOPE_KEYS: [&str; 2] = ["songs", "albums"];

/// Parses a flat list of chart records into [`SongRecord`]s.
///
/// An object holding a `songs` or `albums` key is the unpeeled search
/// response and is rejected with [`Error::Envelope`].
pub fn parse_songs(records: &Value) -> Result<Vec<SongRecord>> {
    let items = match records {
        Value::Array(items) => items,
        Value::Object(map) if ENVELOPE_KEYS.iter().any(|k| map.contains_key(*k)) => {
            return Err(Error::Envelope);
        }
        other => return Err(Error::NotAList(json_kind(other).to_string())),
    };

    items
        .iter()
        .map(|record| -> Result<SongRecord> {
            Ok(SongRecord {
                song_name: coerce_text(record, "song_name")?,
                highest_rank: coerce_int(record, "highest_rank")?,
                weeks_on_chart: coerce_int(record, "weeks_on_chart")?,
            })
        })
        .collect()
}

/// Scatter plot of how long songs charted against how high they got.
///
/// Points sit at (`weeks_on_chart`, `highest_rank`) with the song name
/// written just to their right. Records are plotted as given.
pub fn render_hits(records: &Value) -> Result<PlotSpec> {
    let songs = parse_songs(records)?;
    log::debug!("plotting {} songs", songs.len());

    let x = Channel::quantitative("weeks_on_chart");
    let y = Channel::quantitative("highest_rank");

    Ok(PlotSpec::from_rows(&songs)?
        .layer(Layer::new(Mark::Point, x.clone(), y.clone()))
        .layer(
            Layer::new(
                Mark::Text {
                    nudge_x: 0.5,
                    size: 6.0,
                    align: Align::Left,
                },
                x,
                y,
            )
            .label(Channel::nominal("song_name")),
        ))
}
