//! # Plot Module
//!
//! Turns tidy tables into plot specifications. A [`PlotSpec`] is a small
//! grammar of graphics: a list of data rows, one or more layers mapping
//! columns to visual channels, an optional facet wrap and a few axis
//! tweaks. Rendering is left to Vega-Lite: [`PlotSpec::to_vega_lite`]
//! emits a Vega-Lite v5 document and [`PlotSpec::to_html`] wraps it in a
//! standalone page that loads `vega-embed`.
//!
//! ## Renderers
//!
//! - [`render_hits`] - chart runs of songs as a labelled scatter plot
//! - [`render_features`] - one bar per track and feature, faceted by track
//! - [`render_avg_features`] - one bar per feature, averaged over tracks

mod features;
mod hits;

pub use features::{
    DEFAULT_FEATURES, DEFAULT_TITLE, average, melt, render_avg_features, render_features,
};
pub use hits::{parse_songs, render_hits};

use serde::Serialize;
use serde_json::{Map, Value, json};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// How a column is interpreted by a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
}

/// A column mapped onto a visual channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub field: String,
    pub kind: FieldType,
}

impl Channel {
    pub fn quantitative(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldType::Quantitative,
        }
    }

    pub fn nominal(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldType::Nominal,
        }
    }

    fn to_json(&self) -> Value {
        json!({ "field": self.field, "type": self.kind })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Point,
    Bar,
    /// Text drawn at the data position shifted by `nudge_x` x-axis units.
    Text {
        nudge_x: f64,
        size: f64,
        align: Align,
    },
}

/// One geometry and its aesthetic mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub mark: Mark,
    pub x: Channel,
    pub y: Channel,
    pub fill: Option<Channel>,
    pub label: Option<Channel>,
}

impl Layer {
    pub fn new(mark: Mark, x: Channel, y: Channel) -> Self {
        Self {
            mark,
            x,
            y,
            fill: None,
            label: None,
        }
    }

    pub fn fill(mut self, channel: Channel) -> Self {
        self.fill = Some(channel);
        self
    }

    pub fn label(mut self, channel: Channel) -> Self {
        self.label = Some(channel);
        self
    }
}

/// Tick labels along the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XLabels {
    Shown,
    Hidden,
    /// Rotated counter-clockwise by the given degrees.
    Rotated(f64),
}

/// Small multiples of the whole plot, one per value of `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetWrap {
    pub field: String,
    pub columns: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: Option<String>,
    pub data: Vec<Value>,
    pub layers: Vec<Layer>,
    pub facet: Option<FacetWrap>,
    pub x_labels: XLabels,
}

impl PlotSpec {
    /// Starts a spec over `rows`, each serialized to a JSON object.
    pub fn from_rows<T: Serialize>(rows: &[T]) -> crate::Result<Self> {
        let data = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            title: None,
            data,
            layers: Vec::new(),
            facet: None,
            x_labels: XLabels::Shown,
        })
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn facet_wrap(mut self, field: &str, columns: u32) -> Self {
        self.facet = Some(FacetWrap {
            field: field.to_string(),
            columns,
        });
        self
    }

    pub fn x_labels(mut self, labels: XLabels) -> Self {
        self.x_labels = labels;
        self
    }

    /// Builds the Vega-Lite v5 document for this plot.
    pub fn to_vega_lite(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("$schema".into(), json!(VEGA_LITE_SCHEMA));
        if let Some(title) = &self.title {
            doc.insert("title".into(), json!(title));
        }
        doc.insert("data".into(), json!({ "values": self.data }));

        let body = self.layers_json();
        match &self.facet {
            Some(facet) => {
                doc.insert(
                    "facet".into(),
                    Channel::nominal(&facet.field).to_json(),
                );
                doc.insert("columns".into(), json!(facet.columns));
                doc.insert("spec".into(), Value::Object(body));
            }
            None => doc.extend(body),
        }

        Value::Object(doc)
    }

    /// Standalone HTML page that renders the plot with `vega-embed`.
    pub fn to_html(&self) -> String {
        let title = self.title.as_deref().unwrap_or("chartspot");
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
  <div id="vis"></div>
  <script type="text/javascript">
    vegaEmbed('#vis', {spec});
  </script>
</body>
</html>
"#,
            title = html_escape(title),
            spec = self.to_vega_lite().to_string().replace("</", "<\\/"),
        )
    }

    fn layers_json(&self) -> Map<String, Value> {
        let mut layers: Vec<Map<String, Value>> =
            self.layers.iter().map(|l| self.layer_json(l)).collect();

        if layers.len() == 1 {
            return layers.remove(0);
        }

        let mut body = Map::new();
        body.insert(
            "layer".into(),
            Value::Array(layers.into_iter().map(Value::Object).collect()),
        );
        body
    }

    fn layer_json(&self, layer: &Layer) -> Map<String, Value> {
        let mut out = Map::new();
        let mut x = layer.x.to_json();

        let mark = match &layer.mark {
            Mark::Point => json!({ "type": "point", "filled": true }),
            Mark::Bar => json!({ "type": "bar" }),
            Mark::Text {
                nudge_x,
                size,
                align,
            } => {
                // shift in data units, vega-lite's dx is in pixels
                let shifted = format!("{}_nudged", layer.x.field);
                out.insert(
                    "transform".into(),
                    json!([{
                        "calculate": format!("datum['{}'] + {}", layer.x.field, nudge_x),
                        "as": shifted,
                    }]),
                );
                x = json!({ "field": shifted, "type": layer.x.kind, "title": layer.x.field });
                json!({ "type": "text", "align": align, "fontSize": size })
            }
        };

        match self.x_labels {
            XLabels::Shown => {}
            XLabels::Hidden => {
                x["axis"] = json!({ "labels": false, "ticks": false });
            }
            XLabels::Rotated(angle) => {
                x["axis"] = json!({ "labelAngle": -angle });
            }
        }

        let mut encoding = Map::new();
        encoding.insert("x".into(), x);
        encoding.insert("y".into(), layer.y.to_json());
        if let Some(fill) = &layer.fill {
            encoding.insert("color".into(), fill.to_json());
        }
        if let Some(label) = &layer.label {
            encoding.insert("text".into(), label.to_json());
        }

        out.insert("mark".into(), mark);
        out.insert("encoding".into(), Value::Object(encoding));
        out
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
