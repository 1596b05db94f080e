//! Client for the Billboard chart search endpoint.
//!
//! The endpoint (for example `http://billboard.modulo.site/search/artist?q=kanye`)
//! answers with JSON. Search responses wrap the records in an envelope such
//! as `{"songs": [...], "albums": [...]}`; [`peel`] pulls one list out of it
//! for plotting.

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;

use crate::{Error, Result};

/// Browser user agent sent with every chart request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_6) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/63.0.3239.132 Safari/537.36";

/// The fixed header set sent to the chart endpoint.
pub fn headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

/// Fetches chart data from `url` and returns the decoded JSON body.
///
/// The response status is not inspected: an error payload that is valid
/// JSON comes back like any other body. Connection failures and bodies that
/// are not JSON are errors.
///
/// # Example
///
/// ```
/// let data = fetch("http://billboard.modulo.site/search/artist?q=kanye").await?;
/// let songs = peel(&data, "songs")?;
/// ```
pub async fn fetch(url: &str) -> Result<Value> {
    log::debug!("GET {}", url);

    let client = Client::new();
    let response = client.get(url).headers(headers()).send().await?;

    log::debug!("chart endpoint answered {}", response.status());
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Extracts `key` from an envelope object.
pub fn peel(data: &Value, key: &str) -> Result<Value> {
    match data {
        Value::Object(map) => map.get(key).cloned().ok_or_else(|| Error::MissingField {
            field: key.to_string(),
        }),
        other => Err(Error::NotAnEnvelope {
            key: key.to_string(),
            kind: json_kind(other).to_string(),
        }),
    }
}

/// Human name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
