use std::path::Path;

use reqwest::Url;
use serde_json::Value;

use crate::{Error, Result};

/// Longest track name shown in full on a plot.
pub const MAX_NAME_LEN: usize = 15;

/// Shortens `name` for display.
///
/// Keeps the first [`MAX_NAME_LEN`] characters and appends `...` only when
/// something was cut off.
pub fn truncate_name(name: &str) -> String {
    let mut chars = name.chars();
    let mut short: String = chars.by_ref().take(MAX_NAME_LEN).collect();
    if chars.next().is_some() {
        short.push_str("...");
    }
    short
}

/// Reads `field` of a JSON record as an integer.
///
/// Accepts JSON integers, floats (truncated toward zero) and strings holding
/// an integer, which is how chart endpoints tend to mix them.
pub fn coerce_int(record: &Value, field: &str) -> Result<i64> {
    let value = record.get(field).ok_or_else(|| Error::MissingField {
        field: field.to_string(),
    })?;

    let coerced = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| Error::Coercion {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Reads `field` of a JSON record as text. Non-string scalars are rendered.
pub fn coerce_text(record: &Value, field: &str) -> Result<String> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(Error::MissingField {
            field: field.to_string(),
        }),
        Some(other) => Ok(other.to_string()),
    }
}

/// Writes rendered output, creating parent directories as needed.
pub async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, contents).await?;
    Ok(())
}

/// `file://` URL for a local path, percent-encoded.
///
/// Relative paths are resolved against the current directory.
pub fn file_url(path: &Path) -> Option<String> {
    let absolute = std::path::absolute(path).ok()?;
    Url::from_file_path(absolute).ok().map(String::from)
}
