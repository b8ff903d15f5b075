//! `.properties` writing.
//!
//! The writer serializes a source of key/value pairs, plus an optional
//! comment header and timestamp, to a byte stream under the configured
//! encoding. Output order is: user comments, timestamp comment, then one
//! `key=value` line per pair in the source's own iteration order. Every line
//! is terminated with the configured line ending.
//!
//! When the source is empty and neither comments nor the timestamp are
//! enabled, nothing at all is written.
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::{PropertiesMap, WriteOptions};
//!
//! let mut map = PropertiesMap::new();
//! map.insert("greeting".to_string(), "hello world".to_string());
//!
//! let mut out = Vec::new();
//! javaprops::writer::write(&map, &mut out, &WriteOptions::new()).unwrap();
//! ```

use crate::{escape, Result, WriteOptions};
use chrono::Local;
use std::io;

/// Writes `source` as `.properties` data to `stream`.
///
/// `source` is any iterator of `(key, value)` pairs; for a map this means its
/// own iteration order (insertion order for [`crate::PropertiesMap`]).
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the stream fails. No partial-write
/// compensation is attempted.
pub fn write<W, I, K, V>(source: I, mut stream: W, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let text = render(source, options);
    if text.is_empty() {
        return Ok(());
    }
    let mut bytes = Vec::with_capacity(text.len());
    options.encoding.encode_str(&text, &mut bytes)?;
    stream.write_all(&bytes)?;
    Ok(())
}

/// Composes the full output as text, before byte encoding.
pub fn render<I, K, V>(source: I, options: &WriteOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let eol = options.line_ending.as_str();
    let mut out = String::new();

    if let Some(comments) = &options.comments {
        for line in comment_lines(comments) {
            out.push_str(&escape::encode_comment(&line, options.encoding));
            out.push_str(eol);
        }
    }

    if options.timestamp {
        let at = options
            .timestamp_override
            .unwrap_or_else(|| Local::now().fixed_offset());
        // The java.util.Date#toString shape, e.g. "Fri Mar  1 12:00:00 +0000 2024".
        out.push_str("# ");
        out.push_str(&at.format("%a %b %e %H:%M:%S %z %Y").to_string());
        out.push_str(eol);
    }

    for (key, value) in source {
        out.push_str(&escape::encode_key(
            key.as_ref(),
            options.unicode_escape,
            options.encoding,
        ));
        out.push('=');
        out.push_str(&escape::encode_value(
            value.as_ref(),
            options.unicode_escape,
            options.encoding,
        ));
        out.push_str(eol);
    }
    out
}

/// Splits a comment block on any line terminator and normalizes each line to
/// start with a comment marker. An existing `#`/`!` prefix is kept, not
/// doubled.
fn comment_lines(comments: &str) -> Vec<String> {
    let normalized = comments.replace("\r\n", "\n").replace('\r', "\n");
    let mut segments: Vec<&str> = normalized.split('\n').collect();
    // A trailing terminator is not an extra empty comment line.
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }
    segments
        .into_iter()
        .map(|line| {
            if line.starts_with('#') || line.starts_with('!') {
                line.to_string()
            } else if line.is_empty() {
                "#".to_string()
            } else {
                format!("# {line}")
            }
        })
        .collect()
}
