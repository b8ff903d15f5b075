//! # javaprops
//!
//! A reader and writer for the Java `.properties` text format: ordered
//! key/value pairs with comments, line continuations, and Unicode escaping,
//! exchanged over byte streams under a configurable character encoding.
//!
//! ## Key Features
//!
//! - **Incremental reading**: chunked stream parsing; a logical line may be
//!   far larger than any single read
//! - **Full continuation handling**: the odd/even trailing-backslash rule,
//!   with leading whitespace stripped from continued lines
//! - **Bidirectional Unicode escaping**: `\uXXXX` escapes including
//!   surrogate-pair encoding of astral code points
//! - **Encodings**: ISO-8859-1 (the `java.util.Properties` default), UTF-8,
//!   and US-ASCII, selectable by name
//! - **Permissive decoding**: malformed escape sequences degrade gracefully
//!   instead of aborting the read, like the Java implementation
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! javaprops = "0.1"
//! ```
//!
//! ### Loading and storing
//!
//! ```rust
//! use javaprops::{PropertiesMap, ReadOptions, WriteOptions};
//!
//! let input = b"# database settings\ndb.host=localhost\ndb.port: 5432\n";
//! let map = javaprops::load_from_slice(input, &ReadOptions::new()).unwrap();
//! assert_eq!(map.get("db.host"), Some("localhost"));
//! assert_eq!(map.get("db.port"), Some("5432"));
//!
//! let text = javaprops::store_to_string(&map, &WriteOptions::new());
//! let back = javaprops::parse_str(&text);
//! assert_eq!(back, map);
//! ```
//!
//! ### Streaming into a custom sink
//!
//! The reader delivers pairs into any [`PropertySink`]; closures qualify:
//!
//! ```rust
//! use javaprops::ReadOptions;
//!
//! let input: &[u8] = b"a=1\nb=2\na=3\n";
//! let mut count = 0usize;
//! javaprops::load_from_reader(input, &mut |_k: String, _v: String| count += 1,
//!     &ReadOptions::new()).unwrap();
//! assert_eq!(count, 3); // duplicates reach the sink once per occurrence
//! ```
//!
//! ### Comments and timestamps
//!
//! ```rust
//! use javaprops::{LineEnding, PropertiesMap, WriteOptions};
//!
//! let mut map = PropertiesMap::new();
//! map.insert("k".to_string(), "v".to_string());
//!
//! let options = WriteOptions::new()
//!     .with_comments("Generated file")
//!     .with_line_ending(LineEnding::Lf);
//! let text = javaprops::store_to_string(&map, &options);
//! assert_eq!(text, "# Generated file\nk=v\n");
//! ```
//!
//! ## Format Notes
//!
//! Keys end at the first unescaped `=`, `:`, or whitespace run. Comment lines
//! start with `#` or `!`. A line ending in an odd number of backslashes
//! continues onto the next physical line. See [`escape`] for the full escape
//! table and the documented fallbacks for malformed sequences.

pub mod encoding;
pub mod error;
pub mod escape;
pub mod map;
pub mod options;
pub mod reader;
pub mod writer;

pub use encoding::{Decoder, Encoding};
pub use error::{Error, Result};
pub use map::PropertiesMap;
pub use options::{LineEnding, ReadOptions, WriteOptions};
pub use reader::PropertySink;

use std::io::{self, IsTerminal};

/// Parses already-decoded `.properties` text into a [`PropertiesMap`].
///
/// Character-level parsing never fails; malformed escapes degrade
/// permissively. Duplicate keys resolve last-wins.
///
/// # Examples
///
/// ```rust
/// let map = javaprops::parse_str("name=value\n# ignored\n");
/// assert_eq!(map.get("name"), Some("value"));
/// ```
#[must_use]
pub fn parse_str(text: &str) -> PropertiesMap {
    let mut map = PropertiesMap::new();
    reader::read_str(text, &mut map);
    map
}

/// Loads `.properties` bytes into a [`PropertiesMap`].
///
/// # Errors
///
/// Returns an error if the bytes are invalid for the configured encoding.
pub fn load_from_slice(bytes: &[u8], options: &ReadOptions) -> Result<PropertiesMap> {
    let mut map = PropertiesMap::new();
    reader::read(bytes, &mut map, options)?;
    Ok(map)
}

/// Loads a `.properties` byte stream into `sink`, pulling chunks until the
/// stream is exhausted.
///
/// # Examples
///
/// ```rust
/// use javaprops::{PropertiesMap, ReadOptions};
/// use std::io::Cursor;
///
/// let stream = Cursor::new(b"key=value\n".to_vec());
/// let mut map = PropertiesMap::new();
/// javaprops::load_from_reader(stream, &mut map, &ReadOptions::new()).unwrap();
/// assert_eq!(map.get("key"), Some("value"));
/// ```
///
/// # Errors
///
/// Returns an error on stream failure or invalid bytes for the configured
/// encoding. Pairs already delivered to the sink are kept; there is no
/// rollback.
pub fn load_from_reader<R, S>(stream: R, sink: &mut S, options: &ReadOptions) -> Result<()>
where
    R: io::Read,
    S: PropertySink + ?Sized,
{
    reader::read(stream, sink, options)
}

/// Loads `.properties` data from standard input.
///
/// When stdin is an interactive terminal with no piped data, this returns
/// immediately with zero pairs instead of blocking on the terminal.
///
/// # Errors
///
/// Same conditions as [`load_from_reader`].
pub fn load_from_stdin<S>(sink: &mut S, options: &ReadOptions) -> Result<()>
where
    S: PropertySink + ?Sized,
{
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(());
    }
    reader::read(stdin.lock(), sink, options)
}

/// Stores key/value pairs as `.properties` text.
///
/// Equivalent to [`store_to_writer`] minus the byte encoding step; the
/// composition itself cannot fail.
#[must_use]
pub fn store_to_string<I, K, V>(source: I, options: &WriteOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    writer::render(source, options)
}

/// Stores key/value pairs as a `.properties` byte stream.
///
/// # Examples
///
/// ```rust
/// use javaprops::{PropertiesMap, WriteOptions};
///
/// let mut map = PropertiesMap::new();
/// map.insert("key".to_string(), "value".to_string());
///
/// let mut buffer = Vec::new();
/// javaprops::store_to_writer(&map, &mut buffer, &WriteOptions::new()).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
pub fn store_to_writer<W, I, K, V>(source: I, stream: W, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    writer::write(source, stream, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_store_roundtrip() {
        let mut map = PropertiesMap::new();
        map.insert("host".to_string(), "localhost".to_string());
        map.insert("greeting".to_string(), "héllo wörld".to_string());

        let text = store_to_string(&map, &WriteOptions::new());
        let back = parse_str(&text);
        assert_eq!(back, map);
    }

    #[test]
    fn test_load_from_slice_utf8() {
        let bytes = "name=J\u{00FC}rgen\n".as_bytes();
        let options = ReadOptions::new().with_encoding(Encoding::Utf8);
        let map = load_from_slice(bytes, &options).unwrap();
        assert_eq!(map.get("name"), Some("J\u{00FC}rgen"));
    }

    #[test]
    fn test_load_from_empty_input() {
        let map = load_from_slice(b"", &ReadOptions::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_store_through_writer() {
        let mut map = PropertiesMap::new();
        map.insert("a".to_string(), "1".to_string());

        let mut buffer = Vec::new();
        let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
        store_to_writer(&map, &mut buffer, &options).unwrap();
        assert_eq!(buffer, b"a=1\n");
    }

    #[test]
    fn test_unsupported_encoding_name() {
        assert!(Encoding::from_name("utf-32").is_err());
    }
}
