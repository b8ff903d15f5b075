//! Configuration options for reading and writing `.properties` streams.
//!
//! This module provides:
//!
//! - [`ReadOptions`]: byte encoding for the reader
//! - [`WriteOptions`]: encoding, comment header, timestamp, Unicode escaping,
//!   and line-ending convention for the writer
//! - [`LineEnding`]: choice of terminator for emitted lines
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::{Encoding, LineEnding, ReadOptions, WriteOptions};
//!
//! let read = ReadOptions::new().with_encoding(Encoding::Utf8);
//!
//! let write = WriteOptions::new()
//!     .with_comments("Generated configuration")
//!     .with_timestamp(true)
//!     .with_unicode_escape(false)
//!     .with_line_ending(LineEnding::Lf);
//! ```

use crate::Encoding;
use chrono::{DateTime, FixedOffset};

/// Line terminator used for every logical line the writer emits.
///
/// # Examples
///
/// ```rust
/// use javaprops::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Returns the platform convention: CRLF on Windows, LF elsewhere.
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::platform()
    }
}

/// Configuration for reading a `.properties` byte stream.
///
/// # Examples
///
/// ```rust
/// use javaprops::{Encoding, ReadOptions};
///
/// let options = ReadOptions::new();
/// assert_eq!(options.encoding, Encoding::Latin1);
///
/// let options = ReadOptions::new().with_encoding(Encoding::Utf8);
/// assert_eq!(options.encoding, Encoding::Utf8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReadOptions {
    /// Byte-to-character mapping for the stream. Defaults to ISO-8859-1,
    /// matching `java.util.Properties#load(InputStream)`.
    pub encoding: Encoding,
}

impl ReadOptions {
    /// Creates default options (ISO-8859-1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the byte encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Configuration for writing a `.properties` byte stream.
///
/// # Examples
///
/// ```rust
/// use javaprops::WriteOptions;
///
/// let options = WriteOptions::new();
/// assert!(options.unicode_escape);
/// assert!(!options.timestamp);
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Target byte encoding. Defaults to ISO-8859-1.
    pub encoding: Encoding,
    /// Optional free-text comment header, emitted before any pairs. Split on
    /// line terminators; each line gets a `# ` prefix unless it already starts
    /// with `#` or `!`.
    pub comments: Option<String>,
    /// Emit a timestamp comment line after the user comments.
    pub timestamp: bool,
    /// Fixed time for the timestamp line. When `None` the current local time
    /// is used; tests pass an explicit value for deterministic output.
    pub timestamp_override: Option<DateTime<FixedOffset>>,
    /// Escape characters above `U+007F` as `\uXXXX`. Enabled by default.
    /// Characters the target encoding cannot represent are escaped either way.
    pub unicode_escape: bool,
    /// Terminator for every emitted line. Defaults to the platform convention.
    pub line_ending: LineEnding,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            encoding: Encoding::default(),
            comments: None,
            timestamp: false,
            timestamp_override: None,
            unicode_escape: true,
            line_ending: LineEnding::default(),
        }
    }
}

impl WriteOptions {
    /// Creates default options (ISO-8859-1, Unicode escaping on, no comments,
    /// no timestamp, platform line ending).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target byte encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the comment header emitted at the top of the output.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Enables or disables the timestamp comment line.
    #[must_use]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Pins the timestamp line to a fixed instant instead of the current
    /// local time. Implies nothing about [`WriteOptions::timestamp`]; enable
    /// that separately.
    #[must_use]
    pub fn with_timestamp_at(mut self, at: DateTime<FixedOffset>) -> Self {
        self.timestamp_override = Some(at);
        self
    }

    /// Enables or disables `\uXXXX` escaping of non-ASCII characters.
    #[must_use]
    pub fn with_unicode_escape(mut self, enabled: bool) -> Self {
        self.unicode_escape = enabled;
        self
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
