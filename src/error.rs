//! Error types for `.properties` reading and writing.
//!
//! ## Error Categories
//!
//! - **Stream errors**: I/O failures on the underlying byte stream. The
//!   reader/writer stops immediately; pairs already delivered to the sink are
//!   kept (there is no rollback).
//! - **Encoding errors**: an unsupported encoding name, or a byte sequence
//!   that is not valid in the selected encoding.
//! - **Representability errors**: a character that cannot be encoded in the
//!   target encoding was handed to the raw byte encoder.
//!
//! Malformed escape sequences are *not* errors: the escape codec degrades
//! gracefully, matching how `java.util.Properties` tolerates slightly
//! malformed legacy files. See [`crate::escape::decode`].
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::{Encoding, Error};
//!
//! let result = Encoding::from_name("utf-99");
//! assert!(matches!(result, Err(Error::UnsupportedEncoding(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while loading or storing
/// `.properties` data.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error on the underlying byte stream
    #[error("IO error: {0}")]
    Io(String),

    /// Unknown or unsupported character encoding name
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Byte sequence that is invalid for the selected encoding
    #[error("Invalid {encoding} byte sequence on line {line}")]
    Decode {
        encoding: &'static str,
        line: usize,
    },

    /// Character that the target encoding cannot represent
    #[error("Character {ch:?} is not representable in {encoding}")]
    Unrepresentable { ch: char, encoding: &'static str },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a stream I/O error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use javaprops::Error;
    ///
    /// let err = Error::io("broken pipe");
    /// assert!(err.to_string().contains("broken pipe"));
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error for an encoding name the crate does not know.
    pub fn unsupported_encoding(name: &str) -> Self {
        Error::UnsupportedEncoding(name.to_string())
    }

    /// Creates a decode error for an invalid byte sequence.
    ///
    /// `line` is the physical line on which decoding failed, counted from 1.
    pub fn decode(encoding: &'static str, line: usize) -> Self {
        Error::Decode { encoding, line }
    }

    /// Creates an error for a character the target encoding cannot carry.
    pub fn unrepresentable(ch: char, encoding: &'static str) -> Self {
        Error::Unrepresentable { ch, encoding }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use javaprops::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
