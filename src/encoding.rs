//! Byte-stream encodings for `.properties` data.
//!
//! `.properties` files are exchanged as byte streams under a caller-selected
//! character encoding. Historically the format is ISO-8859-1 ([`Encoding::Latin1`],
//! the default, matching `java.util.Properties#load(InputStream)`), with UTF-8
//! and US-ASCII as the other encodings seen in the wild.
//!
//! This module provides:
//!
//! - [`Encoding`]: the supported encodings, selectable by name
//! - [`Decoder`]: incremental bytes-to-chars decoding that tolerates multi-byte
//!   sequences split across chunk boundaries
//! - [`Encoding::encode_str`]: chars-to-bytes encoding for the writer
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::Encoding;
//!
//! let enc = Encoding::from_name("ISO-8859-1").unwrap();
//! assert_eq!(enc, Encoding::Latin1);
//!
//! let mut out = String::new();
//! let mut decoder = Encoding::Latin1.decoder();
//! decoder.decode_chunk(&[0x61, 0xE9], &mut out).unwrap();
//! assert_eq!(out, "aé");
//! ```

use crate::{Error, Result};

/// A byte-to-character mapping for reading and writing `.properties` streams.
///
/// The default is [`Encoding::Latin1`], which is what the Java platform
/// assumes for `.properties` files loaded from an `InputStream`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    /// ISO-8859-1. Every byte maps directly to `U+0000`..=`U+00FF`.
    #[default]
    Latin1,
    /// UTF-8.
    Utf8,
    /// US-ASCII. Bytes `0x80`..=`0xFF` are invalid input.
    Ascii,
}

impl Encoding {
    /// Returns the canonical name of this encoding.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Utf8 => "UTF-8",
            Encoding::Ascii => "US-ASCII",
        }
    }

    /// Looks up an encoding by name.
    ///
    /// Matching is case-insensitive and accepts the common aliases
    /// (`latin1`, `iso-8859-1`, `utf8`, `us-ascii`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] for any name this crate does not
    /// know. This surfaces before any stream data is processed.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            _ => Err(Error::unsupported_encoding(name)),
        }
    }

    /// Returns `true` if `ch` can be written in this encoding without an
    /// escape sequence.
    #[must_use]
    pub const fn can_represent(&self, ch: char) -> bool {
        match self {
            Encoding::Latin1 => (ch as u32) <= 0xFF,
            Encoding::Utf8 => true,
            Encoding::Ascii => ch.is_ascii(),
        }
    }

    /// Encodes `s` into `out` as bytes of this encoding.
    ///
    /// The writer escapes unrepresentable characters before reaching this
    /// function, so the error path only triggers on direct misuse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrepresentable`] if a character falls outside the
    /// encoding's repertoire.
    pub fn encode_str(&self, s: &str, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Encoding::Utf8 => {
                out.extend_from_slice(s.as_bytes());
                Ok(())
            }
            Encoding::Latin1 | Encoding::Ascii => {
                for ch in s.chars() {
                    if !self.can_represent(ch) {
                        return Err(Error::unrepresentable(ch, self.name()));
                    }
                    out.push(ch as u8);
                }
                Ok(())
            }
        }
    }

    /// Creates an incremental decoder for this encoding.
    #[must_use]
    pub fn decoder(&self) -> Decoder {
        Decoder {
            encoding: *self,
            carry: [0; 4],
            carry_len: 0,
            line: 1,
        }
    }
}

/// Incremental bytes-to-characters decoder.
///
/// A multi-byte UTF-8 sequence may be split across two stream chunks; the
/// decoder holds the unfinished prefix until the next chunk arrives. Call
/// [`Decoder::finish`] after the last chunk to reject a truncated sequence.
#[derive(Debug)]
pub struct Decoder {
    encoding: Encoding,
    carry: [u8; 4],
    carry_len: usize,
    line: usize,
}

impl Decoder {
    /// Decodes one chunk of bytes, appending the resulting characters to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the bytes are invalid for the selected
    /// encoding, with the physical line number where decoding failed.
    pub fn decode_chunk(&mut self, bytes: &[u8], out: &mut String) -> Result<()> {
        match self.encoding {
            Encoding::Latin1 => {
                for &b in bytes {
                    if b == b'\n' {
                        self.line += 1;
                    }
                    out.push(char::from(b));
                }
                Ok(())
            }
            Encoding::Ascii => {
                for &b in bytes {
                    if b >= 0x80 {
                        return Err(Error::decode(self.encoding.name(), self.line));
                    }
                    if b == b'\n' {
                        self.line += 1;
                    }
                    out.push(char::from(b));
                }
                Ok(())
            }
            Encoding::Utf8 => self.decode_utf8(bytes, out),
        }
    }

    /// Signals end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the stream ended in the middle of a
    /// multi-byte sequence.
    pub fn finish(&mut self) -> Result<()> {
        if self.carry_len > 0 {
            return Err(Error::decode(self.encoding.name(), self.line));
        }
        Ok(())
    }

    fn push_str_counting(&mut self, s: &str, out: &mut String) {
        self.line += s.matches('\n').count();
        out.push_str(s);
    }

    fn decode_utf8(&mut self, mut bytes: &[u8], out: &mut String) -> Result<()> {
        // Finish a sequence carried over from the previous chunk one byte at
        // a time; the carry can never exceed 4 bytes.
        while self.carry_len > 0 && !bytes.is_empty() {
            self.carry[self.carry_len] = bytes[0];
            self.carry_len += 1;
            bytes = &bytes[1..];
            match std::str::from_utf8(&self.carry[..self.carry_len]) {
                Ok(s) => {
                    let completed = s.to_string();
                    self.push_str_counting(&completed, out);
                    self.carry_len = 0;
                }
                Err(e) => {
                    if e.error_len().is_some() || self.carry_len == 4 {
                        return Err(Error::decode(self.encoding.name(), self.line));
                    }
                    // Still incomplete, keep carrying.
                }
            }
        }

        match std::str::from_utf8(bytes) {
            Ok(s) => {
                self.push_str_counting(s, out);
                Ok(())
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                let valid =
                    std::str::from_utf8(valid).map_err(|_| Error::decode("UTF-8", self.line))?;
                self.push_str_counting(valid, out);
                match e.error_len() {
                    Some(_) => Err(Error::decode(self.encoding.name(), self.line)),
                    None => {
                        // Incomplete trailing sequence, hold it for the next chunk.
                        self.carry[..rest.len()].copy_from_slice(rest);
                        self.carry_len = rest.len();
                        Ok(())
                    }
                }
            }
        }
    }
}
