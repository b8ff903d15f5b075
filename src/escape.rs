//! The `.properties` escape codec.
//!
//! This module translates between raw on-disk text and logical string values:
//! [`decode`] on read, [`encode_key`]/[`encode_value`] on write. All functions
//! are pure and stateless; `decode(encode(s)) == s` holds for every `s`.
//!
//! ## Escape forms
//!
//! | On disk        | Logical value                          |
//! |----------------|----------------------------------------|
//! | `\t \n \r \f`  | TAB, LF, CR, FF                        |
//! | `\\ \: \= \# \!` | the literal character                |
//! | `\uXXXX`       | the BMP code point (4 hex digits)      |
//! | `\uD8xx\uDCxx` | one astral code point (surrogate pair) |
//! | any other `\X` | the literal `X` (backslash dropped)    |
//!
//! The permissive `\X` rule matches `java.util.Properties`: malformed escapes
//! never abort a read. The fallbacks for the underspecified corners are fixed
//! here and covered by tests: a truncated `\u` escape keeps the `u` and any
//! partial digits literally, a trailing lone backslash stays a literal
//! backslash, and an unpaired surrogate escape becomes `U+FFFD`.
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::escape;
//!
//! assert_eq!(escape::decode(r"a\tb"), "a\tb");
//! assert_eq!(escape::decode(r"\u0041"), "A");
//! assert_eq!(escape::decode(r"\q"), "q");
//! ```

use crate::Encoding;

/// Decodes raw `.properties` text into its logical string value.
///
/// Never fails: malformed escapes degrade per the table in the module docs.
#[must_use]
pub fn decode(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            out.push(c);
            i += 1;
            continue;
        }
        let Some(&esc) = chars.get(i + 1) else {
            // Backslash as the final character: literal.
            out.push('\\');
            break;
        };
        match esc {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\u{0C}'),
            'u' => {
                let consumed = decode_unicode(&chars, i, &mut out);
                i += consumed;
                continue;
            }
            // Covers \\ \: \= \# \! and every unknown escape alike.
            other => out.push(other),
        }
        i += 2;
    }
    out
}

/// Decodes the `\uXXXX` escape starting at `chars[at]` (which is the `\`),
/// pushing the result onto `out`. Returns how many chars were consumed.
fn decode_unicode(chars: &[char], at: usize, out: &mut String) -> usize {
    let Some(unit) = hex4(chars, at + 2) else {
        // Truncated escape: fall back to the unknown-escape rule for 'u'.
        out.push('u');
        return 2;
    };

    if (0xD800..=0xDBFF).contains(&unit) {
        // High surrogate: combines only with an immediately following low
        // surrogate escape.
        if chars.get(at + 6) == Some(&'\\') && chars.get(at + 7) == Some(&'u') {
            if let Some(low) = hex4(chars, at + 8) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    if let Some(Ok(ch)) = char::decode_utf16([unit, low]).next() {
                        out.push(ch);
                    }
                    return 12;
                }
            }
        }
        out.push(char::REPLACEMENT_CHARACTER);
        return 6;
    }

    match char::from_u32(u32::from(unit)) {
        Some(ch) => out.push(ch),
        // Unpaired low surrogate.
        None => out.push(char::REPLACEMENT_CHARACTER),
    }
    6
}

/// Reads exactly 4 hex digits at `chars[at..at + 4]`.
fn hex4(chars: &[char], at: usize) -> Option<u16> {
    let mut value: u16 = 0;
    for k in 0..4 {
        let digit = chars.get(at + k)?.to_digit(16)?;
        value = (value << 4) | digit as u16;
    }
    Some(value)
}

/// Encodes a key for writing.
///
/// Separators and comment markers (`= : # !`) and every space are escaped so
/// the key survives the reader's separator scan intact.
#[must_use]
pub fn encode_key(key: &str, unicode_escape: bool, encoding: Encoding) -> String {
    let mut out = String::with_capacity(key.len());
    encode_into(key, true, unicode_escape, encoding, &mut out);
    out
}

/// Encodes a value for writing.
///
/// Leading spaces are escaped per character so they are not absorbed by the
/// reader's post-separator whitespace skip; embedded separators stay raw.
#[must_use]
pub fn encode_value(value: &str, unicode_escape: bool, encoding: Encoding) -> String {
    let mut out = String::with_capacity(value.len());
    encode_into(value, false, unicode_escape, encoding, &mut out);
    out
}

/// Encodes one comment line for writing. Characters the target encoding
/// cannot carry are Unicode-escaped; everything else passes through verbatim.
#[must_use]
pub fn encode_comment(line: &str, encoding: Encoding) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if encoding.can_represent(c) {
            out.push(c);
        } else {
            escape_unicode(c, &mut out);
        }
    }
    out
}

fn encode_into(
    s: &str,
    key_position: bool,
    unicode_escape: bool,
    encoding: Encoding,
    out: &mut String,
) {
    let mut leading = true;
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{0C}' => out.push_str("\\f"),
            ' ' if key_position || leading => {
                out.push('\\');
                out.push(' ');
            }
            '=' | ':' | '#' | '!' if key_position => {
                out.push('\\');
                out.push(c);
            }
            _ if c.is_ascii_control() => escape_unicode(c, out),
            _ if !c.is_ascii() && (unicode_escape || !encoding.can_represent(c)) => {
                escape_unicode(c, out);
            }
            _ => out.push(c),
        }
        if c != ' ' {
            leading = false;
        }
    }
}

/// Emits `\uXXXX` for one char; astral chars emit two tokens (UTF-16 pair).
fn escape_unicode(c: char, out: &mut String) {
    let mut buf = [0u16; 2];
    for unit in c.encode_utf16(&mut buf) {
        out.push_str(&format!("\\u{unit:04X}"));
    }
}
