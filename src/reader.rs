//! Incremental `.properties` reading.
//!
//! The reader pulls chunks from a byte stream, decodes them under the selected
//! encoding, assembles logical lines (joining backslash continuations), and
//! emits each decoded key/value pair into a [`PropertySink`].
//!
//! ## Pipeline
//!
//! 1. Bytes are decoded chunk by chunk; a logical line may span any number of
//!    chunks, so the assembler holds the unresolved tail until more data
//!    arrives or the stream ends.
//! 2. Physical lines end at `\r\n`, `\n`, or a bare `\r`; a final line with no
//!    terminator still counts.
//! 3. A physical line ending in an *odd* number of backslashes continues into
//!    the next one: the lone backslash is stripped and the next line is
//!    appended with its leading whitespace removed. An even run is an escaped
//!    backslash and does not continue.
//! 4. The assembled logical line is classified: blank and `#`/`!` comment
//!    lines are ignored, everything else is a property.
//! 5. The key ends at the first unescaped `=`, `:`, or whitespace run; the
//!    value starts after the separator and any adjacent whitespace. Both
//!    halves pass through [`crate::escape::decode`] before reaching the sink.
//!
//! Duplicate keys call [`PropertySink::set`] once per occurrence, so the
//! sink's own map semantics decide the final value (last wins for a map).
//! Pairs delivered before a stream error stay in the sink; there is no
//! rollback.
//!
//! ## Examples
//!
//! ```rust
//! use javaprops::{PropertiesMap, ReadOptions};
//!
//! let bytes = b"# demo\nhost = localhost\nport: 8080\n";
//! let mut map = PropertiesMap::new();
//! javaprops::reader::read(&bytes[..], &mut map, &ReadOptions::new()).unwrap();
//! assert_eq!(map.get("host"), Some("localhost"));
//! assert_eq!(map.get("port"), Some("8080"));
//! ```

use crate::{escape, ReadOptions, Result};
use std::collections::HashMap;
use std::io;
use std::mem;

/// Stream chunk size. Logical lines routinely exceed this; the assembler
/// carries state across chunks.
const CHUNK_SIZE: usize = 8 * 1024;

/// The write surface of a property store.
///
/// The reader calls [`PropertySink::set`] once per parsed pair, in stream
/// order. Implementations decide what duplicates mean.
///
/// Closures work directly:
///
/// ```rust
/// let mut pairs = Vec::new();
/// javaprops::reader::read_str("a=1\nb=2", &mut |key: String, value: String| {
///     pairs.push((key, value));
/// });
/// assert_eq!(pairs.len(), 2);
/// ```
pub trait PropertySink {
    fn set(&mut self, key: String, value: String);
}

impl<F: FnMut(String, String)> PropertySink for F {
    fn set(&mut self, key: String, value: String) {
        self(key, value);
    }
}

impl PropertySink for HashMap<String, String> {
    fn set(&mut self, key: String, value: String) {
        self.insert(key, value);
    }
}

impl PropertySink for Vec<(String, String)> {
    fn set(&mut self, key: String, value: String) {
        self.push((key, value));
    }
}

/// Reads a `.properties` byte stream into `sink`.
///
/// Chunks are pulled from `stream` until exhaustion; the next chunk is only
/// requested after everything resolvable in the current buffer has been
/// emitted.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the stream fails and [`crate::Error::Decode`]
/// if its bytes are invalid for the configured encoding. Pairs already
/// delivered to the sink are kept either way.
pub fn read<R, S>(mut stream: R, sink: &mut S, options: &ReadOptions) -> Result<()>
where
    R: io::Read,
    S: PropertySink + ?Sized,
{
    let mut decoder = options.encoding.decoder();
    let mut assembler = LineAssembler::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut text = String::new();

    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        text.clear();
        decoder.decode_chunk(&chunk[..n], &mut text)?;
        assembler.push_text(&text, sink);
    }
    decoder.finish()?;
    assembler.finish(sink);
    Ok(())
}

/// Reads already-decoded `.properties` text into `sink`.
///
/// Character-level parsing is infallible: malformed escapes degrade
/// permissively instead of erroring.
pub fn read_str<S: PropertySink + ?Sized>(text: &str, sink: &mut S) {
    let mut assembler = LineAssembler::new();
    assembler.push_text(text, sink);
    assembler.finish(sink);
}

const fn is_line_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0C}')
}

/// Builds logical lines out of streamed characters.
///
/// Holds two pieces of cross-chunk state: the current incomplete physical
/// line, and a logical line waiting on continuation input.
struct LineAssembler {
    tail: String,
    logical: String,
    continuing: bool,
    last_was_cr: bool,
}

impl LineAssembler {
    fn new() -> Self {
        LineAssembler {
            tail: String::new(),
            logical: String::new(),
            continuing: false,
            last_was_cr: false,
        }
    }

    fn push_text<S: PropertySink + ?Sized>(&mut self, text: &str, sink: &mut S) {
        for c in text.chars() {
            if self.last_was_cr {
                self.last_was_cr = false;
                if c == '\n' {
                    // \r\n, possibly split across chunks
                    continue;
                }
            }
            match c {
                '\r' => {
                    self.end_physical_line(sink);
                    self.last_was_cr = true;
                }
                '\n' => self.end_physical_line(sink),
                _ => self.tail.push(c),
            }
        }
    }

    /// Flushes whatever remains once the stream is exhausted. An unterminated
    /// final line still yields a pair; a dangling continuation backslash is
    /// dropped, ending the logical line.
    fn finish<S: PropertySink + ?Sized>(&mut self, sink: &mut S) {
        self.last_was_cr = false;
        if !self.tail.is_empty() {
            self.end_physical_line(sink);
        }
        if self.continuing {
            self.continuing = false;
            let logical = mem::take(&mut self.logical);
            emit_logical(&logical, sink);
        }
    }

    fn end_physical_line<S: PropertySink + ?Sized>(&mut self, sink: &mut S) {
        let line = mem::take(&mut self.tail);
        if self.continuing {
            self.logical.push_str(line.trim_start_matches(is_line_space));
        } else {
            self.logical = line;
        }

        if ends_in_odd_backslashes(&self.logical) {
            self.logical.pop();
            self.continuing = true;
        } else {
            self.continuing = false;
            let logical = mem::take(&mut self.logical);
            emit_logical(&logical, sink);
        }
    }
}

/// An escaped backslash (even run) does not continue the line.
fn ends_in_odd_backslashes(line: &str) -> bool {
    let run = line.chars().rev().take_while(|&c| c == '\\').count();
    run % 2 == 1
}

/// Classifies one assembled logical line and emits it if it is a property.
fn emit_logical<S: PropertySink + ?Sized>(line: &str, sink: &mut S) {
    let trimmed = line.trim_start_matches(is_line_space);
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
        return;
    }
    let (raw_key, raw_value) = split_pair(trimmed);
    sink.set(escape::decode(raw_key), escape::decode(raw_value));
}

/// Splits a property line at the first unescaped `=`, `:`, or whitespace run,
/// whichever comes first. A backslash disqualifies the following character as
/// a split point. A whitespace run followed by `=`/`:` treats that separator
/// (and its trailing whitespace) as part of the split.
fn split_pair(line: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        match c {
            '\\' => {
                i += 2;
            }
            '=' | ':' => {
                let mut j = i + 1;
                while j < chars.len() && is_line_space(chars[j].1) {
                    j += 1;
                }
                let value = if j < chars.len() { &line[chars[j].0..] } else { "" };
                return (&line[..pos], value);
            }
            _ if is_line_space(c) => {
                let mut j = i + 1;
                while j < chars.len() && is_line_space(chars[j].1) {
                    j += 1;
                }
                if j < chars.len() && matches!(chars[j].1, '=' | ':') {
                    j += 1;
                    while j < chars.len() && is_line_space(chars[j].1) {
                        j += 1;
                    }
                }
                let value = if j < chars.len() { &line[chars[j].0..] } else { "" };
                return (&line[..pos], value);
            }
            _ => {
                i += 1;
            }
        }
    }
    (line, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertiesMap;

    fn parse(text: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        read_str(text, &mut pairs);
        pairs
    }

    #[test]
    fn separator_precedence() {
        assert_eq!(parse("foo bar"), vec![("foo".into(), "bar".into())]);
        assert_eq!(parse("foo:bar"), vec![("foo".into(), "bar".into())]);
        assert_eq!(parse("foo=bar"), vec![("foo".into(), "bar".into())]);
        assert_eq!(parse("foo = bar"), vec![("foo".into(), "bar".into())]);
        assert_eq!(parse("foo : bar"), vec![("foo".into(), "bar".into())]);
        assert_eq!(
            parse(r"foo\=bar=baz"),
            vec![("foo=bar".into(), "baz".into())]
        );
    }

    #[test]
    fn key_without_separator_has_empty_value() {
        assert_eq!(parse("lonely"), vec![("lonely".into(), String::new())]);
        assert_eq!(parse("trailing="), vec![("trailing".into(), String::new())]);
        assert_eq!(parse("spaced   "), vec![("spaced".into(), String::new())]);
    }

    #[test]
    fn empty_key_is_allowed() {
        assert_eq!(parse("=value"), vec![(String::new(), "value".into())]);
        assert_eq!(parse(":"), vec![(String::new(), String::new())]);
    }

    #[test]
    fn comments_and_blanks_are_ignored() {
        let text = "# comment\n! also a comment\n\n   \nkey=value\n";
        assert_eq!(parse(text), vec![("key".into(), "value".into())]);
    }

    #[test]
    fn leading_whitespace_before_key_is_trimmed() {
        assert_eq!(parse("   key=value"), vec![("key".into(), "value".into())]);
        assert_eq!(parse("\t! comment"), vec![]);
    }

    #[test]
    fn all_three_line_terminators() {
        let text = "a=1\r\nb=2\nc=3\rd=4";
        assert_eq!(
            parse(text),
            vec![
                ("a".into(), "1".into()),
                ("b".into(), "2".into()),
                ("c".into(), "3".into()),
                ("d".into(), "4".into()),
            ]
        );
    }

    #[test]
    fn continuation_joins_lines() {
        assert_eq!(parse("foo=b\\\nar"), vec![("foo".into(), "bar".into())]);
        // Leading whitespace on the continued line is stripped.
        assert_eq!(
            parse("fruits=apple, \\\n       banana\n"),
            vec![("fruits".into(), "apple, banana".into())]
        );
        // A continuation in the key half works too.
        assert_eq!(parse("fo\\\no=bar"), vec![("foo".into(), "bar".into())]);
    }

    #[test]
    fn escaped_backslash_does_not_continue() {
        assert_eq!(
            parse("foo=bar\\\\\nbaz=qux"),
            vec![
                ("foo".into(), "bar\\".into()),
                ("baz".into(), "qux".into()),
            ]
        );
        // Three backslashes: one escaped pair plus a continuation marker.
        assert_eq!(
            parse("foo=bar\\\\\\\nbaz"),
            vec![("foo".into(), "bar\\baz".into())]
        );
    }

    #[test]
    fn continuation_at_eof_drops_the_backslash() {
        assert_eq!(parse("foo=bar\\"), vec![("foo".into(), "bar".into())]);
    }

    #[test]
    fn continued_comment_stays_a_comment() {
        // Classification happens on the assembled logical line.
        assert_eq!(parse("# one \\\ntwo\nk=v"), vec![("k".into(), "v".into())]);
    }

    #[test]
    fn last_wins_through_map_sink() {
        let mut map = PropertiesMap::new();
        read_str("a=1\nb=2\na=3\n", &mut map);
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn duplicate_keys_all_reach_a_vec_sink() {
        assert_eq!(
            parse("a=1\na=2"),
            vec![("a".into(), "1".into()), ("a".into(), "2".into())]
        );
    }

    #[test]
    fn values_are_escape_decoded() {
        assert_eq!(
            parse(r"path=C\:\\temp"),
            vec![("path".into(), r"C:\temp".into())]
        );
        assert_eq!(
            parse(r"tab=a\tb"),
            vec![("tab".into(), "a\tb".into())]
        );
    }

    #[test]
    fn empty_input_yields_zero_pairs() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n\n"), vec![]);
    }

    #[test]
    fn crlf_split_across_chunks() {
        let mut pairs = Vec::new();
        let mut assembler = LineAssembler::new();
        assembler.push_text("a=1\r", &mut pairs);
        assembler.push_text("\nb=2\n", &mut pairs);
        assembler.finish(&mut pairs);
        assert_eq!(
            pairs,
            vec![("a".into(), "1".into()), ("b".into(), "2".into())]
        );
    }

    #[test]
    fn logical_line_larger_than_chunk() {
        let long: String = "x".repeat(20_000);
        let text = format!("big={long}\n");
        let mut map = PropertiesMap::new();
        read(text.as_bytes(), &mut map, &ReadOptions::new()).unwrap();
        assert_eq!(map.get("big"), Some(long.as_str()));
    }
}
