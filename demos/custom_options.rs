//! Customizing `.properties` output with WriteOptions.
//!
//! Run with: cargo run --example custom_options

use javaprops::{Encoding, LineEnding, PropertiesMap, ReadOptions, WriteOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut map = PropertiesMap::new();
    map.insert("app.name".to_string(), "Caf\u{E9} Manager".to_string());
    map.insert("app.motto".to_string(), "Fast \u{1F980} service".to_string());

    // Default: ISO-8859-1 with \uXXXX escapes for non-ASCII
    println!("Default (escaped):");
    println!("{}", javaprops::store_to_string(&map, &WriteOptions::new()));

    // UTF-8 output with raw characters on the wire
    println!("UTF-8, raw characters:");
    let utf8_options = WriteOptions::new()
        .with_encoding(Encoding::Utf8)
        .with_unicode_escape(false)
        .with_line_ending(LineEnding::Lf);
    let mut bytes = Vec::new();
    javaprops::store_to_writer(&map, &mut bytes, &utf8_options)?;
    println!("{}", String::from_utf8(bytes.clone())?);

    // Comment header plus a timestamp line
    println!("With header comments and timestamp:");
    let header_options = WriteOptions::new()
        .with_comments("Generated configuration\nDo not edit by hand")
        .with_timestamp(true)
        .with_line_ending(LineEnding::Lf);
    println!("{}", javaprops::store_to_string(&map, &header_options));

    // Reading honors the encoding choice symmetrically
    let read_options = ReadOptions::new().with_encoding(Encoding::Utf8);
    let back = javaprops::load_from_slice(&bytes, &read_options)?;
    assert_eq!(back, map);
    println!("UTF-8 round-trip successful");

    Ok(())
}
