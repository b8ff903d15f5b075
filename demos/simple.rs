//! Basic `.properties` loading and storing.
//!
//! Run with: cargo run --example simple

use javaprops::{PropertiesMap, ReadOptions, WriteOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input: &[u8] = b"# application settings\n\
        app.name=Demo\n\
        db.host = localhost\n\
        db.port: 5432\n\
        motd=Hello, \\\n\
        \x20   world!\n";

    // Load from bytes (ISO-8859-1, the format's default encoding)
    let map = javaprops::load_from_slice(input, &ReadOptions::new())?;
    println!("Loaded {} properties:", map.len());
    for (key, value) in &map {
        println!("  {key} = {value}");
    }
    println!();

    // Store back to text
    let text = javaprops::store_to_string(&map, &WriteOptions::new());
    println!("Stored form:\n{text}");

    // Round-trip check
    let back: PropertiesMap = javaprops::parse_str(&text);
    assert_eq!(back, map);
    println!("Round-trip successful");

    Ok(())
}
