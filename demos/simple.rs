//! Basic parsing and serialization.
//!
//! Run with: cargo run --example simple

use kvline::{parse, serialize};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"host: "db-1" state: "ready" note: "says \"hi\"""#;

    let doc = parse(input)?;
    println!("Parsed {} pairs:", doc.len());
    for (key, value) in doc.iter() {
        println!("  {} = {:?}", key, value);
    }

    let text = serialize(&doc)?;
    assert_eq!(text, input);
    println!("✓ Round-trip successful");

    Ok(())
}
