//! Projecting a parsed line to JSON.
//!
//! Reads one line of key-value text from standard input and prints the
//! JSON object form.
//!
//! Run with: echo 'time: "12:34:56"' | cargo run --example json_output

use kvline::{parse, to_json};
use std::error::Error;
use std::io::BufRead;

fn main() -> Result<(), Box<dyn Error>> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let doc = parse(line.trim_end_matches('\n'))?;
    println!("{}", to_json(&doc)?);

    Ok(())
}
