//! Build script for the bundled dictionary
//!
//! Turns `data/words.txt` into a const slice the `wordlists` module
//! includes at compile time.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let raw = fs::read_to_string("data/words.txt")
        .unwrap_or_else(|e| panic!("Failed to read data/words.txt: {e}"));

    let entries: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut generated = String::from("// Generated from data/words.txt\n\n");
    generated.push_str("/// Bundled dictionary words\n");
    generated.push_str("pub const WORDS: &[&str] = &[\n");
    for entry in &entries {
        writeln!(generated, "    \"{entry}\",").unwrap();
    }
    generated.push_str("];\n\n");
    generated.push_str("/// Number of words in WORDS\n");
    writeln!(generated, "pub const WORDS_COUNT: usize = {};", entries.len()).unwrap();

    let dest = Path::new(&out_dir).join("words.rs");
    fs::write(&dest, generated)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));

    println!("cargo:rerun-if-changed=data/words.txt");
}
