//! Build script to embed the default word list
//!
//! Reads the bundled word file and generates a Rust const array so the game
//! can run without a word file on disk (`--words builtin`).

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_FILE: &str = "data/five_letter_words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        WORD_FILE,
        &Path::new(&out_dir).join("builtin_words.rs"),
        "BUILTIN_WORDS",
        "Bundled five-letter vocabulary",
    );

    println!("cargo:rerun-if-changed={WORD_FILE}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
