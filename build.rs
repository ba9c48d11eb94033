//! Build script to generate the embedded word list
//!
//! Reads the bundled CSV word list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

#[path = "src/wordlists/csv.rs"]
mod csv;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/english-words.csv",
        &Path::new(&out_dir).join("builtin.rs"),
        "BUILTIN_WORDS",
        "Bundled English word list",
    );

    // Rebuild if the word list or its parser changes
    println!("cargo:rerun-if-changed=data/english-words.csv");
    println!("cargo:rerun-if-changed=src/wordlists/csv.rs");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words = csv::word_cells(&content)
        .unwrap_or_else(|e| panic!("{input_path} has an unusable header: {e:?}"));
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
