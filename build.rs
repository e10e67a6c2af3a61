//! Build script to generate embedded word lists
//!
//! Reads the word list files under `data/` and generates Rust source with const arrays.
//! Blank lines and `#` comments are skipped; words are normalized to lowercase.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");

    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words eligible to be drawn as the secret answer",
    );

    // Extra guessable words; the answer pool is merged in at runtime
    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Additional words accepted as guesses but never drawn as answers",
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_ascii_lowercase)
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut source = String::new();
    source.push_str("// Generated word list\n\n");
    source.push_str(&format!("/// {doc_comment}\n"));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in &words {
        source.push_str(&format!("    \"{word}\",\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {const_name}\n"));
    source.push_str(&format!(
        "pub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));

    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
