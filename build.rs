//! Build script to generate the embedded word pool
//!
//! Reads the tiered word pool file and generates Rust source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_pool(
        "data/word_pool.txt",
        &Path::new(&out_dir).join("word_pool.rs"),
        "DEFAULT_TIERS",
        "Default difficulty tiers as (max tries, words), easiest first",
    );

    // Rebuild if the word pool changes
    println!("cargo:rerun-if-changed=data/word_pool.txt");
}

fn generate_word_pool(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let tiers: Vec<(u32, Vec<&str>)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (tries, words) = line
                .split_once(':')
                .unwrap_or_else(|| panic!("Tier line without ':' in {input_path}: {line}"));
            let tries: u32 = tries
                .trim()
                .parse()
                .unwrap_or_else(|e| panic!("Bad max tries in {input_path}: {line}: {e}"));
            (tries, words.split_whitespace().collect())
        })
        .collect();
    let count = tiers.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word pool").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(u32, &[&str])] = &[").unwrap();

    for (tries, words) in tiers {
        write!(output, "    ({tries}, &[").unwrap();
        for word in words {
            write!(output, "\"{word}\", ").unwrap();
        }
        writeln!(output, "]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of tiers in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
