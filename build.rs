//! Embeds the word lists in `data/` as Rust constants
//!
//! Fails the build if a list holds anything but lowercase ASCII words of one
//! common length.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

struct WordList {
    source: &'static str,
    const_name: &'static str,
    doc: &'static str,
}

const LISTS: [WordList; 2] = [
    WordList {
        source: "data/answers.txt",
        const_name: "ANSWERS",
        doc: "Words that can be chosen as the hidden answer",
    },
    WordList {
        source: "data/allowed.txt",
        const_name: "ALLOWED",
        doc: "All words accepted as guesses (superset of ANSWERS)",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let mut word_length = None;

    for list in &LISTS {
        println!("cargo:rerun-if-changed={}", list.source);

        let content = fs::read_to_string(list.source)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", list.source));
        let words = read_words(list.source, &content);

        for word in &words {
            let expected = *word_length.get_or_insert(word.len());
            assert!(
                word.len() == expected,
                "{}: '{word}' has {} letters, expected {expected}",
                list.source,
                word.len()
            );
        }

        let file_name = format!("{}.rs", list.const_name.to_lowercase());
        let target = Path::new(&out_dir).join(file_name);
        fs::write(&target, render(list, &words))
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
    }

    let length = word_length.expect("embedded word lists are empty");
    let target = Path::new(&out_dir).join("word_length.rs");
    let source = format!(
        "/// Letters per word in the embedded lists\npub const WORD_LENGTH: usize = {length};\n"
    );
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
}

fn read_words<'a>(source: &str, content: &'a str) -> Vec<&'a str> {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{source}: '{word}' is not a lowercase ASCII word"
        );
    }
    words
}

fn render(list: &WordList, words: &[&str]) -> String {
    let count = words.len();
    let mut out = String::new();

    let _ = writeln!(out, "// Generated from {} by build.rs\n", list.source);
    let _ = writeln!(out, "/// {} ({count} words)", list.doc);
    let _ = writeln!(out, "pub const {}: &[&str] = &[", list.const_name);
    for word in words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = writeln!(out, "];\n");
    let _ = writeln!(out, "/// Number of words in {}", list.const_name);
    let _ = writeln!(out, "pub const {}_COUNT: usize = {count};", list.const_name);
    out
}
