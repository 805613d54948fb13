//! Example: prefix completion over a word list.
//!
//! Builds a trie over a small list (or a file given as the first argument,
//! one word per line), prints it, and completes a few prefixes.
//!
//! Run with: cargo run --example wordlist [-- words.txt [prefix...]]

use std::env;
use std::error::Error;

use libradix::radix::builder::read_words;
use libradix::radix::WordTrie;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let words: Vec<String> = match args.next() {
        Some(path) => read_words(path)?,
        None => ["bear", "bull", "stock", "bell", "bet", "stop"]
            .iter()
            .map(|w| w.to_string())
            .collect(),
    };
    let mut prefixes: Vec<String> = args.collect();
    if prefixes.is_empty() {
        prefixes = ["b", "be", "bell", "sto", "xyz", ""]
            .iter()
            .map(|p| p.to_string())
            .collect();
    }

    let trie = WordTrie::try_new(&words)?;
    match trie.dump() {
        Some(dump) => println!("{dump}"),
        None => println!("(empty word list)"),
    }
    println!("{:?}\n", trie.stats());

    for prefix in &prefixes {
        match trie.completions(prefix) {
            Some(mut found) => {
                found.sort_unstable();
                println!("  {prefix:?}: {}", found.join(", "));
            }
            None => println!("  {prefix:?}: no completions"),
        }
    }
    Ok(())
}
