//! # libradix
//!
//! A prefix-compressed trie ([radix tree](https://en.wikipedia.org/wiki/Radix_tree))
//! over a fixed list of words, answering completion queries: given a prefix,
//! find every stored word that starts with it.
//!
//! Edges do not own their text. Each edge label is a span into one of the
//! original words, so building the trie never copies characters. The word
//! list is borrowed and must outlive the trie.
//!
//! ## Features
//!
//! - **Order-preserving**: words are inserted in list order and children keep
//!   the order in which their branches were created
//! - **Copy-free labels**: every edge is a `(word_index, start, end)` span
//! - **No recursion**: insertion, search and traversal use loops and explicit
//!   stacks, so long words cannot exhaust the call stack
//! - **Checked input**: empty, repeated, and prefix-of-another words are detected
//!   while building, see [`BuilderError`](radix::BuilderError)
//!
//! ## Quick Start
//!
//! ```
//! use libradix::radix::WordTrie;
//!
//! let words = ["bear", "bull", "stock", "bell"];
//! let trie = WordTrie::new(&words);
//!
//! let mut found = trie.completions("be").unwrap();
//! found.sort();
//! assert_eq!(found, ["bear", "bell"]);
//! assert!(trie.completions("xyz").is_none());
//! ```
//!
//! Working with nodes directly:
//!
//! ```
//! use libradix::radix::{build_trie, completion_list};
//!
//! let words = ["bear", "bull", "stock", "bell"];
//! let root = build_trie(&words).unwrap();
//!
//! let leaves = completion_list(&root, &words, "bell").unwrap();
//! assert_eq!(leaves.len(), 1);
//! assert_eq!(leaves[0].word_index(), Some(3));
//! ```
//!
//! ## Word requirements
//!
//! A leaf marks the end of a word and there is no separate end-of-word flag on
//! inner nodes, so no word may be a proper prefix of another. Such words (and
//! empty or repeated ones) are rejected: [`build_trie`](radix::build_trie)
//! leaves them out and logs a warning through the [`log`] facade, while
//! [`try_build_trie`](radix::try_build_trie) returns the error.

#![warn(missing_docs)]

/// Compressed trie: labels, nodes, builder, search and diagnostics.
pub mod radix;

#[cfg(test)]
mod test {
    use super::radix::{build_trie, completion_list, search::spell, WordTrie};
    use std::collections::BTreeSet;

    use itertools::Itertools;
    use proptest::prelude::*;

    fn completion_set(words: &[&str], prefix: &str) -> Option<BTreeSet<String>> {
        let trie = WordTrie::new(words);
        let found = trie.completions(prefix)?;
        Some(found.into_iter().map(str::to_owned).collect())
    }

    fn expected_set(words: &[&str], prefix: &str) -> Option<BTreeSet<String>> {
        let set: BTreeSet<String> = words
            .iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| w.to_string())
            .collect();
        (!set.is_empty()).then_some(set)
    }

    #[test]
    fn stock_market_scenario() {
        let words = ["bear", "bull", "stock", "bell"];
        let set = |ws: &[&str]| Some(ws.iter().map(|w| w.to_string()).collect::<BTreeSet<_>>());
        assert_eq!(completion_set(&words, "b"), set(&["bear", "bull", "bell"]));
        assert_eq!(completion_set(&words, "be"), set(&["bear", "bell"]));
        assert_eq!(completion_set(&words, "bell"), set(&["bell"]));
        assert_eq!(completion_set(&words, "xyz"), None);
        assert!(build_trie::<&str>(&[]).is_none());
    }

    #[test]
    fn every_insertion_order_answers_the_same() {
        const WORDS: [&str; 7] = ["bear", "bull", "stock", "bell", "stop", "bet", "sto"];
        // "sto" is a prefix of "stock" and "stop"; whichever comes later is dropped,
        // so only compare orders where the stored set is the same.
        let prefixes = ["", "b", "be", "bel", "s", "st", "sto", "stoc", "x", "bulls"];
        for order in WORDS.iter().copied().permutations(4) {
            let reference = WordTrie::new(&order);
            let stored: BTreeSet<_> = reference.completions("").unwrap().into_iter().collect();
            for shuffled in order.iter().copied().permutations(order.len()) {
                let trie = WordTrie::new(&shuffled);
                let other: BTreeSet<_> = trie.completions("").unwrap().into_iter().collect();
                if other != stored {
                    continue;
                }
                for prefix in prefixes {
                    let a: Option<BTreeSet<_>> =
                        reference.completions(prefix).map(|v| v.into_iter().collect());
                    let b: Option<BTreeSet<_>> =
                        trie.completions(prefix).map(|v| v.into_iter().collect());
                    assert_eq!(a, b, "{order:?} vs {shuffled:?} on {prefix:?}");
                }
                assert_eq!(trie.validate(), Ok(()));
            }
        }
    }

    /// Random word lists where no word is a prefix of another.
    fn prefix_free_words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[a-e]{1,6}", 0..40)
            .prop_map(|set| {
                let sorted: Vec<String> = set.into_iter().collect();
                // In sorted order a word is a prefix of some other word
                // exactly when it is a prefix of its successor.
                let kept: Vec<String> = sorted
                    .iter()
                    .enumerate()
                    .filter(|(i, w)| sorted.get(i + 1).map_or(true, |next| !next.starts_with(w.as_str())))
                    .map(|(_, w)| w.clone())
                    .collect();
                kept
            })
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn completions_match_a_linear_scan(words in prefix_free_words(), prefix in "[a-e]{0,4}") {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            prop_assert_eq!(completion_set(&words, &prefix), expected_set(&words, &prefix));
        }

        #[test]
        fn every_word_completes_to_itself(words in prefix_free_words()) {
            let trie = WordTrie::try_new(&words).unwrap();
            for (i, word) in words.iter().enumerate() {
                let leaves = trie.completion_leaves(word).unwrap();
                prop_assert_eq!(leaves.len(), 1);
                prop_assert_eq!(leaves[0].word_index(), Some(i));
                prop_assert!(trie.contains(word));
            }
        }

        #[test]
        fn empty_prefix_finds_one_leaf_per_word(words in prefix_free_words()) {
            match build_trie(&words) {
                None => {
                    prop_assert!(words.is_empty());
                }
                Some(root) => {
                    let leaves = completion_list(&root, &words, "").unwrap();
                    prop_assert_eq!(leaves.len(), words.len());
                    let mut spelled = spell(&root, &words);
                    spelled.sort();
                    let expected: Vec<_> = words.iter().cloned().enumerate().collect();
                    prop_assert_eq!(spelled, expected);
                }
            }
        }

        #[test]
        fn built_tries_are_valid(words in prefix_free_words()) {
            let trie = WordTrie::new(&words);
            prop_assert_eq!(trie.validate(), Ok(()));
            prop_assert_eq!(trie.len(), words.len());
        }

        #[test]
        fn arbitrary_lists_never_break_the_trie(words in prop::collection::vec("[a-c]{0,4}", 0..30)) {
            // Rejected words are skipped; whatever remains must be consistent.
            let trie = WordTrie::new(&words);
            prop_assert_eq!(trie.validate(), Ok(()));
            if let Some(stored) = trie.completions("") {
                for word in stored {
                    prop_assert!(trie.contains(word));
                }
            }
        }
    }
}
