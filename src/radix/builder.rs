use std::error::Error;
#[cfg(feature = "fs")]
use std::fs::File;
#[cfg(feature = "fs")]
use std::io::{self, BufRead, BufReader};
#[cfg(feature = "fs")]
use std::path::Path;

use log::{debug, warn};

use super::node::TrieNode;
use super::span::{common_prefix_len, EdgeLabel};

/// Incremental trie builder.
///
/// Inserts the words of a borrowed word list one at a time, strictly in list
/// order. Later words may split edges created by earlier ones, so the shape of
/// the resulting trie depends on the order of the list (its answers do not).
///
/// No word may be a proper prefix of another, and no word may appear twice or
/// be empty. Each insertion checks this and reports a [`BuilderError`] instead
/// of modifying the trie when a word breaks the rule.
pub struct Builder<'w, S: AsRef<str>> {
    words: &'w [S],
    root: TrieNode,
    next: usize,
}

/// Where a word being inserted first overlaps one of a node's children.
struct Overlap {
    position: usize,
    shared: usize,
    edge_len: usize,
    leaf: bool,
    word_index: usize,
}

impl<'w, S: AsRef<str>> Builder<'w, S> {
    /// Creates a builder over `words` with an empty root.
    pub fn new(words: &'w [S]) -> Self {
        Builder {
            words,
            root: TrieNode::root(),
            next: 0,
        }
    }

    /// Index of the next word [`add_next`](Builder::add_next) will insert.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Inserts the next word of the list.
    ///
    /// Returns `Ok(false)` once every word has been consumed. A word that is
    /// rejected is still consumed, so building can carry on with the rest.
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if the word is empty, repeats an earlier
    /// word, or is a prefix of (or has as prefix) an earlier word.
    pub fn add_next(&mut self) -> Result<bool, BuilderError> {
        if self.next >= self.words.len() {
            return Ok(false);
        }
        let index = self.next;
        self.next += 1;
        self.insert(index)?;
        Ok(true)
    }

    fn insert(&mut self, index: usize) -> Result<(), BuilderError> {
        let words = self.words;
        let word = words[index].as_ref();
        if word.is_empty() {
            return Err(BuilderError::EmptyWord(index));
        }

        let mut node = &mut self.root;
        let mut offset = 0;
        loop {
            let part = &word[offset..];
            let Some(overlap) = find_overlap(node, words, part) else {
                let label = EdgeLabel::new(index, offset, word.len() - 1);
                debug!("word {index}: new leaf {label}");
                node.push_child(TrieNode::leaf(label));
                return Ok(());
            };

            if overlap.shared < overlap.edge_len {
                if overlap.shared == part.len() {
                    return Err(BuilderError::Prefix {
                        prefix: index,
                        word: overlap.word_index,
                    });
                }
                let branch = EdgeLabel::new(index, offset + overlap.shared, word.len() - 1);
                debug!(
                    "word {index}: split child {} after {} bytes, new leaf {branch}",
                    overlap.position, overlap.shared
                );
                node.split_child(overlap.position, overlap.shared, branch);
                return Ok(());
            }

            // The whole edge matched.
            match (overlap.shared == part.len(), overlap.leaf) {
                (true, true) => {
                    return Err(BuilderError::Duplicate {
                        first: overlap.word_index,
                        second: index,
                    })
                }
                (true, false) => {
                    return Err(BuilderError::Prefix {
                        prefix: index,
                        word: overlap.word_index,
                    })
                }
                (false, true) => {
                    return Err(BuilderError::Prefix {
                        prefix: overlap.word_index,
                        word: index,
                    })
                }
                (false, false) => {
                    offset += overlap.shared;
                    node = node.child_mut(overlap.position);
                }
            }
        }
    }

    /// Finishes construction and returns the root, or `None` if no word made it in.
    pub fn build(self) -> Option<TrieNode> {
        (!self.root.is_leaf()).then_some(self.root)
    }
}

/// Finds the first child, in creation order, whose edge shares a non-empty
/// prefix with `part`.
fn find_overlap<S: AsRef<str>>(node: &TrieNode, words: &[S], part: &str) -> Option<Overlap> {
    node.children()
        .enumerate()
        .find_map(|(position, child)| {
            let edge = child.edge(words)?;
            let word_index = child.word_index()?;
            let shared = common_prefix_len(edge, part);
            (shared > 0).then(|| Overlap {
                position,
                shared,
                edge_len: edge.len(),
                leaf: child.is_leaf(),
                word_index,
            })
        })
}

/// Errors that can occur when inserting a word into the trie.
///
/// Word positions refer to indices in the word list given to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// The word at this index is empty.
    EmptyWord(usize),
    /// The same word occurs twice.
    Duplicate {
        /// Index of the earlier occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
    },
    /// One word is a proper prefix of another.
    Prefix {
        /// Index of the shorter word.
        prefix: usize,
        /// Index of the longer word starting with it.
        word: usize,
    },
}

impl std::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderError::EmptyWord(index) => write!(f, "EmptyWordError - word {index} is empty"),
            BuilderError::Duplicate { first, second } => {
                write!(f, "DuplicateError - word {second} repeats word {first}")
            }
            BuilderError::Prefix { prefix, word } => {
                write!(f, "PrefixError - word {prefix} is a prefix of word {word}")
            }
        }
    }
}

impl Error for BuilderError {}

/// Builds a trie over `words`, inserting them in list order.
///
/// Returns `None` for an empty list. Words that are empty, repeated, or that
/// stand in a prefix relation with an earlier word are left out of the trie
/// and logged at `warn` level; use [`try_build_trie`] to fail instead.
///
/// # Examples
///
/// ```
/// use libradix::radix::builder::build_trie;
///
/// let words = ["bear", "bull", "stock", "bell"];
/// let root = build_trie(&words).unwrap();
/// assert_eq!(root.child_count(), 2);
///
/// assert!(build_trie::<&str>(&[]).is_none());
/// ```
pub fn build_trie<S: AsRef<str>>(words: &[S]) -> Option<TrieNode> {
    let mut builder = Builder::new(words);
    loop {
        match builder.add_next() {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => warn!("skipping {:?}: {e}", words[builder.next_index() - 1].as_ref()),
        }
    }
    builder.build()
}

/// Builds a trie over `words`, failing on the first word that cannot be stored.
///
/// Returns `Ok(None)` for an empty list.
///
/// # Examples
///
/// ```
/// use libradix::radix::builder::{try_build_trie, BuilderError};
///
/// assert!(try_build_trie(&["bear", "bull"]).unwrap().is_some());
/// assert_eq!(
///     try_build_trie(&["bear", "be"]).unwrap_err(),
///     BuilderError::Prefix { prefix: 1, word: 0 }
/// );
/// ```
pub fn try_build_trie<S: AsRef<str>>(words: &[S]) -> Result<Option<TrieNode>, BuilderError> {
    let mut builder = Builder::new(words);
    while builder.add_next()? {}
    Ok(builder.build())
}

/// Reads a word list from a text file, one word per line.
///
/// Trailing whitespace is trimmed. Empty lines and lines starting with '#'
/// are skipped.
///
/// # Examples
///
/// ```no_run
/// use libradix::radix::builder::{build_trie, read_words};
///
/// let words = read_words("words.txt").unwrap();
/// let root = build_trie(&words);
/// ```
#[cfg(feature = "fs")]
pub fn read_words(filename: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = File::open(filename)?;
    read_words_from(BufReader::new(file))
}

#[cfg(feature = "fs")]
pub(crate) fn read_words_from(mut reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    // Reuse one line buffer instead of allocating per line via lines().
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            words.push(word.to_owned());
        }
        buf.clear();
    }
    Ok(words)
}

/// Returns true if this line is a comment.
#[cfg_attr(not(feature = "fs"), allow(dead_code))]
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
