use std::error::Error;
use std::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;

use super::node::TrieNode;
use super::span::EdgeLabel;

/// A structural rule of the trie that does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A non-root node has no label.
    MissingLabel,
    /// The root carries a label.
    LabelledRoot(EdgeLabel),
    /// A label does not fit the word list.
    BadSpan(EdgeLabel),
    /// Two siblings' edges start with the same character.
    SharedFirstChar(char),
    /// The labels on the path to a leaf do not spell the leaf's word.
    Misspelled {
        /// Index of the word the leaf claims to end.
        word_index: usize,
        /// What the path actually spells.
        spelled: String,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MissingLabel => write!(f, "non-root node without a label"),
            InvariantError::LabelledRoot(label) => write!(f, "root has label {label}"),
            InvariantError::BadSpan(label) => write!(f, "label {label} does not fit the word list"),
            InvariantError::SharedFirstChar(ch) => {
                write!(f, "sibling edges both start with {ch:?}")
            }
            InvariantError::Misspelled {
                word_index,
                spelled,
            } => write!(f, "leaf for word {word_index} spells {spelled:?}"),
        }
    }
}

impl Error for InvariantError {}

/// Checks the structural rules of a trie built over `words`.
///
/// - only the root lacks a label, and every label fits the word list;
/// - no two siblings' edges start with the same character;
/// - the labels from the root to each leaf spell exactly the leaf's word.
pub fn validate<S: AsRef<str>>(root: &TrieNode, words: &[S]) -> Result<(), InvariantError> {
    if let Some(label) = root.label() {
        return Err(InvariantError::LabelledRoot(label));
    }
    let mut stack: SmallVec<[(&TrieNode, String); 32]> = SmallVec::new();
    stack.push((root, String::new()));

    while let Some((node, spelled)) = stack.pop() {
        let mut first_chars = HashSet::with_capacity(node.child_count());
        for child in node.children() {
            let label = child.label().ok_or(InvariantError::MissingLabel)?;
            let edge = label.resolve(words).ok_or(InvariantError::BadSpan(label))?;
            let Some(first) = edge.chars().next() else {
                return Err(InvariantError::BadSpan(label));
            };
            if !first_chars.insert(first) {
                return Err(InvariantError::SharedFirstChar(first));
            }
            let mut path = spelled.clone();
            path.push_str(edge);
            stack.push((child, path));
        }

        if node.is_leaf() {
            let Some(word_index) = node.word_index() else {
                // An empty root.
                continue;
            };
            if words.get(word_index).map(|w| w.as_ref()) != Some(spelled.as_str()) {
                return Err(InvariantError::Misspelled {
                    word_index,
                    spelled,
                });
            }
        }
    }
    Ok(())
}
