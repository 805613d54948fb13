use super::builder::{build_trie, try_build_trie, BuilderError};
use super::dump::{dump, TrieDump};
use super::node::{TrieNode, TrieStats};
use super::search::{completion_list, find_word};
use super::validate::{validate, InvariantError};

/// A trie bundled with the word list it was built from.
///
/// The trie only stores positions into the word list, so the list is
/// borrowed for as long as the trie lives. Completions come back as `&str`
/// slices of that list.
///
/// # Examples
///
/// ```
/// use libradix::radix::trie::WordTrie;
///
/// let words = ["bear", "bull", "stock", "bell"];
/// let trie = WordTrie::new(&words);
///
/// let mut found = trie.completions("b").unwrap();
/// found.sort();
/// assert_eq!(found, ["bear", "bell", "bull"]);
/// assert!(trie.completions("xyz").is_none());
/// assert!(trie.contains("stock"));
/// ```
pub struct WordTrie<'w, S: AsRef<str>> {
    words: &'w [S],
    root: Option<TrieNode>,
}

impl<'w, S: AsRef<str>> WordTrie<'w, S> {
    /// Builds a trie over `words`, leaving out words that cannot be stored.
    ///
    /// See [`build_trie`] for which words are left out.
    pub fn new(words: &'w [S]) -> Self {
        WordTrie {
            words,
            root: build_trie(words),
        }
    }

    /// Builds a trie over `words`, failing on the first word that cannot be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use libradix::radix::trie::WordTrie;
    /// use libradix::radix::BuilderError;
    ///
    /// let err = WordTrie::try_new(&["bell", "bells"]).unwrap_err();
    /// assert_eq!(err, BuilderError::Prefix { prefix: 0, word: 1 });
    /// ```
    pub fn try_new(words: &'w [S]) -> Result<Self, BuilderError> {
        Ok(WordTrie {
            words,
            root: try_build_trie(words)?,
        })
    }

    /// Returns the root node, or `None` if the trie holds no words.
    pub fn root(&self) -> Option<&TrieNode> {
        self.root.as_ref()
    }

    /// The word list the trie refers into.
    pub fn words(&self) -> &'w [S] {
        self.words
    }

    /// True if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of words stored, i.e. the number of leaves.
    pub fn len(&self) -> usize {
        self.stats().leaf_count
    }

    /// Leaves for every stored word starting with `prefix`.
    ///
    /// Returns `None` if the trie is empty or nothing matches.
    pub fn completion_leaves(&self, prefix: &str) -> Option<Vec<&TrieNode>> {
        completion_list(self.root.as_ref()?, self.words, prefix)
    }

    /// Every stored word starting with `prefix`, in no particular order.
    ///
    /// Returns `None` if the trie is empty or nothing matches.
    pub fn completions(&self, prefix: &str) -> Option<Vec<&'w str>> {
        let words = self.words;
        let leaves = self.completion_leaves(prefix)?;
        Some(
            leaves
                .into_iter()
                .filter_map(|leaf| Some(words.get(leaf.word_index()?)?.as_ref()))
                .collect(),
        )
    }

    /// Returns `true` if `word` is stored in the trie.
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .as_ref()
            .and_then(|root| find_word(root, self.words, word))
            .is_some()
    }

    /// Shape statistics; all zero for an empty trie.
    pub fn stats(&self) -> TrieStats {
        self.root.as_ref().map(TrieNode::stats).unwrap_or_default()
    }

    /// Checks the trie's structural rules against its word list.
    pub fn validate(&self) -> Result<(), InvariantError> {
        match &self.root {
            Some(root) => validate(root, self.words),
            None => Ok(()),
        }
    }

    /// Human-readable rendering of the trie, or `None` if it is empty.
    pub fn dump(&self) -> Option<TrieDump<'_, S>> {
        Some(dump(self.root.as_ref()?, self.words))
    }
}

impl<S: AsRef<str>> std::fmt::Debug for WordTrie<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordTrie")
            .field("words", &self.words.len())
            .field("stats", &self.stats())
            .finish()
    }
}
