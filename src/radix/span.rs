use std::fmt;

/// A label on the edge leading into a trie node.
///
/// Rather than owning its text, a label refers to the inclusive byte range
/// `start..=end` of word number `word_index` in the word list the trie was
/// built from. Both offsets always fall on `char` boundaries of that word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeLabel {
    word_index: usize,
    start: usize,
    end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl EdgeLabel {
    /// Creates a label for `words[word_index][start..=end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(word_index: usize, start: usize, end: usize) -> Self {
        assert!(start <= end, "EdgeLabel: start {start} is past end {end}");
        EdgeLabel {
            word_index,
            start,
            end,
        }
    }

    /// Label covering `word[start..]`, or `None` if that suffix is empty.
    pub(crate) fn suffix(word_index: usize, word: &str, start: usize) -> Option<Self> {
        (start < word.len()).then(|| EdgeLabel::new(word_index, start, word.len() - 1))
    }

    /// Label covering the whole of `word`, or `None` if the word is empty.
    pub fn whole(word_index: usize, word: &str) -> Option<Self> {
        Self::suffix(word_index, word, 0)
    }

    /// Index of the word this label points into.
    #[inline]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// First byte offset covered by the label.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last byte offset covered by the label (inclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the label in bytes. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Borrows the labelled text out of `words`.
    ///
    /// Returns `None` if the label does not fit the given word list, i.e. the
    /// index or offsets are out of range or do not fall on char boundaries.
    #[inline]
    pub fn resolve<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Option<&'w str> {
        words.get(self.word_index)?.as_ref().get(self.start..=self.end)
    }

    /// Cuts the label after its first `at` bytes.
    ///
    /// Both halves keep the same word index: the head keeps `start`, the tail
    /// begins right after the head ends.
    pub(crate) fn split_at(self, at: usize) -> (EdgeLabel, EdgeLabel) {
        debug_assert!(at > 0 && at < self.len(), "split_at({at}) on label of length {}", self.len());
        let head = EdgeLabel::new(self.word_index, self.start, self.start + at - 1);
        let tail = EdgeLabel::new(self.word_index, self.start + at, self.end);
        (head, tail)
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.word_index, self.start, self.end)
    }
}

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Comparison happens char by char, so the returned length is a char
/// boundary in both strings.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|&((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve_borrows_from_word_list() {
        let words = ["bear", "bull"];
        let label = EdgeLabel::new(1, 1, 3);
        assert_eq!(label.resolve(&words), Some("ull"));
        assert_eq!(label.len(), 3);
    }

    #[test]
    fn resolve_out_of_range() {
        let words = ["bear"];
        assert_eq!(EdgeLabel::new(1, 0, 0).resolve(&words), None);
        assert_eq!(EdgeLabel::new(0, 2, 4).resolve(&words), None);
    }

    #[test]
    fn resolve_rejects_split_char() {
        let words = ["añb"];
        // 'ñ' occupies bytes 1..=2
        assert_eq!(EdgeLabel::new(0, 1, 1).resolve(&words), None);
        assert_eq!(EdgeLabel::new(0, 1, 2).resolve(&words), Some("ñ"));
    }

    #[test]
    fn whole_word() {
        assert_eq!(EdgeLabel::whole(3, "stock"), Some(EdgeLabel::new(3, 0, 4)));
        assert_eq!(EdgeLabel::whole(3, ""), None);
    }

    #[test]
    fn split_keeps_word_index() {
        let (head, tail) = EdgeLabel::new(2, 1, 5).split_at(2);
        assert_eq!(head, EdgeLabel::new(2, 1, 2));
        assert_eq!(tail, EdgeLabel::new(2, 3, 5));
    }

    #[test]
    #[should_panic]
    fn start_past_end_panics() {
        let _ = EdgeLabel::new(0, 3, 2);
    }

    #[test]
    fn common_prefix() {
        assert_eq!(common_prefix_len("bear", "bell"), 2);
        assert_eq!(common_prefix_len("bear", "stock"), 0);
        assert_eq!(common_prefix_len("be", "bear"), 2);
        assert_eq!(common_prefix_len("bear", "be"), 2);
        assert_eq!(common_prefix_len("", "bear"), 0);
        assert_eq!(common_prefix_len("bell", "bell"), 4);
    }

    #[test]
    fn common_prefix_is_char_boundary() {
        // 'é' and 'è' share their first UTF-8 byte
        assert_eq!(common_prefix_len("café", "cafè"), 3);
        assert_eq!(common_prefix_len("ñu", "ñandu"), "ñ".len());
    }

    #[test]
    fn display_triple() {
        assert_eq!(EdgeLabel::new(0, 1, 3).to_string(), "(0, 1, 3)");
    }
}
