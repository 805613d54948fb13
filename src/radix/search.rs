use log::trace;
use smallvec::SmallVec;

use super::node::TrieNode;
use super::span::common_prefix_len;

/// Returns the completion list for `prefix`: every leaf below `root` whose word
/// starts with `prefix`.
///
/// Returns `None` if the trie is empty or no stored word starts with `prefix`;
/// a successful search never yields an empty list. An empty prefix matches
/// every stored word. The order of the leaves carries no meaning.
///
/// # Examples
///
/// ```
/// use libradix::radix::builder::build_trie;
/// use libradix::radix::search::completion_list;
///
/// let words = ["bear", "bull", "stock", "bell"];
/// let root = build_trie(&words).unwrap();
///
/// let mut found: Vec<_> = completion_list(&root, &words, "be")
///     .unwrap()
///     .into_iter()
///     .filter_map(|leaf| leaf.word_index())
///     .map(|i| words[i])
///     .collect();
/// found.sort();
/// assert_eq!(found, ["bear", "bell"]);
///
/// assert!(completion_list(&root, &words, "xyz").is_none());
/// ```
pub fn completion_list<'t, S: AsRef<str>>(
    root: &'t TrieNode,
    words: &[S],
    prefix: &str,
) -> Option<Vec<&'t TrieNode>> {
    if root.is_leaf() {
        return None;
    }
    let subtree = descend(root, words, prefix)?;
    Some(collect_leaves(subtree))
}

/// Finds the topmost node whose subtree holds exactly the words starting with `prefix`.
fn descend<'t, S: AsRef<str>>(
    root: &'t TrieNode,
    words: &[S],
    prefix: &str,
) -> Option<&'t TrieNode> {
    let mut node = root;
    let mut rem = prefix;
    'descend: loop {
        if rem.is_empty() {
            return Some(node);
        }
        for child in node.children() {
            let Some(edge) = child.edge(words) else {
                continue;
            };
            let shared = common_prefix_len(edge, rem);
            if shared == rem.len() {
                trace!("prefix {prefix:?} ends inside edge {edge:?}");
                return Some(child);
            }
            if shared == edge.len() {
                trace!("prefix {prefix:?} passes edge {edge:?}");
                rem = &rem[shared..];
                node = child;
                continue 'descend;
            }
        }
        trace!("prefix {prefix:?} has no match for {rem:?}");
        return None;
    }
}

/// Collects every leaf in the subtree rooted at `node`.
///
/// Uses an explicit stack, so deep tries cannot overflow the call stack. Leaves
/// come out in depth-first order, children visited in creation order. A leaf
/// collects itself.
pub fn collect_leaves(node: &TrieNode) -> Vec<&TrieNode> {
    let mut leaves = Vec::new();
    let mut stack: SmallVec<[&TrieNode; 32]> = SmallVec::new();
    stack.push(node);
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            leaves.push(node);
        } else {
            stack.extend(node.children().rev());
        }
    }
    leaves
}

/// Looks up the leaf where `word` ends, if `word` is stored in the trie.
pub fn find_word<'t, S: AsRef<str>>(
    root: &'t TrieNode,
    words: &[S],
    word: &str,
) -> Option<&'t TrieNode> {
    if word.is_empty() {
        return None;
    }
    descend(root, words, word).filter(|node| {
        node.is_leaf()
            && node
                .word_index()
                .and_then(|i| words.get(i))
                .is_some_and(|stored| stored.as_ref() == word)
    })
}

/// Spells out every stored word by concatenating the edge labels on the path
/// from `root` to each leaf.
///
/// Returns `(word_index, text)` pairs in depth-first order. Labels that do not
/// resolve against `words` contribute nothing.
pub fn spell<S: AsRef<str>>(root: &TrieNode, words: &[S]) -> Vec<(usize, String)> {
    let mut spelled = Vec::new();
    let mut stack: SmallVec<[(&TrieNode, String); 32]> = SmallVec::new();
    stack.push((root, String::new()));
    while let Some((node, mut text)) = stack.pop() {
        text.push_str(node.edge(words).unwrap_or_default());
        if node.is_leaf() {
            if let Some(index) = node.word_index() {
                spelled.push((index, text));
            }
        } else {
            stack.extend(node.children().rev().map(|child| (child, text.clone())));
        }
    }
    spelled
}
