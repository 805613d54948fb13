use std::fmt;

use itertools::{Itertools, Position};
use smallvec::SmallVec;

use super::node::TrieNode;

/// Human-readable rendering of a trie, one node per line.
///
/// Each line shows the edge text followed by its `(word_index, start, end)`
/// label. Created by [`dump`].
///
/// ```
/// use libradix::radix::builder::build_trie;
/// use libradix::radix::dump::dump;
///
/// let words = ["bear", "bull", "stock", "bell"];
/// let root = build_trie(&words).unwrap();
/// let expected = "\
/// root
/// ├── b (0, 0, 0)
/// │   ├── e (0, 1, 1)
/// │   │   ├── ar (0, 2, 3)
/// │   │   └── ll (3, 2, 3)
/// │   └── ull (1, 1, 3)
/// └── stock (2, 0, 4)
/// ";
/// assert_eq!(dump(&root, &words).to_string(), expected);
/// ```
pub struct TrieDump<'a, S> {
    root: &'a TrieNode,
    words: &'a [S],
}

/// Renders the trie below `root`, resolving edge text from `words`.
pub fn dump<'a, S: AsRef<str>>(root: &'a TrieNode, words: &'a [S]) -> TrieDump<'a, S> {
    TrieDump { root, words }
}

struct Line<'a> {
    node: &'a TrieNode,
    indent: String,
    last: bool,
}

fn push_children<'a>(stack: &mut SmallVec<[Line<'a>; 32]>, node: &'a TrieNode, indent: &str) {
    let children: SmallVec<[_; 8]> = node.children().with_position().collect();
    for (position, child) in children.into_iter().rev() {
        stack.push(Line {
            node: child,
            indent: indent.to_owned(),
            last: matches!(position, Position::Last | Position::Only),
        });
    }
}

impl<S: AsRef<str>> fmt::Display for TrieDump<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.label() {
            None => writeln!(f, "root")?,
            Some(label) => writeln!(f, "{} {label}", self.root.edge(self.words).unwrap_or("?"))?,
        }
        let mut stack = SmallVec::new();
        push_children(&mut stack, self.root, "");
        while let Some(Line { node, indent, last }) = stack.pop() {
            let connector = if last { "└── " } else { "├── " };
            let edge = node.edge(self.words).unwrap_or("?");
            match node.label() {
                Some(label) => writeln!(f, "{indent}{connector}{edge} {label}")?,
                None => writeln!(f, "{indent}{connector}{edge}")?,
            }
            let child_indent = format!("{indent}{}", if last { "    " } else { "│   " });
            push_children(&mut stack, node, &child_indent);
        }
        Ok(())
    }
}

impl<S: AsRef<str>> fmt::Debug for TrieDump<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::radix::builder::build_trie;

    #[test]
    fn empty_root() {
        let words: [&str; 0] = [];
        assert_eq!(dump(&TrieNode::root(), &words).to_string(), "root\n");
    }

    #[test]
    fn single_word() {
        let words = ["stock"];
        let root = build_trie(&words).unwrap();
        assert_eq!(dump(&root, &words).to_string(), "root\n└── stock (0, 0, 4)\n");
    }

    #[test]
    fn unresolvable_edges_show_placeholder() {
        let root = build_trie(&["bear", "bull"]).unwrap();
        let fewer = ["bear"];
        let text = dump(&root, &fewer).to_string();
        assert!(text.contains("└── ? (1, 1, 3)"), "{text}");
    }

    #[test]
    fn subtree_dump_starts_at_its_edge() {
        let words = ["bear", "bull", "bell"];
        let root = build_trie(&words).unwrap();
        let b = root.children().next().unwrap();
        let text = dump(b, &words).to_string();
        assert!(text.starts_with("b (0, 0, 0)\n"), "{text}");
    }
}
