use std::slice;

use smallvec::SmallVec;

use super::span::EdgeLabel;

/// An iterator over the children of a TrieNode, in the order the branches were created.
#[derive(Clone)]
pub struct ChildIter<'t> {
    inner: slice::Iter<'t, TrieNode>,
}

impl<'t> Iterator for ChildIter<'t> {
    type Item = &'t TrieNode;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

/// Shape statistics for a trie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Number of nodes, root included.
    pub node_count: usize,
    /// Number of leaves, which equals the number of stored words.
    pub leaf_count: usize,
    /// Number of edges on the longest root-to-leaf path.
    pub max_depth: usize,
}

/// A node in the prefix-compressed trie.
///
/// Every node except the root carries the label of the edge leading into it.
/// A node exclusively owns its children, which are kept in creation order.
/// A node without children is a leaf and marks the end of exactly one word:
/// the one named by its label's word index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode {
    label: Option<EdgeLabel>,
    children: Vec<TrieNode>,
}

impl TrieNode {
    /// Creates an empty root node.
    pub fn root() -> Self {
        TrieNode {
            label: None,
            children: Vec::new(),
        }
    }

    /// Creates a leaf reached through `label`.
    pub fn leaf(label: EdgeLabel) -> Self {
        TrieNode {
            label: Some(label),
            children: Vec::new(),
        }
    }

    /// The label of the edge into this node; `None` only for the root.
    #[inline]
    pub fn label(&self) -> Option<EdgeLabel> {
        self.label
    }

    /// Word index of the incoming label.
    ///
    /// For a leaf this identifies the word that ends here.
    #[inline]
    pub fn word_index(&self) -> Option<usize> {
        self.label.map(|label| label.word_index())
    }

    /// The text of the incoming edge, borrowed from `words`.
    #[inline]
    pub fn edge<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Option<&'w str> {
        self.label?.resolve(words)
    }

    /// True if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            inner: self.children.iter(),
        }
    }

    /// Computes node count, leaf count and depth of the subtree rooted here.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut stack: SmallVec<[(&TrieNode, usize); 32]> = SmallVec::new();
        stack.push((self, 0));
        while let Some((node, depth)) = stack.pop() {
            stats.node_count += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if node.is_leaf() && node.label.is_some() {
                stats.leaf_count += 1;
            }
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        stats
    }

    /// Appends a child after the existing ones.
    pub(crate) fn push_child(&mut self, child: TrieNode) {
        debug_assert!(child.label.is_some(), "push_child: child without a label");
        self.children.push(child);
    }

    /// Mutable access to the child at `position`.
    ///
    /// Panics if `position` is out of bounds.
    pub(crate) fn child_mut(&mut self, position: usize) -> &mut TrieNode {
        &mut self.children[position]
    }

    /// Replaces the child at `position` with a new branch point.
    ///
    /// The branch point takes over the first `at` bytes of the child's label.
    /// Its children are the old child, left with the rest of its label, followed
    /// by a new leaf reached through `branch`. The branch point stays at the
    /// same position among this node's children.
    ///
    /// Panics if `position` is out of bounds.
    pub(crate) fn split_child(&mut self, position: usize, at: usize, branch: EdgeLabel) {
        let slot = &mut self.children[position];
        debug_assert!(slot.label.is_some(), "split_child: child {position} has no label");
        let Some((head, tail)) = slot.label.map(|label| label.split_at(at)) else {
            return;
        };
        slot.label = Some(tail);
        let lower = std::mem::replace(
            slot,
            TrieNode {
                label: Some(head),
                children: Vec::with_capacity(2),
            },
        );
        slot.children.push(lower);
        slot.children.push(TrieNode::leaf(branch));
    }
}
