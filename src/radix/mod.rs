/// Trie builder: inserts words in list order, splitting edges as needed.
pub mod builder;
/// Human-readable tree rendering.
pub mod dump;
/// Trie nodes and their ordered children.
pub mod node;
/// Prefix completion and other read-only queries.
pub mod search;
/// Edge labels as spans into the word list.
pub mod span;
/// Trie bundled with its borrowed word list.
pub mod trie;
/// Structural checks for built tries.
pub mod validate;

pub use builder::{build_trie, try_build_trie, Builder, BuilderError};
pub use node::{TrieNode, TrieStats};
pub use search::{collect_leaves, completion_list};
pub use span::EdgeLabel;
pub use trie::WordTrie;
pub use validate::InvariantError;
