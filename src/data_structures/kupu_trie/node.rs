// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Kupu Trie.
//!
//! Nodes are the building blocks of the trie. Each one owns its children
//! outright, so dropping a node releases the whole subtree beneath it.

use std::fmt;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child map keyed by the character on the edge leading to the child.
pub(crate) type Children = HashMap<char, TrieNode, FnvBuildHasher>;

/// A node in the Kupu Trie.
///
/// Each non-root node represents one character of a word path. A node is
/// terminal when the path from the root to it spells a word currently stored
/// in the trie.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit work
/// stack, and `Debug` prints only this node, so none of them are bounded by
/// the call stack.
#[derive(Default)]
pub struct TrieNode {
    /// Character on the edge into this node (`None` for the root)
    value: Option<char>,

    /// Whether this node represents the end of a stored word
    is_terminal: bool,

    /// Owned child nodes, at most one per character
    children: Children,
}

impl TrieNode {
    /// Creates the root node, which carries no character.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Creates a non-terminal node for `value` with no children.
    pub(crate) fn new(value: char) -> Self {
        Self {
            value: Some(value),
            is_terminal: false,
            children: Children::default(),
        }
    }

    /// Returns the character this node represents, or `None` for the root.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Returns `true` if a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child reached through `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterates over the direct children of this node.
    ///
    /// The order is unspecified and must not be relied upon.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_terminal(&mut self, is_terminal: bool) {
        self.is_terminal = is_terminal;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }

    /// Copy of this node without its children.
    fn detached(&self) -> Self {
        Self {
            value: self.value,
            is_terminal: self.is_terminal,
            children: Children::with_capacity_and_hasher(
                self.children.len(),
                FnvBuildHasher::default(),
            ),
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // A frame is finished once `pending` is empty; it is then attached
        // to the frame below it on the stack.
        struct Frame<'a> {
            edge: Option<char>,
            pending: Vec<(&'a char, &'a TrieNode)>,
            node: TrieNode,
        }

        let mut stack = vec![Frame {
            edge: None,
            pending: self.children.iter().collect(),
            node: self.detached(),
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some((&ch, child)) = frame.pending.pop() {
                stack.push(Frame {
                    edge: Some(ch),
                    pending: child.children.iter().collect(),
                    node: child.detached(),
                });
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match (done.edge, stack.last_mut()) {
                (Some(ch), Some(parent)) => {
                    parent.node.children.insert(ch, done.node);
                }
                _ => return done.node,
            }
        }

        self.detached()
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value
                || a.is_terminal != b.is_terminal
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for (ch, child) in &a.children {
                match b.children.get(ch) {
                    Some(peer) => stack.push((child, peer)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Drop for TrieNode {
    // Detach descendants onto a heap stack; the default recursive drop
    // would overflow on very deep chains.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let root = TrieNode::root();
        assert_eq!(root.value(), None);
        assert!(!root.is_terminal());
        assert!(root.is_leaf());
    }

    #[test]
    fn test_child_lookup() {
        let mut node = TrieNode::new('a');
        node.children_mut().insert('b', TrieNode::new('b'));
        node.children_mut().insert('c', TrieNode::new('c'));

        assert_eq!(node.value(), Some('a'));
        assert_eq!(node.child_count(), 2);
        assert_eq!(node.child('b').and_then(TrieNode::value), Some('b'));
        assert!(node.child('z').is_none());
        assert!(!node.is_leaf());
    }

    fn chain(word: &str) -> TrieNode {
        let mut root = TrieNode::root();
        let mut node = &mut root;
        for ch in word.chars() {
            node = node.children_mut().entry(ch).or_insert_with(|| TrieNode::new(ch));
        }
        node.set_terminal(true);
        root
    }

    #[test]
    fn test_clone_and_eq_on_branching_tree() {
        let mut root = chain("cart");
        root.children_mut()
            .get_mut(&'c')
            .unwrap()
            .children_mut()
            .insert('o', TrieNode::new('o'));

        let copy = root.clone();
        assert_eq!(copy, root);
        assert_eq!(copy.child('c').unwrap().child_count(), 2);

        let other = chain("cars");
        assert_ne!(chain("cart"), other);
        assert_ne!(chain("cart"), chain("car"));
    }

    #[test]
    fn test_debug_is_shallow() {
        let root = chain("ab");
        assert_eq!(
            format!("{root:?}"),
            "TrieNode { value: None, is_terminal: false, children: 1 }"
        );
    }
}
