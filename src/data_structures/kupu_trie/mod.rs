// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kupu Trie Implementation
//!
//! An in-memory prefix tree over `char` units supporting insertion, membership
//! checks, prefix completion and deletion with pruning of dead branches.
//!
//! # Example
//!
//! ```
//! use kupu_lib::data_structures::kupu_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("macro");
//! trie.insert("macroscopic");
//!
//! assert!(trie.is_member("macro"));
//! assert_eq!(trie.find_prefix_matches("macro"), vec!["macroscopic".to_string()]);
//!
//! assert!(trie.delete("macroscopic"));
//! assert!(trie.find_prefix_matches("macro").is_empty());
//! ```
//!
//! # Empty words
//!
//! The empty string is never a member. Inserting it is a no-op, and both
//! `is_member("")` and `delete("")` return `false`.
//!
//! # Thread safety
//!
//! Mutation requires `&mut Trie`. Callers sharing one trie across threads
//! must wrap it in their own lock.

mod iter;
mod node;

use tracing::{debug, trace};

pub use iter::Words;
pub use node::TrieNode;

/// Kupu Trie is a prefix tree that owns every node reachable from its root.
///
/// Key features:
/// * Membership checks in O(word length)
/// * Auto-completion of a prefix to every stored word extending it
/// * Deletion that prunes nodes which are neither terminal nor branching
/// * Stack-safe traversal and deletion for arbitrarily long words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Sentinel label of the root; never part of a word
    root_value: String,

    /// Number of words currently stored
    len: usize,
}

impl Trie {
    /// Creates a new empty `Trie` with an empty root sentinel.
    pub fn new() -> Self {
        Self::with_root_value("")
    }

    /// Creates a new empty `Trie` whose root carries the given sentinel label.
    ///
    /// The label is informational only. It is not compared against word
    /// characters and never appears in enumerated words.
    pub fn with_root_value<S: Into<String>>(root_value: S) -> Self {
        Self {
            root: TrieNode::root(),
            root_value: root_value.into(),
            len: 0,
        }
    }

    /// Returns the sentinel label of the root node.
    pub fn root_value(&self) -> &str {
        &self.root_value
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it was already
    /// a member or is empty.
    pub fn insert<S: AsRef<str>>(&mut self, word: S) -> bool {
        let word = word.as_ref();
        if word.is_empty() {
            trace!("ignoring empty word on insert");
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node
                .children_mut()
                .entry(ch)
                .or_insert_with(|| TrieNode::new(ch));
        }

        let added = !node.is_terminal();
        node.set_terminal(true);
        if added {
            self.len += 1;
        }

        trace!(word, added, "insert");
        added
    }

    /// Follows `s` from the root and returns the node it ends at.
    ///
    /// Terminal status is not consulted, so this also finds nodes for
    /// prefixes that are not words themselves. An empty `s` yields the root.
    pub fn find_last_node(&self, s: &str) -> Option<&TrieNode> {
        s.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }

    /// Returns `true` if `word` is currently stored in the trie.
    pub fn is_member(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .find_last_node(word)
                .is_some_and(TrieNode::is_terminal)
    }

    /// Returns every stored word that strictly extends `prefix`.
    ///
    /// The prefix itself is never part of the result, even when it is a
    /// stored word. Result order is unspecified.
    pub fn find_prefix_matches(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix, prefix)
    }

    /// Like [`Trie::find_prefix_matches`], but yields only the part of each
    /// word after `prefix`.
    pub fn find_postfixes(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix, "")
    }

    fn completions(&self, prefix: &str, base: &str) -> Vec<String> {
        let Some(node) = self.find_last_node(prefix) else {
            trace!(prefix, "no node for prefix");
            return Vec::new();
        };

        node.children()
            .flat_map(|child| Words::new(child, base.to_owned()))
            .collect()
    }

    /// Returns every word stored in the trie, in unspecified order.
    pub fn enumerate_all(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns every word in the subtree rooted at `node`.
    ///
    /// Each word is spelled from `node`'s own character down, so for a
    /// non-root node the characters above it are not included.
    pub fn enumerate_from(node: &TrieNode) -> Vec<String> {
        Words::new(node, String::new()).collect()
    }

    /// Lazily iterates over every stored word.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// Removes a word from the trie, pruning nodes that no longer lead to
    /// any stored word.
    ///
    /// # Returns
    ///
    /// `true` if the word was a member and has been removed, `false` if the
    /// trie was left unchanged.
    pub fn delete(&mut self, word: &str) -> bool {
        let path: Vec<char> = word.chars().collect();
        if path.is_empty() {
            return false;
        }

        // `cut` is the depth of the deepest node on the path that must survive
        // once the word is gone; the edge `path[cut]` below it is detached.
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, &ch) in path.iter().enumerate() {
            if node.is_terminal() || node.child_count() > 1 {
                cut = depth;
            }
            match node.child(ch) {
                Some(next) => node = next,
                None => {
                    debug!(word, "delete of absent word ignored");
                    return false;
                }
            }
        }
        if !node.is_terminal() {
            debug!(word, "delete of absent word ignored");
            return false;
        }
        let prune = node.is_leaf();

        if prune {
            let Some(keeper) = self.descend_mut(&path[..cut]) else {
                return false;
            };
            keeper.children_mut().remove(&path[cut]);
            debug!(word, pruned = path.len() - cut, "deleted word");
        } else {
            let Some(last) = self.descend_mut(&path) else {
                return false;
            };
            last.set_terminal(false);
            debug!(word, pruned = 0, "deleted word");
        }

        self.len -= 1;
        true
    }

    fn descend_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        path.iter()
            .try_fold(&mut self.root, |node, ch| node.children_mut().get_mut(ch))
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts the nodes reachable from the root, excluding the root itself.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TrieNode> = self.root.children().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Removes every word, keeping the root sentinel.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
        self.len = 0;
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
