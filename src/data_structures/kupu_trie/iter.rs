// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Depth-first word enumeration over a subtree.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Lazy depth-first iterator over the words stored beneath a node.
///
/// Each yielded word is `base` followed by the characters on the path from
/// the start node (inclusive) down to a terminal node. Traversal keeps its
/// own work stack, so word length is not limited by the call stack.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(start: &'a TrieNode, base: String) -> Self {
        Self {
            stack: vec![(start, extend(base, start))],
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            let mut children = node.children();
            let owner = children.next();
            for child in children {
                self.stack.push((child, extend(path.clone(), child)));
            }

            // `owner` takes `path` itself unless it is also the yielded word.
            if node.is_terminal() {
                if let Some(child) = owner {
                    self.stack.push((child, extend(path.clone(), child)));
                }
                return Some(path);
            }
            if let Some(child) = owner {
                self.stack.push((child, extend(path, child)));
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}

fn extend(mut path: String, node: &TrieNode) -> String {
    if let Some(ch) = node.value() {
        path.push(ch);
    }
    path
}
