// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Kupu Trie public API.

use std::collections::BTreeSet;

use kupu_lib::cli::{self, Command};
use kupu_lib::config::{KupuConfig, OutputFormat};
use kupu_lib::data_structures::{Trie, TrieNode};

const DATASET: [&str; 9] = [
    "macaco",
    "macaroni",
    "macaroon",
    "machinable",
    "machine",
    "macromolecular",
    "macroscopic",
    "macronuclear",
    "macro",
];

fn set<I: IntoIterator<Item = S>, S: Into<String>>(words: I) -> BTreeSet<String> {
    words.into_iter().map(Into::into).collect()
}

#[test]
fn test_demonstration_flow() {
    let mut trie = Trie::new();
    for word in DATASET {
        trie.insert(word);
    }

    assert_eq!(set(trie.enumerate_all()), set(DATASET));
    assert!(trie.is_member("macronuclear"));
    assert_eq!(
        set(trie.find_prefix_matches("macro")),
        set(["macromolecular", "macroscopic", "macronuclear"])
    );

    assert!(trie.delete("macronuclear"));
    assert!(!trie.is_member("macronuclear"));
    assert_eq!(trie.len(), 8);
    assert_eq!(
        set(trie.find_prefix_matches("macro")),
        set(["macromolecular", "macroscopic"])
    );
}

#[test]
fn test_node_walk() {
    let trie: Trie = DATASET.iter().collect();
    let mac = trie.find_last_node("mac").expect("prefix exists");

    // "mac" branches into a (macaco...), h (machine...) and r (macro...)
    let branches: BTreeSet<char> = mac.children().filter_map(TrieNode::value).collect();
    assert_eq!(branches, ['a', 'h', 'r'].into_iter().collect());
    assert!(!mac.is_terminal());

    let macro_node = trie.find_last_node("macro").expect("word exists");
    assert!(macro_node.is_terminal());
    assert_eq!(
        set(Trie::enumerate_from(macro_node)),
        set(["o", "omolecular", "oscopic", "onuclear"])
    );
}

#[test]
fn test_iteration_and_extend() {
    let mut trie = Trie::new();
    trie.extend(["kai", "kona"]);

    let from_iter: BTreeSet<String> = (&trie).into_iter().collect();
    assert_eq!(from_iter, set(["kai", "kona"]));
    assert_eq!(trie.iter().count(), trie.len());
}

#[test]
fn test_cli_list_json() {
    let mut config = KupuConfig::default();
    config.dataset.words = vec!["kona".to_string(), "kai".to_string()];
    config.output.format = OutputFormat::Json;

    let mut out = Vec::new();
    cli::run(Command::List, &config, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "words");
    assert_eq!(value["words"], serde_json::json!(["kai", "kona"]));
}
