// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit and property-based tests for the prefix tree.


use super::PrefixTree;

#[test]
fn test_tree_basic_operations() {
    let (a, b, c) = ("A", "B", "C");
    let mut tree = PrefixTree::new();

    // Test initial state
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.node_count(), 1);

    // Test insertion
    assert_eq!(tree.insert("apple", &a), None);
    assert_eq!(tree.insert("apply", &b), None);
    assert_eq!(tree.insert("banana", &c), None);
    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());

    // Test retrieval
    assert_eq!(tree.lookup("apple"), Some(&a));
    assert_eq!(tree.lookup("apply"), Some(&b));
    assert_eq!(tree.lookup("banana"), Some(&c));
    assert_eq!(tree.lookup("app"), None);
    assert_eq!(tree.lookup("apples"), None);
    assert_eq!(tree.lookup("cherry"), None);
}

#[test]
fn test_tree_prefix_search() {
    let (a, b, c) = ("A", "B", "C");
    let mut tree = PrefixTree::new();
    tree.insert("apple", &a);
    tree.insert("apply", &b);
    tree.insert("banana", &c);

    assert!(tree.has_prefix("app"));
    assert!(tree.has_prefix("apple"));
    assert!(tree.has_prefix(""));
    assert!(!tree.has_prefix("apples"));
    assert!(!tree.has_prefix("x"));

    assert_eq!(tree.collect_with_prefix("app"), vec![&a, &b]);
    assert_eq!(tree.collect_with_prefix("ban"), vec![&c]);
    assert!(tree.collect_with_prefix("x").is_empty());
}

#[test]
fn test_collect_order_is_depth_first_ascending() {
    let values = ["ab", "a", "b", "abc", "aa", ""];
    let mut tree = PrefixTree::new();
    for value in &values {
        tree.insert(value, value);
    }

    let collected: Vec<&str> = tree.collect_with_prefix("").into_iter().copied().collect();
    assert_eq!(collected, vec!["", "a", "aa", "ab", "abc", "b"]);

    let collected: Vec<&str> = tree.collect_with_prefix("a").into_iter().copied().collect();
    assert_eq!(collected, vec!["a", "aa", "ab", "abc"]);
}

#[test]
fn test_byte_order_not_insertion_order() {
    let values = [10, 20, 30];
    let mut tree = PrefixTree::new();
    tree.insert("z", &values[0]);
    tree.insert("Z", &values[1]);
    tree.insert("0", &values[2]);

    // '0' (0x30) < 'Z' (0x5a) < 'z' (0x7a)
    assert_eq!(tree.collect_with_prefix(""), vec![&30, &20, &10]);
}

#[test]
fn test_empty_word() {
    let (z, a) = ("Z", "A");
    let mut tree = PrefixTree::new();

    assert_eq!(tree.lookup(""), None);
    assert!(tree.has_prefix(""));

    tree.insert("", &z);
    tree.insert("apple", &a);

    assert_eq!(tree.lookup(""), Some(&z));
    assert!(tree.has_prefix(""));
    assert_eq!(tree.collect_with_prefix(""), vec![&z, &a]);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_reinsert_replaces_value() {
    let (first, second) = (1, 2);
    let mut tree = PrefixTree::new();

    assert_eq!(tree.insert("hello", &first), None);
    let nodes = tree.node_count();
    assert_eq!(nodes, 6);

    assert_eq!(tree.insert("hello", &second), Some(&first));
    assert_eq!(tree.lookup("hello"), Some(&second));
    assert_eq!(tree.node_count(), nodes);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.collect_with_prefix("he"), vec![&second]);
}

#[test]
fn test_inserting_a_prefix_adds_no_nodes() {
    let (long, short) = ("long", "short");
    let mut tree = PrefixTree::new();
    tree.insert("prefixes", &long);
    let nodes = tree.node_count();

    tree.insert("prefix", &short);
    assert_eq!(tree.node_count(), nodes);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.collect_with_prefix("prefix"), vec![&short, &long]);
}

#[test]
fn test_traverse_all_matches_collect() {
    let words = ["tea", "ten", "to", "inn", "in", "i"];
    let mut tree = PrefixTree::new();
    for word in &words {
        tree.insert(word, word);
    }

    let mut visited = Vec::new();
    tree.traverse_all(|value| visited.push(value));

    assert_eq!(visited, tree.collect_with_prefix(""));
    assert_eq!(visited.len(), words.len());
}

#[test]
fn test_iterators() {
    let words = ["car", "cart", "care", "dog"];
    let mut tree = PrefixTree::new();
    for word in &words {
        tree.insert(word, word);
    }

    let all: Vec<&&str> = tree.iter().collect();
    assert_eq!(all, vec![&"car", &"care", &"cart", &"dog"]);

    let via_into_iter: Vec<&&str> = (&tree).into_iter().collect();
    assert_eq!(via_into_iter, all);

    assert_eq!(tree.iter_prefix("car").count(), 3);
    assert_eq!(tree.iter_prefix("cat").next(), None);

    let mut lazy = tree.iter_prefix("d");
    assert_eq!(lazy.next(), Some(&"dog"));
    assert_eq!(lazy.next(), None);
    assert_eq!(lazy.next(), None);
}

#[test]
fn test_entries_with_prefix() {
    let (one, two, three) = (1, 2, 3);
    let mut tree = PrefixTree::new();
    tree.insert("ant", &one);
    tree.insert("and", &two);
    tree.insert("bee", &three);

    let entries = tree.entries_with_prefix("an");
    assert_eq!(
        entries,
        vec![(b"and".to_vec(), &two), (b"ant".to_vec(), &one)]
    );
    assert!(tree.entries_with_prefix("c").is_empty());
    assert_eq!(tree.entries_with_prefix("").len(), 3);
}

#[test]
fn test_clear() {
    let values = [1, 2, 3];
    let mut tree = PrefixTree::new();
    tree.insert("one", &values[0]);
    tree.insert("two", &values[1]);
    tree.insert("", &values[2]);

    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.lookup("one"), None);
    assert_eq!(tree.lookup(""), None);
    assert!(!tree.has_prefix("o"));
    assert!(tree.has_prefix(""));
    assert!(tree.collect_with_prefix("").is_empty());

    // Clearing again is a no-op
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);

    // Referenced values are untouched and the tree is reusable
    assert_eq!(values, [1, 2, 3]);
    tree.insert("one", &values[0]);
    assert_eq!(tree.lookup("one"), Some(&1));
}

#[test]
fn test_byte_slices_and_owned_keys() {
    let value = "bytes";
    let mut tree = PrefixTree::new();
    tree.insert(vec![0u8, 255, 7], &value);
    tree.insert(String::from("text"), &value);

    assert_eq!(tree.lookup([0u8, 255, 7]), Some(&value));
    assert!(tree.has_prefix(&[0u8][..]));
    assert_eq!(tree.lookup(b"text"), Some(&value));
}

#[test]
fn test_from_iterator_and_extend() {
    let values = vec![String::from("x"), String::from("y")];
    let more = String::from("z");
    let mut tree: PrefixTree<'_, String> = values.iter().map(|v| (v.as_str(), v)).collect();
    assert_eq!(tree.len(), 2);

    tree.extend([("z", &more)]);
    assert_eq!(tree.lookup("z"), Some(&more));
    assert_eq!(tree.collect_with_prefix(""), vec![&values[0], &values[1], &more]);
}

#[test]
fn test_long_word() {
    let value = 0u8;
    let word = vec![b'a'; 1_000];
    let mut tree = PrefixTree::new();
    tree.insert(&word, &value);

    assert_eq!(tree.node_count(), word.len() + 1);
    assert_eq!(tree.collect_with_prefix("a"), vec![&value]);
    assert_eq!(tree.iter().count(), 1);

    tree.clear();
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn test_very_long_word_clear_and_drop() {
    let (first, second) = (1u32, 2u32);
    let word = vec![b'k'; 250_000];
    let mut tree = PrefixTree::new();
    tree.insert(&word, &first);
    assert_eq!(tree.lookup(&word), Some(&first));
    assert_eq!(tree.node_count(), word.len() + 1);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);

    // Dropped at the end of the scope with the long chain still in place
    tree.insert(&word, &second);
    tree.insert(&word[..100_000], &first);
    assert_eq!(tree.collect_with_prefix(&word[..10]), vec![&first, &second]);
}
