use rand::prelude::*;

use inorder_bst::{bst, BSTree, Error, Node};

/// Drains a traversal with the begin/end loop, counting the steps taken
fn walk<T: Clone>(root: &Node<T>) -> (Vec<T>, usize) {
    let mut values = Vec::new();
    let mut steps = 0;

    let mut it = root.begin();
    while it != root.end() {
        values.push(it.value().unwrap().clone());
        it.advance();
        steps += 1;
    }

    (values, steps)
}

#[test]
fn balanced_integers() {
    let root = bst![4u32, 2, 6, 1, 3, 5, 7];

    let (values, steps) = walk(&root);
    assert_eq!(values, &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(steps, 7);
}

#[test]
fn single_node() {
    let root = Node::new(4u32);

    let mut it = root.begin();
    assert_eq!(it.value(), Ok(&4));
    it.advance();
    assert_eq!(it, root.end());
    assert_eq!(it.value(), Err(Error::Exhausted));
}

#[test]
fn duplicate_goes_left() {
    let mut root = Node::new(2u32);
    root.insert(2);

    assert_eq!(root.left().map(|node| *node.value()), Some(2));
    assert!(root.right().is_none());

    let (values, steps) = walk(&root);
    assert_eq!(values, &[2, 2]);
    assert_eq!(steps, 2);
}

#[test]
fn string_keys() {
    let root = bst![
        "delicious".to_string(),
        "ballon".to_string(),
        "flag".to_string(),
        "apple".to_string(),
        "cat".to_string(),
        "elispsis".to_string(),
        "grains".to_string(),
    ];

    let (values, _) = walk(&root);
    assert_eq!(values, &["apple", "ballon", "cat", "delicious", "elispsis", "flag", "grains"]);
}

#[test]
fn restart_is_independent() {
    let root = bst![4, 2, 6, 1, 3, 5, 7];

    let mut first = root.begin();
    let mut second = root.begin();
    first.advance();
    first.advance();
    first.advance();
    assert_eq!(first.value(), Ok(&4));
    assert_eq!(second.value(), Ok(&1));

    second.advance();
    assert_eq!(second.value(), Ok(&2));
    assert_eq!(first.value(), Ok(&4));
}

#[test]
fn random_trees_sort_their_input() {
    // Seeded so failures are reproducible
    let mut rng = StdRng::seed_from_u64(3_141_592);

    for _ in 0..64 {
        let len = rng.gen_range(1..=200);
        let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..=50)).collect();

        let mut root = Node::new(values[0]);
        root.extend(values[1..].iter().copied());

        let tree: BSTree<_> = values.iter().copied().collect();

        values.sort_unstable();

        let (walked, steps) = walk(&root);
        assert_eq!(walked, values);
        // Exactly one step per inserted value
        assert_eq!(steps, values.len());
        assert_eq!(root.len(), values.len());

        let iterated: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(iterated, values);
        assert!(root.height() <= values.len());
    }
}
