use dsa_bst::{BinarySearchTree, Node};

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_target(true)
        .try_init();
}

/// Builds the tree used throughout these scenarios, inserting with either descent.
fn build(recursive: bool) -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    for value in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        if recursive {
            tree.insert_recursive(value);
        } else {
            tree.insert(value);
        }
    }
    tree
}

#[test]
fn traversal_orders() {
    for recursive in [false, true] {
        let tree = build(recursive);

        assert_eq!(tree.traverse_in_order(), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
        assert_eq!(tree.traverse_pre_order(), vec![8, 3, 1, 6, 4, 7, 10, 14, 13]);
        assert_eq!(tree.traverse_post_order(), vec![1, 4, 7, 6, 3, 13, 14, 10, 8]);
        assert_eq!(tree.traverse_breadth_first(), vec![8, 3, 10, 1, 6, 14, 4, 7, 13]);
    }
}

#[test]
fn remove_two_child_node() {
    init_tracing();

    let mut tree = build(false);

    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(tree.traverse_in_order(), vec![1, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(
        tree.root().and_then(Node::left).map(Node::value),
        Some(&4)
    );
    assert!(tree.validate().is_ok());
}

#[test]
fn find_in_single_node_tree() {
    let mut tree = BinarySearchTree::new();
    tree.insert(5);

    assert_eq!(tree.find(&5).map(Node::value), Some(&5));
    assert_eq!(tree.find_recursive(&5).map(Node::value), Some(&5));
    assert!(tree.find(&9).is_none());
    assert!(tree.find_recursive(&9).is_none());
}

#[test]
fn works_with_non_copy_values() {
    let mut tree = BinarySearchTree::new();
    tree.insert("m".to_string())
        .insert("c".to_string())
        .insert_recursive("x".to_string())
        .insert("a".to_string());

    assert_eq!(tree.remove(&"m".to_string()), Some("m".to_string()));
    assert_eq!(tree.traverse_in_order(), vec!["a", "c", "x"]);
    assert_eq!(tree.find_second_highest().map(String::as_str), Some("c"));
}

#[test]
fn extend_keeps_existing_values() {
    let mut tree = build(false);
    tree.extend([2, 8, 15]);

    assert_eq!(tree.len(), 11);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&15));
    assert!(tree.validate().is_ok());
}
