// tests/integration_tests/depth_bound_test.rs
use wordrank::{AvlTreeMap, BstMap, Container};

fn avl_bound(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}

fn sorted_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word{i:06}")).collect()
}

#[test]
fn test_sorted_insertions_balanced_vs_unbalanced() {
    for n in [1, 2, 10, 100, 2_000] {
        let mut avl = AvlTreeMap::new();
        let mut bst = BstMap::new();
        for key in sorted_keys(n) {
            avl.put(key.clone(), 1_u64);
            bst.put(key, 1_u64);
        }
        assert!(
            avl.height() <= avl_bound(n),
            "AVL height {} over bound {} for n = {n}",
            avl.height(),
            avl_bound(n)
        );
        assert_eq!(bst.height(), n, "BST should degenerate at n = {n}");
        assert_eq!(avl.size(), bst.size());
    }
}

#[test]
fn test_reinserting_keys_does_not_change_shape() {
    let mut avl = AvlTreeMap::new();
    for key in sorted_keys(64) {
        avl.put(key, 1_u64);
    }
    let height = avl.height();
    for key in sorted_keys(64) {
        assert_eq!(avl.put(key, 2), Some(1));
    }
    assert_eq!(avl.height(), height);
    assert_eq!(avl.size(), 64);
}
