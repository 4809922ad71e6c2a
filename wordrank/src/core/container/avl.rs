// src/core/container/avl.rs
use crate::core::container::Container;
use std::cmp::Ordering;
use std::mem;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        let tallest = height(&self.left).max(height(&self.right));
        self.height = tallest.saturating_add(1);
    }

    /// Left subtree height minus right subtree height.
    fn balance_factor(&self) -> isize {
        let left = isize::try_from(height(&self.left)).unwrap_or(isize::MAX);
        let right = isize::try_from(height(&self.right)).unwrap_or(isize::MAX);
        left.saturating_sub(right)
    }
}

fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height-balanced (AVL) binary search tree.
///
/// After every insertion the heights along the insertion path are refreshed
/// and any node whose balance factor leaves `[-1, 1]` is fixed with a single
/// or double rotation, keeping the depth within about `1.44 * log2(n + 2)`.
#[derive(Debug)]
pub struct AvlTreeMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

fn insert<K: Ord, V>(
    link: Link<K, V>,
    key: K,
    value: V,
    previous: &mut Option<V>,
) -> Box<Node<K, V>> {
    let Some(mut node) = link else {
        return Box::new(Node::leaf(key, value));
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let left = insert(node.left.take(), key, value, previous);
            node.left = Some(left);
        }
        Ordering::Greater => {
            let right = insert(node.right.take(), key, value, previous);
            node.right = Some(right);
        }
        Ordering::Equal => {
            // Shape is unchanged, so no ancestor needs rebalancing either.
            *previous = Some(mem::replace(&mut node.value, value));
            return node;
        }
    }
    rebalance(node)
}

fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let balance = node.balance_factor();
    if balance > 1 {
        // left-right case
        if node.left.as_ref().is_some_and(|l| l.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        // right-left case
        if node.right.as_ref().is_some_and(|r| r.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

impl<K: Ord, V> Container<K, V> for AvlTreeMap<K, V> {
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut previous = None;
        self.root = Some(insert(self.root.take(), key, value, &mut previous));
        if previous.is_none() {
            self.len = self.len.saturating_add(1);
        }
        previous
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

/// In-order (ascending key) traversal of an [`AvlTreeMap`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}
