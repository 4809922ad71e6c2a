// src/core/container/bst.rs
use crate::core::container::Container;
use std::cmp::Ordering;
use std::mem;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// Binary search tree without rebalancing.
///
/// Insertion order decides the shape, so sorted input degenerates into a
/// list. Every walk over the tree is iterative so that a degenerate tree of
/// any depth is safe to build, query and drop.
#[derive(Debug)]
pub struct BstMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> BstMap<K, V> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<K, V>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let children = [node.left.as_deref(), node.right.as_deref()];
            for child in children.into_iter().flatten() {
                stack.push((child, depth.saturating_add(1)));
            }
        }
        tallest
    }
}

impl<K: Ord, V> Default for BstMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Container<K, V> for BstMap<K, V> {
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
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
        }
        *link = Some(Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        }));
        self.len = self.len.saturating_add(1);
        None
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

impl<K, V> Drop for BstMap<K, V> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// In-order (ascending key) traversal of a [`BstMap`].
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
