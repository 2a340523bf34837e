//! Ordered symbol table
//!
//! An unbalanced binary search tree with find-or-insert, lookup, removal and
//! a depth-aware walk that reports each node before, between and after its
//! children. Keys are owned by the tree; removal hands the key back so callers
//! can release anything attached to it.

use std::cmp::Ordering;

/// Position of a visit during [`SymbolTree::walk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Before the left subtree
    Preorder,
    /// Between the left and right subtrees
    Postorder,
    /// After the right subtree
    Endorder,
    /// Node without children (visited once)
    Leaf,
}

#[derive(Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

type Link<K> = Option<Box<Node<K>>>;

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug)]
pub struct SymbolTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for SymbolTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> SymbolTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find `key`, inserting it if absent. Returns the key stored in the tree.
    pub fn insert(&mut self, key: K) -> &K {
        let (stored, fresh) = insert_at(&mut self.root, key);
        if fresh {
            self.len += 1;
        }
        stored
    }

    pub fn find(&self, key: &K) -> Option<&K> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.key),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key`, returning the stored key if it was present
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let removed = remove_at(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

impl<K> SymbolTree<K> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visit every node with its depth (root is 0).
    ///
    /// Interior nodes are reported three times (`Preorder`, `Postorder`,
    /// `Endorder`); leaves once (`Leaf`).
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a K, Visit, usize),
    {
        if let Some(root) = &self.root {
            walk_node(root, &mut visit, 0);
        }
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        self.walk(|key, visit, _| {
            if matches!(visit, Visit::Postorder | Visit::Leaf) {
                keys.push(key);
            }
        });
        keys
    }
}

impl<K> Drop for SymbolTree<K> {
    fn drop(&mut self) {
        // Iterative teardown so a degenerate (list-shaped) tree cannot overflow the stack
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Ord> FromIterator<K> for SymbolTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

fn insert_at<K: Ord>(link: &mut Link<K>, key: K) -> (&K, bool) {
    match link {
        None => (&link.insert(Node::leaf(key)).key, true),
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert_at(&mut node.left, key),
            Ordering::Greater => insert_at(&mut node.right, key),
            Ordering::Equal => (&node.key, false),
        },
    }
}

fn remove_at<K: Ord>(link: &mut Link<K>, key: &K) -> Option<K> {
    let node = link.as_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => return remove_at(&mut node.left, key),
        Ordering::Greater => return remove_at(&mut node.right, key),
        Ordering::Equal => {}
    }

    let mut node = link.take()?;
    *link = match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            // Splice the in-order successor into the vacated slot
            let (successor, rest) = take_min(right);
            Some(Box::new(Node {
                key: successor,
                left: Some(left),
                right: rest,
            }))
        }
    };
    Some(node.key)
}

/// Detach the smallest key of a subtree, returning it and what remains
fn take_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

fn walk_node<'a, K, F>(node: &'a Node<K>, visit: &mut F, depth: usize)
where
    F: FnMut(&'a K, Visit, usize),
{
    if node.left.is_none() && node.right.is_none() {
        visit(&node.key, Visit::Leaf, depth);
        return;
    }

    visit(&node.key, Visit::Preorder, depth);
    if let Some(left) = &node.left {
        walk_node(left, visit, depth + 1);
    }
    visit(&node.key, Visit::Postorder, depth);
    if let Some(right) = &node.right {
        walk_node(right, visit, depth + 1);
    }
    visit(&node.key, Visit::Endorder, depth);
}
