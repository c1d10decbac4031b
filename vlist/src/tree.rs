//! Tree flattening: a forest plus a set of expanded keys → the ordered rows a tree view shows.
//!
//! The flattened sequence is a pure function of the forest and the [`ExpansionState`]. Nothing
//! here caches it; [`VisibleNodes`] walks the forest lazily with an explicit stack, so a window
//! slice only touches the nodes before its end.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::slice;

use crate::key::{ExpansionKey, KeySet};

/// A node of the caller's forest.
///
/// A node with an empty `children` vector is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub data: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn leaf(data: T) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    pub fn with_children(data: T, children: Vec<TreeNode<T>>) -> Self {
        Self { data, children }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// One row of the flattened tree.
#[derive(Debug)]
pub struct VisibleNode<'a, T> {
    pub data: &'a T,
    /// 0 for roots, parent depth + 1 otherwise.
    pub depth: usize,
    /// Whether the node's key is in the expansion state.
    pub expanded: bool,
    pub has_children: bool,
}

impl<T> Clone for VisibleNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VisibleNode<'_, T> {}

impl<T: PartialEq> PartialEq for VisibleNode<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
            && self.depth == other.depth
            && self.expanded == other.expanded
            && self.has_children == other.has_children
    }
}

/// The set of expanded node keys.
///
/// Collapsed is represented by absence, so the set stays sparse. Keys of nodes that have since
/// disappeared from the forest are harmless: they are only ever looked up.
#[derive(Clone, Debug)]
pub struct ExpansionState<K> {
    expanded: KeySet<K>,
}

impl<K: ExpansionKey> Default for ExpansionState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ExpansionKey> PartialEq for ExpansionState<K> {
    fn eq(&self, other: &Self) -> bool {
        self.expanded == other.expanded
    }
}

impl<K: ExpansionKey> Eq for ExpansionState<K> {}

impl<K: ExpansionKey> FromIterator<K> for ExpansionState<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}

impl<K: ExpansionKey> ExpansionState<K> {
    pub fn new() -> Self {
        Self {
            expanded: KeySet::new(),
        }
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.contains(key)
    }

    /// Returns `true` if the key was not expanded before.
    pub fn expand(&mut self, key: K) -> bool {
        self.expanded.insert(key)
    }

    /// Returns `true` if the key was expanded before.
    pub fn collapse(&mut self, key: &K) -> bool {
        self.expanded.remove(key)
    }

    /// Flips `key` in place and returns whether it is now expanded.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.expanded.remove(&key) {
            vtrace!("collapse");
            false
        } else {
            vtrace!("expand");
            self.expanded.insert(key);
            true
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.expanded.iter()
    }
}

/// Returns a new state with `key` flipped: removed if present, inserted otherwise.
pub fn toggle_expand<K: ExpansionKey + Clone>(state: &ExpansionState<K>, key: K) -> ExpansionState<K> {
    let mut next = state.clone();
    next.toggle(key);
    next
}

/// Lazy pre-order iterator over the visible nodes of a forest.
///
/// Holds one slice iterator per open level, so memory is proportional to the depth of the
/// deepest expanded path rather than to the size of the forest.
pub struct VisibleNodes<'a, 's, T, K, F> {
    stack: Vec<(slice::Iter<'a, TreeNode<T>>, usize)>,
    state: &'s ExpansionState<K>,
    key_of: F,
}

impl<'a, 's, T, K, F> VisibleNodes<'a, 's, T, K, F>
where
    K: ExpansionKey,
    F: Fn(&T) -> K,
{
    pub fn new(roots: &'a [TreeNode<T>], state: &'s ExpansionState<K>, key_of: F) -> Self {
        let mut stack = Vec::new();
        if !roots.is_empty() {
            stack.push((roots.iter(), 0));
        }
        Self {
            stack,
            state,
            key_of,
        }
    }
}

impl<'a, T, K, F> Iterator for VisibleNodes<'a, '_, T, K, F>
where
    K: ExpansionKey,
    F: Fn(&T) -> K,
{
    type Item = VisibleNode<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (level, depth) = self.stack.last_mut()?;
            let depth = *depth;
            let Some(node) = level.next() else {
                self.stack.pop();
                continue;
            };

            let expanded = self.state.is_expanded(&(self.key_of)(&node.data));
            let has_children = node.has_children();
            if expanded && has_children {
                self.stack.push((node.children.iter(), depth + 1));
            }
            return Some(VisibleNode {
                data: &node.data,
                depth,
                expanded,
                has_children,
            });
        }
    }
}

impl<T, K, F> FusedIterator for VisibleNodes<'_, '_, T, K, F>
where
    K: ExpansionKey,
    F: Fn(&T) -> K,
{
}

/// Flattens the forest into its visible rows, in pre-order.
pub fn flatten<'a, T, K: ExpansionKey>(
    roots: &'a [TreeNode<T>],
    state: &ExpansionState<K>,
    key_of: impl Fn(&T) -> K,
) -> Vec<VisibleNode<'a, T>> {
    VisibleNodes::new(roots, state, key_of).collect()
}

/// Number of visible rows; equal to `flatten(..).len()`.
pub fn item_count<T, K: ExpansionKey>(
    roots: &[TreeNode<T>],
    state: &ExpansionState<K>,
    key_of: impl Fn(&T) -> K,
) -> usize {
    VisibleNodes::new(roots, state, key_of).count()
}

/// Visible rows `start..end`, equal to `flatten(..)[start..end]` with bounds clamped.
///
/// The walk stops as soon as `end` is reached.
pub fn slice_visible<'a, T, K: ExpansionKey>(
    roots: &'a [TreeNode<T>],
    state: &ExpansionState<K>,
    key_of: impl Fn(&T) -> K,
    start: usize,
    end: usize,
) -> Vec<VisibleNode<'a, T>> {
    if start >= end {
        return Vec::new();
    }
    VisibleNodes::new(roots, state, key_of)
        .skip(start)
        .take(end - start)
        .collect()
}

/// Position of the node keyed `key` in the flattened sequence, if it is visible.
pub fn find_visible_index<T, K: ExpansionKey>(
    roots: &[TreeNode<T>],
    state: &ExpansionState<K>,
    key_of: impl Fn(&T) -> K,
    key: &K,
) -> Option<usize> {
    let mut nodes = VisibleNodes::new(roots, state, &key_of);
    nodes.position(|node| key_of(node.data) == *key)
}

/// An expansion state in which every node that has children is expanded.
pub fn expand_all<T, K: ExpansionKey>(
    roots: &[TreeNode<T>],
    key_of: impl Fn(&T) -> K,
) -> ExpansionState<K> {
    let mut state = ExpansionState::new();
    let mut stack: Vec<slice::Iter<'_, TreeNode<T>>> = Vec::new();
    stack.push(roots.iter());
    while let Some(level) = stack.last_mut() {
        let Some(node) = level.next() else {
            stack.pop();
            continue;
        };
        if node.has_children() {
            state.expand(key_of(&node.data));
            stack.push(node.children.iter());
        }
    }
    vdebug!(expanded = state.len(), "expand_all");
    state
}
