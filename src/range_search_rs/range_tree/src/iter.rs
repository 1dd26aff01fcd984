/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterators for traversing a single layer of the range tree.
//!
//! None of these iterators follow next-dimension links: they stay within the
//! layer they started in. All traversals are iterative, using an explicit
//! stack or parent links instead of recursion.

use crate::arena::NodeIndex;
use crate::{RangeTree, RangeTreeNode};

/// An iterator that performs a depth-first traversal of one layer.
///
/// # Traversal Order
///
/// Nodes are visited in pre-order (parent before children), with left children
/// visited before right children. This matches the natural reading order of
/// the tree from left to right.
#[derive(Debug)]
pub struct PreOrderDfsIterator<'a, L, P> {
    /// Reference to the tree (used to resolve node indices).
    tree: &'a RangeTree<L, P>,
    /// Stack of node indices to visit. Nodes are pushed right-first so left is
    /// processed first (LIFO order).
    stack: Vec<NodeIndex>,
}

impl<'a, L, P> PreOrderDfsIterator<'a, L, P> {
    /// Create a new iterator starting from the root of the given tree.
    pub fn new(tree: &'a RangeTree<L, P>) -> Self {
        Self::from_node(tree, tree.root_index())
    }

    /// Create a new iterator starting from the given node index in the tree.
    pub fn from_node(tree: &'a RangeTree<L, P>, node_idx: NodeIndex) -> Self {
        let mut stack = Vec::with_capacity(4);
        stack.push(node_idx);
        Self { tree, stack }
    }
}

impl<'a, L, P> Iterator for PreOrderDfsIterator<'a, L, P> {
    type Item = &'a RangeTreeNode<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.tree.node(node_idx);

        if let RangeTreeNode::Internal(internal) = node {
            self.stack.push(internal.right_index());
            self.stack.push(internal.left_index());
        }

        Some(node)
    }
}

impl<'a, L, P> IntoIterator for &'a RangeTree<L, P> {
    type Item = &'a RangeTreeNode<L>;
    type IntoIter = PreOrderDfsIterator<'a, L, P>;

    fn into_iter(self) -> Self::IntoIter {
        PreOrderDfsIterator::new(self)
    }
}

/// Which projection of a leaf [`Leaves`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafView {
    /// The leaf's [`NodeIndex`].
    Node,
    /// The leaf's location in its layer's dimension.
    Location,
    /// The payload of the leaf's point.
    Payload,
}

/// A leaf, projected as requested by a [`LeafView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafItem<'a, L, P> {
    Node(NodeIndex),
    Location(&'a L),
    Payload(&'a P),
}

/// Lazy left-to-right traversal of the leaves under a node.
///
/// The iterator is finite and cannot be restarted; ask the tree for a new
/// one instead.
#[derive(Debug)]
pub struct Leaves<'a, L, P> {
    tree: &'a RangeTree<L, P>,
    stack: Vec<NodeIndex>,
    view: LeafView,
}

impl<'a, L, P> Leaves<'a, L, P> {
    pub(crate) fn new(tree: &'a RangeTree<L, P>, node_idx: NodeIndex, view: LeafView) -> Self {
        let mut stack = Vec::with_capacity(8);
        stack.push(node_idx);
        Self { tree, stack, view }
    }

    fn next_leaf(&mut self) -> Option<NodeIndex> {
        while let Some(node_idx) = self.stack.pop() {
            match self.tree.node(node_idx) {
                RangeTreeNode::Leaf(_) => return Some(node_idx),
                RangeTreeNode::Internal(internal) => {
                    self.stack.push(internal.right_index());
                    self.stack.push(internal.left_index());
                }
            }
        }
        None
    }
}

impl<'a, L, P> Iterator for Leaves<'a, L, P> {
    type Item = LeafItem<'a, L, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let leaf = self.next_leaf()?;
        let tree = self.tree;
        Some(match self.view {
            LeafView::Node => LeafItem::Node(leaf),
            LeafView::Location => LeafItem::Location(tree.node(leaf).location()),
            LeafView::Payload => LeafItem::Payload(tree.payload(tree.node(leaf).point())),
        })
    }
}

/// Leaf indices under a node, left to right.
pub(crate) struct LeafIndices<'a, L, P>(Leaves<'a, L, P>);

impl<L, P> Iterator for LeafIndices<'_, L, P> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_leaf()
    }
}

impl<L, P> RangeTree<L, P> {
    pub(crate) fn leaf_indices(&self, node_idx: NodeIndex) -> LeafIndices<'_, L, P> {
        LeafIndices(Leaves::new(self, node_idx, LeafView::Node))
    }
}

/// Walks parent links from a node up to the root of its layer.
///
/// The starting node itself is not yielded.
#[derive(Debug)]
pub struct Ancestors<'a, L, P> {
    tree: &'a RangeTree<L, P>,
    next: Option<NodeIndex>,
}

impl<'a, L, P> Ancestors<'a, L, P> {
    pub(crate) fn new(tree: &'a RangeTree<L, P>, node_idx: NodeIndex) -> Self {
        Self {
            tree,
            next: tree.node(node_idx).parent_index(),
        }
    }
}

impl<L, P> Iterator for Ancestors<'_, L, P> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).parent_index();
        Some(current)
    }
}
