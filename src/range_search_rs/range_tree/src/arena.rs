/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for range tree nodes.
//!
//! Every node of every dimension layer lives in a single arena. Children,
//! parents and next-dimension subtrees are referenced by [`NodeIndex`], so
//! back-references never imply ownership and the tree drops as a whole.

use std::ops::{Index, IndexMut};

use crate::RangeTreeNode;

/// Index into the node arena.
///
/// A lightweight handle, only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// The raw position of the node in the arena.
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

/// Arena storage for [`RangeTreeNode`]s.
///
/// Nodes are only ever appended: a built tree is immutable.
#[derive(Debug)]
pub(crate) struct NodeArena<L> {
    nodes: Vec<RangeTreeNode<L>>,
}

impl<L> NodeArena<L> {
    /// Create an arena able to hold `capacity` nodes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node into the arena, returning its index.
    ///
    /// Returns `None`, dropping the node, once the arena holds `u32::MAX`
    /// nodes.
    pub fn insert(&mut self, node: RangeTreeNode<L>) -> Option<NodeIndex> {
        let position = u32::try_from(self.nodes.len()).ok()?;
        self.nodes.push(node);
        Some(NodeIndex(position))
    }
}

impl<L> Index<NodeIndex> for NodeArena<L> {
    type Output = RangeTreeNode<L>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.position()]
    }
}

impl<L> IndexMut<NodeIndex> for NodeArena<L> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.position()]
    }
}
