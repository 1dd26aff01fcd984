/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! RangeTreeNode - a node in one dimension layer of the range tree.

use point_set::{PointId, Projected};

use crate::arena::NodeIndex;

/// A node in the range tree. Either a leaf holding exactly one point or an
/// internal node with two children.
///
/// Both kinds carry a key in their dimension and a link to the
/// next-dimension subtree over the same point subset.
#[derive(Debug, Clone)]
pub enum RangeTreeNode<L> {
    Leaf(LeafNode<L>),
    Internal(InternalNode<L>),
}

/// A leaf: one point's location in the leaf's dimension.
#[derive(Debug, Clone)]
pub struct LeafNode<L> {
    pub(crate) key: Projected<L>,
    pub(crate) dimension: usize,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) next_dimension: Option<NodeIndex>,
}

/// An internal node, split on the rightmost key of its left subtree.
///
/// Every key in the left subtree is `<=` the split key and every key in the
/// right subtree is `>` it, comparing `(location, point)` pairs.
#[derive(Debug, Clone)]
pub struct InternalNode<L> {
    pub(crate) key: Projected<L>,
    pub(crate) dimension: usize,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) next_dimension: Option<NodeIndex>,
    pub(crate) left: NodeIndex,
    pub(crate) right: NodeIndex,
}

impl<L> InternalNode<L> {
    /// Get the left child index.
    pub const fn left_index(&self) -> NodeIndex {
        self.left
    }

    /// Get the right child index.
    pub const fn right_index(&self) -> NodeIndex {
        self.right
    }

    /// The split key.
    pub const fn key(&self) -> &Projected<L> {
        &self.key
    }
}

impl<L> LeafNode<L> {
    /// The key of the point held by this leaf.
    pub const fn key(&self) -> &Projected<L> {
        &self.key
    }
}

impl<L> RangeTreeNode<L> {
    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// The node's key: the point itself for leaves, the split key otherwise.
    pub const fn key(&self) -> &Projected<L> {
        match self {
            Self::Leaf(leaf) => &leaf.key,
            Self::Internal(internal) => &internal.key,
        }
    }

    pub const fn location(&self) -> &L {
        &self.key().location
    }

    /// The point the key belongs to.
    pub const fn point(&self) -> PointId {
        self.key().point
    }

    /// The dimension this node orders by.
    pub const fn dimension(&self) -> usize {
        match self {
            Self::Leaf(leaf) => leaf.dimension,
            Self::Internal(internal) => internal.dimension,
        }
    }

    /// The parent within the same dimension layer. `None` for a layer root.
    pub const fn parent_index(&self) -> Option<NodeIndex> {
        match self {
            Self::Leaf(leaf) => leaf.parent,
            Self::Internal(internal) => internal.parent,
        }
    }

    /// Root of the tree over the same points, ordered by the next dimension.
    ///
    /// `None` in the last dimension.
    pub const fn next_dimension_subtree(&self) -> Option<NodeIndex> {
        match self {
            Self::Leaf(leaf) => leaf.next_dimension,
            Self::Internal(internal) => internal.next_dimension,
        }
    }

    /// Get the left child index, if this is an internal node.
    pub const fn left_index(&self) -> Option<NodeIndex> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal(internal) => Some(internal.left),
        }
    }

    /// Get the right child index, if this is an internal node.
    pub const fn right_index(&self) -> Option<NodeIndex> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal(internal) => Some(internal.right),
        }
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        match self {
            Self::Leaf(leaf) => leaf.parent = Some(parent),
            Self::Internal(internal) => internal.parent = Some(parent),
        }
    }
}
