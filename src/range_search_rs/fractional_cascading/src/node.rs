/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! FcNode - a single entry of a cascading list.

use point_set::{PointId, Projected};

use crate::arena::FcNodeIndex;

/// Whether a node belongs to its list's own dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// The node carries a location of the list's own dimension.
    Local,
    /// The node is a copy of a node from the next deeper list.
    Promoted,
}

/// One point's location, placed in the list of some dimension.
///
/// A local node sits in the list of its home dimension. A promoted node
/// sits in a shallower list and keeps the location of its home dimension,
/// linking back to the node it was copied from.
#[derive(Debug, Clone)]
pub struct FcNode<L> {
    pub(crate) key: Projected<L>,
    /// The dimension the location belongs to.
    pub(crate) home_dimension: usize,
    /// The dimension of the list holding this node.
    pub(crate) dimension: usize,
    /// The node this one was promoted from, one dimension deeper.
    pub(crate) higher: Option<FcNodeIndex>,
    pub(crate) prev: Option<FcNodeIndex>,
    pub(crate) next: Option<FcNodeIndex>,
    /// The nearest preceding node of the opposite status.
    pub(crate) prev_foreign: Option<FcNodeIndex>,
    /// The nearest following node of the opposite status.
    pub(crate) next_foreign: Option<FcNodeIndex>,
}

impl<L> FcNode<L> {
    pub(crate) const fn local(key: Projected<L>, dimension: usize) -> Self {
        Self {
            key,
            home_dimension: dimension,
            dimension,
            higher: None,
            prev: None,
            next: None,
            prev_foreign: None,
            next_foreign: None,
        }
    }

    pub(crate) fn promoted_from(&self, higher: FcNodeIndex) -> Self
    where
        L: Clone,
    {
        Self {
            key: self.key.clone(),
            home_dimension: self.home_dimension,
            dimension: self.dimension - 1,
            higher: Some(higher),
            prev: None,
            next: None,
            prev_foreign: None,
            next_foreign: None,
        }
    }

    pub const fn status(&self) -> NodeStatus {
        if self.dimension == self.home_dimension {
            NodeStatus::Local
        } else {
            NodeStatus::Promoted
        }
    }

    pub const fn is_local(&self) -> bool {
        matches!(self.status(), NodeStatus::Local)
    }

    pub const fn key(&self) -> &Projected<L> {
        &self.key
    }

    pub const fn location(&self) -> &L {
        &self.key.location
    }

    pub const fn point(&self) -> PointId {
        self.key.point
    }

    pub const fn home_dimension(&self) -> usize {
        self.home_dimension
    }

    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// The node this one was promoted from. `None` for local nodes.
    pub const fn higher(&self) -> Option<FcNodeIndex> {
        self.higher
    }

    pub const fn prev(&self) -> Option<FcNodeIndex> {
        self.prev
    }

    pub const fn next(&self) -> Option<FcNodeIndex> {
        self.next
    }

    pub const fn prev_foreign(&self) -> Option<FcNodeIndex> {
        self.prev_foreign
    }

    pub const fn next_foreign(&self) -> Option<FcNodeIndex> {
        self.next_foreign
    }
}
