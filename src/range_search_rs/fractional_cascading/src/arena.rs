/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for cascading list nodes.
//!
//! The nodes of every list live in one arena. List neighbours, foreign
//! neighbours and higher-dimension variants are all [`FcNodeIndex`] values,
//! so the cross-links never own anything.

use std::ops::{Index, IndexMut};

use crate::FcNode;

/// Index into the node arena of an [`FcMatrix`](crate::FcMatrix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FcNodeIndex(u32);

impl FcNodeIndex {
    /// The raw position of the node in the arena.
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
pub(crate) struct FcArena<L> {
    nodes: Vec<FcNode<L>>,
}

impl<L> FcArena<L> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn as_slice(&self) -> &[FcNode<L>] {
        &self.nodes
    }

    /// Insert a node, returning its index.
    ///
    /// Returns `None`, dropping the node, once the arena holds `u32::MAX`
    /// nodes.
    pub fn insert(&mut self, node: FcNode<L>) -> Option<FcNodeIndex> {
        let position = u32::try_from(self.nodes.len()).ok()?;
        self.nodes.push(node);
        Some(FcNodeIndex(position))
    }
}

impl<L> Index<FcNodeIndex> for FcArena<L> {
    type Output = FcNode<L>;

    fn index(&self, idx: FcNodeIndex) -> &Self::Output {
        &self.nodes[idx.position()]
    }
}

impl<L> IndexMut<FcNodeIndex> for FcArena<L> {
    fn index_mut(&mut self, idx: FcNodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.position()]
    }
}
