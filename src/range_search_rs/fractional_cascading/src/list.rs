/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! FcList - the doubly linked list of one dimension.

use crate::FcNode;
use crate::arena::{FcArena, FcNodeIndex};

/// Head, tail and length of one dimension's list.
///
/// The nodes themselves live in the matrix's arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FcList {
    head: Option<FcNodeIndex>,
    tail: Option<FcNodeIndex>,
    len: usize,
}

impl FcList {
    /// Link `nodes`, in order, into a new list.
    pub(crate) fn from_nodes<L>(arena: &mut FcArena<L>, nodes: &[FcNodeIndex]) -> Self {
        let mut list = Self::default();
        for &idx in nodes {
            list.append(arena, idx);
        }
        list
    }

    /// Append a detached node at the tail.
    pub(crate) fn append<L>(&mut self, arena: &mut FcArena<L>, idx: FcNodeIndex) {
        arena[idx].prev = self.tail;
        arena[idx].next = None;
        match self.tail {
            Some(tail) => arena[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    pub const fn head(&self) -> Option<FcNodeIndex> {
        self.head
    }

    pub const fn tail(&self) -> Option<FcNodeIndex> {
        self.tail
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Walks a list from head to tail.
#[derive(Debug)]
pub struct ListIter<'a, L> {
    nodes: &'a [FcNode<L>],
    next: Option<FcNodeIndex>,
}

impl<'a, L> ListIter<'a, L> {
    pub(crate) const fn new(nodes: &'a [FcNode<L>], head: Option<FcNodeIndex>) -> Self {
        Self { nodes, next: head }
    }
}

impl<'a, L> Iterator for ListIter<'a, L> {
    type Item = (FcNodeIndex, &'a FcNode<L>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.nodes.get(idx.position())?;
        self.next = node.next;
        Some((idx, node))
    }
}
