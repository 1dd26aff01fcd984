/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks for the matrix.
//!
//! Under the `unittest` feature these checks run after every construction.

use std::fmt::Debug;

use super::FcMatrix;
use crate::arena::FcNodeIndex;
use crate::{FcNode, NodeStatus};

impl<L: Ord + Debug, P> FcMatrix<L, P> {
    /// Assert every structural invariant of the matrix.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violated invariant:
    /// - each list must be doubly linked, sorted by location and hold only
    ///   nodes of its own dimension;
    /// - list `d` must hold the `n` local nodes of dimension `d` plus one
    ///   promoted copy of every second node of list `d + 1`;
    /// - foreign neighbours must be the nearest nodes of opposite status;
    /// - list 0 must match the array used for binary search.
    pub fn check_invariants(&self) {
        let dimensionality = self.dimensionality();
        assert_eq!(self.lists.len(), dimensionality, "one list per dimension");
        assert_eq!(
            self.locals.len(),
            dimensionality,
            "one local column per dimension"
        );

        let walked: Vec<Vec<FcNodeIndex>> =
            (0..dimensionality).map(|d| self.check_list(d)).collect();

        let mut expected_len = self.len();
        for dimension in (0..dimensionality).rev() {
            assert_eq!(
                walked[dimension].len(),
                expected_len,
                "list {dimension} has the wrong number of nodes"
            );
            expected_len = self.len() + expected_len.div_ceil(2);

            let locals: Vec<FcNodeIndex> = walked[dimension]
                .iter()
                .copied()
                .filter(|&idx| self.nodes[idx].is_local())
                .collect();
            assert_eq!(
                locals, self.locals[dimension],
                "local nodes of list {dimension} differ from the sorted column"
            );

            let promoted: Vec<FcNodeIndex> = walked[dimension]
                .iter()
                .copied()
                .filter(|&idx| !self.nodes[idx].is_local())
                .collect();
            self.check_promoted(dimension, &promoted, walked.get(dimension + 1));
            self.check_foreign_neighbours(dimension, &walked[dimension]);
        }

        if let Some(first) = walked.first() {
            assert_eq!(
                &self.first, first,
                "binary search array differs from list 0"
            );
            assert!(
                first.len() <= 2 * self.len(),
                "list 0 holds {} nodes for {} points",
                first.len(),
                self.len()
            );
        }
        let total: usize = walked.iter().map(Vec::len).sum();
        assert_eq!(total, self.nodes.len(), "arena holds unlisted nodes");
    }

    /// Walk list `dimension` forwards, checking its links and order.
    fn check_list(&self, dimension: usize) -> Vec<FcNodeIndex> {
        let list = &self.lists[dimension];
        let mut walked = Vec::with_capacity(list.len());
        let mut prev: Option<FcNodeIndex> = None;
        let mut current = list.head();

        while let Some(idx) = current {
            assert!(
                walked.len() < self.nodes.len(),
                "list {dimension} contains a cycle"
            );
            let node = &self.nodes[idx];
            assert_eq!(
                node.dimension(),
                dimension,
                "node {idx:?} is linked into list {dimension}"
            );
            assert_eq!(node.prev(), prev, "node {idx:?} has a stale back link");
            if let Some(prev) = prev {
                assert!(
                    self.nodes[prev].location() <= node.location(),
                    "list {dimension} is out of order at {idx:?}"
                );
            }
            if node.is_local() {
                assert!(
                    node.higher().is_none(),
                    "local node {idx:?} has a higher variant"
                );
            }
            walked.push(idx);
            prev = Some(idx);
            current = node.next();
        }

        assert_eq!(
            list.tail(),
            prev,
            "list {dimension} tail is not its last node"
        );
        assert_eq!(list.len(), walked.len(), "list {dimension} length is stale");
        walked
    }

    /// Promoted nodes of list `dimension` must be copies of positions
    /// 0, 2, 4, ... of `deeper`, in order.
    fn check_promoted(
        &self,
        dimension: usize,
        promoted: &[FcNodeIndex],
        deeper: Option<&Vec<FcNodeIndex>>,
    ) {
        let Some(deeper) = deeper else {
            assert!(
                promoted.is_empty(),
                "the last list holds {} promoted nodes",
                promoted.len()
            );
            return;
        };

        let sources: Vec<FcNodeIndex> = deeper.iter().copied().step_by(2).collect();
        assert_eq!(
            promoted.len(),
            sources.len(),
            "list {dimension} promotes the wrong number of nodes"
        );
        for (&idx, &source) in promoted.iter().zip(&sources) {
            let node: &FcNode<L> = &self.nodes[idx];
            assert_eq!(
                node.higher(),
                Some(source),
                "promoted node {idx:?} does not lead to {source:?}"
            );
            let higher = &self.nodes[source];
            assert_eq!(
                node.key(),
                higher.key(),
                "promoted node {idx:?} changed its key"
            );
            assert_eq!(
                node.home_dimension(),
                higher.home_dimension(),
                "promoted node {idx:?} changed its home dimension"
            );
        }
    }

    fn check_foreign_neighbours(&self, dimension: usize, list: &[FcNodeIndex]) {
        for (position, &idx) in list.iter().enumerate() {
            let status = self.nodes[idx].status();
            let differs = |other: &&FcNodeIndex| self.nodes[**other].status() != status;
            let prev = list[..position].iter().rev().find(differs).copied();
            let next = list[position + 1..].iter().find(differs).copied();

            let node = &self.nodes[idx];
            assert_eq!(
                node.prev_foreign(),
                prev,
                "{status:?} node {idx:?} of list {dimension} has the wrong previous foreign neighbour"
            );
            assert_eq!(
                node.next_foreign(),
                next,
                "{status:?} node {idx:?} of list {dimension} has the wrong next foreign neighbour"
            );
        }

        if dimension + 1 == self.dimensionality() {
            assert!(
                list.iter()
                    .all(|&idx| self.nodes[idx].status() == NodeStatus::Local),
                "the last list must be all local"
            );
        }
    }
}
