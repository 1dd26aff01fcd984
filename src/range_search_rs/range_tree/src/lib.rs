/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! RangeTree - a layered range tree for multidimensional orthogonal range search.
//!
//! The tree is built once over a static [`PointSet`](point_set::PointSet).
//! Dimension 0 is a balanced binary search tree over every point, split at
//! the median. Every node additionally links to a *next-dimension subtree*:
//! a tree over exactly the same points, ordered by the next dimension. The
//! last dimension's nodes have no next-dimension subtree.
//!
//! # Overview
//!
//! - [`RangeTree::query`] descends a single dimension to the leaf holding a
//!   target location, or its successor when the location is absent.
//! - [`RangeTree::range_search`] decomposes a query box into canonical
//!   subsets dimension by dimension, answering in `O(log^k n + output)`.
//! - [`RangeTree::leaves`] and [`render`] expose the structure for
//!   reporting and debugging.
//!
//! # Example
//!
//! ```
//! use point_set::Point;
//! use range_tree::RangeTree;
//!
//! let points = [(10, 10), (30, 70), (50, 50), (70, 30), (90, 90)]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &(x, y))| Point::new(vec![x, y], i))
//!     .collect();
//! let tree = RangeTree::build(points, 2).unwrap();
//!
//! let found = tree.range_search_sorted(&[20, 20], &[80, 80]).unwrap();
//! assert_eq!(found, vec![&1, &2, &3]);
//! ```

mod arena;
mod error;
mod iter;
mod node;
mod render;
mod tree;

pub use arena::NodeIndex;
pub use error::RangeTreeError;
pub use iter::{Ancestors, LeafItem, LeafView, Leaves, PreOrderDfsIterator};
pub use node::{InternalNode, LeafNode, RangeTreeNode};
pub use render::{RenderConfig, render};
pub use tree::{Direction, PathStep, QueryBias, RangeTree, SearchPath};
