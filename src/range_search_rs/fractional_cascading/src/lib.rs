/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Fractional cascading across the dimensions of a static point set.
//!
//! An [`FcMatrix`] keeps one sorted list per dimension. The list of the
//! last dimension holds that dimension's locations. Every shallower list
//! merges its own locations with copies of every second node of the list
//! below it. Those *promoted* copies link back to the node they were
//! copied from, and every node links to the nearest node of the opposite
//! kind on either side.
//!
//! With these links a single binary search in dimension 0 locates the
//! successor of a value in every dimension, paying only a bounded walk per
//! additional dimension instead of another binary search.
//!
//! # Example
//!
//! ```
//! use fractional_cascading::FcMatrix;
//! use point_set::Point;
//!
//! let points = [(5, 40), (15, 30), (25, 20), (35, 10)]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &(x, y))| Point::new(vec![x, y], i))
//!     .collect();
//! let matrix = FcMatrix::build(points, 2).unwrap();
//!
//! let successors = matrix.search(&17).unwrap();
//! let in_x = successors.get(0).unwrap();
//! let in_y = successors.get(1).unwrap();
//! assert_eq!(matrix.node(in_x).location(), &25);
//! assert_eq!(matrix.node(in_y).location(), &20);
//! ```

mod arena;
mod error;
mod list;
mod matrix;
mod node;

pub use arena::FcNodeIndex;
pub use error::CascadeError;
pub use list::{FcList, ListIter};
pub use matrix::{FcMatrix, FcMatrixConfig, Successors};
pub use node::{FcNode, NodeStatus};
