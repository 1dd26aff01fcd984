/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Text rendering of a range tree layer, for debugging and reports.
//!
//! Internal nodes are shown as `[split] (leaf locations...)`, leaves as
//! `[location] - payload: P, [locations in this and deeper dimensions]`.

use std::fmt::{Debug, Write as _};

use crate::arena::NodeIndex;
use crate::{RangeTree, RangeTreeNode};

/// Layout options for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of connector-only lines above every child.
    pub vertical_spacing: usize,
    /// Length of the horizontal connector leading to a child.
    pub indent_per_level: usize,
    /// Draw lines with `-` and `|` instead of box-drawing characters.
    pub safe_chars: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            vertical_spacing: 2,
            indent_per_level: 7,
            safe_chars: false,
        }
    }
}

/// Connector strings derived from a [`RenderConfig`].
struct Style {
    vertical_spacing: usize,
    vertical: char,
    /// Pointer to a child that has a sibling below it.
    branch: String,
    /// Pointer to the last child.
    last: String,
    /// Padding below a child that has a sibling below it.
    continued: String,
    /// Padding below the last child.
    blank: String,
}

impl Style {
    fn new(config: &RenderConfig) -> Self {
        let (horizontal, vertical) = if config.safe_chars {
            ('-', '|')
        } else {
            ('─', '│')
        };
        let line: String = std::iter::repeat_n(horizontal, config.indent_per_level).collect();
        let padding = " ".repeat(config.indent_per_level + 1);
        Self {
            vertical_spacing: config.vertical_spacing,
            vertical,
            branch: format!("├{line}"),
            last: format!("└{line}"),
            continued: format!("{vertical}{padding}"),
            blank: format!(" {padding}"),
        }
    }
}

/// Render the layer rooted at `root` as an indented tree.
///
/// Only the layer itself is drawn; next-dimension subtrees show up as the
/// extra locations listed on each leaf.
pub fn render<L: Debug, P: Debug>(
    tree: &RangeTree<L, P>,
    root: NodeIndex,
    config: &RenderConfig,
) -> String {
    let style = Style::new(config);
    let mut out = node_text(tree, root);
    render_children(tree, root, "", &style, &mut out);
    out
}

fn render_children<L: Debug, P: Debug>(
    tree: &RangeTree<L, P>,
    node_idx: NodeIndex,
    padding: &str,
    style: &Style,
    out: &mut String,
) {
    if let RangeTreeNode::Internal(internal) = tree.node(node_idx) {
        render_child(
            tree,
            internal.left_index(),
            padding,
            &style.branch,
            true,
            style,
            out,
        );
        render_child(
            tree,
            internal.right_index(),
            padding,
            &style.last,
            false,
            style,
            out,
        );
    }
}

fn render_child<L: Debug, P: Debug>(
    tree: &RangeTree<L, P>,
    node_idx: NodeIndex,
    padding: &str,
    pointer: &str,
    has_sibling_below: bool,
    style: &Style,
    out: &mut String,
) {
    for _ in 0..style.vertical_spacing {
        out.push('\n');
        out.push_str(padding);
        out.push(style.vertical);
    }
    out.push('\n');
    out.push_str(padding);
    out.push_str(pointer);
    out.push(' ');
    out.push_str(&node_text(tree, node_idx));

    let padding = if has_sibling_below {
        format!("{padding}{}", style.continued)
    } else {
        format!("{padding}{}", style.blank)
    };
    render_children(tree, node_idx, &padding, style, out);
}

fn node_text<L: Debug, P: Debug>(tree: &RangeTree<L, P>, node_idx: NodeIndex) -> String {
    let node = tree.node(node_idx);
    let mut text = format!("[{:?}]", node.location());
    match node {
        RangeTreeNode::Leaf(_) => {
            let _ = write!(text, " - payload: {:?}, [", tree.payload(node.point()));
            let mut current = Some(node_idx);
            let mut first = true;
            while let Some(idx) = current {
                let layer_node = tree.node(idx);
                if !first {
                    text.push_str(", ");
                }
                first = false;
                let _ = write!(text, "{:?}", layer_node.location());
                current = layer_node.next_dimension_subtree();
            }
            text.push(']');
        }
        RangeTreeNode::Internal(_) => {
            let locations: Vec<String> = tree
                .leaf_indices(node_idx)
                .map(|leaf| format!("{:?}", tree.node(leaf).location()))
                .collect();
            let _ = write!(text, " ({})", locations.join(", "));
        }
    }
    text
}
