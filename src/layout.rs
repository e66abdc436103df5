//! Assigns screen coordinates to the nodes of a [`Tree`] and maps coordinates back to nodes.
//!
//! Every node is drawn as a `node_size` square whose top edge is centred on its position. Each
//! level of the tree sits `node_size + margin` below the previous one, and each node is centred
//! in the horizontal band its parent hands down.
//!
//! # Examples
//!
//! ```
//! use avl::kurbo::Point;
//! use avl::{Layout, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [10, 20, 30] {
//!     tree.insert(x);
//! }
//!
//! let layout = Layout::default();
//! layout.position(&mut tree, 0.0, 600.0, 0.0);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.position(), Some(Point::new(300.0, 0.0)));
//!
//! let hit = layout.hit_test(&tree, Point::new(150.0, 100.0));
//! assert_eq!(hit.map(|n| *n.value()), Some(10));
//! ```

use kurbo::{Point, Rect};
use log::debug;

use crate::tree::{Node, Tree};

/// Sizes used when laying out and hit testing a tree.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Width and height of the square drawn for each node.
    pub node_size: f64,
    /// Vertical gap between levels. Twice this is also how far an only child is nudged away
    /// from the missing sibling's side.
    pub margin: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            node_size: 60.0,
            margin: 20.0,
        }
    }
}

impl Layout {
    /// Returns this layout with a different node size.
    pub fn with_node_size(self, node_size: f64) -> Self {
        Self { node_size, ..self }
    }

    /// Returns this layout with a different margin.
    pub fn with_margin(self, margin: f64) -> Self {
        Self { margin, ..self }
    }

    /// Positions every node of `tree`. The root is centred in `[min_x, max_x]` at height `top`.
    /// Laying out the same tree twice with the same bounds gives the same positions.
    pub fn position<K>(&self, tree: &mut Tree<K>, min_x: f64, max_x: f64, top: f64) {
        if let Some(root) = tree.root_mut() {
            self.position_node(root, min_x, max_x, top);
        }
        debug!(
            "laid out {} nodes in [{min_x}, {max_x}] from y = {top}",
            tree.len()
        );
    }

    fn position_node<K>(&self, node: &mut Node<K>, min_x: f64, max_x: f64, y: f64) {
        let x = (min_x + max_x) / 2.0;
        node.position = Some(Point::new(x, y));

        let child_y = y + self.node_size + self.margin;
        let has_left = node.left().is_some();
        let has_right = node.right().is_some();

        if let Some(left) = node.left_mut() {
            let end = if has_right {
                x
            } else {
                max_x - 2.0 * self.margin
            };
            self.position_node(left, min_x, end, child_y);
        }
        if let Some(right) = node.right_mut() {
            let start = if has_left {
                x
            } else {
                min_x + 2.0 * self.margin
            };
            self.position_node(right, start, max_x, child_y);
        }
    }

    /// The square drawn for a node positioned at `position`.
    pub fn node_rect(&self, position: Point) -> Rect {
        let half = self.node_size / 2.0;
        Rect::new(
            position.x - half,
            position.y,
            position.x + half,
            position.y + self.node_size,
        )
    }

    /// Finds the node drawn at `point`, checking each node before its left then right subtree.
    /// Points on the edge of a node's square count as inside it. Nodes that haven't been
    /// positioned yet can't be hit.
    pub fn hit_test<'a, K>(&self, tree: &'a Tree<K>, point: Point) -> Option<&'a Node<K>> {
        tree.root().and_then(|root| self.hit_node(root, point))
    }

    fn hit_node<'a, K>(&self, node: &'a Node<K>, point: Point) -> Option<&'a Node<K>> {
        let hit = node
            .position()
            .map(|position| self.node_rect(position))
            .is_some_and(|rect| {
                rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
            });
        if hit {
            return Some(node);
        }

        node.left()
            .and_then(|left| self.hit_node(left, point))
            .or_else(|| node.right().and_then(|right| self.hit_node(right, point)))
    }
}
