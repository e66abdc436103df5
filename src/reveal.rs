//! Display state for a guessing view over a [`Tree`]: which nodes have been revealed and whether
//! the guess that revealed them was right. This lives beside the tree, keyed by node value, so
//! the tree itself only ever holds tree state.

use std::collections::BTreeMap;

use kurbo::Point;
use log::trace;

use crate::layout::Layout;
use crate::tree::Tree;

/// How a node came to be shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Revealed by a hit while looking for this node's value.
    Match,
    /// Revealed by a hit while looking for some other value.
    Mismatch,
    /// Shown without a guess.
    Exposed,
}

/// The set of revealed nodes and their [`Status`].
///
/// # Examples
///
/// ```
/// use avl::kurbo::Point;
/// use avl::{Layout, Reveals, Status, Tree};
///
/// let mut tree = Tree::new();
/// for x in [10, 20, 30] {
///     tree.insert(x);
/// }
/// let layout = Layout::default();
/// layout.position(&mut tree, 0.0, 600.0, 0.0);
///
/// let mut reveals = Reveals::new();
///
/// // The player is looking for 10 and clicks the left child.
/// assert_eq!(reveals.reveal(&tree, &layout, Point::new(150.0, 100.0), &10), Some(&10));
/// assert_eq!(reveals.status(&10), Some(Status::Match));
///
/// // Clicking empty space hits nothing.
/// assert_eq!(reveals.reveal(&tree, &layout, Point::new(5.0, 5.0), &10), None);
/// ```
#[derive(Clone, Debug)]
pub struct Reveals<K> {
    statuses: BTreeMap<K, Status>,
}

impl<K> Default for Reveals<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Reveals<K> {
    /// Nothing revealed.
    pub fn new() -> Self {
        Self {
            statuses: BTreeMap::new(),
        }
    }

    /// Reveals the node drawn at `point` and returns its value, or `None` if `point` isn't on any
    /// node. The first reveal of a node decides its status: [`Status::Match`] if its value is
    /// `expected`, [`Status::Mismatch`] otherwise. Revealing it again changes nothing.
    pub fn reveal<'a>(
        &mut self,
        tree: &'a Tree<K>,
        layout: &Layout,
        point: Point,
        expected: &K,
    ) -> Option<&'a K>
    where
        K: Ord + Clone,
    {
        let value = layout.hit_test(tree, point)?.value();
        let status = *self.statuses.entry(value.clone()).or_insert_with(|| {
            if value == expected {
                Status::Match
            } else {
                Status::Mismatch
            }
        });
        trace!("hit at ({}, {}) is {status:?}", point.x, point.y);

        Some(value)
    }

    /// Shows the node holding `value` regardless of any earlier status.
    pub fn expose(&mut self, value: K)
    where
        K: Ord,
    {
        self.statuses.insert(value, Status::Exposed);
    }

    /// How the node holding `value` was revealed, if it has been.
    pub fn status(&self, value: &K) -> Option<Status>
    where
        K: Ord,
    {
        self.statuses.get(value).copied()
    }

    /// Whether the node holding `value` is shown.
    pub fn is_revealed(&self, value: &K) -> bool
    where
        K: Ord,
    {
        self.statuses.contains_key(value)
    }

    /// How many nodes are shown.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether no node is shown.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Hides every node again.
    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}
