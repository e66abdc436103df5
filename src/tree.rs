//! An insert-only AVL tree. Each node owns its children through `Option<Box<_>>` links and
//! caches the height of the subtree rooted at it. Rotations take the subtree out of the link that
//! owns it, relink the boxes and write the new subtree root back into the same link, so a parent
//! never has to know that its child changed.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Inserting in descending order would build a chain in a plain BST...
//! tree.insert(30);
//! tree.insert(20);
//! tree.insert(10);
//!
//! // ...but the AVL tree rotates 20 up to the root.
//! let root = tree.root().unwrap();
//! assert_eq!(root.value(), &20);
//! assert_eq!(root.height(), 1);
//! assert_eq!(root.left().map(|n| *n.value()), Some(10));
//! assert_eq!(root.right().map(|n| *n.value()), Some(30));
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(20));
//! assert_eq!(tree.len(), 3);
//! ```

use std::cmp::Ordering;

use kurbo::Point;
use log::{debug, trace};

use crate::error::InvariantError;
use crate::util::{InsertResult, Side};

/// Height of an absent subtree. A leaf has height `EMPTY_HEIGHT + 1 == 0`.
pub const EMPTY_HEIGHT: isize = -1;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique values.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// Inserts `value` into the tree, rebalancing every node on the way back up. Returns `false`
    /// and leaves the tree untouched if `value` is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: K) -> bool
    where
        K: Ord,
    {
        match self.root.insert(value) {
            InsertResult::Duplicate => {
                debug!("value already present, tree of {} nodes left unchanged", self.len);
                false
            }
            InsertResult::Created | InsertResult::Descended(_) => {
                self.len += 1;
                true
            }
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    pub(crate) fn root_mut(&mut self) -> Option<&mut Node<K>> {
        self.root.node_mut()
    }

    /// The height of the tree: [`EMPTY_HEIGHT`] when empty and `0` for a lone root.
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// How many values have been inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the whole tree and reports the first node that breaks the BST order, the AVL balance
    /// condition, or has a cached height that disagrees with its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..100 {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<(), InvariantError<K>>
    where
        K: Ord + Clone,
    {
        match self.root() {
            Some(root) => root.check(None, None).map(|_| ()),
            None => Ok(()),
        }
    }
}

/// A single value in a [`Tree`] along with its children and display position.
#[derive(Clone, Debug)]
pub struct Node<K> {
    value: K,
    /// How many levels are below this node. A node with no children has a height of 0.
    height: isize,
    left: Link<K>,
    right: Link<K>,
    pub(crate) position: Option<Point>,
}

impl<K> Node<K> {
    fn new_boxed(value: K) -> Box<Self> {
        Box::new(Self {
            value,
            height: EMPTY_HEIGHT + 1,
            left: Link(None),
            right: Link(None),
            position: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The height of the subtree rooted at this node. Leaves have height 0.
    pub fn height(&self) -> isize {
        self.height
    }

    /// The left child, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    /// The right child, holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Where the last [layout pass][crate::Layout::position] put this node. `None` if the node
    /// was inserted after the last pass (or there hasn't been one). Rotations don't move
    /// positions, so they are stale after any insertion until the next pass.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.node_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.node_mut()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    /// Left height minus right height, counting an absent child as [`EMPTY_HEIGHT`]. Positive
    /// means left-heavy.
    fn balance_factor(&self) -> isize {
        self.left.height() - self.right.height()
    }

    /// Checks this subtree, where every value must lie strictly between `lower` and `upper`.
    /// Returns the recomputed height of the subtree.
    fn check(&self, lower: Option<&K>, upper: Option<&K>) -> Result<isize, InvariantError<K>>
    where
        K: Ord + Clone,
    {
        let crossed = lower
            .filter(|lo| self.value <= **lo)
            .or_else(|| upper.filter(|hi| self.value >= **hi));
        if let Some(bound) = crossed {
            return Err(InvariantError::Unordered {
                parent: bound.clone(),
                child: self.value.clone(),
            });
        }

        let left_height = match self.left() {
            Some(left) => left.check(lower, Some(&self.value))?,
            None => EMPTY_HEIGHT,
        };
        let right_height = match self.right() {
            Some(right) => right.check(Some(&self.value), upper)?,
            None => EMPTY_HEIGHT,
        };

        let actual = left_height.max(right_height) + 1;
        if self.height != actual {
            return Err(InvariantError::StaleHeight {
                value: self.value.clone(),
                cached: self.height,
                actual,
            });
        }
        if left_height.abs_diff(right_height) > 1 {
            return Err(InvariantError::Unbalanced {
                value: self.value.clone(),
                left_height,
                right_height,
            });
        }

        Ok(actual)
    }
}

/// An owned, possibly empty, subtree. Rebalancing happens on the `Link` rather than the `Node`
/// so a rotation can swap which node the link holds.
#[derive(Clone, Debug)]
struct Link<K>(Option<Box<Node<K>>>);

impl<K> Link<K> {
    fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    fn node_mut(&mut self) -> Option<&mut Node<K>> {
        self.0.as_deref_mut()
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    fn height(&self) -> isize {
        self.node().map_or(EMPTY_HEIGHT, |n| n.height)
    }

    fn insert(&mut self, value: K) -> InsertResult
    where
        K: Ord,
    {
        let node = match self.node_mut() {
            Some(node) => node,
            None => {
                self.0 = Some(Node::new_boxed(value));
                return InsertResult::Created;
            }
        };

        let (side, below) = match value.cmp(&node.value) {
            Ordering::Less => (Side::Left, node.left.insert(value)),
            Ordering::Equal => return InsertResult::Duplicate,
            Ordering::Greater => (Side::Right, node.right.insert(value)),
        };

        let inner = match below {
            InsertResult::Duplicate => return InsertResult::Duplicate,
            InsertResult::Created => None,
            InsertResult::Descended(inner) => Some(inner),
        };
        self.rebalance(inner);

        InsertResult::Descended(side)
    }

    /// Refreshes the height of the node in this link and applies at most one of the four AVL
    /// fixes. `inner` is the side the insertion took one level down, in the child on the heavy
    /// side: it is `Left` exactly when the inserted value is less than that child's value.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    fn rebalance(&mut self, inner: Option<Side>) {
        let node = self.node_mut().expect("Rebalancing requires a node");
        node.fix_height();
        let balance = node.balance_factor();

        if balance > 1 && inner == Some(Side::Left) {
            trace!("left-left case (balance {balance}), rotating right");
            self.rotate_right();
        } else if balance < -1 && inner == Some(Side::Right) {
            trace!("right-right case (balance {balance}), rotating left");
            self.rotate_left();
        } else if balance > 1 && inner == Some(Side::Right) {
            trace!("left-right case (balance {balance}), rotating left then right");
            self.rotate_left_right();
        } else if balance < -1 && inner == Some(Side::Left) {
            trace!("right-left case (balance {balance}), rotating right then left");
            self.rotate_right_left();
        }

        if cfg!(debug_assertions) {
            let Some(root) = self.node() else {
                return;
            };
            let left_height = root.left.height();
            let right_height = root.right.height();
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall. As such, it must only be called
    /// when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///       link                     link
    ///        |                        |
    ///     old_root                 new_root
    ///      /    \                  /     \
    ///  new_root  z    rotate ->   x    old_root
    ///   /   \                            /  \
    ///  x     y                          y    z
    /// ```
    fn rotate_right(&mut self) {
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.left.0.take().expect("Rotate right => left child");

        old_root.left = new_root.right.take();
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// The mirror image of [`Link::rotate_right`]: the right child moves up and takes self as its
    /// left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(&mut self) {
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.right.0.take().expect("Rotate left => right child");

        old_root.right = new_root.left.take();
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    fn rotate_left_right(&mut self) {
        self.node_mut()
            .expect("Rotating a tree requires a root")
            .left
            .rotate_left();
        self.rotate_right();
    }

    fn rotate_right_left(&mut self) {
        self.node_mut()
            .expect("Rotating a tree requires a root")
            .right
            .rotate_right();
        self.rotate_left();
    }
}
