/// Which child of a node an insertion descended into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

pub(crate) enum InsertResult {
    /// The value was already in the tree so nothing was inserted.
    Duplicate,
    /// The `Link` returning this was empty and now holds a new leaf.
    Created,
    /// The value was inserted somewhere below the `Node` returning this, on the given side. The
    /// parent uses this to tell the outer (left-left, right-right) cases from the inner
    /// (left-right, right-left) ones.
    Descended(Side),
}
