//! Property tests run against the public API only.

use quickcheck::{Arbitrary, Gen};

mod layout;

/// An enum for the various kinds of "things" to do to
/// trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Insert a K that is (probably) already in the tree: the nth value inserted so far,
    /// wrapping around.
    Reinsert(usize),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Reinsert(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Sends the crate's `log` output to the test harness. Run with `RUST_LOG=avl=trace` to see
/// every rotation.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
