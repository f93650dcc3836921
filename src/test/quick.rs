use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value by walking down the tree
    Insert(T),
    /// Insert the value through the recursive descent
    InsertRecursive(T),
    /// Remove the value from the tree
    Remove(T),
    /// Compare the in-order traversal with the model
    Traverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::InsertRecursive(T::arbitrary(g)),
            2 => Op::Remove(T::arbitrary(g)),
            3 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}
