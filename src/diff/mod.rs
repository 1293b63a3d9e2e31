pub mod apply;
pub mod distance;

pub use apply::ApplyError;

/// One edit step. Removals carry an index into the source sequence,
/// insertions an index into the target sequence's final form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op<T> {
    Add { index: usize, value: T },
    Remove { index: usize, value: T },
}

/// An ordered list of insertions and removals turning one sequence into
/// another. Produced by [`EditScript::from_compare`] in ascending backtrace
/// order and replayed by [`EditScript::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    ops: Vec<Op<T>>,
}

impl<T> EditScript<T> {
    pub fn ops(&self) -> &[Op<T>] {
        &self.ops
    }

    /// Number of ops, which for a computed script is the edit distance
    /// between the two input sequences.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<T> From<Vec<Op<T>>> for EditScript<T> {
    fn from(ops: Vec<Op<T>>) -> Self {
        Self { ops }
    }
}
