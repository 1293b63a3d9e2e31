use thiserror::Error;

use super::{EditScript, Op};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("cannot insert at line {index} of {len}")]
    AddOutOfRange { index: usize, len: usize },
    #[error("cannot remove line {index} of {len}")]
    RemoveOutOfRange { index: usize, len: usize },
}

impl<T: Clone> EditScript<T> {
    /// Replays the script against `source`.
    ///
    /// Removals run first, last op towards first, so every source index is
    /// still in place when its removal executes. Insertions then run first
    /// op towards last and rebuild the target form left to right. An index
    /// outside the sequence at execution time aborts with an error; scripts
    /// from [`EditScript::from_compare`] replayed against their own source
    /// never hit one.
    pub fn apply(&self, source: &[T]) -> Result<Vec<T>, ApplyError> {
        let mut lines = source.to_vec();
        for op in self.ops.iter().rev() {
            if let Op::Remove { index, .. } = op {
                if *index >= lines.len() {
                    return Err(ApplyError::RemoveOutOfRange {
                        index: *index,
                        len: lines.len(),
                    });
                }
                lines.remove(*index);
            }
        }
        for op in &self.ops {
            if let Op::Add { index, value } = op {
                if *index > lines.len() {
                    return Err(ApplyError::AddOutOfRange {
                        index: *index,
                        len: lines.len(),
                    });
                }
                lines.insert(*index, value.clone());
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::create_test_lines;

    #[test]
    fn test_empty_script_is_identity() {
        let script: EditScript<&str> = EditScript::from(vec![]);
        assert_eq!(script.apply(&["a", "b"]), Ok(vec!["a", "b"]));
    }

    #[test]
    fn test_apply_round_trip() {
        let mut old_iter = create_test_lines(114514);
        let mut new_iter = create_test_lines(1919810);
        for _ in 0..10_000 {
            let old = old_iter.next().unwrap();
            let new = new_iter.next().unwrap();
            let script = EditScript::from_compare(&old, &new);
            let patched_old = script.apply(&old);
            assert_eq!(
                patched_old,
                Ok(new.clone()),
                "old: {:?}; new: {:?}",
                old,
                new
            );
        }
    }

    #[test]
    fn test_scripted_scenario() {
        let old = ["foo", "bar", "baz"];
        let new = ["foo", "baz", "qux"];
        let script = EditScript::from_compare(&old, &new);
        assert_eq!(script.apply(&old), Ok(vec!["foo", "baz", "qux"]));
    }

    #[test]
    fn test_removals_run_before_insertions() {
        let script = EditScript::from(vec![
            Op::Remove {
                index: 0,
                value: "a",
            },
            Op::Add {
                index: 2,
                value: "d",
            },
        ]);
        assert_eq!(script.apply(&["a", "b", "c"]), Ok(vec!["b", "c", "d"]));

        // One reversed pass over mixed ops lands the insertion too early,
        // because the removal has not shifted the tail yet.
        let mut naive = vec!["a", "b", "c"];
        for op in script.ops().iter().rev() {
            match op {
                Op::Add { index, value } => naive.insert(*index, *value),
                Op::Remove { index, .. } => {
                    naive.remove(*index);
                }
            }
        }
        assert_eq!(naive, vec!["b", "d", "c"]);
    }

    #[test]
    fn test_remove_index_out_of_range() {
        let script = EditScript::from(vec![Op::Remove {
            index: 5,
            value: "zzz",
        }]);
        assert_eq!(
            script.apply(&["a", "b", "c"]),
            Err(ApplyError::RemoveOutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn test_add_index_out_of_range() {
        let script = EditScript::from(vec![Op::Add {
            index: 4,
            value: "zzz",
        }]);
        assert_eq!(
            script.apply(&["a", "b", "c"]),
            Err(ApplyError::AddOutOfRange { index: 4, len: 3 })
        );
    }
}
