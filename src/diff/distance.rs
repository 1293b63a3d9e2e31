use super::{EditScript, Op};

#[derive(Debug, Clone, Copy)]
enum Action {
    Keep,
    Add,
    Remove,
}

/// Flat row-major table, one cell per (source prefix, target prefix) pair.
struct Table<C> {
    cols: usize,
    cells: Vec<C>,
}

impl<C: Copy> Table<C> {
    fn new(rows: usize, cols: usize, fill: C) -> Self {
        Self {
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    fn get(&self, row: usize, col: usize) -> C {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: C) {
        self.cells[row * self.cols + col] = value;
    }
}

impl<T: PartialEq + Clone> EditScript<T> {
    /// Computes a minimal insert/delete script turning `old` into `new`,
    /// by dynamic programming over all prefix pairs.
    ///
    /// There is no replace move. Where removing and inserting cost the
    /// same, removal wins, so scripts drain surplus source lines before
    /// writing target lines.
    pub fn from_compare(old: &[T], new: &[T]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut costs = Table::new(rows, cols, 0usize);
        let mut actions = Table::new(rows, cols, Action::Keep);

        for col in 1..cols {
            costs.set(0, col, col);
            actions.set(0, col, Action::Add);
        }
        for row in 1..rows {
            costs.set(row, 0, row);
            actions.set(row, 0, Action::Remove);
        }

        for row in 1..rows {
            for col in 1..cols {
                if old[row - 1] == new[col - 1] {
                    costs.set(row, col, costs.get(row - 1, col - 1));
                    actions.set(row, col, Action::Keep);
                    continue;
                }
                // ties go to removal
                let mut cost = costs.get(row - 1, col);
                let mut action = Action::Remove;
                let add_cost = costs.get(row, col - 1);
                if add_cost < cost {
                    cost = add_cost;
                    action = Action::Add;
                }
                costs.set(row, col, cost + 1);
                actions.set(row, col, action);
            }
        }

        let mut ops = Vec::new();
        let mut row = old.len();
        let mut col = new.len();
        while row > 0 || col > 0 {
            match actions.get(row, col) {
                Action::Keep => {
                    row -= 1;
                    col -= 1;
                }
                Action::Add => {
                    col -= 1;
                    ops.push(Op::Add {
                        index: col,
                        value: new[col].clone(),
                    });
                }
                Action::Remove => {
                    row -= 1;
                    ops.push(Op::Remove {
                        index: row,
                        value: old[row].clone(),
                    });
                }
            }
        }
        ops.reverse();
        Self { ops }
    }
}

#[cfg(test)]
mod tests {
    use similar::{Algorithm, DiffOp, capture_diff_slices};

    use super::*;
    use crate::util::test::create_test_lines;

    fn myers_distance(old: &[String], new: &[String]) -> usize {
        capture_diff_slices(Algorithm::Myers, old, new)
            .iter()
            .map(|op| match op {
                DiffOp::Equal { .. } => 0,
                DiffOp::Insert { new_len, .. } => *new_len,
                DiffOp::Delete { old_len, .. } => *old_len,
                DiffOp::Replace {
                    old_len, new_len, ..
                } => *old_len + *new_len,
            })
            .sum()
    }

    #[test]
    fn test_equal_inputs_give_empty_script() {
        let lines = ["foo", "bar", "baz"];
        let script = EditScript::from_compare(&lines, &lines);
        assert!(script.is_empty());
        assert_eq!(script, EditScript::from(vec![]));
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(EditScript::from_compare(&empty, &empty).is_empty());
        assert_eq!(
            EditScript::from_compare(&empty, &["a", "b"]),
            EditScript::from(vec![
                Op::Add {
                    index: 0,
                    value: "a"
                },
                Op::Add {
                    index: 1,
                    value: "b"
                },
            ])
        );
        assert_eq!(
            EditScript::from_compare(&["a", "b"], &empty),
            EditScript::from(vec![
                Op::Remove {
                    index: 0,
                    value: "a"
                },
                Op::Remove {
                    index: 1,
                    value: "b"
                },
            ])
        );
    }

    #[test]
    fn test_remove_carries_source_index_add_carries_target_index() {
        let old = ["foo", "bar", "baz"];
        let new = ["foo", "baz", "qux"];
        let script = EditScript::from_compare(&old, &new);
        assert_eq!(
            script,
            EditScript::from(vec![
                Op::Remove {
                    index: 1,
                    value: "bar"
                },
                Op::Add {
                    index: 2,
                    value: "qux"
                },
            ])
        );
    }

    #[test]
    fn test_tie_break_prefers_remove() {
        // Swapping two lines admits two equally short scripts. The pinned
        // one keeps the common suffix "y" and never uses Add where Remove
        // costs the same.
        let script = EditScript::from_compare(&["x", "y"], &["y", "x"]);
        assert_eq!(
            script,
            EditScript::from(vec![
                Op::Add {
                    index: 0,
                    value: "y"
                },
                Op::Remove {
                    index: 1,
                    value: "y"
                },
            ])
        );
    }

    #[test]
    fn test_script_length_matches_myers_distance() {
        let mut old_iter = create_test_lines(114514);
        let mut new_iter = create_test_lines(1919810);
        for _ in 0..2_000 {
            let old = old_iter.next().unwrap();
            let new = new_iter.next().unwrap();
            let script = EditScript::from_compare(&old, &new);
            assert_eq!(
                script.len(),
                myers_distance(&old, &new),
                "old: {:?}; new: {:?}",
                old,
                new
            );
            assert!(script.len() <= old.len() + new.len());
        }
    }

    #[test]
    fn test_char_sequences() {
        let patch: Vec<char> = "patch".chars().collect();
        let pach: Vec<char> = "pach".chars().collect();
        let diff: Vec<char> = "diff".chars().collect();
        assert_eq!(EditScript::from_compare(&patch, &pach).len(), 1);
        assert_eq!(EditScript::from_compare(&patch, &diff).len(), 9);
    }
}
