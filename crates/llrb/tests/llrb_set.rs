use std::collections::BTreeSet;

use llrb::{LlrbSet, NaturalOrder, Reversed, TreeError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const TEST_SIZE: usize = 2_000;

fn value_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    DeleteMin,
    DeleteMax,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::DeleteMin),
        1 => Just(SetOp::DeleteMax),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: LlrbSet<i64> = LlrbSet::new();
        let mut oracle: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(set.insert(v), oracle.insert(v), "insert({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), oracle.remove(&v), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), oracle.contains(&v), "contains({})", v);
                }
                SetOp::DeleteMin => prop_assert_eq!(set.delete_min().ok(), oracle.pop_first()),
                SetOp::DeleteMax => prop_assert_eq!(set.delete_max().ok(), oracle.pop_last()),
            }
            prop_assert_eq!(set.len(), oracle.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(set.validate(), Ok(()), "invariant broken after {:?}", op);
        }
    }

    /// Set and map share floor/ceiling semantics: exact matches return at once.
    #[test]
    fn floor_ceiling_match_btreeset(
        values in proptest::collection::vec(value_strategy(), 1..500),
        probes in proptest::collection::vec(value_strategy(), 50),
    ) {
        let set: LlrbSet<i64> = values.iter().copied().collect();
        let oracle: BTreeSet<i64> = values.iter().copied().collect();
        for probe in &probes {
            let floor = oracle.range(..=*probe).next_back().ok_or(TreeError::NoBound);
            let ceiling = oracle.range(*probe..).next().ok_or(TreeError::NoBound);
            prop_assert_eq!(set.floor(probe), floor);
            prop_assert_eq!(set.ceiling(probe), ceiling);
        }
    }
}

#[test]
fn reversed_set_iterates_descending() {
    let set: LlrbSet<u8, Reversed<NaturalOrder>> = [3, 1, 2].into_iter().collect();
    assert_eq!(set.snapshot(), vec![3, 2, 1]);
    assert_eq!(set.min(), Ok(&3));
    assert_eq!(set.max(), Ok(&1));
    assert_eq!(set.validate(), Ok(()));
}

#[test]
fn sets_compare_by_contents() {
    let a: LlrbSet<u32> = [1, 2, 3].into_iter().collect();
    let mut b: LlrbSet<u32> = [3, 2].into_iter().collect();
    assert!(a != b);
    b.insert(1);
    assert_eq!(a, b);
}
