use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use crate::compare::Comparator;
use crate::node::{Link, Node, is_red, size};

/// First broken invariant found by `validate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    RedRoot,
    RightLeaningRed,
    ConsecutiveReds,
    UnbalancedBlacks { left: usize, right: usize },
    OutOfOrder,
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RightLeaningRed => write!(f, "red link leans right"),
            Violation::ConsecutiveReds => write!(f, "two consecutive red links"),
            Violation::UnbalancedBlacks { left, right } => {
                write!(f, "unbalanced blacks left: {left} and right: {right}")
            }
            Violation::OutOfOrder => write!(f, "keys out of order"),
            Violation::SizeMismatch { expected, found } => {
                write!(f, "subtree size {found} but counted {expected}")
            }
        }
    }
}

impl Error for Violation {}

/// Checks all red-black and size invariants of the tree rooted at `root`.
pub(crate) fn check<K, V, C>(root: &Link<K, V>, cmp: &C) -> Result<(), Violation>
where
    C: Comparator<K>,
{
    if is_red(root) {
        return Err(Violation::RedRoot);
    }
    check_node(root.as_deref(), cmp, None, None).map(|_| ())
}

/// Returns the black height of the subtree.
fn check_node<K, V, C>(
    node: Option<&Node<K, V>>,
    cmp: &C,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<usize, Violation>
where
    C: Comparator<K>,
{
    let Some(node) = node else {
        return Ok(0);
    };

    if lower.is_some_and(|lo| cmp.compare(lo, &node.key) != Ordering::Less)
        || upper.is_some_and(|hi| cmp.compare(&node.key, hi) != Ordering::Less)
    {
        return Err(Violation::OutOfOrder);
    }
    if is_red(&node.right) {
        return Err(Violation::RightLeaningRed);
    }
    if node.is_red() && is_red(&node.left) {
        return Err(Violation::ConsecutiveReds);
    }
    let expected = 1 + size(&node.left) + size(&node.right);
    if node.size != expected {
        return Err(Violation::SizeMismatch {
            expected,
            found: node.size,
        });
    }

    let left = check_node(node.left.as_deref(), cmp, lower, Some(&node.key))?;
    let right = check_node(node.right.as_deref(), cmp, Some(&node.key), upper)?;
    if left != right {
        return Err(Violation::UnbalancedBlacks { left, right });
    }
    Ok(left + usize::from(!node.is_red()))
}

#[cfg(test)]
mod tests {
    use super::{Violation, check};
    use crate::compare::NaturalOrder;
    use crate::node::{Color, Link, Node};

    fn node(key: u32, color: Color, left: Link<u32, ()>, right: Link<u32, ()>) -> Link<u32, ()> {
        let mut n = Node::new(key, ());
        n.color = color;
        n.left = left;
        n.right = right;
        n.update_size();
        Some(n)
    }

    #[test]
    fn empty_and_valid_trees_pass() {
        assert_eq!(check(&None::<Box<Node<u32, ()>>>, &NaturalOrder), Ok(()));
        let root = node(
            2,
            Color::Black,
            node(1, Color::Red, None, None),
            None,
        );
        assert_eq!(check(&root, &NaturalOrder), Ok(()));
    }

    #[test]
    fn detects_each_violation() {
        let red_root = node(1, Color::Red, None, None);
        assert_eq!(check(&red_root, &NaturalOrder), Err(Violation::RedRoot));

        let right_red = node(1, Color::Black, None, node(2, Color::Red, None, None));
        assert_eq!(
            check(&right_red, &NaturalOrder),
            Err(Violation::RightLeaningRed)
        );

        let chain = node(
            3,
            Color::Black,
            node(2, Color::Red, node(1, Color::Red, None, None), None),
            node(4, Color::Black, None, None),
        );
        assert_eq!(check(&chain, &NaturalOrder), Err(Violation::ConsecutiveReds));

        let unbalanced = node(2, Color::Black, node(1, Color::Black, None, None), None);
        assert_eq!(
            check(&unbalanced, &NaturalOrder),
            Err(Violation::UnbalancedBlacks { left: 1, right: 0 })
        );

        let unordered = node(
            2,
            Color::Black,
            node(3, Color::Black, None, None),
            node(1, Color::Black, None, None),
        );
        assert_eq!(check(&unordered, &NaturalOrder), Err(Violation::OutOfOrder));

        let mut wrong_size = node(2, Color::Black, None, None);
        wrong_size.as_mut().unwrap().size = 5;
        assert_eq!(
            check(&wrong_size, &NaturalOrder),
            Err(Violation::SizeMismatch {
                expected: 1,
                found: 5
            })
        );
    }
}
