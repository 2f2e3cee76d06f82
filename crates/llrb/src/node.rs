#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    pub(crate) fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    /// Number of nodes in the subtree rooted here, this one included.
    pub(crate) size: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// New nodes always enter the tree as red leaves.
    pub(crate) fn new(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        })
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }

    pub(crate) fn into_entry(self: Box<Self>) -> (K, V) {
        let node = *self;
        (node.key, node.value)
    }
}

/// Absent links count as black.
pub(crate) fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|n| n.is_red())
}

/// `true` when `link` is present and its left child is red.
pub(crate) fn is_left_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|n| is_red(&n.left))
}

pub(crate) fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}
