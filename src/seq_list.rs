use crate::{
    errors::{Result, SeqListError},
    node::Node,
    node_id::NodeId,
    util::swap,
};
use core::fmt;
use std::collections::HashMap;

/// A doubly-linked sequence whose nodes live in an index-addressed arena.
///
/// Links between nodes are plain [`NodeId`]s; the arena is the only owner, so
/// releasing a node is a single map removal and no link can dangle past it.
pub struct SeqList<T> {
    nodes: HashMap<NodeId, Node<T>>,
    next_id: usize,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

/// Borrowing iterator over values from head to tail.
pub struct Iter<'a, T> {
    list: &'a SeqList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

/// Owning iterator that releases nodes from the front as it goes.
pub struct IntoIter<T> {
    list: SeqList<T>,
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SeqList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list whose arena can hold `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            next_id: 0,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[&id].value)
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[&id].value)
    }

    /// Append a value after the current tail.
    pub fn push_back(&mut self, value: T) {
        let id = self.alloc(value);
        match self.tail {
            Some(old) => {
                self.node_mut(old).next = Some(id);
                self.node_mut(id).prev = Some(old);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Prepend a value before the current head.
    pub fn push_front(&mut self, value: T) {
        let id = self.alloc(value);
        match self.head {
            Some(old) => {
                self.node_mut(old).prev = Some(id);
                self.node_mut(id).next = Some(old);
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Remove the last element and return it.
    ///
    /// Fails with [`SeqListError::EmptyContainer`] when there is nothing to
    /// remove.
    pub fn pop_back(&mut self) -> Result<T> {
        self.unlink_back().ok_or(SeqListError::empty("pop_back"))
    }

    /// Remove the first element and return it.
    ///
    /// Fails with [`SeqListError::EmptyContainer`] when there is nothing to
    /// remove.
    pub fn pop_front(&mut self) -> Result<T> {
        self.unlink_front().ok_or(SeqListError::empty("pop_front"))
    }

    /// Release every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.next_id = 0;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Move the whole chain out, leaving `self` empty.
    ///
    /// ```
    /// use seqlist::seq;
    ///
    /// let mut source = seq![10, 20, 30];
    /// let dest = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(dest.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    /// ```
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Reverse the order of the elements in place.
    ///
    /// Payloads move between mirrored positions; the links stay where they
    /// are. Fails on an empty list.
    pub fn reverse(&mut self) -> Result<()> {
        let (Some(mut front), Some(mut back)) = (self.head, self.tail) else {
            return Err(SeqListError::empty("reverse"));
        };
        for _ in 0..self.len / 2 {
            self.swap_values(front, back);
            match (self.node(front).next, self.node(back).prev) {
                (Some(f), Some(b)) => {
                    front = f;
                    back = b;
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Iterate values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[&id]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes.get_mut(&id).expect("linked node is live")
    }

    fn alloc(&mut self, value: T) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::detached(value));
        id
    }

    fn unlink_front(&mut self) -> Option<T> {
        let id = self.head?;
        Some(self.unlink(id))
    }

    fn unlink_back(&mut self) -> Option<T> {
        let id = self.tail?;
        Some(self.unlink(id))
    }

    /// Detach `id` from its neighbours, release it, and hand back its value.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.nodes.remove(&id).expect("unlinked node is live");

        match node.prev {
            Some(p) => {
                debug_assert_eq!(
                    self.node(p).next,
                    Some(id),
                    "node {} does not point forward to {}",
                    p.as_raw(),
                    id.as_raw()
                );
                self.node_mut(p).next = node.next;
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => {
                debug_assert_eq!(
                    self.node(n).prev,
                    Some(id),
                    "node {} does not point back to {}",
                    n.as_raw(),
                    id.as_raw()
                );
                self.node_mut(n).prev = node.prev;
            }
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }

    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let mut lhs = self.nodes.remove(&a).expect("swapped node is live");
        swap(&mut lhs.value, &mut self.node_mut(b).value);
        self.nodes.insert(a, lhs);
    }
}

impl<T: Ord> SeqList<T> {
    /// Sort ascending in place.
    ///
    /// Only strictly greater neighbours are exchanged, so equal elements keep
    /// their relative order. Fails on an empty list.
    ///
    /// ```
    /// use seqlist::seq;
    ///
    /// let mut nums = seq![4, 2, 5, 1, 3];
    /// nums.sort().unwrap();
    /// assert_eq!(nums.to_string(), "1 2 3 4 5");
    /// ```
    pub fn sort(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(SeqListError::empty("sort"));
        }
        self.bubble_sort();
        Ok(())
    }

    /// Move every node of `other` into `self`, then sort the combined list.
    ///
    /// `other` is left empty. Inputs do not need to be sorted beforehand.
    /// When `self` is empty it takes over `other`'s chain unchanged.
    pub fn merge(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other.take();
            return;
        }

        let donor = other.take();
        self.nodes.reserve(donor.len);
        self.extend(donor);
        self.bubble_sort();
    }

    fn bubble_sort(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        for pass in 0..self.len.saturating_sub(1) {
            let mut swapped = false;
            let mut cur = head;
            for _ in 0..self.len - pass - 1 {
                let Some(next) = self.node(cur).next else {
                    break;
                };
                if self.node(cur).value > self.node(next).value {
                    self.swap_values(cur, next);
                    swapped = true;
                }
                cur = next;
            }
            if !swapped {
                break;
            }
        }
    }
}

impl<T: PartialEq> SeqList<T> {
    /// Collapse each run of adjacent equal elements to its first element.
    ///
    /// Duplicates that are not neighbours survive; sort first to deduplicate
    /// the whole list. Fails on an empty list.
    pub fn unique(&mut self) -> Result<()> {
        let Some(mut cur) = self.head else {
            return Err(SeqListError::empty("unique"));
        };
        while let Some(next) = self.node(cur).next {
            if self.node(next).value == self.node(cur).value {
                self.unlink(next);
            } else {
                cur = next;
            }
        }
        Ok(())
    }
}

impl<T: Clone> Clone for SeqList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: PartialEq> PartialEq for SeqList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SeqList<T> {}

impl<T: fmt::Debug> fmt::Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Values separated by single spaces, head first.
impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for SeqList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SeqList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SeqList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<'a, T> IntoIterator for &'a SeqList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SeqList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[&self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[&self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.unlink_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.unlink_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
