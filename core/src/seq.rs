//! The capability surface every container under test has to provide.
//!
//! Workloads and strategies are written against [`Sequence`] only, so adding a
//! new backend means implementing this trait and listing it in
//! [`ContainerKind`]; the driver does not change.

use std::collections::{LinkedList, VecDeque};
use std::fmt;

pub trait Sequence<T>: Default {
    /// Empty instance with room for at least `capacity` elements. Backends
    /// without a notion of capacity fall back to [`Default`].
    fn with_capacity(capacity: usize) -> Self {
        let _ = capacity;
        Self::default()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_back(&mut self, value: T);

    /// Inserts `value` before position `index`; `index == len()` appends.
    ///
    /// Panics when `index > len()`, matching the std collections.
    fn insert_at(&mut self, index: usize, value: T);

    /// Linear scan from the front.
    fn contains_value(&self, value: &T) -> bool;
}

impl<T: PartialEq> Sequence<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn contains_value(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: PartialEq> Sequence<T> for VecDeque<T> {
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn contains_value(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: PartialEq> Sequence<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        // split_off walks from whichever end is closer, which is the same
        // cost profile as a node-based positional insert.
        let mut tail = self.split_off(index);
        LinkedList::push_back(self, value);
        self.append(&mut tail);
    }

    fn contains_value(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

/// Backends the runner knows how to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `std::collections::LinkedList`
    LinkedList,
    /// `std::collections::VecDeque`
    Deque,
    /// `Vec`
    Vector,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 3] = [ContainerKind::LinkedList, ContainerKind::Deque, ContainerKind::Vector];

    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::LinkedList => "LinkedList",
            ContainerKind::Deque => "VecDeque",
            ContainerKind::Vector => "Vec",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
