// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Singly linked list backing the history stack
//!
//! The list owns its whole chain of nodes. The tail is not cached; it is
//! found by walking from the head, which keeps the list free of aliasing
//! pointers while the stacks built on top of it stay small.

use std::fmt;

/// Comparator used by [`LinkedList::delete_all`]
pub type Comparator<T> = fn(&T, &T) -> bool;

/// Value equality, the comparator used when none is supplied
#[must_use]
pub fn default_comparator<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// A single element of a [`LinkedList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// The value stored in this node
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, or `None` if this is the tail
    #[must_use]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Consume the node and return its value
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Singly linked list with head insertion and head/tail removal
pub struct LinkedList<T, C = Comparator<T>> {
    head: Option<Box<Node<T>>>,
    compare: C,
}

impl<T: PartialEq> LinkedList<T> {
    /// Create an empty list that compares values with `==`
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T: PartialEq> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> LinkedList<T, C> {
    /// Create an empty list using `compare` for value-based deletion
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        Self { head: None, compare }
    }

    /// Check if the list has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, counted by walking the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// First node
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Last node
    #[must_use]
    pub fn tail(&self) -> Option<&Node<T>> {
        let mut current = self.head.as_deref()?;
        while let Some(next) = current.next.as_deref() {
            current = next;
        }
        Some(current)
    }

    /// Insert `value` as the new head
    pub fn prepend(&mut self, value: T) -> &mut Self {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self
    }

    /// Remove the head node and return it detached from the chain
    pub fn delete_head(&mut self) -> Option<Node<T>> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            *node
        })
    }

    /// Remove the tail node and return it
    ///
    /// Walks the chain to reach the second-to-last node, so this is O(n).
    pub fn delete_tail(&mut self) -> Option<Node<T>> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            cursor = &mut cursor.as_mut()?.next;
        }
        cursor.take().map(|node| *node)
    }

    /// Remove every node whose value matches `value` under the comparator
    ///
    /// Unlike a typical list removal this does not stop at the first match.
    /// Returns the last node removed, or `None` if nothing matched.
    pub fn delete_all(&mut self, value: &T) -> Option<Node<T>>
    where
        C: Fn(&T, &T) -> bool,
    {
        let compare = &self.compare;
        let mut cursor = &mut self.head;
        let mut deleted = None;

        while let Some(mut node) = cursor.take() {
            if compare(&node.value, value) {
                *cursor = node.next.take();
                deleted = Some(*node);
            } else {
                cursor = &mut cursor.insert(node).next;
            }
        }

        deleted
    }

    /// Snapshot of the nodes from head to tail
    #[must_use]
    pub fn to_array(&self) -> Vec<&Node<T>> {
        let mut nodes = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            nodes.push(node);
            current = node.next.as_deref();
        }
        nodes
    }

    /// Iterate over values from head to tail
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T, C> Drop for LinkedList<T, C> {
    fn drop(&mut self) {
        // Unlink node by node; the default drop recurses once per node.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LinkedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a LinkedList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
