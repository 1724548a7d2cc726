// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bounded history stack for view navigation
//!
//! The top of the stack is the head of the backing [`LinkedList`]. Pushing
//! past the configured depth drops the oldest entry from the tail.

use crate::error::HistoryError;
use crate::linked_list::{default_comparator, Comparator, Iter, LinkedList, Node};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, trace};

/// Depth used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// LIFO container that never holds more than `max_depth` entries
pub struct BoundedHistoryStack<T, C = Comparator<T>> {
    list: LinkedList<T, C>,
    max_depth: usize,
}

impl<T: PartialEq> BoundedHistoryStack<T> {
    /// Create an empty stack holding at most `max_depth` entries
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidArgument`] if `max_depth` is zero.
    pub fn new(max_depth: usize) -> Result<Self, HistoryError> {
        Self::with_comparator(max_depth, default_comparator::<T>)
    }
}

impl<T: PartialEq> Default for BoundedHistoryStack<T> {
    fn default() -> Self {
        Self {
            list: LinkedList::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<T, C> BoundedHistoryStack<T, C> {
    /// Create an empty stack whose backing list deletes by `compare`
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidArgument`] if `max_depth` is zero.
    pub fn with_comparator(max_depth: usize, compare: C) -> Result<Self, HistoryError> {
        if max_depth == 0 {
            return Err(HistoryError::InvalidArgument(
                "max_depth must be greater than zero".into(),
            ));
        }
        Ok(Self {
            list: LinkedList::with_comparator(compare),
            max_depth,
        })
    }

    /// Maximum number of entries kept
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of entries, recounted on every call
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the stack has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Push `value` on top, evicting the oldest entry when over depth
    pub fn push(&mut self, value: T) {
        self.list.prepend(value);
        trace!(max_depth = self.max_depth, "pushed history entry");

        if self.len() > self.max_depth && self.list.delete_tail().is_some() {
            trace!(max_depth = self.max_depth, "evicted oldest history entry");
        }
    }

    /// Remove and return the top entry
    pub fn pop(&mut self) -> Option<T> {
        let value = self.list.delete_head().map(Node::into_value);
        if value.is_some() {
            trace!("popped history entry");
        }
        value
    }

    /// The top entry, left in place
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.list.head().map(Node::value)
    }

    /// Pop until empty
    pub fn clear(&mut self) {
        let mut dropped = 0usize;
        while self.pop().is_some() {
            dropped += 1;
        }
        debug!(dropped, "cleared history");
    }

    /// Values from top to bottom
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list
            .to_array()
            .into_iter()
            .map(|node| node.value().clone())
            .collect()
    }

    /// Iterate from top to bottom without removing anything
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Read-only view of the backing list
    #[must_use]
    pub fn list(&self) -> &LinkedList<T, C> {
        &self.list
    }

    /// Remove every entry equal to `value`, returning the last one removed
    ///
    /// Removal can only shrink the stack, so the depth bound still holds.
    pub fn delete_all(&mut self, value: &T) -> Option<T>
    where
        C: Fn(&T, &T) -> bool,
    {
        self.list.delete_all(value).map(Node::into_value)
    }
}

impl<T, C> Extend<T> for BoundedHistoryStack<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BoundedHistoryStack<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BoundedHistoryStack<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedHistoryStack")
            .field("max_depth", &self.max_depth)
            .field("entries", &self.list)
            .finish()
    }
}

/// Serialized as the top-first list of values
impl<T: Serialize, C> Serialize for BoundedHistoryStack<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
