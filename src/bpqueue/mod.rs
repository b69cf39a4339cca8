/*!
A priority queue holding at most a fixed number of elements.

Elements are kept in a sequence sorted by value (smallest first). Once the queue is full, a new
element is only admitted if it is strictly smaller than the current maximum, which is then
evicted. This makes the queue suitable for collecting the `k` nearest neighbors of a query.

Insertion does a linear scan over the sequence. Equal values stay in the order they were
enqueued, which a heap or tree would not guarantee.
*/

use crate::error::{Error, Result};
use crate::ListElement;

use log::trace;
use std::collections::{vec_deque, VecDeque};


#[derive(Clone, Debug, PartialEq)]
pub struct BoundedPriorityQueue {
    elements: VecDeque<ListElement>,
    max_element: Option<ListElement>,
    max_size: usize,
}

impl BoundedPriorityQueue {
    /// Creates an empty queue holding at most `max_size` elements.
    ///
    /// A queue with `max_size == 0` is both empty and full, and rejects every element.
    pub fn new(max_size: usize) -> Self {
        Self {
            elements: VecDeque::new(),
            max_element: None,
            max_size,
        }
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(self: &mut Self) {
        self.elements.clear();
        self.max_element = None;
    }

    /// Returns the number of elements in the queue.
    pub fn len(self: &Self) -> usize {
        self.elements.len()
    }

    /// Returns the maximum number of elements the queue can hold.
    pub fn max_size(self: &Self) -> usize {
        self.max_size
    }

    pub fn is_empty(self: &Self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(self: &Self) -> bool {
        self.elements.len() >= self.max_size
    }

    /// Inserts a copy of `element`, keeping the queue sorted.
    ///
    /// Returns `Error::Full` without modifying the queue if the capacity is zero, or if the
    /// queue is full and `element` is not strictly smaller than the current maximum. If the
    /// queue is full and `element` is smaller, the maximum is evicted.
    ///
    /// Returns `Error::OutOfMemory` if the queue could not grow, in which case it is left
    /// unchanged.
    pub fn enqueue(self: &mut Self, element: ListElement) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::Full);
        }

        if self.is_full() {
            if let Some(max) = self.max_element {
                if element.ordered_value() >= max.ordered_value() {
                    trace!("Rejected {} from full queue with maximum {}", element, max);
                    return Err(Error::Full);
                }
            }
        }

        let position = self
            .elements
            .iter()
            .position(|e| e.ordered_value() > element.ordered_value())
            .unwrap_or_else(|| self.elements.len());

        if self.is_full() {
            // element is smaller than the maximum, so it is not inserted last
            debug_assert!(position < self.elements.len());

            if let Some(evicted) = self.elements.pop_back() {
                trace!("Evicted {} to make room for {}", evicted, element);
            }
        } else {
            self.elements
                .try_reserve(1)
                .map_err(|_| Error::OutOfMemory)?;
        }

        self.elements.insert(position, element);
        self.max_element = self.elements.back().copied();

        Ok(())
    }

    /// Removes and returns the smallest element.
    pub fn dequeue(self: &mut Self) -> Result<ListElement> {
        let first = self.elements.pop_front().ok_or(Error::Empty)?;

        if self.elements.is_empty() {
            self.max_element = None;
        }

        Ok(first)
    }

    /// Returns a copy of the smallest element, or `None` if the queue is empty.
    pub fn peek(self: &Self) -> Option<ListElement> {
        self.elements.front().copied()
    }

    /// Returns a copy of the largest element, or `None` if the queue is empty.
    pub fn peek_last(self: &Self) -> Option<ListElement> {
        self.max_element
    }

    pub fn min_value(self: &Self) -> Option<f64> {
        self.peek().map(|e| e.value())
    }

    pub fn max_value(self: &Self) -> Option<f64> {
        self.max_element.map(|e| e.value())
    }

    /// Returns an iterator over the elements, smallest first.
    pub fn iter(self: &Self) -> vec_deque::Iter<'_, ListElement> {
        self.elements.iter()
    }

    pub fn into_sorted_vec(self: Self) -> Vec<ListElement> {
        self.elements.into()
    }
}

/// Creates a queue from a signed capacity, failing with `Error::InvalidArgument` if it is negative.
impl TryFrom<i64> for BoundedPriorityQueue {
    type Error = Error;

    fn try_from(max_size: i64) -> Result<Self> {
        let max_size = usize::try_from(max_size).map_err(|_| Error::InvalidArgument)?;

        Ok(Self::new(max_size))
    }
}

impl<'a> IntoIterator for &'a BoundedPriorityQueue {
    type Item = &'a ListElement;
    type IntoIter = vec_deque::Iter<'a, ListElement>;

    fn into_iter(self: Self) -> Self::IntoIter {
        self.iter()
    }
}
