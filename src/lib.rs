#![warn(clippy::all, clippy::pedantic, clippy::cargo)]

/*!
Building blocks for nearest neighbor search: a [`BoundedPriorityQueue`] keeping the `k` smallest
[`ListElement`]s seen so far, a [`Point`] type with squared L2 distances and a leveled [`Logger`].

# Example
```
use bpqueue::{BoundedPriorityQueue, ListElement};

# fn main() -> Result<(), bpqueue::Error> {
let mut queue = BoundedPriorityQueue::new(2);

queue.enqueue(ListElement::new(0, 3.0)?)?;
queue.enqueue(ListElement::new(1, 1.0)?)?;
// the queue is full, 2.0 evicts 3.0
queue.enqueue(ListElement::new(2, 2.0)?)?;

assert_eq!(Some(1.0), queue.min_value());
assert_eq!(Some(2.0), queue.max_value());
# Ok(())
# }
```
*/

mod bpqueue;
pub mod config;
mod elements;
mod error;
pub mod io;
mod logger;
pub mod search;

#[cfg(test)]
mod test_helper;

pub use bpqueue::BoundedPriorityQueue;
pub use elements::{Dist, ListElement, Point};
pub use error::{Error, Result};
pub use logger::{Level, Logger, LoggerConfig, LoggerError};
