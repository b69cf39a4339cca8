use crate::{BoundedPriorityQueue, Error, ListElement, Point};

use rand::{self, Rng};

pub fn random_floats() -> impl Iterator<Item = f64> {
    let mut rng = rand::thread_rng();
    std::iter::repeat_with(move || rng.gen::<f64>() * 100.0)
}

pub fn random_point(dim: usize) -> Point {
    Point::new(random_floats().take(dim).collect(), 1).unwrap()
}

pub fn random_element() -> ListElement {
    let mut rng = rand::thread_rng();
    ListElement::new(rng.gen_range(0..300), rng.gen::<f64>() * 100.0).unwrap()
}

/// Enqueues `num_elements` random elements into a new queue with capacity `max_size`,
/// checking after each insertion that the queue can be peeked from both ends.
pub fn random_queue(max_size: usize, num_elements: usize) -> BoundedPriorityQueue {
    let mut queue = BoundedPriorityQueue::new(max_size);

    for _ in 0..num_elements {
        match queue.enqueue(random_element()) {
            Ok(()) | Err(Error::Full) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }

        if max_size > 0 {
            assert!(queue.peek().is_some());
            assert!(queue.peek_last().is_some());
        }
    }

    queue
}

/// Builds a queue by enqueueing `values` in order, using the position of each value as its index.
pub fn queue_from_values(max_size: usize, values: &[f64]) -> BoundedPriorityQueue {
    let mut queue = BoundedPriorityQueue::new(max_size);

    for (i, &value) in values.iter().enumerate() {
        match queue.enqueue(ListElement::new(i, value).unwrap()) {
            Ok(()) | Err(Error::Full) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    queue
}
