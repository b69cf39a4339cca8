//! Exhaustive k-nearest-neighbor search on top of [`BoundedPriorityQueue`].

use crate::{BoundedPriorityQueue, Dist, Error, ListElement, Point, Result};

use log::{debug, warn};

/// Returns the `num_neighbors` points closest to `query`, nearest first, as
/// `(point index, squared distance)` elements.
///
/// Points whose dimension differs from the query are skipped. When several points are at the same
/// distance, the one appearing first in `points` is preferred.
///
/// Fails with [`Error::OutOfMemory`] if the result queue cannot grow, rather than returning a
/// truncated list.
pub fn nearest_neighbors(
    points: &[Point],
    query: &Point,
    num_neighbors: usize,
) -> Result<Vec<ListElement>> {
    let mut res = BoundedPriorityQueue::new(num_neighbors);
    let mut num_skipped = 0;

    for point in points {
        if point.dim() != query.dim() {
            num_skipped += 1;
            continue;
        }

        let element = ListElement::from((point.index(), point.dist(query)));
        match res.enqueue(element) {
            Ok(()) | Err(Error::Full) => {}
            Err(e) => return Err(e),
        }
    }

    if num_skipped > 0 {
        warn!(
            "Skipped {} point(s) with dimension different from {}",
            num_skipped,
            query.dim()
        );
    }

    debug!(
        "Searched {} point(s), kept {} of {} neighbor(s)",
        points.len() - num_skipped,
        res.len(),
        num_neighbors
    );

    Ok(res.into_sorted_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper;

    fn brute_force(points: &[Point], query: &Point, num_neighbors: usize) -> Vec<usize> {
        let mut dists: Vec<_> = points
            .iter()
            .map(|p| (p.dist(query), p.index()))
            .collect();
        dists.sort();

        dists.into_iter().take(num_neighbors).map(|(_, i)| i).collect()
    }

    #[test]
    fn finds_nearest_in_order() {
        let points: Vec<Point> = [5.0, 1.0, 4.0, 2.0, 3.0]
            .iter()
            .enumerate()
            .map(|(i, &x)| Point::new(vec![x, 0.0], i).unwrap())
            .collect();
        let query = Point::new(vec![0.0, 0.0], 0).unwrap();

        let neighbors = nearest_neighbors(&points, &query, 3).unwrap();

        let indices: Vec<usize> = neighbors.iter().map(|e| e.index()).collect();
        assert_eq!(vec![1, 3, 4], indices);

        let dists: Vec<f64> = neighbors.iter().map(|e| e.value()).collect();
        assert_eq!(vec![1.0, 4.0, 9.0], dists);
    }

    #[test]
    fn fewer_points_than_neighbors() {
        let points = vec![test_helper::random_point(4), test_helper::random_point(4)];
        let query = test_helper::random_point(4);

        assert_eq!(2, nearest_neighbors(&points, &query, 10).unwrap().len());
        assert!(nearest_neighbors(&points, &query, 0).unwrap().is_empty());
        assert!(nearest_neighbors(&[], &query, 5).unwrap().is_empty());
    }

    #[test]
    fn skips_points_of_other_dimensions() {
        let points = vec![
            Point::new(vec![1.0], 0).unwrap(),
            Point::new(vec![1.0, 1.0], 1).unwrap(),
            Point::new(vec![3.0, 3.0], 2).unwrap(),
        ];
        let query = Point::new(vec![0.0, 0.0], 9).unwrap();

        let indices: Vec<usize> = nearest_neighbors(&points, &query, 3)
            .unwrap()
            .iter()
            .map(|e| e.index())
            .collect();
        assert_eq!(vec![1, 2], indices);
    }

    #[test]
    fn equidistant_points_keep_input_order() {
        let points: Vec<Point> = (0..5)
            .map(|i| Point::new(vec![if i % 2 == 0 { 1.0 } else { -1.0 }], i).unwrap())
            .collect();
        let query = Point::new(vec![0.0], 0).unwrap();

        let indices: Vec<usize> = nearest_neighbors(&points, &query, 3)
            .unwrap()
            .iter()
            .map(|e| e.index())
            .collect();
        assert_eq!(vec![0, 1, 2], indices);
    }

    #[test]
    fn matches_brute_force() {
        for i in 0..20 {
            let dim = 1 + i % 8;
            let points: Vec<Point> = (0..200)
                .map(|j| Point::new(test_helper::random_floats().take(dim).collect(), j).unwrap())
                .collect();
            let query = test_helper::random_point(dim);

            let indices: Vec<usize> = nearest_neighbors(&points, &query, 15)
                .unwrap()
                .iter()
                .map(|e| e.index())
                .collect();

            assert_eq!(brute_force(&points, &query, 15), indices);
        }
    }

    #[test]
    fn large_neighbor_count_returns_every_point() {
        let points: Vec<Point> = (0..1000).map(|_| test_helper::random_point(3)).collect();
        let query = test_helper::random_point(3);

        let neighbors = nearest_neighbors(&points, &query, usize::MAX).unwrap();

        assert_eq!(points.len(), neighbors.len());
        for w in neighbors.windows(2) {
            assert!(w[0].value() <= w[1].value());
        }
    }
}
