/*!
An immutable point in `d`-dimensional space together with the index of the item it describes.

Distances between points are squared L2 distances, which preserve the ordering of the true
Euclidean distance and are cheaper to compute.
*/

use super::Dist;
use crate::error::{Error, Result};

use ordered_float::NotNan;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coordinates: Vec<f64>,
    index: usize,
}

impl Point {
    /// Creates a new point.
    ///
    /// Fails with `Error::InvalidArgument` if `coordinates` is empty or contains a
    /// value that is not finite.
    pub fn new(coordinates: Vec<f64>, index: usize) -> Result<Self> {
        if coordinates.is_empty() || !coordinates.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidArgument);
        }

        Ok(Self { coordinates, index })
    }

    /// Returns the number of coordinates of this point.
    pub fn dim(self: &Self) -> usize {
        self.coordinates.len()
    }

    pub fn index(self: &Self) -> usize {
        self.index
    }

    /// Returns the coordinate along `axis`, or `None` if `axis >= self.dim()`.
    pub fn coordinate(self: &Self, axis: usize) -> Option<f64> {
        self.coordinates.get(axis).copied()
    }

    pub fn coordinates(self: &Self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the squared L2 distance between `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the points have different dimensions.
    pub fn l2_squared_distance(self: &Self, other: &Point) -> f64 {
        assert_eq!(
            self.dim(),
            other.dim(),
            "distance between points of different dimensions"
        );

        self.coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(&x, &y)| (x - y) * (x - y))
            .sum()
    }
}

impl Dist<Point> for Point {
    fn dist(self: &Self, other: &Point) -> NotNan<f64> {
        // all coordinates are finite, so the sum is either finite or +inf
        NotNan::new(self.l2_squared_distance(other)).unwrap()
    }
}
