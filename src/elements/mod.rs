use ordered_float::NotNan;

mod list_element;
mod point;

pub use list_element::ListElement;
pub use point::Point;

/// `Dist<Other>` - Implemented by types that can compute their distance to an `Other`.
///
/// [`nearest_neighbors`](crate::search::nearest_neighbors) ranks points by `Point: Dist<Point>`.
pub trait Dist<Other> {
    /// Returns the distance between `self` and `other`
    fn dist(self: &Self, other: &Other) -> NotNan<f64>;
}
