use crate::error::{Error, Result};

use ordered_float::NotNan;
use std::cmp::Ordering;
use std::fmt;

/// An `(index, value)` pair stored in a [`BoundedPriorityQueue`](crate::BoundedPriorityQueue).
///
/// Elements are ordered by `value`, with `index` as a tiebreak so that `Ord` agrees with `Eq`.
/// The value is never NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListElement {
    index: usize,
    value: NotNan<f64>,
}

impl ListElement {
    /// Creates a new element. Fails with `Error::InvalidArgument` if `value` is NaN.
    pub fn new(index: usize, value: f64) -> Result<Self> {
        let value = NotNan::new(value).map_err(|_| Error::InvalidArgument)?;

        Ok(Self { index, value })
    }

    pub fn index(self: &Self) -> usize {
        self.index
    }

    pub fn value(self: &Self) -> f64 {
        self.value.into_inner()
    }

    pub(crate) fn ordered_value(self: &Self) -> NotNan<f64> {
        self.value
    }
}

impl From<(usize, NotNan<f64>)> for ListElement {
    fn from((index, value): (usize, NotNan<f64>)) -> Self {
        Self { index, value }
    }
}

impl Ord for ListElement {
    fn cmp(self: &Self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ListElement {
    fn partial_cmp(self: &Self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ListElement {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_rejected() {
        assert_eq!(Err(Error::InvalidArgument), ListElement::new(1, f64::NAN));
    }

    #[test]
    fn accessors() {
        let e = ListElement::new(49, 60.628071).unwrap();

        assert_eq!(49, e.index());
        assert_eq!(60.628071, e.value());
    }

    #[test]
    fn ordered_by_value_then_index() {
        let a = ListElement::new(7, 1.0).unwrap();
        let b = ListElement::new(2, 2.0).unwrap();
        let c = ListElement::new(3, 2.0).unwrap();

        assert_eq!(Ordering::Less, a.cmp(&b));
        assert_eq!(Ordering::Less, b.cmp(&c));
        assert_eq!(Ordering::Greater, c.cmp(&a));
        assert_eq!(Ordering::Equal, b.cmp(&b));
    }

    #[test]
    fn infinite_values_are_allowed() {
        let e = ListElement::new(0, f64::INFINITY).unwrap();

        assert!(ListElement::new(1, 1e300).unwrap() < e);
    }
}
