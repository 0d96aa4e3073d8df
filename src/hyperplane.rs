use crate::{dataset::Dataset, rect::Rect};

/// Position of a point relative to a hyperplane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Boundary,
    Right,
}

/// A separating hyperplane with an optional spill margin.
///
/// The margin is a half-width: points whose projection falls within
/// `margin` of the plane classify as `Boundary` and may be routed to both
/// children by a spill tree. A margin of zero narrows `Boundary` to points
/// lying exactly on the plane.
pub trait Hyperplane<const D: usize> {
    /// Signed offset of the point from the plane.
    fn project(&self, point: &[f64; D]) -> f64;

    fn margin(&self) -> f64;

    #[must_use]
    fn with_margin(self, margin: f64) -> Self;

    fn side(&self, point: &[f64; D]) -> Side {
        let projection = self.project(point);
        if projection.abs() <= self.margin() {
            Side::Boundary
        } else if projection < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Whether a spill tree routes the point into the left child.
    fn to_left(&self, point: &[f64; D]) -> bool {
        self.project(point) <= self.margin()
    }

    /// Whether a spill tree routes the point into the right child.
    fn to_right(&self, point: &[f64; D]) -> bool {
        self.project(point) >= -self.margin()
    }
}

/// Hyperplanes orthogonal to a coordinate axis, able to cut an
/// axis-aligned bound into two covering halves. General-direction planes
/// cannot provide this, so rectangle-tree builders require it as a
/// separate capability.
pub trait SplitBound<const D: usize> {
    fn split_bound(&self, bound: &Rect<D>) -> (Rect<D>, Rect<D>);
}

/// An axis-aligned separating hyperplane: one dimension and a split value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisHyperplane<const D: usize> {
    dimension: usize,
    split_value: f64,
    margin: f64,
}

impl<const D: usize> AxisHyperplane<D> {
    #[must_use]
    pub fn new(dimension: usize, split_value: f64) -> AxisHyperplane<D> {
        AxisHyperplane {
            dimension,
            split_value,
            margin: 0.0,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn split_value(&self) -> f64 {
        self.split_value
    }
}

impl<const D: usize> Hyperplane<D> for AxisHyperplane<D> {
    fn project(&self, point: &[f64; D]) -> f64 {
        point[self.dimension] - self.split_value
    }

    fn margin(&self) -> f64 {
        self.margin
    }

    fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

impl<const D: usize> SplitBound<D> for AxisHyperplane<D> {
    fn split_bound(&self, bound: &Rect<D>) -> (Rect<D>, Rect<D>) {
        bound.split_at(self.dimension, self.split_value)
    }
}

/// A separating hyperplane along an arbitrary direction vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionHyperplane<const D: usize> {
    direction: [f64; D],
    split_value: f64,
    margin: f64,
}

impl<const D: usize> ProjectionHyperplane<D> {
    #[must_use]
    pub fn new(direction: [f64; D], split_value: f64) -> ProjectionHyperplane<D> {
        ProjectionHyperplane {
            direction,
            split_value,
            margin: 0.0,
        }
    }

    #[must_use]
    pub fn direction(&self) -> &[f64; D] {
        &self.direction
    }

    #[must_use]
    pub fn split_value(&self) -> f64 {
        self.split_value
    }
}

impl<const D: usize> Hyperplane<D> for ProjectionHyperplane<D> {
    fn project(&self, point: &[f64; D]) -> f64 {
        let mut dot = 0.0;
        for (x, d) in point.iter().zip(self.direction.iter()) {
            dot += x * d;
        }
        dot - self.split_value
    }

    fn margin(&self) -> f64 {
        self.margin
    }

    fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

/// Distributes points into left and right child groups by the hyperplane.
///
/// The input index set is not modified; a fresh partition is produced.
/// Boundary points are duplicated into both groups when the plane carries a
/// spill margin, otherwise they go left, matching the closed-left half
/// produced by `SplitBound` and the left-first descent scan.
#[must_use]
pub fn partition<const D: usize, H: Hyperplane<D>>(
    plane: &H,
    dataset: &Dataset<D>,
    points: &[usize],
) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &point in points {
        match plane.side(dataset.point(point)) {
            Side::Left => left.push(point),
            Side::Right => right.push(point),
            Side::Boundary => {
                left.push(point);
                if plane.margin() > 0.0 {
                    right.push(point);
                }
            }
        }
    }
    (left, right)
}
