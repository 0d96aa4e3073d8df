use crate::dataset::Dataset;
use ordered_float::OrderedFloat;

/// An axis-aligned hyperrectangle over `D` dimensions.
///
/// Containment tests use closed intervals on every dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> Rect<D> {
    #[must_use]
    pub fn new(min: [f64; D], max: [f64; D]) -> Rect<D> {
        Rect { min, max }
    }

    /// The unbounded rectangle, used as the outer bound of a root node.
    #[must_use]
    pub fn everything() -> Rect<D> {
        Rect {
            min: [f64::NEG_INFINITY; D],
            max: [f64::INFINITY; D],
        }
    }

    /// The tight bound of the given points.
    #[must_use]
    pub fn from_points(dataset: &Dataset<D>, points: &[usize]) -> Rect<D> {
        debug_assert!(!points.is_empty());
        let mut rect = Rect::new(*dataset.point(points[0]), *dataset.point(points[0]));
        for &point in &points[1..] {
            rect.expand(dataset.point(point));
        }
        rect
    }

    #[must_use]
    pub fn contains(&self, point: &[f64; D]) -> bool {
        for dim in 0..D {
            if point[dim] < self.min[dim] || point[dim] > self.max[dim] {
                return false;
            }
        }
        true
    }

    #[must_use]
    pub fn width(&self, dim: usize) -> f64 {
        self.max[dim] - self.min[dim]
    }

    /// The dimension with the largest extent; ties go to the lowest index.
    #[must_use]
    pub fn widest_dimension(&self) -> usize {
        let mut widest = 0;
        for dim in 1..D {
            if OrderedFloat(self.width(dim)) > OrderedFloat(self.width(widest)) {
                widest = dim;
            }
        }
        widest
    }

    #[must_use]
    pub fn midpoint(&self, dim: usize) -> f64 {
        (self.min[dim] + self.max[dim]) / 2.0
    }

    /// Enlarge the rectangle to cover the given point.
    pub fn expand(&mut self, point: &[f64; D]) {
        for dim in 0..D {
            self.min[dim] = self.min[dim].min(point[dim]);
            self.max[dim] = self.max[dim].max(point[dim]);
        }
    }

    /// Cut the rectangle at `value` along `dim` into two covering halves.
    /// Both halves are closed at the cut plane.
    #[must_use]
    pub fn split_at(&self, dim: usize, value: f64) -> (Rect<D>, Rect<D>) {
        let mut left = *self;
        let mut right = *self;
        left.max[dim] = value;
        right.min[dim] = value;
        (left, right)
    }
}
