use conv::ValueFrom;

use crate::{
    dataset::Dataset,
    hyperplane::{AxisHyperplane, Hyperplane, ProjectionHyperplane},
    rect::Rect,
};

/// Strategy for computing a separating hyperplane for a node's point set.
///
/// `None` is the recoverable "do not split" signal: the node's widest
/// extent is degenerate and no separating hyperplane exists, so the caller
/// keeps the node as an oversized leaf. The point index set is never
/// modified; partitioning by the returned plane is the caller's job.
pub trait SpaceSplit<const D: usize> {
    type Plane: Hyperplane<D>;

    fn split_space(
        bound: &Rect<D>,
        dataset: &Dataset<D>,
        points: &[usize],
    ) -> Option<Self::Plane>;
}

/// Splits at the midpoint of the bound's widest extent.
///
/// The split value comes from the bound, not from the point values, so the
/// choice is O(1) once the bound is known. Better balance requires a
/// different strategy, not a parameter of this one.
pub struct MidpointSplit;

impl<const D: usize> SpaceSplit<D> for MidpointSplit {
    type Plane = AxisHyperplane<D>;

    fn split_space(
        bound: &Rect<D>,
        _dataset: &Dataset<D>,
        points: &[usize],
    ) -> Option<AxisHyperplane<D>> {
        debug_assert!(!points.is_empty());
        let dimension = bound.widest_dimension();
        if bound.width(dimension) <= 0.0 {
            return None;
        }
        Some(AxisHyperplane::new(dimension, bound.midpoint(dimension)))
    }
}

impl MidpointSplit {
    /// Generalized variant: splits at the midpoint of the point projections
    /// along a caller-supplied direction.
    #[must_use]
    pub fn split_space_along<const D: usize>(
        direction: [f64; D],
        dataset: &Dataset<D>,
        points: &[usize],
    ) -> Option<ProjectionHyperplane<D>> {
        debug_assert!(!points.is_empty());
        let probe = ProjectionHyperplane::new(direction, 0.0);
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &point in points {
            let projection = probe.project(dataset.point(point));
            lo = lo.min(projection);
            hi = hi.max(projection);
        }
        if hi - lo <= 0.0 {
            return None;
        }
        Some(ProjectionHyperplane::new(direction, (lo + hi) / 2.0))
    }
}

/// Splits at the mean of the point values in the bound's widest dimension.
///
/// Costs a pass over the points but tracks the actual mass of the node, so
/// skewed point sets split more evenly than under `MidpointSplit`.
pub struct MeanSplit;

impl<const D: usize> SpaceSplit<D> for MeanSplit {
    type Plane = AxisHyperplane<D>;

    fn split_space(
        bound: &Rect<D>,
        dataset: &Dataset<D>,
        points: &[usize],
    ) -> Option<AxisHyperplane<D>> {
        debug_assert!(!points.is_empty());
        let dimension = bound.widest_dimension();
        if bound.width(dimension) <= 0.0 {
            return None;
        }
        let sum: f64 = points
            .iter()
            .map(|&point| dataset.coordinate(dimension, point))
            .sum();
        let mean = sum / f64::value_from(points.len()).unwrap();
        Some(AxisHyperplane::new(dimension, mean))
    }
}
