use log::debug;

use crate::{
    dataset::Dataset,
    descent::DescentHeuristic,
    hyperplane::{partition, Hyperplane, SplitBound},
    node::Node,
    rect::Rect,
    split::SpaceSplit,
};

/// Parameters of a batch tree build.
#[derive(Clone, Copy, Debug)]
pub struct BuildConfig {
    /// Nodes with at most this many points stay leaves.
    pub leaf_size: usize,
    /// Spill overlap half-width applied to every splitting hyperplane.
    /// Zero builds a tree with disjoint children.
    pub margin: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            leaf_size: 8,
            margin: 0.0,
        }
    }
}

/// Builds a tree over the whole dataset by recursive splitting.
///
/// Each node's primary bound is the tight rectangle of its points; outer
/// bounds are cut from the parent's outer bound at the splitting plane, so
/// siblings partition space and containment descent stays unambiguous.
/// A node becomes a leaf when it holds at most `leaf_size` points, when the
/// strategy reports a degenerate extent, or when a split fails to shrink
/// the point set (possible under large spill margins).
#[must_use]
pub fn build<const D: usize, S>(dataset: &Dataset<D>, config: &BuildConfig) -> Node<D>
where
    S: SpaceSplit<D>,
    S::Plane: SplitBound<D>,
{
    if dataset.is_empty() {
        return Node::leaf(Rect::everything(), Rect::everything(), Vec::new());
    }
    debug!(
        "building tree over {} points (leaf_size {}, margin {})",
        dataset.len(),
        config.leaf_size,
        config.margin
    );
    let points: Vec<usize> = (0..dataset.len()).collect();
    build_node::<D, S>(dataset, config, Rect::everything(), points)
}

fn build_node<const D: usize, S>(
    dataset: &Dataset<D>,
    config: &BuildConfig,
    outer_bound: Rect<D>,
    points: Vec<usize>,
) -> Node<D>
where
    S: SpaceSplit<D>,
    S::Plane: SplitBound<D>,
{
    let bound = Rect::from_points(dataset, &points);
    if points.len() <= config.leaf_size.max(1) {
        return Node::leaf(bound, outer_bound, points);
    }

    // A degenerate extent means all points coincide; keep an oversized leaf.
    let plane = match S::split_space(&bound, dataset, &points) {
        Some(plane) => plane.with_margin(config.margin),
        None => return Node::leaf(bound, outer_bound, points),
    };

    let (left_points, right_points) = partition(&plane, dataset, &points);
    if left_points.len() == points.len() || right_points.len() == points.len() {
        // The margin swallowed a whole side; splitting further cannot
        // terminate.
        return Node::leaf(bound, outer_bound, points);
    }
    debug!(
        "split {} points into {} left / {} right",
        points.len(),
        left_points.len(),
        right_points.len()
    );

    let (left_outer, right_outer) = plane.split_bound(&outer_bound);
    let left = build_node::<D, S>(dataset, config, left_outer, left_points);
    let right = build_node::<D, S>(dataset, config, right_outer, right_points);
    Node::internal(bound, outer_bound, vec![left, right])
}

/// Inserts a point into an existing tree, routing with the given descent
/// heuristic and enlarging primary bounds along the descent path. Outer
/// bounds already cover all of space and need no maintenance.
pub fn insert<const D: usize, H>(root: &mut Node<D>, dataset: &Dataset<D>, point: usize)
where
    H: DescentHeuristic<D>,
{
    let mut node = root;
    loop {
        node.bound.expand(dataset.point(point));
        if node.is_leaf() {
            node.points.push(point);
            return;
        }
        let index = H::choose_descent_node(node, dataset, point);
        node = &mut node.children[index];
    }
}
