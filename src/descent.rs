use crate::{dataset::Dataset, node::Node};

/// Strategy for choosing which child of an internal node to descend into
/// when inserting a single point.
pub trait DescentHeuristic<const D: usize> {
    /// Returns the index of the child of `node` to descend into for `point`.
    fn choose_descent_node(node: &Node<D>, dataset: &Dataset<D>, point: usize) -> usize;
}

/// Heuristics that can also route a whole subtree during insertion.
///
/// Kept separate from `DescentHeuristic` so that point-only heuristics lack
/// the operation at compile time instead of failing at runtime.
pub trait SubtreeDescentHeuristic<const D: usize>: DescentHeuristic<D> {
    fn choose_descent_subtree(node: &Node<D>, subtree: &Node<D>) -> usize;
}

/// Containment-based descent for trees whose children's outer bounds
/// partition space (R++ style): the point belongs to exactly one child.
///
/// Does not implement `SubtreeDescentHeuristic`; routing whole subtrees
/// needs a different heuristic.
pub struct ContainmentDescent;

impl<const D: usize> DescentHeuristic<D> for ContainmentDescent {
    fn choose_descent_node(node: &Node<D>, dataset: &Dataset<D>, point: usize) -> usize {
        let point = dataset.point(point);
        for index in 0..node.num_children() {
            if node.child(index).outer_bound.contains(point) {
                return index;
            }
        }

        // The children's outer bounds partition space, so one of them must
        // contain the point. Getting here means the bound maintenance that
        // produced this node is broken, and descending anywhere would only
        // corrupt the tree further.
        unreachable!("no child outer bound contains the point");
    }
}

#[cfg(test)]
mod tests {
    use super::{ContainmentDescent, DescentHeuristic};
    use crate::{dataset::Dataset, node::Node, rect::Rect};

    /// Two children whose outer bounds split the plane at x = 4.5.
    fn partitioned_node() -> Node<2> {
        let left = Node::leaf(
            Rect::new([0.0, 0.0], [4.0, 1.0]),
            Rect::new([f64::NEG_INFINITY, f64::NEG_INFINITY], [4.5, f64::INFINITY]),
            vec![0, 1],
        );
        let right = Node::leaf(
            Rect::new([5.0, 0.0], [9.0, 1.0]),
            Rect::new([4.5, f64::NEG_INFINITY], [f64::INFINITY, f64::INFINITY]),
            vec![2, 3],
        );
        Node::internal(
            Rect::new([0.0, 0.0], [9.0, 1.0]),
            Rect::everything(),
            vec![left, right],
        )
    }

    #[test]
    fn descends_into_containing_child() {
        let dataset = Dataset::new(vec![[0.0, 0.0], [0.0, 1.0], [9.0, 0.0], [9.0, 1.0]]);
        let node = partitioned_node();

        for point in 0..dataset.len() {
            let index = ContainmentDescent::choose_descent_node(&node, &dataset, point);
            let child = node.child(index);
            assert!(child.outer_bound.contains(dataset.point(point)));

            // The partition invariant: no other child contains the point.
            for other in 0..node.num_children() {
                if other != index {
                    assert!(!node.child(other).outer_bound.contains(dataset.point(point)));
                }
            }
        }
    }

    #[test]
    fn descent_is_deterministic() {
        let dataset = Dataset::new(vec![[2.0, 0.5], [7.0, 0.5]]);
        let node = partitioned_node();

        for point in 0..dataset.len() {
            let first = ContainmentDescent::choose_descent_node(&node, &dataset, point);
            let second = ContainmentDescent::choose_descent_node(&node, &dataset, point);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn on_plane_point_descends_left() {
        let dataset = Dataset::new(vec![[4.5, 0.5]]);
        let node = partitioned_node();
        assert_eq!(ContainmentDescent::choose_descent_node(&node, &dataset, 0), 0);
    }

    #[test]
    #[should_panic(expected = "no child outer bound contains the point")]
    fn broken_bounds_panic() {
        let dataset = Dataset::new(vec![[100.0, 100.0]]);
        // A malformed node whose children leave a gap.
        let child = Node::leaf(
            Rect::new([0.0, 0.0], [1.0, 1.0]),
            Rect::new([0.0, 0.0], [1.0, 1.0]),
            vec![],
        );
        let node = Node::internal(
            Rect::new([0.0, 0.0], [1.0, 1.0]),
            Rect::everything(),
            vec![child],
        );
        let _ = ContainmentDescent::choose_descent_node(&node, &dataset, 0);
    }
}
