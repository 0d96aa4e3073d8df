use crate::rect::Rect;

/// A tree node owning its children exclusively.
///
/// Internal nodes hold children; leaves hold the indices of the points they
/// own. Every node carries its primary bound plus an outer bound: the
/// possibly larger rectangle guaranteed to contain every point that could
/// ever be routed beneath it. Sibling outer bounds cover their parent's
/// outer bound and overlap only on the cut plane.
pub struct Node<const D: usize> {
    pub bound: Rect<D>,
    pub outer_bound: Rect<D>,
    pub children: Vec<Node<D>>,
    pub points: Vec<usize>,
}

impl<const D: usize> Node<D> {
    #[must_use]
    pub fn leaf(bound: Rect<D>, outer_bound: Rect<D>, points: Vec<usize>) -> Node<D> {
        Node {
            bound,
            outer_bound,
            children: Vec::new(),
            points,
        }
    }

    #[must_use]
    pub fn internal(bound: Rect<D>, outer_bound: Rect<D>, children: Vec<Node<D>>) -> Node<D> {
        Node {
            bound,
            outer_bound,
            children,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn child(&self, index: usize) -> &Node<D> {
        &self.children[index]
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .fold(0, |max, child| max.max(child.height()))
            + 1
    }

    /// Number of point references held by the leaves of this subtree.
    /// Spill trees count duplicated boundary points once per leaf.
    #[must_use]
    pub fn num_points(&self) -> usize {
        if self.is_leaf() {
            self.points.len()
        } else {
            self.children.iter().map(Node::num_points).sum()
        }
    }
}
