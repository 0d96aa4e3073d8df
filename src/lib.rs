mod builder;
mod dataset;
mod descent;
mod hyperplane;
mod node;
mod rect;
mod split;

pub use builder::{build, insert, BuildConfig};
pub use dataset::{Dataset, DatasetError};
pub use descent::{ContainmentDescent, DescentHeuristic, SubtreeDescentHeuristic};
pub use hyperplane::{
    partition, AxisHyperplane, Hyperplane, ProjectionHyperplane, Side, SplitBound,
};
pub use node::Node;
pub use rect::Rect;
pub use split::{MeanSplit, MidpointSplit, SpaceSplit};
