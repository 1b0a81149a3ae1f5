pub mod axis;
pub mod dirty;
pub mod float;
pub mod measure;
pub mod node;
pub mod position;
pub mod rect;
pub mod resolve;
pub mod state;
pub mod tree;

pub use dirty::{DirtiedFunc, NodeFlags};
pub use measure::{BaselineFunc, MeasureFunc, MeasureMode};
pub use node::{Node, NodeType};
pub use rect::Rect;
pub use state::{CachedMeasurement, Layout};
pub use tree::{NodeId, Tree};
