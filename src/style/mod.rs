pub mod edges;
pub mod properties;
pub mod value;

pub use edges::{Edge, Edges};
pub use properties::{
    Align, Dimension, Direction, Display, Flex, FlexDir, Justify, Overflow, PositionType, Style,
    Wrap,
};
pub use value::Value;
