pub mod config;
pub mod debug;
pub mod error;
pub mod layout;
pub mod style;

pub use config::Config;
pub use error::{LayoutError, Result};
pub use layout::{MeasureMode, Node, NodeId, Tree};
pub use style::{Direction, Edge, FlexDir, Style, Value};

pub use glam::{Vec2, vec2};

pub fn init_logging() {
    env_logger::init();
}
