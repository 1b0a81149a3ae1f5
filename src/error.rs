use std::fmt::Debug;

use thiserror::Error;

use crate::{layout::NodeId, style::Edge};

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot set measure function: nodes with measure functions cannot have children")]
    MeasureFuncWithChildren,
    #[error("cannot reset a node which still has children attached")]
    ResetWithChildren,
    #[error("cannot reset a node still attached to an owner")]
    ResetWithOwner,
    #[error("child {0:?} already has an owner, remove it first")]
    ChildAlreadyOwned(NodeId),
    #[error("cannot add child: node {0:?} has a measure function")]
    ChildOfMeasuredNode(NodeId),
    #[error("node {0:?} is not in the tree")]
    NodeNotFound(NodeId),
    #[error("cannot insert child at {index}: owner has {len} children")]
    ChildIndexOutOfRange { index: usize, len: usize },
    #[error("computed layout has no slot for edge {0:?}")]
    EdgeNotStored(Edge),
}

/// Aborts on an API misuse that has already left `node` in an unsupported
/// configuration.
#[track_caller]
pub(crate) fn fatal(node: &impl Debug, err: LayoutError) -> ! {
    log::error!("{err}: {node:?}");
    panic!("{err}: {node:?}");
}
