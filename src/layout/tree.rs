use std::{
    ops::{Index, IndexMut},
    rc::Rc,
};

use slotmap::{SlotMap, new_key_type};

use super::Node;
use crate::{
    Config,
    error::{LayoutError, Result},
    style::Style,
};

new_key_type! {
    /// Key of a node in a [`Tree`]. Owner links hold these, never the node.
    pub struct NodeId;
}

/// Arena that allocates nodes and hands out their ids.
pub struct Tree {
    pub(super) nodes: SlotMap<NodeId, Node>,
    config: Rc<Config>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self::with_config(Config::default().shared())
    }

    pub fn with_config(config: Rc<Config>) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            config,
        }
    }

    pub fn config(&self) -> &Rc<Config> {
        &self.config
    }

    pub fn new_node(&mut self) -> NodeId {
        self.new_node_with_config(self.config.clone())
    }

    pub fn new_node_with_config(&mut self, config: Rc<Config>) -> NodeId {
        self.nodes.insert(Node::new(config))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    fn try_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(LayoutError::NodeNotFound(id))
    }

    /// Detaches the node from its owner, orphans its children and drops it.
    pub fn free(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(id)?;
        if let Some(owner) = node.owner.and_then(|owner| self.nodes.get_mut(owner)) {
            owner.remove_child(id);
        }
        for child in &node.children {
            if let Some(child) = self.nodes.get_mut(*child)
                && child.owner == Some(id)
            {
                child.owner = None;
            }
        }
        log::debug!("freed node {id:?}");
        Some(node)
    }

    /// Moves the node into a fresh slot. Its children are re-homed to the new
    /// id and the old id stops resolving.
    pub fn move_node(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.remove(id)?;
        let children = node.children.clone();
        let moved = self.nodes.insert(node);
        for child in children {
            if let Some(child) = self.nodes.get_mut(child) {
                child.owner = Some(moved);
            }
        }
        Some(moved)
    }

    /// Allocates a copy of the node bound to `config`. The copy shares the
    /// source's children list; the children still name the source as owner.
    pub fn clone_node_with_config(&mut self, id: NodeId, config: Rc<Config>) -> Result<NodeId> {
        let copy = Node::copy_with_config(self.try_node(id)?, config);
        Ok(self.nodes.insert(copy))
    }

    /// Replaces the node's style, dirtying it only when something changed.
    pub fn set_style(&mut self, id: NodeId, style: Style) -> Result<()> {
        if self.try_node(id)?.style == style {
            return Ok(());
        }
        self.nodes[id].set_style(style);
        self.mark_dirty_and_propagate(id);
        Ok(())
    }

    /// Attaches a detached `child` to `owner` at `index` and dirties `owner`.
    pub fn insert_child(&mut self, owner: NodeId, child: NodeId, index: usize) -> Result<()> {
        if self.try_node(child)?.owner.is_some() {
            return Err(LayoutError::ChildAlreadyOwned(child));
        }
        let owner_node = self.try_node(owner)?;
        if owner_node.has_measure_func() {
            return Err(LayoutError::ChildOfMeasuredNode(owner));
        }
        let len = owner_node.child_count();
        if index > len {
            return Err(LayoutError::ChildIndexOutOfRange { index, len });
        }

        self.nodes[owner].insert_child(child, index);
        self.nodes[child].set_owner(Some(owner));
        log::debug!("attached {child:?} to {owner:?} at {index}");
        self.mark_dirty_and_propagate(owner);
        Ok(())
    }

    /// Detaches `child` from `owner`. Returns whether it was a child.
    pub fn remove_child(&mut self, owner: NodeId, child: NodeId) -> Result<bool> {
        self.try_node(child)?;
        let removed = self
            .nodes
            .get_mut(owner)
            .ok_or(LayoutError::NodeNotFound(owner))?
            .remove_child(child);
        if !removed {
            return Ok(false);
        }

        let node = &mut self.nodes[child];
        if node.owner == Some(owner) {
            node.set_owner(None);
        }
        log::debug!("detached {child:?} from {owner:?}");
        self.mark_dirty_and_propagate(owner);
        Ok(true)
    }

    pub fn remove_all_children(&mut self, owner: NodeId) -> Result<()> {
        let children = self.try_node(owner)?.children.clone();
        if children.is_empty() {
            return Ok(());
        }
        for child in &children {
            if let Some(node) = self.nodes.get_mut(*child)
                && node.owner == Some(owner)
            {
                node.set_owner(None);
            }
        }
        self.nodes[owner].clear_children();
        self.mark_dirty_and_propagate(owner);
        Ok(())
    }

    /// Deep comparison of computed layouts. `self`'s subtree at `id` is
    /// compared against `other`'s subtree at `other_id`, child by child.
    pub fn is_layout_tree_equal(&self, id: NodeId, other: &Tree, other_id: NodeId) -> bool {
        let (Some(node), Some(other_node)) = (self.nodes.get(id), other.nodes.get(other_id)) else {
            return false;
        };
        if node.children.len() != other_node.children.len() || node.layout != other_node.layout {
            return false;
        }
        node.children
            .iter()
            .zip(&other_node.children)
            .all(|(a, b)| self.is_layout_tree_equal(*a, other, *b))
    }

    /// Whether the node or any descendant hit the legacy stretch behaviour
    /// during its last layout.
    pub fn did_use_legacy_flag(&self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        node.layout.did_use_legacy_flag
            || node.children.iter().any(|child| self.did_use_legacy_flag(*child))
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_mut(id)
    }
}
