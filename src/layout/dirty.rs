use std::rc::Rc;

use bitflags::bitflags;

use super::{NodeId, Tree};

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct NodeFlags: u8 {
        const HAS_NEW_LAYOUT = 1 << 0;
        const IS_REFERENCE_BASELINE = 1 << 1;
        /// The cached layout is stale.
        const IS_DIRTY = 1 << 2;
        const NODE_TYPE_TEXT = 1 << 3;
        const USE_WEB_DEFAULTS = 1 << 4;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        NodeFlags::HAS_NEW_LAYOUT
    }
}

/// Called with the node's id whenever it goes from clean to dirty.
pub type DirtiedFunc = Rc<dyn Fn(NodeId)>;

impl Tree {
    /// Sets the dirty flag. Going clean to dirty fires the node's dirtied
    /// callback and dirties each clean ancestor in turn, stopping at the first
    /// one that is already dirty. Setting the current value does nothing.
    pub fn set_dirty(&mut self, id: NodeId, dirty: bool) {
        if !dirty {
            if let Some(node) = self.nodes.get_mut(id) {
                node.flags.remove(NodeFlags::IS_DIRTY);
            }
            return;
        }
        self.propagate_dirty(id, false);
    }

    /// Like `set_dirty(id, true)`, but also drops the cached flex basis of
    /// every node it dirties.
    pub fn mark_dirty_and_propagate(&mut self, id: NodeId) {
        self.propagate_dirty(id, true);
    }

    fn propagate_dirty(&mut self, id: NodeId, clear_flex_basis: bool) {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };
            if node.is_dirty() {
                break;
            }

            node.flags.insert(NodeFlags::IS_DIRTY);
            if clear_flex_basis {
                node.layout.computed_flex_basis = None;
            }
            log::trace!("node {id:?} dirtied");
            if let Some(dirtied) = node.dirtied.clone() {
                dirtied(id);
            }
            current = self.nodes.get(id).and_then(|n| n.owner);
        }
    }

    /// Forces the whole subtree under `id`, itself included, dirty. No
    /// callbacks fire and already-dirty nodes do not stop the walk.
    pub fn mark_dirty_and_propagate_downwards(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.flags.insert(NodeFlags::IS_DIRTY);
                stack.extend_from_slice(&node.children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn chain(tree: &mut Tree, len: usize) -> Vec<NodeId> {
        let ids: Vec<NodeId> = (0..len).map(|_| tree.new_node()).collect();
        for pair in ids.windows(2) {
            tree.insert_child(pair[0], pair[1], 0).unwrap();
        }
        for id in &ids {
            tree.set_dirty(*id, false);
        }
        ids
    }

    fn record(tree: &mut Tree, ids: &[NodeId]) -> Rc<RefCell<Vec<NodeId>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for id in ids {
            let log = log.clone();
            tree.node_mut(*id)
                .set_dirtied_func(Some(Rc::new(move |id: NodeId| log.borrow_mut().push(id))));
        }
        log
    }

    #[test]
    fn dirtying_walks_up_to_first_dirty_ancestor() {
        let mut tree = Tree::new();
        let ids = chain(&mut tree, 4);
        let log = record(&mut tree, &ids);
        tree.set_dirty(ids[1], true);
        log.borrow_mut().clear();

        tree.set_dirty(ids[3], true);
        assert_eq!(*log.borrow(), vec![ids[3], ids[2]]);
        assert!(ids.iter().all(|id| tree.node(*id).is_dirty()));
    }

    #[test]
    fn dirtying_a_dirty_node_is_a_noop() {
        let mut tree = Tree::new();
        let ids = chain(&mut tree, 1);
        let log = record(&mut tree, &ids);

        tree.set_dirty(ids[0], true);
        tree.set_dirty(ids[0], true);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn cleaning_fires_nothing() {
        let mut tree = Tree::new();
        let ids = chain(&mut tree, 2);
        let log = record(&mut tree, &ids);
        tree.set_dirty(ids[1], true);
        log.borrow_mut().clear();

        tree.set_dirty(ids[1], false);
        assert!(!tree.node(ids[1]).is_dirty());
        assert!(tree.node(ids[0]).is_dirty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn propagation_clears_flex_basis() {
        let mut tree = Tree::new();
        let ids = chain(&mut tree, 3);
        for id in &ids {
            tree.node_mut(*id).set_layout_computed_flex_basis(Some(10.0));
        }
        tree.set_dirty(ids[0], true);

        tree.mark_dirty_and_propagate(ids[2]);
        assert_eq!(tree.node(ids[2]).layout().computed_flex_basis, None);
        assert_eq!(tree.node(ids[1]).layout().computed_flex_basis, None);
        assert_eq!(tree.node(ids[0]).layout().computed_flex_basis, Some(10.0));
    }

    #[test]
    fn set_dirty_keeps_flex_basis() {
        let mut tree = Tree::new();
        let ids = chain(&mut tree, 1);
        tree.node_mut(ids[0]).set_layout_computed_flex_basis(Some(4.0));
        tree.set_dirty(ids[0], true);
        assert_eq!(tree.node(ids[0]).layout().computed_flex_basis, Some(4.0));
    }

    #[test]
    fn downward_marking_skips_callbacks() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        let left = tree.new_node();
        let right = tree.new_node();
        let leaf = tree.new_node();
        tree.insert_child(root, left, 0).unwrap();
        tree.insert_child(root, right, 1).unwrap();
        tree.insert_child(right, leaf, 0).unwrap();
        for id in [root, left, right, leaf] {
            tree.set_dirty(id, false);
        }
        tree.set_dirty(right, true);
        tree.set_dirty(root, false);
        let log = record(&mut tree, &[root, left, right, leaf]);

        tree.mark_dirty_and_propagate_downwards(root);
        assert!([root, left, right, leaf].iter().all(|id| tree.node(*id).is_dirty()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn stale_owner_stops_propagation() {
        let mut tree = Tree::new();
        let owner = tree.new_node();
        let child = tree.new_node();
        tree.node_mut(child).set_owner(Some(owner));
        tree.free(owner);

        tree.set_dirty(child, true);
        assert!(tree.node(child).is_dirty());
    }
}
