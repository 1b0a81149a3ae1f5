use std::{any::Any, fmt, rc::Rc};

use super::{
    BaselineFunc, DirtiedFunc, Layout, MeasureFunc, NodeFlags, NodeId,
    measure::MeasureMode,
};
use crate::{
    Config,
    error::{LayoutError, Result, fatal},
    style::{Align, Dimension, Direction, Edge, FlexDir, Style, Value},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeType {
    #[default]
    Default,
    Text,
}

/// A styled box. The tree only records which nodes are children of which;
/// the nodes themselves live in a [`super::Tree`] arena.
#[derive(Clone)]
pub struct Node {
    pub(super) context: Option<Rc<dyn Any>>,
    pub(super) flags: NodeFlags,
    pub(super) measure: Option<MeasureFunc>,
    pub(super) baseline: Option<BaselineFunc>,
    pub(super) dirtied: Option<DirtiedFunc>,
    pub(super) style: Style,
    pub(super) layout: Layout,
    pub(super) line_index: u32,
    pub(super) owner: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) config: Rc<Config>,
    pub(super) resolved_dimensions: [Value; 2],
}

impl Node {
    pub fn new(config: Rc<Config>) -> Self {
        let web_defaults = config.use_web_defaults;
        let mut node = Self {
            context: None,
            flags: NodeFlags::default(),
            measure: None,
            baseline: None,
            dirtied: None,
            style: Style::default(),
            layout: Layout::default(),
            line_index: 0,
            owner: None,
            children: Vec::new(),
            config,
            resolved_dimensions: [Value::Undefined; 2],
        };
        if web_defaults {
            node.use_web_defaults();
        }
        node
    }

    /// Copies `node`, children list included, and binds the copy to `config`.
    pub fn copy_with_config(node: &Node, config: Rc<Config>) -> Self {
        let mut copy = node.clone();
        copy.config = config;
        if copy.config.use_web_defaults {
            copy.use_web_defaults();
        }
        copy
    }

    pub fn use_web_defaults(&mut self) {
        self.flags.insert(NodeFlags::USE_WEB_DEFAULTS);
        self.style.flex.dir = FlexDir::Row;
        self.style.flex.align_content = Align::Stretch;
    }

    pub fn uses_web_defaults(&self) -> bool {
        self.flags.contains(NodeFlags::USE_WEB_DEFAULTS)
    }

    /// Returns the node to its freshly constructed state, keeping its config
    /// and web-defaults policy. Only detached leaves can be reset.
    pub fn try_reset(&mut self) -> Result<()> {
        if !self.children.is_empty() {
            return Err(LayoutError::ResetWithChildren);
        }
        if self.owner.is_some() {
            return Err(LayoutError::ResetWithOwner);
        }

        let web_defaults = self.uses_web_defaults();
        *self = Node::new(self.config.clone());
        if web_defaults {
            self.use_web_defaults();
        }
        Ok(())
    }

    #[track_caller]
    pub fn reset(&mut self) {
        if let Err(err) = self.try_reset() {
            fatal(&*self, err);
        }
    }

    pub fn config(&self) -> &Rc<Config> {
        &self.config
    }

    pub fn context(&self) -> Option<&Rc<dyn Any>> {
        self.context.as_ref()
    }

    pub fn set_context(&mut self, context: Option<Rc<dyn Any>>) {
        self.context = context;
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn node_type(&self) -> NodeType {
        if self.flags.contains(NodeFlags::NODE_TYPE_TEXT) {
            NodeType::Text
        } else {
            NodeType::Default
        }
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.flags
            .set(NodeFlags::NODE_TYPE_TEXT, node_type == NodeType::Text);
    }

    pub fn is_dirty(&self) -> bool {
        self.flags.contains(NodeFlags::IS_DIRTY)
    }

    pub fn has_new_layout(&self) -> bool {
        self.flags.contains(NodeFlags::HAS_NEW_LAYOUT)
    }

    pub fn set_has_new_layout(&mut self, has_new_layout: bool) {
        self.flags.set(NodeFlags::HAS_NEW_LAYOUT, has_new_layout);
    }

    pub fn is_reference_baseline(&self) -> bool {
        self.flags.contains(NodeFlags::IS_REFERENCE_BASELINE)
    }

    pub fn set_is_reference_baseline(&mut self, reference: bool) {
        self.flags.set(NodeFlags::IS_REFERENCE_BASELINE, reference);
    }

    pub fn has_dirtied_func(&self) -> bool {
        self.dirtied.is_some()
    }

    pub fn set_dirtied_func(&mut self, dirtied: Option<DirtiedFunc>) {
        self.dirtied = dirtied;
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replaces the style snapshot. Does not dirty the node; see
    /// [`super::Tree::set_style`] for that.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn line_index(&self) -> u32 {
        self.line_index
    }

    pub fn set_line_index(&mut self, line_index: u32) {
        self.line_index = line_index;
    }

    pub fn resolved_dimension(&self, dim: Dimension) -> Value {
        self.resolved_dimensions[dim as usize]
    }

    // Children and owner

    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Option<NodeId>) {
        self.owner = owner;
    }

    pub fn is_root(&self) -> bool {
        self.owner.is_none()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).copied()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn set_children(&mut self, children: Vec<NodeId>) {
        self.children = children;
    }

    /// Panics if `index` is past the end of the list; [`Tree::insert_child`]
    /// checks it first.
    ///
    /// [`Tree::insert_child`]: super::Tree::insert_child
    pub fn insert_child(&mut self, child: NodeId, index: usize) {
        self.children.insert(index, child);
    }

    /// Removes the first occurrence of `child`, reporting whether it was there.
    pub fn remove_child(&mut self, child: NodeId) -> bool {
        match self.children.iter().position(|c| *c == child) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_child_at(&mut self, index: usize) {
        self.children.remove(index);
    }

    /// Replaces every occurrence of `old` with `new`.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) {
        for child in self.children.iter_mut().filter(|c| **c == old) {
            *child = new;
        }
    }

    pub fn replace_child_at(&mut self, index: usize, new: NodeId) {
        self.children[index] = new;
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
        self.children.shrink_to_fit();
    }

    // Layout writes, for the layout pass

    /// Writes a computed position. Only `Left`, `Top`, `Right` and `Bottom`
    /// are stored; any other edge is rejected.
    pub fn try_set_layout_position(&mut self, position: f32, edge: Edge) -> Result<()> {
        let slot = Layout::position_slot(edge).ok_or(LayoutError::EdgeNotStored(edge))?;
        self.layout.position[slot] = position;
        Ok(())
    }

    #[track_caller]
    pub fn set_layout_position(&mut self, position: f32, edge: Edge) {
        if let Err(err) = self.try_set_layout_position(position, edge) {
            fatal(&*self, err);
        }
    }

    pub fn set_layout_dimension(&mut self, dimension: f32, dim: Dimension) {
        self.layout.dimensions[dim as usize] = dimension;
    }

    pub fn set_layout_measured_dimension(&mut self, dimension: f32, dim: Dimension) {
        self.layout.measured_dimensions[dim as usize] = dimension;
    }

    /// Writes a computed box edge. The physical edges plus `Start` and `End`
    /// are stored; the shorthand edges are rejected.
    pub fn try_set_layout_margin(&mut self, margin: f32, edge: Edge) -> Result<()> {
        let slot = Layout::box_slot(edge).ok_or(LayoutError::EdgeNotStored(edge))?;
        self.layout.margin[slot] = margin;
        Ok(())
    }

    #[track_caller]
    pub fn set_layout_margin(&mut self, margin: f32, edge: Edge) {
        if let Err(err) = self.try_set_layout_margin(margin, edge) {
            fatal(&*self, err);
        }
    }

    pub fn try_set_layout_border(&mut self, border: f32, edge: Edge) -> Result<()> {
        let slot = Layout::box_slot(edge).ok_or(LayoutError::EdgeNotStored(edge))?;
        self.layout.border[slot] = border;
        Ok(())
    }

    #[track_caller]
    pub fn set_layout_border(&mut self, border: f32, edge: Edge) {
        if let Err(err) = self.try_set_layout_border(border, edge) {
            fatal(&*self, err);
        }
    }

    pub fn try_set_layout_padding(&mut self, padding: f32, edge: Edge) -> Result<()> {
        let slot = Layout::box_slot(edge).ok_or(LayoutError::EdgeNotStored(edge))?;
        self.layout.padding[slot] = padding;
        Ok(())
    }

    #[track_caller]
    pub fn set_layout_padding(&mut self, padding: f32, edge: Edge) {
        if let Err(err) = self.try_set_layout_padding(padding, edge) {
            fatal(&*self, err);
        }
    }

    pub fn set_layout_direction(&mut self, direction: Direction) {
        self.layout.direction = direction;
    }

    pub fn set_layout_last_owner_direction(&mut self, direction: Direction) {
        self.layout.last_owner_direction = Some(direction);
    }

    pub fn set_layout_computed_flex_basis(&mut self, basis: Option<f32>) {
        self.layout.computed_flex_basis = basis;
    }

    pub fn set_layout_computed_flex_basis_generation(&mut self, generation: u32) {
        self.layout.computed_flex_basis_generation = generation;
    }

    pub fn set_layout_generation_count(&mut self, generation: u32) {
        self.layout.generation_count = generation;
    }

    pub fn set_layout_had_overflow(&mut self, had_overflow: bool) {
        self.layout.had_overflow = had_overflow;
    }

    pub fn set_layout_did_use_legacy_flag(&mut self, did_use: bool) {
        self.layout.did_use_legacy_flag = did_use;
    }

    pub fn set_layout_does_legacy_flag_affect_layout(&mut self, affects: bool) {
        self.layout.does_legacy_stretch_flag_affects_layout = affects;
    }

    /// Records a measurement in the next cache slot, wrapping around when full.
    pub fn push_cached_measurement(
        &mut self,
        available: (f32, f32),
        modes: (MeasureMode, MeasureMode),
        computed: (f32, f32),
    ) {
        let layout = &mut self.layout;
        let slot = layout.next_cached_measurements_index % layout.cached_measurements.len();
        let entry = &mut layout.cached_measurements[slot];
        (entry.available_width, entry.available_height) = available;
        (entry.width_mode, entry.height_mode) = (Some(modes.0), Some(modes.1));
        (entry.computed_width, entry.computed_height) = computed;
        layout.next_cached_measurements_index = slot + 1;
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.node_type())
            .field("flags", &self.flags)
            .field("owner", &self.owner)
            .field("children", &self.children)
            .field("has_measure", &self.has_measure_func())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Tree;

    fn config(web: bool) -> Rc<Config> {
        Config::new().with_web_defaults(web).shared()
    }

    #[test]
    fn web_defaults_switch_axis_and_align_content() {
        let node = Node::new(config(true));
        assert!(node.uses_web_defaults());
        assert_eq!(node.style().flex.dir, FlexDir::Row);
        assert_eq!(node.style().flex.align_content, Align::Stretch);

        let node = Node::new(config(false));
        assert!(!node.uses_web_defaults());
        assert_eq!(node.style().flex.dir, FlexDir::Column);
    }

    #[test]
    fn flags_are_independent() {
        let mut node = Node::new(config(false));
        assert!(node.has_new_layout());

        node.set_node_type(NodeType::Text);
        node.set_is_reference_baseline(true);
        node.set_has_new_layout(false);
        assert_eq!(node.node_type(), NodeType::Text);
        assert!(node.is_reference_baseline());
        assert!(!node.has_new_layout());
        assert!(!node.is_dirty());
        assert!(!node.uses_web_defaults());
    }

    #[test]
    fn child_list_edits() {
        let mut tree = Tree::new();
        let [a, b, c] = [tree.new_node(), tree.new_node(), tree.new_node()];
        let mut node = Node::new(config(false));

        node.insert_child(a, 0);
        node.insert_child(b, 1);
        node.insert_child(c, 1);
        assert_eq!(node.children(), &[a, c, b]);

        assert!(node.remove_child(c));
        assert!(!node.remove_child(c));
        assert_eq!(node.children(), &[a, b]);

        node.replace_child(a, c);
        node.replace_child_at(1, a);
        assert_eq!(node.children(), &[c, a]);

        node.remove_child_at(0);
        assert_eq!(node.child(0), Some(a));
        assert_eq!(node.child(1), None);

        node.clear_children();
        assert_eq!(node.child_count(), 0);
        assert_eq!(node.children.capacity(), 0);
    }

    #[test]
    fn edits_do_not_touch_dirty_or_owner() {
        let mut tree = Tree::new();
        let parent = tree.new_node();
        let child = tree.new_node();
        tree.node_mut(parent).insert_child(child, 0);

        assert!(!tree.node(parent).is_dirty());
        assert_eq!(tree.node(child).owner(), None);
    }

    #[test]
    fn reset_keeps_config_and_web_defaults() {
        let shared = config(false);
        let mut node = Node::new(shared.clone());
        node.use_web_defaults();
        node.set_style(Style::default().with_flex_grow(3.0));
        node.set_layout_position(12.0, Edge::Left);

        node.reset();
        assert!(Rc::ptr_eq(node.config(), &shared));
        assert!(node.uses_web_defaults());
        assert_eq!(node.style().flex.grow, None);
        assert_eq!(node.style().flex.dir, FlexDir::Row);
        assert_eq!(node.layout(), &Layout::default());
    }

    #[test]
    fn reset_rejects_attached_nodes() {
        let mut tree = Tree::new();
        let parent = tree.new_node();
        let child = tree.new_node();
        tree.insert_child(parent, child, 0).unwrap();

        assert_eq!(
            tree.node_mut(parent).try_reset(),
            Err(LayoutError::ResetWithChildren)
        );
        assert_eq!(
            tree.node_mut(child).try_reset(),
            Err(LayoutError::ResetWithOwner)
        );
    }

    #[test]
    #[should_panic(expected = "cannot reset a node still attached to an owner")]
    fn reset_with_owner_is_fatal() {
        let mut tree = Tree::new();
        let parent = tree.new_node();
        let child = tree.new_node();
        tree.node_mut(child).set_owner(Some(parent));
        tree.node_mut(child).reset();
    }

    #[test]
    fn measurement_cache_wraps() {
        let mut node = Node::new(config(false));
        for i in 0..17 {
            let v = i as f32;
            node.push_cached_measurement(
                (v, v),
                (MeasureMode::Exactly, MeasureMode::AtMost),
                (v, v),
            );
        }
        let layout = node.layout();
        assert_eq!(layout.next_cached_measurements_index, 1);
        assert_eq!(layout.cached_measurements[0].computed_width, 16.0);
        assert_eq!(layout.cached_measurements[1].computed_width, 1.0);
    }

    #[test]
    fn layout_writes_reject_edges_without_a_slot() {
        let mut node = Node::new(config(false));
        assert_eq!(
            node.try_set_layout_position(1.0, Edge::Start),
            Err(LayoutError::EdgeNotStored(Edge::Start))
        );
        assert_eq!(
            node.try_set_layout_margin(1.0, Edge::Horizontal),
            Err(LayoutError::EdgeNotStored(Edge::Horizontal))
        );
        assert_eq!(
            node.try_set_layout_border(1.0, Edge::Vertical),
            Err(LayoutError::EdgeNotStored(Edge::Vertical))
        );
        assert_eq!(
            node.try_set_layout_padding(1.0, Edge::All),
            Err(LayoutError::EdgeNotStored(Edge::All))
        );
        assert_eq!(node.layout(), &Layout::default());

        node.set_layout_margin(2.0, Edge::Start);
        node.set_layout_padding(3.0, Edge::End);
        node.set_layout_position(4.0, Edge::Bottom);
        assert_eq!(node.layout().margin(Edge::Start), 2.0);
        assert_eq!(node.layout().padding(Edge::End), 3.0);
        assert_eq!(node.layout().position(Edge::Bottom), 4.0);
    }

    #[test]
    #[should_panic(expected = "computed layout has no slot for edge Start")]
    fn position_write_on_logical_edge_is_fatal() {
        let mut node = Node::new(config(false));
        node.set_layout_position(1.0, Edge::Start);
    }
}
