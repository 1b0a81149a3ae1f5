//! Box model resolution: turns a node's authored edges and flex factors into
//! the numbers the layout pass works with.
//!
//! On a row axis an authored `Start`/`End` edge wins over the physical
//! leading/trailing edge of the axis. Each layer then applies its own
//! fallback and clamping.

use super::{Node, float};
use crate::style::{Dimension, Direction, Edge, Edges, FlexDir, PositionType, Value};

pub const DEFAULT_FLEX_GROW: f32 = 0.0;
pub const DEFAULT_FLEX_SHRINK: f32 = 0.0;
pub const WEB_DEFAULT_FLEX_SHRINK: f32 = 1.0;

/// The (row override, physical) edge pair for each end of `axis`.
fn leading(axis: FlexDir) -> (Edge, Edge) {
    (Edge::Start, axis.leading_edge())
}

fn trailing(axis: FlexDir) -> (Edge, Edge) {
    (Edge::End, axis.trailing_edge())
}

impl Node {
    // Margin

    pub fn leading_margin(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        self.margin(axis, leading(axis), width_size)
    }

    pub fn trailing_margin(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        self.margin(axis, trailing(axis), width_size)
    }

    pub fn margin_for_axis(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        float::add(
            self.leading_margin(axis, width_size),
            self.trailing_margin(axis, width_size),
        )
    }

    fn margin(&self, axis: FlexDir, (relative, physical): (Edge, Edge), width: f32) -> Option<f32> {
        let margin = &self.style.margin;
        if axis.is_row() && !margin[relative].is_undefined() {
            return margin[relative].resolve_margin(width);
        }
        margin.computed(physical, Value::ZERO).resolve_margin(width)
    }

    /// The authored leading margin, unit and all.
    pub fn margin_leading_value(&self, axis: FlexDir) -> Value {
        self.margin_value(axis, leading(axis))
    }

    pub fn margin_trailing_value(&self, axis: FlexDir) -> Value {
        self.margin_value(axis, trailing(axis))
    }

    fn margin_value(&self, axis: FlexDir, (relative, physical): (Edge, Edge)) -> Value {
        let margin = &self.style.margin;
        if axis.is_row() && !margin[relative].is_undefined() {
            margin[relative]
        } else {
            margin[physical]
        }
    }

    // Border

    pub fn leading_border(&self, axis: FlexDir) -> f32 {
        self.border(axis, leading(axis))
    }

    pub fn trailing_border(&self, axis: FlexDir) -> f32 {
        self.border(axis, trailing(axis))
    }

    fn border(&self, axis: FlexDir, (relative, physical): (Edge, Edge)) -> f32 {
        let border = &self.style.border;
        if axis.is_row() && !border[relative].is_undefined() {
            let value = border[relative].raw();
            if value >= 0.0 {
                return value;
            }
        }
        // NaN (auto) clamps to zero as well.
        border.computed(physical, Value::ZERO).raw().max(0.0)
    }

    // Padding

    pub fn leading_padding(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        self.padding(axis, leading(axis), width_size)
    }

    pub fn trailing_padding(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        self.padding(axis, trailing(axis), width_size)
    }

    fn padding(&self, axis: FlexDir, (relative, physical): (Edge, Edge), width: f32) -> Option<f32> {
        let padding = &self.style.padding;
        let authored = padding[relative];
        let resolved = authored.resolve(width);
        if axis.is_row() && !authored.is_undefined() && resolved.is_some_and(|v| v >= 0.0) {
            return resolved;
        }
        float::max(
            padding.computed(physical, Value::ZERO).resolve(width),
            Some(0.0),
        )
    }

    pub fn leading_padding_and_border(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        float::add(
            self.leading_padding(axis, width_size),
            Some(self.leading_border(axis)),
        )
    }

    pub fn trailing_padding_and_border(&self, axis: FlexDir, width_size: f32) -> Option<f32> {
        float::add(
            self.trailing_padding(axis, width_size),
            Some(self.trailing_border(axis)),
        )
    }

    // Position

    pub fn leading_position(&self, axis: FlexDir, axis_size: f32) -> Option<f32> {
        self.inset(axis, leading(axis), axis_size)
    }

    pub fn trailing_position(&self, axis: FlexDir, axis_size: f32) -> Option<f32> {
        self.inset(axis, trailing(axis), axis_size)
    }

    pub fn is_leading_position_defined(&self, axis: FlexDir) -> bool {
        self.is_inset_defined(axis, leading(axis))
    }

    pub fn is_trailing_position_defined(&self, axis: FlexDir) -> bool {
        self.is_inset_defined(axis, trailing(axis))
    }

    fn inset(&self, axis: FlexDir, (relative, physical): (Edge, Edge), size: f32) -> Option<f32> {
        let position = &self.style.position;
        if axis.is_row() {
            let value = position.computed(relative, Value::Undefined);
            if !value.is_undefined() {
                return value.resolve(size);
            }
        }

        match position.computed(physical, Value::Undefined) {
            Value::Undefined => Some(0.0),
            value => value.resolve(size),
        }
    }

    fn is_inset_defined(&self, axis: FlexDir, (relative, physical): (Edge, Edge)) -> bool {
        let defined = |edges: &Edges, edge| !edges.computed(edge, Value::Undefined).is_undefined();
        (axis.is_row() && defined(&self.style.position, relative))
            || defined(&self.style.position, physical)
    }

    /// Offset from the node's static position along `axis`. A leading inset
    /// wins; otherwise the trailing inset pushes back toward the leading edge.
    /// `None` when neither side is inset.
    pub fn relative_position(&self, axis: FlexDir, axis_size: f32) -> Option<f32> {
        if self.is_leading_position_defined(axis) {
            return self.leading_position(axis, axis_size);
        }
        if !self.is_trailing_position_defined(axis) {
            return None;
        }
        self.trailing_position(axis, axis_size).map(|v| -v)
    }

    // Flex

    pub fn resolve_flex_basis(&self) -> Value {
        let flex = &self.style.flex;
        if !flex.basis.is_auto() && !flex.basis.is_undefined() {
            return flex.basis;
        }
        if flex.flex.is_some_and(|f| f > 0.0) {
            return if self.uses_web_defaults() {
                Value::Auto
            } else {
                Value::ZERO
            };
        }
        Value::Auto
    }

    pub fn resolve_flex_grow(&self) -> f32 {
        // Roots never flex.
        if self.owner.is_none() {
            return 0.0;
        }
        let flex = &self.style.flex;
        if let Some(grow) = flex.grow {
            return grow;
        }
        match flex.flex {
            Some(f) if f > 0.0 => f,
            _ => DEFAULT_FLEX_GROW,
        }
    }

    pub fn resolve_flex_shrink(&self) -> f32 {
        if self.owner.is_none() {
            return 0.0;
        }
        let flex = &self.style.flex;
        if let Some(shrink) = flex.shrink {
            return shrink;
        }
        let web = self.uses_web_defaults();
        match flex.flex {
            Some(f) if !web && f < 0.0 => -f,
            _ if web => WEB_DEFAULT_FLEX_SHRINK,
            _ => DEFAULT_FLEX_SHRINK,
        }
    }

    pub fn is_flexible(&self) -> bool {
        self.style.position_type != PositionType::Absolute
            && (self.resolve_flex_grow() != 0.0 || self.resolve_flex_shrink() != 0.0)
    }

    // Direction and dimensions

    pub fn resolve_direction(&self, owner_direction: Direction) -> Direction {
        match self.style.direction {
            Direction::Inherit if owner_direction != Direction::Inherit => owner_direction,
            Direction::Inherit => Direction::Ltr,
            direction => direction,
        }
    }

    /// Pins each dimension to its max when max and min are authored equal.
    pub fn resolve_dimension(&mut self) {
        for dim in [Dimension::Width, Dimension::Height] {
            let max = self.style.max_dimension(dim);
            self.resolved_dimensions[dim as usize] =
                if !max.is_undefined() && max == self.style.min_dimension(dim) {
                    max
                } else {
                    self.style.dimension(dim)
                };
        }
    }
}
