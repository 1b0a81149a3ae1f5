use std::ops::{Index, IndexMut};

use super::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    Start,
    End,
    Horizontal,
    Vertical,
    All,
}

impl Edge {
    pub const COUNT: usize = 9;
}

/// One authored value per edge, including the shorthand edges.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges([Value; Edge::COUNT]);

impl Edges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks `edge` up, falling back through the shorthand edges
    /// (vertical/horizontal, then all). `Start` and `End` never take
    /// `default`; they stay undefined so callers can fall back to the
    /// physical edge instead.
    pub fn computed(&self, edge: Edge, default: Value) -> Value {
        if !self[edge].is_undefined() {
            return self[edge];
        }

        let shorthand = match edge {
            Edge::Top | Edge::Bottom => Some(Edge::Vertical),
            Edge::Left | Edge::Right | Edge::Start | Edge::End => Some(Edge::Horizontal),
            _ => None,
        };
        if let Some(shorthand) = shorthand
            && !self[shorthand].is_undefined()
        {
            return self[shorthand];
        }

        if !self[Edge::All].is_undefined() {
            return self[Edge::All];
        }

        match edge {
            Edge::Start | Edge::End => Value::Undefined,
            _ => default,
        }
    }
}

impl Index<Edge> for Edges {
    type Output = Value;

    fn index(&self, edge: Edge) -> &Value {
        &self.0[edge as usize]
    }
}

impl IndexMut<Edge> for Edges {
    fn index_mut(&mut self, edge: Edge) -> &mut Value {
        &mut self.0[edge as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_fallback_order() {
        let mut edges = Edges::new();
        edges[Edge::All] = Value::Point(1.0);
        edges[Edge::Vertical] = Value::Point(2.0);
        edges[Edge::Top] = Value::Point(3.0);

        assert_eq!(edges.computed(Edge::Top, Value::ZERO), Value::Point(3.0));
        assert_eq!(edges.computed(Edge::Bottom, Value::ZERO), Value::Point(2.0));
        assert_eq!(edges.computed(Edge::Left, Value::ZERO), Value::Point(1.0));
    }

    #[test]
    fn start_and_end_ignore_default() {
        let edges = Edges::new();
        assert_eq!(edges.computed(Edge::Start, Value::ZERO), Value::Undefined);
        assert_eq!(edges.computed(Edge::Right, Value::ZERO), Value::ZERO);
    }

    #[test]
    fn horizontal_covers_logical_edges() {
        let mut edges = Edges::new();
        edges[Edge::Horizontal] = Value::Percent(10.0);
        assert_eq!(edges.computed(Edge::End, Value::Undefined), Value::Percent(10.0));
        assert_eq!(edges.computed(Edge::Top, Value::Undefined), Value::Undefined);
    }
}
