use super::{Edge, Edges, Value};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Flex,
    None,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FlexDir {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Auto,
    Start,
    Center,
    End,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Wrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flex {
    pub dir: FlexDir,
    pub justify: Justify,
    pub align_items: Align,
    pub align_content: Align,
    pub align_self: Align,
    pub wrap: Wrap,
    /// Legacy `flex` shorthand.
    pub flex: Option<f32>,
    pub grow: Option<f32>,
    pub shrink: Option<f32>,
    pub basis: Value,
}

impl Default for Flex {
    fn default() -> Self {
        Self {
            dir: FlexDir::Column,
            justify: Justify::Start,
            align_items: Align::Stretch,
            align_content: Align::Start,
            align_self: Align::Auto,
            wrap: Wrap::NoWrap,
            flex: None,
            grow: None,
            shrink: None,
            basis: Value::Auto,
        }
    }
}

/// Authored box-model values for one node. Nodes swap the whole snapshot
/// rather than editing it in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    pub direction: Direction,
    pub display: Display,
    pub position_type: PositionType,
    pub overflow: Overflow,
    pub flex: Flex,
    pub margin: Edges,
    pub position: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub width: Value,
    pub height: Value,
    pub min_width: Value,
    pub min_height: Value,
    pub max_width: Value,
    pub max_height: Value,
    pub aspect_ratio: Option<f32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            display: Display::Flex,
            position_type: PositionType::Relative,
            overflow: Overflow::Visible,
            flex: Flex::default(),
            margin: Edges::new(),
            position: Edges::new(),
            padding: Edges::new(),
            border: Edges::new(),
            width: Value::Auto,
            height: Value::Auto,
            min_width: Value::Undefined,
            min_height: Value::Undefined,
            max_width: Value::Undefined,
            max_height: Value::Undefined,
            aspect_ratio: None,
        }
    }
}

impl Style {
    pub fn dimension(&self, dim: Dimension) -> Value {
        match dim {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    pub fn min_dimension(&self, dim: Dimension) -> Value {
        match dim {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    pub fn max_dimension(&self, dim: Dimension) -> Value {
        match dim {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_flex_direction(mut self, dir: FlexDir) -> Self {
        self.flex.dir = dir;
        self
    }

    pub fn with_position_type(mut self, position_type: PositionType) -> Self {
        self.position_type = position_type;
        self
    }

    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex.flex = Some(flex);
        self
    }

    pub fn with_flex_grow(mut self, grow: f32) -> Self {
        self.flex.grow = Some(grow);
        self
    }

    pub fn with_flex_shrink(mut self, shrink: f32) -> Self {
        self.flex.shrink = Some(shrink);
        self
    }

    pub fn with_flex_basis(mut self, basis: impl Into<Value>) -> Self {
        self.flex.basis = basis.into();
        self
    }

    pub fn with_margin(mut self, edge: Edge, value: impl Into<Value>) -> Self {
        self.margin[edge] = value.into();
        self
    }

    pub fn with_position(mut self, edge: Edge, value: impl Into<Value>) -> Self {
        self.position[edge] = value.into();
        self
    }

    pub fn with_padding(mut self, edge: Edge, value: impl Into<Value>) -> Self {
        self.padding[edge] = value.into();
        self
    }

    pub fn with_border(mut self, edge: Edge, value: impl Into<Value>) -> Self {
        self.border[edge] = value.into();
        self
    }

    pub fn with_size(mut self, width: impl Into<Value>, height: impl Into<Value>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn with_min_size(mut self, width: impl Into<Value>, height: impl Into<Value>) -> Self {
        self.min_width = width.into();
        self.min_height = height.into();
        self
    }

    pub fn with_max_size(mut self, width: impl Into<Value>, height: impl Into<Value>) -> Self {
        self.max_width = width.into();
        self.max_height = height.into();
        self
    }
}
