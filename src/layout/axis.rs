use crate::style::{Direction, Edge, FlexDir};

impl FlexDir {
    pub fn is_row(self) -> bool {
        matches!(self, FlexDir::Row | FlexDir::RowReverse)
    }

    pub fn is_column(self) -> bool {
        !self.is_row()
    }

    pub fn leading_edge(self) -> Edge {
        match self {
            FlexDir::Column => Edge::Top,
            FlexDir::ColumnReverse => Edge::Bottom,
            FlexDir::Row => Edge::Left,
            FlexDir::RowReverse => Edge::Right,
        }
    }

    pub fn trailing_edge(self) -> Edge {
        match self {
            FlexDir::Column => Edge::Bottom,
            FlexDir::ColumnReverse => Edge::Top,
            FlexDir::Row => Edge::Right,
            FlexDir::RowReverse => Edge::Left,
        }
    }

    /// Flips row axes for right-to-left content.
    pub fn resolve(self, direction: Direction) -> FlexDir {
        match (self, direction) {
            (FlexDir::Row, Direction::Rtl) => FlexDir::RowReverse,
            (FlexDir::RowReverse, Direction::Rtl) => FlexDir::Row,
            (dir, _) => dir,
        }
    }

    pub fn cross(self, direction: Direction) -> FlexDir {
        if self.is_column() {
            FlexDir::Row.resolve(direction)
        } else {
            FlexDir::Column
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_swaps_row_only() {
        assert_eq!(FlexDir::Row.resolve(Direction::Rtl), FlexDir::RowReverse);
        assert_eq!(FlexDir::RowReverse.resolve(Direction::Rtl), FlexDir::Row);
        assert_eq!(FlexDir::Column.resolve(Direction::Rtl), FlexDir::Column);
        assert_eq!(FlexDir::Row.resolve(Direction::Ltr), FlexDir::Row);
    }

    #[test]
    fn cross_axis() {
        assert_eq!(FlexDir::Column.cross(Direction::Rtl), FlexDir::RowReverse);
        assert_eq!(FlexDir::RowReverse.cross(Direction::Ltr), FlexDir::Column);
    }

    #[test]
    fn reversed_axes_swap_edges() {
        for dir in [FlexDir::Column, FlexDir::ColumnReverse, FlexDir::Row, FlexDir::RowReverse] {
            assert_ne!(dir.leading_edge(), dir.trailing_edge());
        }
        assert_eq!(FlexDir::RowReverse.leading_edge(), FlexDir::Row.trailing_edge());
        assert_eq!(FlexDir::ColumnReverse.leading_edge(), FlexDir::Column.trailing_edge());
    }
}
