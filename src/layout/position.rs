use super::{Node, float};
use crate::style::{Direction, FlexDir};

impl Node {
    /// Commits this node's leading and trailing positions on both axes once
    /// the layout pass has settled its size. Each position is the edge margin
    /// plus the node's relative offset on that axis.
    pub fn set_position(
        &mut self,
        direction: Direction,
        main_size: f32,
        cross_size: f32,
        owner_width: f32,
    ) {
        // Roots always lay out left-to-right so positions stay non-negative.
        let direction = if self.owner.is_some() {
            direction
        } else {
            Direction::Ltr
        };
        let main_axis = self.style.flex.dir.resolve(direction);
        let cross_axis = main_axis.cross(direction);

        // TODO: zero the insets of statically positioned nodes once a
        // `PositionType::Static` exists.
        let relative_main = self.relative_offset(main_axis, main_size);
        let relative_cross = self.relative_offset(cross_axis, cross_size);

        let offset = |margin, relative| float::add(margin, relative).unwrap_or(f32::NAN);
        let positions = [
            (
                main_axis.leading_edge(),
                offset(self.leading_margin(main_axis, owner_width), relative_main),
            ),
            (
                main_axis.trailing_edge(),
                offset(self.trailing_margin(main_axis, owner_width), relative_main),
            ),
            (
                cross_axis.leading_edge(),
                offset(self.leading_margin(cross_axis, owner_width), relative_cross),
            ),
            (
                cross_axis.trailing_edge(),
                offset(self.trailing_margin(cross_axis, owner_width), relative_cross),
            ),
        ];

        for (edge, position) in positions {
            self.set_layout_position(position, edge);
        }
    }

    /// Zero when neither side of `axis` is inset. An inset that is set but
    /// cannot resolve against `axis_size` stays `None`.
    fn relative_offset(&self, axis: FlexDir, axis_size: f32) -> Option<f32> {
        if !self.is_leading_position_defined(axis) && !self.is_trailing_position_defined(axis) {
            return Some(0.0);
        }
        self.relative_position(axis, axis_size)
    }
}
