use glam::vec2;

use super::{
    Rect,
    float::{approx_eq_opt, approx_eq_slice, same},
    measure::MeasureMode,
};
use crate::style::{Direction, Edge};

pub const MAX_CACHED_MEASUREMENTS: usize = 16;

/// One memoized measurement, written by the layout pass.
#[derive(Copy, Clone, Debug)]
pub struct CachedMeasurement {
    pub available_width: f32,
    pub available_height: f32,
    pub width_mode: Option<MeasureMode>,
    pub height_mode: Option<MeasureMode>,
    pub computed_width: f32,
    pub computed_height: f32,
}

impl Default for CachedMeasurement {
    fn default() -> Self {
        Self {
            available_width: -1.0,
            available_height: -1.0,
            width_mode: None,
            height_mode: None,
            computed_width: -1.0,
            computed_height: -1.0,
        }
    }
}

impl PartialEq for CachedMeasurement {
    fn eq(&self, other: &Self) -> bool {
        self.width_mode == other.width_mode
            && self.height_mode == other.height_mode
            && same(self.available_width, other.available_width)
            && same(self.available_height, other.available_height)
            && same(self.computed_width, other.computed_width)
            && same(self.computed_height, other.computed_height)
    }
}

/// Computed output of a layout pass. Undefined floats are NaN.
#[derive(Clone, Debug)]
pub struct Layout {
    pub position: [f32; 4],
    pub dimensions: [f32; 2],
    pub margin: [f32; 6],
    pub border: [f32; 6],
    pub padding: [f32; 6],
    pub direction: Direction,
    pub computed_flex_basis_generation: u32,
    pub computed_flex_basis: Option<f32>,
    pub had_overflow: bool,
    pub generation_count: u32,
    pub last_owner_direction: Option<Direction>,
    pub next_cached_measurements_index: usize,
    pub cached_measurements: [CachedMeasurement; MAX_CACHED_MEASUREMENTS],
    pub measured_dimensions: [f32; 2],
    pub cached_layout: CachedMeasurement,
    pub did_use_legacy_flag: bool,
    pub does_legacy_stretch_flag_affects_layout: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            position: [0.0; 4],
            dimensions: [f32::NAN; 2],
            margin: [0.0; 6],
            border: [0.0; 6],
            padding: [0.0; 6],
            direction: Direction::Inherit,
            computed_flex_basis_generation: 0,
            computed_flex_basis: None,
            had_overflow: false,
            generation_count: 0,
            last_owner_direction: None,
            next_cached_measurements_index: 0,
            cached_measurements: [CachedMeasurement::default(); MAX_CACHED_MEASUREMENTS],
            measured_dimensions: [f32::NAN; 2],
            cached_layout: CachedMeasurement::default(),
            did_use_legacy_flag: false,
            does_legacy_stretch_flag_affects_layout: false,
        }
    }
}

impl Layout {
    /// Slot of `edge` in `position`. Only the four physical edges are stored.
    pub(super) fn position_slot(edge: Edge) -> Option<usize> {
        match edge {
            Edge::Left | Edge::Top | Edge::Right | Edge::Bottom => Some(edge as usize),
            _ => None,
        }
    }

    /// Slot of `edge` in `margin`, `border` and `padding`. These store the
    /// physical edges plus `Start` and `End`; the shorthands have no slot.
    pub(super) fn box_slot(edge: Edge) -> Option<usize> {
        match edge {
            Edge::Horizontal | Edge::Vertical | Edge::All => None,
            _ => Some(edge as usize),
        }
    }

    /// NaN for an edge without a slot.
    pub fn position(&self, edge: Edge) -> f32 {
        Self::position_slot(edge).map_or(f32::NAN, |slot| self.position[slot])
    }

    pub fn margin(&self, edge: Edge) -> f32 {
        Self::box_slot(edge).map_or(f32::NAN, |slot| self.margin[slot])
    }

    pub fn border(&self, edge: Edge) -> f32 {
        Self::box_slot(edge).map_or(f32::NAN, |slot| self.border[slot])
    }

    pub fn padding(&self, edge: Edge) -> f32 {
        Self::box_slot(edge).map_or(f32::NAN, |slot| self.padding[slot])
    }

    /// Rect of the node relative to its owner.
    pub fn frame(&self) -> Rect {
        Rect::new(
            vec2(self.position(Edge::Left), self.position(Edge::Top)),
            vec2(self.dimensions[0], self.dimensions[1]),
        )
    }
}

// Generation counters and the legacy-stretch flags are bookkeeping, not
// layout, and are left out.
impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        let fields_eq = approx_eq_slice(&self.position, &other.position)
            && approx_eq_slice(&self.dimensions, &other.dimensions)
            && approx_eq_slice(&self.margin, &other.margin)
            && approx_eq_slice(&self.border, &other.border)
            && approx_eq_slice(&self.padding, &other.padding)
            && self.direction == other.direction
            && self.had_overflow == other.had_overflow
            && self.last_owner_direction == other.last_owner_direction
            && self.next_cached_measurements_index == other.next_cached_measurements_index
            && self.cached_layout == other.cached_layout
            && approx_eq_opt(self.computed_flex_basis, other.computed_flex_basis);

        fields_eq && self.cached_measurements == other.cached_measurements
            && same(self.measured_dimensions[0], other.measured_dimensions[0])
            && same(self.measured_dimensions[1], other.measured_dimensions[1])
    }
}
