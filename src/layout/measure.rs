use std::{any::Any, rc::Rc};

use glam::Vec2;

use super::{Node, NodeType};
use crate::error::{LayoutError, Result, fatal};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    Undefined,
    Exactly,
    AtMost,
}

type MeasureFn = dyn Fn(&Node, f32, MeasureMode, f32, MeasureMode) -> Vec2;
type MeasureWithContextFn = dyn Fn(&Node, f32, MeasureMode, f32, MeasureMode, &mut dyn Any) -> Vec2;
type BaselineFn = dyn Fn(&Node, f32, f32) -> f32;
type BaselineWithContextFn = dyn Fn(&Node, f32, f32, &mut dyn Any) -> f32;

/// Host-supplied sizing for leaf nodes such as text.
#[derive(Clone)]
pub enum MeasureFunc {
    NoContext(Rc<MeasureFn>),
    WithContext(Rc<MeasureWithContextFn>),
}

impl MeasureFunc {
    pub fn new(f: impl Fn(&Node, f32, MeasureMode, f32, MeasureMode) -> Vec2 + 'static) -> Self {
        Self::NoContext(Rc::new(f))
    }

    pub fn with_context(
        f: impl Fn(&Node, f32, MeasureMode, f32, MeasureMode, &mut dyn Any) -> Vec2 + 'static,
    ) -> Self {
        Self::WithContext(Rc::new(f))
    }

    pub fn uses_context(&self) -> bool {
        matches!(self, Self::WithContext(_))
    }
}

#[derive(Clone)]
pub enum BaselineFunc {
    NoContext(Rc<BaselineFn>),
    WithContext(Rc<BaselineWithContextFn>),
}

impl BaselineFunc {
    pub fn new(f: impl Fn(&Node, f32, f32) -> f32 + 'static) -> Self {
        Self::NoContext(Rc::new(f))
    }

    pub fn with_context(f: impl Fn(&Node, f32, f32, &mut dyn Any) -> f32 + 'static) -> Self {
        Self::WithContext(Rc::new(f))
    }

    pub fn uses_context(&self) -> bool {
        matches!(self, Self::WithContext(_))
    }
}

impl Node {
    pub fn has_measure_func(&self) -> bool {
        self.measure.is_some()
    }

    pub fn has_baseline_func(&self) -> bool {
        self.baseline.is_some()
    }

    /// Runs the measure callback. `context` only reaches callbacks that asked
    /// for it. `None` when no callback is set.
    pub fn measure(
        &self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
        context: &mut dyn Any,
    ) -> Option<Vec2> {
        let size = match self.measure.as_ref()? {
            MeasureFunc::NoContext(f) => f(self, width, width_mode, height, height_mode),
            MeasureFunc::WithContext(f) => f(self, width, width_mode, height, height_mode, context),
        };
        Some(size)
    }

    pub fn baseline(&self, width: f32, height: f32, context: &mut dyn Any) -> Option<f32> {
        let baseline = match self.baseline.as_ref()? {
            BaselineFunc::NoContext(f) => f(self, width, height),
            BaselineFunc::WithContext(f) => f(self, width, height, context),
        };
        Some(baseline)
    }

    /// Installs or clears the measure callback. A measured node is a leaf:
    /// fails, leaving the node untouched, if it has children.
    pub fn try_set_measure_func(&mut self, measure: Option<MeasureFunc>) -> Result<()> {
        match &measure {
            None => self.set_node_type(NodeType::Default),
            Some(_) => {
                if !self.children.is_empty() {
                    return Err(LayoutError::MeasureFuncWithChildren);
                }
                self.set_node_type(NodeType::Text);
            }
        }
        self.measure = measure;
        Ok(())
    }

    #[track_caller]
    pub fn set_measure_func(&mut self, measure: Option<MeasureFunc>) {
        if let Err(err) = self.try_set_measure_func(measure) {
            fatal(&*self, err);
        }
    }

    #[track_caller]
    pub fn set_measure_fn(
        &mut self,
        f: impl Fn(&Node, f32, MeasureMode, f32, MeasureMode) -> Vec2 + 'static,
    ) {
        self.set_measure_func(Some(MeasureFunc::new(f)));
    }

    #[track_caller]
    pub fn set_measure_fn_with_context(
        &mut self,
        f: impl Fn(&Node, f32, MeasureMode, f32, MeasureMode, &mut dyn Any) -> Vec2 + 'static,
    ) {
        self.set_measure_func(Some(MeasureFunc::with_context(f)));
    }

    pub fn set_baseline_func(&mut self, baseline: Option<BaselineFunc>) {
        self.baseline = baseline;
    }
}
