use std::rc::Rc;

/// Layout policy shared by every node created from it. Nodes hold it behind
/// an `Rc` and never write to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub use_web_defaults: bool,
    /// Read by the flex line pass, which records its effect through
    /// `Node::set_layout_did_use_legacy_flag`. Nothing in this crate
    /// branches on it.
    pub use_legacy_stretch_behaviour: bool,
    /// Read by the flex line pass when rounding computed layouts to the
    /// pixel grid. Nothing in this crate branches on it.
    pub point_scale_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_web_defaults: false,
            use_legacy_stretch_behaviour: false,
            point_scale_factor: 1.0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_web_defaults(mut self, enabled: bool) -> Self {
        self.use_web_defaults = enabled;
        self
    }

    pub fn with_legacy_stretch_behaviour(mut self, enabled: bool) -> Self {
        self.use_legacy_stretch_behaviour = enabled;
        self
    }

    pub fn with_point_scale_factor(mut self, factor: f32) -> Self {
        self.point_scale_factor = factor;
        self
    }

    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_other_fields_alone() {
        let config = Config::new()
            .with_legacy_stretch_behaviour(true)
            .with_point_scale_factor(2.0);
        assert!(config.use_legacy_stretch_behaviour);
        assert_eq!(config.point_scale_factor, 2.0);
        assert!(!config.use_web_defaults);
        assert_eq!(Config::new().point_scale_factor, 1.0);
    }
}
