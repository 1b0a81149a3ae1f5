/// An authored style value together with its unit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Auto,
    Point(f32),
    Percent(f32),
}

impl Value {
    pub const ZERO: Value = Value::Point(0.0);

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Value::Auto)
    }

    /// Resolves against `reference`, the size percentages are relative to.
    /// A NaN reference leaves percentages unresolved.
    pub fn resolve(self, reference: f32) -> Option<f32> {
        match self {
            Value::Point(v) => Some(v),
            Value::Percent(p) => Some(p * reference * 0.01).filter(|v| !v.is_nan()),
            Value::Undefined | Value::Auto => None,
        }
    }

    /// Same as [`Value::resolve`] except that `auto` margins count as zero.
    pub fn resolve_margin(self, reference: f32) -> Option<f32> {
        match self {
            Value::Auto => Some(0.0),
            v => v.resolve(reference),
        }
    }

    /// The authored number, ignoring the unit. NaN when there is none.
    pub fn raw(self) -> f32 {
        match self {
            Value::Point(v) | Value::Percent(v) => v,
            Value::Undefined | Value::Auto => f32::NAN,
        }
    }
}

impl From<f32> for Value {
    fn from(points: f32) -> Self {
        Value::Point(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_needs_a_defined_reference() {
        assert_eq!(Value::Percent(50.0).resolve(200.0), Some(100.0));
        assert_eq!(Value::Percent(50.0).resolve(f32::NAN), None);
        assert_eq!(Value::Point(3.0).resolve(f32::NAN), Some(3.0));
    }

    #[test]
    fn auto_margin_is_zero() {
        assert_eq!(Value::Auto.resolve(10.0), None);
        assert_eq!(Value::Auto.resolve_margin(10.0), Some(0.0));
        assert_eq!(Value::Undefined.resolve_margin(10.0), None);
    }

    #[test]
    fn raw_ignores_unit() {
        assert_eq!(Value::Percent(-2.0).raw(), -2.0);
        assert!(Value::Auto.raw().is_nan());
    }
}
