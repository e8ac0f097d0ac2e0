//! Measure snapshots.

use super::metric::ValueType;

/// Snapshot value of one metric on one component.
///
/// Tagged per value type; each case carries only the fields valid for that
/// type, so "absent" is always an explicit `None` and never a sentinel.
/// `leak` is the new-code-period value, read by new-code-scoped conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    Int {
        value: Option<i64>,
        leak: Option<i64>,
    },
    Float {
        value: Option<f64>,
        leak: Option<f64>,
    },
    Percent {
        value: Option<f64>,
        leak: Option<f64>,
    },
    Bool {
        value: Option<bool>,
        leak: Option<bool>,
    },
    String {
        value: Option<String>,
    },
}

impl Measure {
    pub fn int(value: i64) -> Self {
        Self::Int {
            value: Some(value),
            leak: None,
        }
    }

    pub fn float(value: f64) -> Self {
        Self::Float {
            value: Some(value),
            leak: None,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self::Percent {
            value: Some(value),
            leak: None,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Bool {
            value: Some(value),
            leak: None,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: Some(value.into()),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int { .. } => ValueType::Int,
            Self::Float { .. } => ValueType::Float,
            Self::Percent { .. } => ValueType::Percent,
            Self::Bool { .. } => ValueType::Bool,
            Self::String { .. } => ValueType::String,
        }
    }

    /// Primary value as a double. Bool maps to 1.0/0.0; string measures
    /// have no numeric value.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Self::Int { value, .. } => value.map(|v| v as f64),
            Self::Float { value, .. } | Self::Percent { value, .. } => *value,
            Self::Bool { value, .. } => value.map(|v| if v { 1.0 } else { 0.0 }),
            Self::String { .. } => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match self {
            Self::String { value } => value.as_deref(),
            _ => None,
        }
    }

    /// New-code-period value as a double, if computed.
    pub fn leak_value(&self) -> Option<f64> {
        match self {
            Self::Int { leak, .. } => leak.map(|v| v as f64),
            Self::Float { leak, .. } | Self::Percent { leak, .. } => *leak,
            Self::Bool { leak, .. } => leak.map(|v| if v { 1.0 } else { 0.0 }),
            Self::String { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_per_variant() {
        assert_eq!(Measure::int(3).numeric_value(), Some(3.0));
        assert_eq!(Measure::float(2.5).numeric_value(), Some(2.5));
        assert_eq!(Measure::percent(80.0).numeric_value(), Some(80.0));
        assert_eq!(Measure::boolean(true).numeric_value(), Some(1.0));
        assert_eq!(Measure::boolean(false).numeric_value(), Some(0.0));
        assert_eq!(Measure::string("passed").numeric_value(), None);
    }

    #[test]
    fn test_leak_value_only_when_computed() {
        let with_leak = Measure::Int {
            value: Some(10),
            leak: Some(2),
        };
        assert_eq!(with_leak.leak_value(), Some(2.0));
        assert_eq!(Measure::int(10).leak_value(), None);
        assert_eq!(Measure::string("x").leak_value(), None);
    }

    #[test]
    fn test_string_value_only_for_string_measures() {
        assert_eq!(Measure::string("ERROR").string_value(), Some("ERROR"));
        assert_eq!(Measure::int(1).string_value(), None);
        assert_eq!(Measure::String { value: None }.string_value(), None);
    }
}
