//! Threshold conditions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GateError;

/// Comparison operator between an actual value and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "GT")]
    Gt,
    #[serde(rename = "LT")]
    Lt,
    #[serde(rename = "EQ")]
    Eq,
    #[serde(rename = "NE")]
    Ne,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gt => "GT",
            Self::Lt => "LT",
            Self::Eq => "EQ",
            Self::Ne => "NE",
        }
    }

    /// True when `actual OP threshold` holds. GT/LT are strict, EQ/NE exact,
    /// so a value sitting exactly on a GT/LT threshold does not cross it.
    #[allow(clippy::float_cmp)]
    pub fn compare(&self, actual: f64, threshold: f64) -> bool {
        match self {
            Self::Gt => actual > threshold,
            Self::Lt => actual < threshold,
            Self::Eq => actual == threshold,
            Self::Ne => actual != threshold,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GT" => Ok(Self::Gt),
            "LT" => Ok(Self::Lt),
            "EQ" => Ok(Self::Eq),
            "NE" => Ok(Self::Ne),
            other => Err(GateError::UnknownOperator {
                op: other.to_string(),
            }),
        }
    }
}

/// One threshold rule inside a gate.
///
/// Thresholds are stored as text and parsed against the measure's declared
/// value type at evaluation time. A condition with neither threshold set is
/// inactive: it can never trigger and is skipped entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub metric_key: String,
    pub op: Operator,
    pub warning: Option<String>,
    pub error: Option<String>,
    /// Evaluate against the new-code (leak) value instead of the primary one.
    pub on_new_code: bool,
}

impl Condition {
    pub fn new(metric_key: impl Into<String>, op: Operator) -> Self {
        Self {
            metric_key: metric_key.into(),
            op,
            warning: None,
            error: None,
            on_new_code: false,
        }
    }

    pub fn with_warning(mut self, threshold: impl Into<String>) -> Self {
        self.warning = Some(threshold.into());
        self
    }

    pub fn with_error(mut self, threshold: impl Into<String>) -> Self {
        self.error = Some(threshold.into());
        self
    }

    pub fn scoped_to_new_code(mut self) -> Self {
        self.on_new_code = true;
        self
    }

    /// A condition is active when at least one severity can trigger.
    /// Empty or whitespace-only threshold text counts as absent.
    pub fn is_active(&self) -> bool {
        fn has_text(threshold: Option<&str>) -> bool {
            threshold.is_some_and(|t| !t.trim().is_empty())
        }
        has_text(self.warning.as_deref()) || has_text(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gt_and_lt_are_strict() {
        assert!(!Operator::Gt.compare(2.0, 2.0));
        assert!(Operator::Gt.compare(2.1, 2.0));
        assert!(!Operator::Lt.compare(2.0, 2.0));
        assert!(Operator::Lt.compare(1.9, 2.0));
    }

    #[test]
    fn test_eq_and_ne_are_exact() {
        assert!(Operator::Eq.compare(1.0, 1.0));
        assert!(!Operator::Eq.compare(1.0, 1.5));
        assert!(Operator::Ne.compare(1.0, 1.5));
        assert!(!Operator::Ne.compare(1.0, 1.0));
    }

    #[test]
    fn test_operator_wire_names() {
        for op in [Operator::Gt, Operator::Lt, Operator::Eq, Operator::Ne] {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
        assert!("GTE".parse::<Operator>().is_err());
    }

    #[test]
    fn test_condition_without_thresholds_is_inactive() {
        let condition = Condition::new("bugs", Operator::Gt);
        assert!(!condition.is_active());
        assert!(condition.clone().with_warning("1").is_active());
        assert!(condition.with_error("2").is_active());
    }

    #[test]
    fn test_empty_threshold_text_counts_as_absent() {
        let condition = Condition::new("bugs", Operator::Gt).with_warning("");
        assert!(!condition.is_active());
        assert!(!condition.clone().with_error("  ").is_active());
        assert!(condition.with_error("2").is_active());
    }
}
