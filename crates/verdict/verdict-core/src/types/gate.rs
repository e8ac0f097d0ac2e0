//! Gate definitions.

use super::collections::FxHashSet;
use super::condition::Condition;
use crate::errors::GateError;

/// A named, ordered set of conditions, unique by metric key.
///
/// Declaration order is preserved: consumers compare evaluation output
/// lists literally, so iteration order is part of the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    name: String,
    conditions: Vec<Condition>,
}

impl Gate {
    /// Build a validated gate.
    ///
    /// Rejects empty metric keys and duplicate metric keys — evaluating the
    /// same metric twice within one gate is not supported.
    pub fn new(name: impl Into<String>, conditions: Vec<Condition>) -> Result<Self, GateError> {
        let mut seen = FxHashSet::default();
        for condition in &conditions {
            if condition.metric_key.is_empty() {
                return Err(GateError::EmptyMetricKey);
            }
            if !seen.insert(condition.metric_key.as_str()) {
                return Err(GateError::DuplicateMetric {
                    metric: condition.metric_key.clone(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            conditions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conditions in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operator;

    #[test]
    fn test_gate_preserves_declaration_order() {
        let gate = Gate::new(
            "default",
            vec![
                Condition::new("coverage", Operator::Lt).with_error("50"),
                Condition::new("bugs", Operator::Gt).with_warning("1"),
            ],
        )
        .unwrap();
        let keys: Vec<&str> = gate
            .conditions()
            .iter()
            .map(|c| c.metric_key.as_str())
            .collect();
        assert_eq!(keys, ["coverage", "bugs"]);
    }

    #[test]
    fn test_duplicate_metric_rejected() {
        let result = Gate::new(
            "default",
            vec![
                Condition::new("bugs", Operator::Gt).with_warning("1"),
                Condition::new("bugs", Operator::Lt).with_error("5"),
            ],
        );
        match result {
            Err(GateError::DuplicateMetric { metric }) => assert_eq!(metric, "bugs"),
            other => panic!("Expected DuplicateMetric, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_metric_key_rejected() {
        let result = Gate::new("default", vec![Condition::new("", Operator::Gt)]);
        assert!(matches!(result, Err(GateError::EmptyMetricKey)));
    }

    #[test]
    fn test_empty_gate_is_valid() {
        let gate = Gate::new("empty", Vec::new()).unwrap();
        assert!(gate.conditions().is_empty());
    }
}
