//! Persisted gate details document.
//!
//! Key names and ordering are a compatibility contract: consumers (UI,
//! history diffing) parse this exact shape, so renaming or reordering keys
//! is a breaking change. Field declaration order below fixes the serialized
//! key order.

use serde::Serialize;

use crate::evaluation::{EvaluatedCondition, EvaluatedGate};

/// Top-level details document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateDetails {
    pub level: String,
    pub conditions: Vec<ConditionDetails>,
    #[serde(rename = "ignoredConditions")]
    pub ignored_conditions: bool,
}

/// One condition entry; every field a string. Absent thresholds render as
/// the empty string, as does a missing actual value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionDetails {
    pub metric: String,
    pub op: String,
    pub warning: String,
    pub error: String,
    pub actual: String,
    pub level: String,
}

impl From<&EvaluatedCondition> for ConditionDetails {
    fn from(evaluated: &EvaluatedCondition) -> Self {
        let condition = evaluated.condition();
        Self {
            metric: condition.metric_key.clone(),
            op: condition.op.as_str().to_string(),
            warning: condition.warning.clone().unwrap_or_default(),
            error: condition.error.clone().unwrap_or_default(),
            actual: evaluated.actual_value().to_string(),
            level: evaluated.level().as_str().to_string(),
        }
    }
}

impl From<&EvaluatedGate> for GateDetails {
    fn from(gate: &EvaluatedGate) -> Self {
        Self {
            level: gate.level().as_str().to_string(),
            conditions: gate.conditions().iter().map(ConditionDetails::from).collect(),
            ignored_conditions: gate.ignored_conditions(),
        }
    }
}

/// Render the compact details JSON for storage and display.
///
/// Deterministic: the same evaluated gate always renders to byte-identical
/// output.
pub fn details_json(gate: &EvaluatedGate) -> String {
    // Plain string/bool structs cannot fail to serialize.
    serde_json::to_string(&GateDetails::from(gate)).unwrap_or_default()
}
