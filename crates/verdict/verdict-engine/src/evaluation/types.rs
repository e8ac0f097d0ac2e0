//! Evaluation output types.

use verdict_core::types::{Condition, Level};

/// Why a condition did not participate in the gate level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No measure stored for the condition's metric.
    MissingMeasure,
    /// New-code condition, but no leak value was computed.
    MissingLeakValue,
    /// Neither threshold set; the condition can never trigger.
    Inactive,
    /// Numeric comparison against a string-typed measure.
    TypeMismatch,
    /// Threshold text does not parse against the measure's value type.
    MalformedThreshold,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingMeasure => "missing-measure",
            Self::MissingLeakValue => "missing-leak-value",
            Self::Inactive => "inactive",
            Self::TypeMismatch => "type-mismatch",
            Self::MalformedThreshold => "malformed-threshold",
        }
    }
}

/// Outcome of one condition: the evaluated form plus how it participated.
#[derive(Debug, Clone)]
pub struct ConditionEvaluation {
    pub evaluated: EvaluatedCondition,
    /// `None` when the condition contributed to the gate level.
    pub ignored: Option<IgnoreReason>,
}

/// A condition together with its result. Constructed once per evaluation,
/// never mutated.
#[derive(Debug, Clone)]
pub struct EvaluatedCondition {
    condition: Condition,
    level: Level,
    actual_value: String,
}

impl EvaluatedCondition {
    pub(crate) fn new(condition: Condition, level: Level, actual_value: Option<String>) -> Self {
        Self {
            condition,
            level,
            actual_value: actual_value.unwrap_or_default(),
        }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Canonical text of the value used; the empty string when no measure
    /// value was read, never absent.
    pub fn actual_value(&self) -> &str {
        &self.actual_value
    }
}

/// Overall result of evaluating one gate against one component snapshot.
///
/// Component-specific: never reuse an instance for a different component.
#[derive(Debug, Clone)]
pub struct EvaluatedGate {
    level: Level,
    conditions: Vec<EvaluatedCondition>,
    ignored_conditions: bool,
}

impl EvaluatedGate {
    pub(crate) fn new(
        level: Level,
        conditions: Vec<EvaluatedCondition>,
        ignored_conditions: bool,
    ) -> Self {
        Self {
            level,
            conditions,
            ignored_conditions,
        }
    }

    /// Worst level across conditions that actually evaluated; OK when none
    /// did.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Evaluated conditions in gate declaration order. Inactive conditions
    /// (no thresholds) are omitted.
    pub fn conditions(&self) -> &[EvaluatedCondition] {
        &self.conditions
    }

    /// True when at least one condition was ignored — the evaluation is
    /// incomplete rather than a clean pass.
    pub fn ignored_conditions(&self) -> bool {
        self.ignored_conditions
    }
}
