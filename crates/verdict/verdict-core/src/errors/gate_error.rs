//! Gate definition errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised while constructing gate definitions.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Condition references an empty metric key")]
    EmptyMetricKey,

    #[error("Gate evaluates metric {metric} more than once")]
    DuplicateMetric { metric: String },

    #[error("Unknown operator: {op}")]
    UnknownOperator { op: String },

    #[error("Unknown level: {value}")]
    UnknownLevel { value: String },
}

impl VerdictErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        error_code::GATE_ERROR
    }
}
