//! Gate evaluation — single conditions, aggregation, output types.

pub mod condition;
pub mod evaluator;
pub mod types;
mod value;

pub use condition::evaluate_condition;
pub use evaluator::GateEvaluator;
pub use types::{ConditionEvaluation, EvaluatedCondition, EvaluatedGate, IgnoreReason};
