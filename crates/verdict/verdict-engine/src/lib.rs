//! Quality gate evaluation engine.
//!
//! A pure function of (gate definition, measure snapshot) → evaluation
//! result: each condition gets an OK/WARN/ERROR level, the gate level is
//! the worst across evaluated conditions, and the result renders into a
//! stable details document for storage and display.
//!
//! Measure access and gate discovery stay behind the `verdict-core` traits;
//! this crate performs no I/O and keeps no state between calls. Missing or
//! unusable data never fails an evaluation — affected conditions are
//! ignored and surfaced through `EvaluatedGate::ignored_conditions`.

pub mod evaluation;
pub mod report;

pub use evaluation::{EvaluatedCondition, EvaluatedGate, GateEvaluator, IgnoreReason};
pub use report::{create_reporter, Reporter};
