//! Gate aggregation.

use std::collections::BTreeSet;

use tracing::debug;

use verdict_core::constants::NEW_LINES_KEY;
use verdict_core::traits::MeasureSource;
use verdict_core::types::{Gate, Level};

use super::condition::evaluate_condition;
use super::types::{EvaluatedGate, IgnoreReason};

/// Evaluates gates against measure snapshots.
///
/// Stateless and synchronous; every call builds a fresh `EvaluatedGate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateEvaluator;

impl GateEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Metric keys the caller must resolve into measures before `evaluate`.
    ///
    /// May include keys not named by any condition: `new_lines` is needed
    /// whenever a condition is scoped to new code, so callers can
    /// batch-fetch the whole snapshot in one pass. Order is deterministic.
    pub fn metric_keys(&self, gate: &Gate) -> BTreeSet<String> {
        let mut keys: BTreeSet<String> = gate
            .conditions()
            .iter()
            .map(|c| c.metric_key.clone())
            .collect();
        if gate.conditions().iter().any(|c| c.on_new_code) {
            keys.insert(NEW_LINES_KEY.to_string());
        }
        keys
    }

    /// Evaluate every condition of `gate` against `measures`.
    ///
    /// The overall level is the worst level across conditions that actually
    /// evaluated; an empty gate or one where everything was ignored is OK.
    /// Conditions with missing or unusable data do not fail the run — they
    /// are ignored and surfaced through `ignored_conditions`.
    pub fn evaluate(&self, gate: &Gate, measures: &dyn MeasureSource) -> EvaluatedGate {
        let mut level = Level::Ok;
        let mut conditions = Vec::with_capacity(gate.conditions().len());
        let mut ignored_any = false;

        for condition in gate.conditions() {
            let outcome =
                evaluate_condition(condition, measures.measure(&condition.metric_key));
            match outcome.ignored {
                None => level = level.max(outcome.evaluated.level()),
                Some(reason) => {
                    ignored_any = true;
                    if reason == IgnoreReason::Inactive {
                        // A condition that can never trigger has nothing to report.
                        continue;
                    }
                }
            }
            conditions.push(outcome.evaluated);
        }

        debug!(
            gate = %gate.name(),
            level = %level,
            ignored = ignored_any,
            "gate evaluated"
        );
        EvaluatedGate::new(level, conditions, ignored_any)
    }
}
