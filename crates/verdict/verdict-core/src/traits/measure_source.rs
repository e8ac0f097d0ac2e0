//! MeasureSource trait — measure lookup by metric key.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::types::Measure;

/// Supplier of materialized measure snapshots.
///
/// Evaluation is a pure function of (gate, measures); any blocking I/O
/// needed to assemble the snapshot happens behind this trait, before
/// evaluation begins. A snapshot must not be mutated once handed to the
/// evaluator.
pub trait MeasureSource {
    /// Look up the measure stored for `metric_key`, if any.
    fn measure(&self, metric_key: &str) -> Option<&Measure>;
}

/// Any string-keyed map of measures is a snapshot, including `FxHashMap`.
impl<S: BuildHasher> MeasureSource for HashMap<String, Measure, S> {
    fn measure(&self, metric_key: &str) -> Option<&Measure> {
        self.get(metric_key)
    }
}
