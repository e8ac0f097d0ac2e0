//! JSON reporter — emits the persisted details document.

use super::details::details_json;
use super::Reporter;
use crate::evaluation::EvaluatedGate;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, gate: &EvaluatedGate) -> Result<String, String> {
        Ok(details_json(gate))
    }
}
