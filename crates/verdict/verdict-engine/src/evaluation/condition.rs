//! Single-condition evaluation.

use tracing::{debug, warn};

use verdict_core::types::{Condition, Level, Measure, ValueType};

use super::types::{ConditionEvaluation, EvaluatedCondition, IgnoreReason};
use super::value::{format_actual, parse_threshold, selected_value};

/// Evaluate one condition against the measure stored for its metric.
///
/// Never fails: a missing measure, an unusable value, or a configuration
/// error in the condition yields an ignored condition at level OK rather
/// than an `Err` or a panic.
pub fn evaluate_condition(
    condition: &Condition,
    measure: Option<&Measure>,
) -> ConditionEvaluation {
    if !condition.is_active() {
        return ignored(condition, IgnoreReason::Inactive, None);
    }

    let Some(measure) = measure else {
        debug!(metric = %condition.metric_key, "no measure for metric, condition ignored");
        return ignored(condition, IgnoreReason::MissingMeasure, None);
    };

    let value_type = measure.value_type();
    if !value_type.is_numeric() {
        warn!(
            metric = %condition.metric_key,
            op = %condition.op,
            "numeric comparison against a string metric, condition ignored"
        );
        return ignored(condition, IgnoreReason::TypeMismatch, None);
    }

    let Some(actual) = selected_value(measure, condition.on_new_code) else {
        let reason = if condition.on_new_code {
            IgnoreReason::MissingLeakValue
        } else {
            IgnoreReason::MissingMeasure
        };
        debug!(
            metric = %condition.metric_key,
            reason = reason.as_str(),
            "no value to evaluate, condition ignored"
        );
        return ignored(condition, reason, None);
    };
    let actual_text = format_actual(actual, value_type);

    let (error_bound, warning_bound) = match (
        bound(condition.error.as_deref(), value_type),
        bound(condition.warning.as_deref(), value_type),
    ) {
        (Ok(error), Ok(warning)) => (error, warning),
        _ => {
            warn!(
                metric = %condition.metric_key,
                warning = condition.warning.as_deref().unwrap_or(""),
                error = condition.error.as_deref().unwrap_or(""),
                "threshold does not parse for the measure's value type, condition ignored"
            );
            return ignored(condition, IgnoreReason::MalformedThreshold, Some(actual_text));
        }
    };

    // Error bound first, then warning; the worst crossed threshold wins.
    let level = if error_bound.is_some_and(|b| condition.op.compare(actual, b)) {
        Level::Error
    } else if warning_bound.is_some_and(|b| condition.op.compare(actual, b)) {
        Level::Warn
    } else {
        Level::Ok
    };

    ConditionEvaluation {
        evaluated: EvaluatedCondition::new(condition.clone(), level, Some(actual_text)),
        ignored: None,
    }
}

/// Parse an optional threshold. Empty or whitespace-only text counts as
/// absent: that severity can never trigger, but the other one still
/// evaluates. `Err` means text was present but malformed.
fn bound(text: Option<&str>, value_type: ValueType) -> Result<Option<f64>, ()> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => parse_threshold(t, value_type).map(Some).ok_or(()),
    }
}

fn ignored(
    condition: &Condition,
    reason: IgnoreReason,
    actual_value: Option<String>,
) -> ConditionEvaluation {
    ConditionEvaluation {
        evaluated: EvaluatedCondition::new(condition.clone(), Level::Ok, actual_value),
        ignored: Some(reason),
    }
}
