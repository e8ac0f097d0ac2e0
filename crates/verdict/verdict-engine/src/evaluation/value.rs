//! Value selection, threshold parsing, and canonical formatting.

use verdict_core::types::{Measure, ValueType};

/// Parse threshold text against the measure's declared value type.
/// `None` means the text is malformed for that type.
pub(crate) fn parse_threshold(text: &str, value_type: ValueType) -> Option<f64> {
    let text = text.trim();
    match value_type {
        ValueType::Int => text.parse::<i64>().ok().map(|v| v as f64),
        ValueType::Float | ValueType::Percent => {
            let value = text.parse::<f64>().ok()?;
            value.is_finite().then_some(value)
        }
        ValueType::Bool => match text {
            "true" | "1" => Some(1.0),
            "false" | "0" => Some(0.0),
            _ => None,
        },
        ValueType::String => None,
    }
}

/// Pick the value a condition compares: leak value for new-code-scoped
/// conditions, primary value otherwise.
pub(crate) fn selected_value(measure: &Measure, on_new_code: bool) -> Option<f64> {
    if on_new_code {
        measure.leak_value()
    } else {
        measure.numeric_value()
    }
}

/// Canonical text form of an evaluated value.
///
/// Int and Bool render without a decimal point; Float and Percent render
/// as plain decimal text (f64 `Display` never uses scientific notation and
/// drops the trailing `.0` of integral values).
pub(crate) fn format_actual(value: f64, value_type: ValueType) -> String {
    match value_type {
        ValueType::Int | ValueType::Bool => format!("{}", value as i64),
        _ => format!("{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_threshold_rejects_decimals() {
        assert_eq!(parse_threshold("2", ValueType::Int), Some(2.0));
        assert_eq!(parse_threshold(" 2 ", ValueType::Int), Some(2.0));
        assert_eq!(parse_threshold("2.5", ValueType::Int), None);
        assert_eq!(parse_threshold("", ValueType::Int), None);
    }

    #[test]
    fn test_float_threshold_rejects_non_finite() {
        assert_eq!(parse_threshold("2.5", ValueType::Float), Some(2.5));
        assert_eq!(parse_threshold("80", ValueType::Percent), Some(80.0));
        assert_eq!(parse_threshold("NaN", ValueType::Float), None);
        assert_eq!(parse_threshold("inf", ValueType::Float), None);
        assert_eq!(parse_threshold("abc", ValueType::Float), None);
    }

    #[test]
    fn test_bool_threshold_forms() {
        assert_eq!(parse_threshold("true", ValueType::Bool), Some(1.0));
        assert_eq!(parse_threshold("1", ValueType::Bool), Some(1.0));
        assert_eq!(parse_threshold("false", ValueType::Bool), Some(0.0));
        assert_eq!(parse_threshold("0", ValueType::Bool), Some(0.0));
        assert_eq!(parse_threshold("yes", ValueType::Bool), None);
    }

    #[test]
    fn test_string_thresholds_never_parse() {
        assert_eq!(parse_threshold("anything", ValueType::String), None);
    }

    #[test]
    fn test_selected_value_honors_new_code_scope() {
        let measure = Measure::Int {
            value: Some(10),
            leak: Some(2),
        };
        assert_eq!(selected_value(&measure, false), Some(10.0));
        assert_eq!(selected_value(&measure, true), Some(2.0));
        assert_eq!(selected_value(&Measure::int(10), true), None);
    }

    #[test]
    fn test_integral_values_render_without_decimal_point() {
        assert_eq!(format_actual(2.0, ValueType::Int), "2");
        assert_eq!(format_actual(2.0, ValueType::Float), "2");
        assert_eq!(format_actual(2.5, ValueType::Float), "2.5");
        assert_eq!(format_actual(80.0, ValueType::Percent), "80");
        assert_eq!(format_actual(1.0, ValueType::Bool), "1");
    }
}
