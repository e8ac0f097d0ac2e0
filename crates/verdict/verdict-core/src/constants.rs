//! Well-known metric keys.

/// Count of open bug issues.
pub const BUGS_KEY: &str = "bugs";

/// Overall test coverage percentage.
pub const COVERAGE_KEY: &str = "coverage";

/// Lines added or changed in the new-code period. Prefetched for every gate
/// that carries a new-code-scoped condition.
pub const NEW_LINES_KEY: &str = "new_lines";

/// Metric under which callers persist the overall gate level.
pub const ALERT_STATUS_KEY: &str = "alert_status";

/// Metric under which callers persist the serialized gate details document.
pub const QUALITY_GATE_DETAILS_KEY: &str = "quality_gate_details";
