//! VerdictErrorCode trait for structured error surfacing.

/// Trait for converting Verdict errors to stable code strings.
/// Every error enum implements this so callers embedding the engine can
/// branch on a machine-readable code instead of a message.
pub trait VerdictErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GATE_ERROR: &str = "GATE_ERROR";
