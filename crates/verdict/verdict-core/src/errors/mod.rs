//! Error handling for Verdict.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Evaluation itself never surfaces errors: missing or malformed runtime
//! data turns into ignored conditions, not `Err` values. The enums here
//! cover definition-time problems (config files, gate construction).

pub mod config_error;
pub mod error_code;
pub mod gate_error;

pub use config_error::ConfigError;
pub use error_code::VerdictErrorCode;
pub use gate_error::GateError;
