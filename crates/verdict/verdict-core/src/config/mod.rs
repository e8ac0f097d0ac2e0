//! Configuration system for Verdict.
//! TOML-based gate definitions, validated into `Gate` values at load time.

pub mod gate_config;

pub use gate_config::{ConditionDefinition, GateDefinition, GateRegistry, GatesConfig};
