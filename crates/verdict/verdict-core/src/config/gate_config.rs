//! Gate definitions from TOML.
//!
//! A `verdict.toml` declares gates as `[[gate]]` tables, each with
//! `[[gate.condition]]` entries:
//!
//! ```toml
//! [[gate]]
//! name = "default"
//!
//! [[gate.condition]]
//! metric = "bugs"
//! op = "GT"
//! warning = "1"
//! error = "2"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::ConfigError;
use crate::traits::GateSource;
use crate::types::{Condition, Gate, Operator};

/// Top-level contents of a `verdict.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatesConfig {
    #[serde(rename = "gate")]
    pub gates: Vec<GateDefinition>,
}

/// One `[[gate]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct GateDefinition {
    pub name: String,
    #[serde(default, rename = "condition")]
    pub conditions: Vec<ConditionDefinition>,
}

/// One `[[gate.condition]]` table. Thresholds stay textual; they are parsed
/// against the measure's value type at evaluation time.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDefinition {
    pub metric: String,
    pub op: Operator,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub on_new_code: bool,
}

impl GatesConfig {
    /// Parse gate definitions from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load gate definitions from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the definitions and compile them into a registry.
    ///
    /// Duplicate gate names and duplicate metrics within a gate fail
    /// loudly here; a condition with no thresholds is kept but can never
    /// trigger, so it only earns a warning.
    pub fn compile(&self) -> Result<GateRegistry, ConfigError> {
        let mut gates: Vec<Gate> = Vec::with_capacity(self.gates.len());

        for definition in &self.gates {
            if gates.iter().any(|g| g.name() == definition.name) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("gate.{}", definition.name),
                    message: "duplicate gate name".to_string(),
                });
            }

            let conditions: Vec<Condition> = definition
                .conditions
                .iter()
                .map(|c| Condition {
                    metric_key: c.metric.clone(),
                    op: c.op,
                    warning: c.warning.clone(),
                    error: c.error.clone(),
                    on_new_code: c.on_new_code,
                })
                .collect();

            for condition in &conditions {
                if !condition.is_active() {
                    warn!(
                        gate = %definition.name,
                        metric = %condition.metric_key,
                        "condition has no thresholds and can never trigger"
                    );
                }
            }

            let gate = Gate::new(definition.name.clone(), conditions).map_err(|e| {
                ConfigError::ValidationFailed {
                    field: format!("gate.{}", definition.name),
                    message: e.to_string(),
                }
            })?;
            gates.push(gate);
        }

        debug!(gates = gates.len(), "compiled gate definitions");
        Ok(GateRegistry { gates })
    }
}

/// In-memory gate registry compiled from configuration.
#[derive(Debug, Clone, Default)]
pub struct GateRegistry {
    gates: Vec<Gate>,
}

impl GateRegistry {
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl GateSource for GateRegistry {
    fn find_gate(&self, name: &str) -> Option<&Gate> {
        self.gates.iter().find(|g| g.name() == name)
    }
}
